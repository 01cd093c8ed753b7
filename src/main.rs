use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use partner_match::config::Settings;
use partner_match::core::{filters, Matcher};
use partner_match::models::{AppData, AvailabilitySlot, PostKind};
use partner_match::ops::{self, OpError, ProfileDraft};
use partner_match::services::JsonStore;

/// Activity partner matching from the command line
#[derive(Parser)]
#[command(name = "partner-match", version, about)]
struct Cli {
    /// Override the data file location
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show or update your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List everyone else
    Browse,
    /// Ranked match recommendations for your profile
    Matches,
    /// Send and answer "go out" requests
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },
    /// Chat with other users
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Log a past event with a partner
    Event {
        #[command(subcommand)]
        action: EventAction,
    },
    /// Rate a past partner (requires a shared event)
    Rate {
        user_id: String,
        #[arg(long)]
        stars: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Publish a post on your page
    Post {
        /// Text content for a text post
        #[arg(long)]
        text: Option<String>,
        /// Attach an image by URL or data URL
        #[arg(long, conflicts_with = "text")]
        image: Option<String>,
        /// Attach a video by URL or data URL
        #[arg(long, conflicts_with_all = ["text", "image"])]
        video: Option<String>,
        /// Caption for a media post
        #[arg(long)]
        caption: Option<String>,
    },
    /// Pending requests and upcoming plans
    Notifications,
    /// Unread message and pending request counters
    Badges,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create your profile or update it in place
    Save {
        #[arg(long)]
        nick: String,
        #[arg(long, default_value = "")]
        bio: String,
        /// Interest hashtag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Availability slot as YYYY-MM-DD[@time], repeatable
        #[arg(long = "slot")]
        slots: Vec<AvailabilitySlot>,
    },
    /// Print the current profile
    Show,
}

#[derive(Subcommand)]
enum RequestAction {
    /// Ask someone out
    Send {
        to: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        activity: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Accept a pending request; the outing becomes a plan
    Accept { id: String },
    /// Decline a pending request
    Decline { id: String },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Send a message
    Send { to: String, text: String },
    /// Show a conversation (marks it read)
    Show { with: String },
    /// List conversations, newest first
    List,
}

#[derive(Subcommand)]
enum EventAction {
    /// Record a past outing
    Add {
        partner: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        activity: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let filter =
        EnvFilter::try_new(&settings.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);
    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let data_path = cli
        .data_file
        .clone()
        .unwrap_or_else(|| settings.storage.data_path());
    let store = JsonStore::new(data_path);
    let matcher = Matcher::new(settings.scoring.bonuses.into());

    let mut data = store.load();

    match run(cli.command, &mut data, &matcher) {
        Ok(true) => {
            if let Err(e) = store.save(&data) {
                eprintln!("Failed to save data: {}", e);
                std::process::exit(1);
            }
        }
        Ok(false) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch one subcommand; `Ok(true)` means the document changed.
fn run(command: Command, data: &mut AppData, matcher: &Matcher) -> Result<bool, OpError> {
    match command {
        Command::Profile { action } => match action {
            ProfileAction::Save {
                nick,
                bio,
                tags,
                slots,
            } => {
                let id = ops::save_profile(
                    data,
                    ProfileDraft {
                        nick_name: nick,
                        bio,
                        hashtags: tags,
                        availability: slots,
                    },
                )?;
                println!("Profile saved ({})", id);
                Ok(true)
            }
            ProfileAction::Show => {
                match data.current_user() {
                    Some(user) => {
                        println!("{} ({})", user.nick_name, user.id);
                        if !user.bio.is_empty() {
                            println!("  {}", user.bio);
                        }
                        if !user.hashtags.is_empty() {
                            println!("  tags: {}", user.hashtags.join(" "));
                        }
                        for slot in &user.availability {
                            println!("  free: {}", slot);
                        }
                    }
                    None => println!("No profile yet. Run `profile save` to create one."),
                }
                Ok(false)
            }
        },
        Command::Browse => {
            let current_id = data.current_user_id.clone().unwrap_or_default();
            for user in data.users_excluding(&current_id) {
                println!("{}  {}  {}", user.id, user.nick_name, user.hashtags.join(" "));
            }
            Ok(false)
        }
        Command::Matches => {
            let recommendations = matcher.recommendations(data.current_user(), &data.users);
            if recommendations.is_empty() {
                println!("No matches yet. Add hashtags and availability to your profile.");
            }
            for m in recommendations {
                println!("{:>3}%  {}  ({})", m.score, m.user.nick_name, m.user.id);
            }
            Ok(false)
        }
        Command::Request { action } => match action {
            RequestAction::Send {
                to,
                date,
                activity,
                message,
            } => {
                ops::send_request(data, &to, date, &activity, &message)?;
                println!("Request sent to {}.", display_name(data, &to));
                Ok(true)
            }
            RequestAction::Accept { id } => {
                ops::accept_request(data, &id)?;
                println!("Request accepted; the outing is now a plan.");
                Ok(true)
            }
            RequestAction::Decline { id } => {
                ops::decline_request(data, &id)?;
                println!("Request declined.");
                Ok(true)
            }
        },
        Command::Chat { action } => match action {
            ChatAction::Send { to, text } => {
                ops::send_message(data, &to, &text)?;
                println!("Sent.");
                Ok(true)
            }
            ChatAction::Show { with } => {
                let current_id = data
                    .current_user_id
                    .clone()
                    .ok_or(OpError::NoCurrentUser)?;
                let marked = ops::mark_conversation_read(data, &with)?;
                let messages = filters::messages_between(data, &current_id, &with);
                if messages.is_empty() {
                    println!("No messages yet. Start the conversation!");
                }
                for message in messages {
                    let speaker = if message.from_user_id == current_id {
                        "me"
                    } else {
                        display_name(data, &message.from_user_id)
                    };
                    println!(
                        "[{}] {}: {}",
                        message.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                        speaker,
                        message.text
                    );
                }
                Ok(marked > 0)
            }
            ChatAction::List => {
                let current_id = data
                    .current_user_id
                    .clone()
                    .ok_or(OpError::NoCurrentUser)?;
                let conversations = filters::conversations_for(data, &current_id);
                if conversations.is_empty() {
                    println!("No messages yet. Start chatting with your matches!");
                }
                for conversation in conversations {
                    let marker = if conversation.unread { "*" } else { " " };
                    println!(
                        "{} {}  {}",
                        marker,
                        display_name(data, &conversation.partner_id),
                        conversation.last_message.text
                    );
                }
                Ok(false)
            }
        },
        Command::Event { action } => match action {
            EventAction::Add {
                partner,
                date,
                activity,
                description,
            } => {
                ops::add_event(data, &partner, date, &activity, &description)?;
                println!("Event logged.");
                Ok(true)
            }
        },
        Command::Rate {
            user_id,
            stars,
            comment,
        } => {
            ops::add_rating(data, &user_id, stars, &comment)?;
            println!("Rating saved.");
            Ok(true)
        }
        Command::Post {
            text,
            image,
            video,
            caption,
        } => {
            let (kind, content, caption) = if let Some(url) = image {
                (PostKind::Image, url, caption)
            } else if let Some(url) = video {
                (PostKind::Video, url, caption)
            } else {
                (PostKind::Text, text.unwrap_or_default(), None)
            };
            ops::add_post(data, kind, &content, caption.as_deref())?;
            println!("Posted.");
            Ok(true)
        }
        Command::Notifications => {
            let current_id = data
                .current_user_id
                .clone()
                .ok_or(OpError::NoCurrentUser)?;
            let today = Local::now().date_naive();
            let notifications = ops::notifications(data, today)?;

            if notifications.pending.is_empty() && notifications.upcoming.is_empty() {
                println!("No notifications or upcoming plans.");
                return Ok(false);
            }
            if !notifications.pending.is_empty() {
                println!("Pending requests:");
                for request in &notifications.pending {
                    println!(
                        "  {}  {} wants to go out on {} {}",
                        request.id,
                        display_name(data, &request.from_user_id),
                        request.date,
                        request.activity
                    );
                    if !request.message.is_empty() {
                        println!("      \"{}\"", request.message);
                    }
                }
            }
            if !notifications.upcoming.is_empty() {
                println!("Upcoming plans:");
                for upcoming in &notifications.upcoming {
                    let partner_id = upcoming.plan.partner_of(&current_id).unwrap_or("?");
                    let when = match upcoming.days_until {
                        0 => "today".to_string(),
                        1 => "tomorrow".to_string(),
                        days => format!("in {} days", days),
                    };
                    println!(
                        "  {} with {} ({})",
                        upcoming.plan.date,
                        display_name(data, partner_id),
                        when
                    );
                }
            }
            Ok(false)
        }
        Command::Badges => {
            let badges = ops::badge_counts(data);
            println!("unread messages: {}", badges.unread_messages);
            println!("pending requests: {}", badges.pending_requests);
            Ok(false)
        }
    }
}

fn display_name<'a>(data: &'a AppData, id: &str) -> &'a str {
    data.user_by_id(id)
        .map_or("Unknown", |u| u.nick_name.as_str())
}
