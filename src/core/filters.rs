use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AppData, Event, Message, OutingRequest, Plan, Post, Rating, RequestStatus};

/// Events the user took part in, either side.
pub fn events_for_user<'a>(data: &'a AppData, user_id: &str) -> Vec<&'a Event> {
    data.events.iter().filter(|e| e.involves(user_id)).collect()
}

/// Ratings the user has received.
pub fn ratings_for_user<'a>(data: &'a AppData, user_id: &str) -> Vec<&'a Rating> {
    data.ratings
        .iter()
        .filter(|r| r.to_user_id == user_id)
        .collect()
}

/// The user's posts, newest first.
pub fn posts_for_user<'a>(data: &'a AppData, user_id: &str) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = data
        .posts
        .iter()
        .filter(|p| p.user_id == user_id)
        .collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

/// Whether the two users share any logged event.
pub fn have_event_together(data: &AppData, user_a: &str, user_b: &str) -> bool {
    data.events.iter().any(|e| {
        (e.user1_id == user_a && e.user2_id == user_b)
            || (e.user1_id == user_b && e.user2_id == user_a)
    })
}

/// Whether `from` already rated `to`, optionally scoped to one event.
pub fn has_rated(data: &AppData, from: &str, to: &str, event_id: Option<&str>) -> bool {
    data.ratings.iter().any(|r| {
        r.from_user_id == from
            && r.to_user_id == to
            && event_id.map_or(true, |id| r.event_id.as_deref() == Some(id))
    })
}

/// Both directions of a chat, oldest first.
pub fn messages_between<'a>(data: &'a AppData, user_a: &str, user_b: &str) -> Vec<&'a Message> {
    let mut messages: Vec<&Message> = data
        .messages
        .iter()
        .filter(|m| {
            (m.from_user_id == user_a && m.to_user_id == user_b)
                || (m.from_user_id == user_b && m.to_user_id == user_a)
        })
        .collect();
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    messages
}

/// One row of the conversation list: the latest message exchanged with a
/// partner and whether anything from them is still unread.
#[derive(Debug, Clone)]
pub struct ConversationSummary {
    pub partner_id: String,
    pub last_message: Message,
    pub unread: bool,
}

/// One summary per chat partner, newest conversation first.
pub fn conversations_for(data: &AppData, user_id: &str) -> Vec<ConversationSummary> {
    let mut by_partner: HashMap<String, ConversationSummary> = HashMap::new();

    for message in &data.messages {
        let partner_id = if message.from_user_id == user_id {
            message.to_user_id.clone()
        } else if message.to_user_id == user_id {
            message.from_user_id.clone()
        } else {
            continue;
        };
        let unread_here = message.to_user_id == user_id && !message.read;

        match by_partner.entry(partner_id.clone()) {
            Entry::Occupied(mut entry) => {
                let summary = entry.get_mut();
                if message.created_at > summary.last_message.created_at {
                    summary.last_message = message.clone();
                }
                summary.unread |= unread_here;
            }
            Entry::Vacant(entry) => {
                entry.insert(ConversationSummary {
                    partner_id,
                    last_message: message.clone(),
                    unread: unread_here,
                });
            }
        }
    }

    let mut conversations: Vec<ConversationSummary> = by_partner.into_values().collect();
    conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
    conversations
}

/// Unread messages addressed to the user.
pub fn unread_message_count(data: &AppData, user_id: &str) -> usize {
    data.messages
        .iter()
        .filter(|m| m.to_user_id == user_id && !m.read)
        .count()
}

/// Pending requests sitting in the user's inbox.
pub fn pending_requests_for<'a>(data: &'a AppData, user_id: &str) -> Vec<&'a OutingRequest> {
    data.requests
        .iter()
        .filter(|r| r.to_user_id == user_id && r.status == RequestStatus::Pending)
        .collect()
}

/// Plans involving the user dated `today` or later, soonest first.
pub fn upcoming_plans_for<'a>(data: &'a AppData, user_id: &str, today: NaiveDate) -> Vec<&'a Plan> {
    let mut plans: Vec<&Plan> = data
        .plans
        .iter()
        .filter(|p| p.involves(user_id) && p.date >= today)
        .collect();
    plans.sort_by_key(|p| p.date);
    plans
}
