use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{require_current, OpError};
use crate::core::filters;
use crate::models::{AppData, Event, Post, PostKind, Rating};

/// Record a past event between the current user and a partner.
pub fn add_event(
    data: &mut AppData,
    partner_id: &str,
    date: NaiveDate,
    activity: &str,
    description: &str,
) -> Result<String, OpError> {
    let current = require_current(data)?.id.clone();
    if partner_id == current {
        return Err(OpError::SelfTarget);
    }
    if data.user_by_id(partner_id).is_none() {
        return Err(OpError::UnknownUser(partner_id.to_string()));
    }

    let event = Event {
        id: Uuid::new_v4().to_string(),
        user1_id: current,
        user2_id: partner_id.to_string(),
        date,
        activity: activity.trim().to_string(),
        description: description.trim().to_string(),
        media: vec![],
        created_at: Utc::now(),
    };
    let id = event.id.clone();
    data.events.push(event);
    tracing::info!("Logged event {} with {}", id, partner_id);
    Ok(id)
}

/// Rate a past partner. One rating per pair, and only after a shared event;
/// the rating links to the first event the two attended together.
pub fn add_rating(
    data: &mut AppData,
    to_user_id: &str,
    stars: u8,
    comment: &str,
) -> Result<String, OpError> {
    let current = require_current(data)?.id.clone();
    if to_user_id == current {
        return Err(OpError::SelfTarget);
    }
    if data.user_by_id(to_user_id).is_none() {
        return Err(OpError::UnknownUser(to_user_id.to_string()));
    }
    if !(1..=5).contains(&stars) {
        return Err(OpError::InvalidStars(stars));
    }
    if !filters::have_event_together(data, &current, to_user_id) {
        return Err(OpError::NoSharedEvent);
    }
    if filters::has_rated(data, &current, to_user_id, None) {
        return Err(OpError::AlreadyRated);
    }

    let event_id = data
        .events
        .iter()
        .find(|e| e.involves(&current) && e.involves(to_user_id))
        .map(|e| e.id.clone());

    let rating = Rating {
        id: Uuid::new_v4().to_string(),
        from_user_id: current,
        to_user_id: to_user_id.to_string(),
        stars,
        comment: comment.trim().to_string(),
        event_id,
        created_at: Utc::now(),
    };
    let id = rating.id.clone();
    data.ratings.push(rating);
    tracing::info!("Rated {} with {} stars", to_user_id, stars);
    Ok(id)
}

/// Publish a post on the current user's page. Text posts carry their text in
/// `content`; media posts carry an opaque URL there and the text, if any,
/// becomes the caption.
pub fn add_post(
    data: &mut AppData,
    kind: PostKind,
    content: &str,
    caption: Option<&str>,
) -> Result<String, OpError> {
    let current = require_current(data)?.id.clone();
    let content = content.trim();
    if content.is_empty() {
        return Err(OpError::EmptyPost);
    }
    let caption = match kind {
        PostKind::Text => None,
        PostKind::Image | PostKind::Video => caption
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
    };

    let post = Post {
        id: Uuid::new_v4().to_string(),
        user_id: current,
        kind,
        content: content.to_string(),
        caption,
        created_at: Utc::now(),
    };
    let id = post.id.clone();
    data.posts.push(post);
    Ok(id)
}
