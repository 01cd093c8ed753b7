use std::collections::HashSet;

use uuid::Uuid;
use validator::Validate;

use super::OpError;
use crate::models::{AppData, AvailabilitySlot, User};

/// Input for the profile save action
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileDraft {
    #[validate(length(max = 40, message = "nickname is too long"))]
    pub nick_name: String,
    #[validate(length(max = 500, message = "bio is too long"))]
    pub bio: String,
    pub hashtags: Vec<String>,
    pub availability: Vec<AvailabilitySlot>,
}

/// Insert a new profile or update the current one in place, and designate
/// the result the current user. Returns the saved user's id.
///
/// An empty nickname saves as "Anonymous"; hashtags are deduped (first
/// occurrence wins) and normalized to a leading '#'. There is no deletion
/// path; profiles only ever accumulate or change.
pub fn save_profile(data: &mut AppData, draft: ProfileDraft) -> Result<String, OpError> {
    draft.validate()?;

    let nick_name = match draft.nick_name.trim() {
        "" => "Anonymous".to_string(),
        nick => nick.to_string(),
    };
    let bio = draft.bio.trim().to_string();
    let hashtags = normalize_hashtags(draft.hashtags);
    let availability = draft.availability;

    let position = data
        .current_user_id
        .as_deref()
        .and_then(|id| data.users.iter().position(|u| u.id == id));
    match position {
        Some(index) => {
            let user = &mut data.users[index];
            user.nick_name = nick_name;
            user.bio = bio;
            user.hashtags = hashtags;
            user.availability = availability;
            let id = user.id.clone();
            tracing::info!("Updated profile {}", id);
            Ok(id)
        }
        None => {
            let user = User {
                id: Uuid::new_v4().to_string(),
                nick_name,
                bio,
                hashtags,
                availability,
            };
            let id = user.id.clone();
            data.users.push(user);
            data.current_user_id = Some(id.clone());
            tracing::info!("Created profile {}", id);
            Ok(id)
        }
    }
}

/// Dedupe tags preserving first occurrence and ensure the leading '#'.
fn normalize_hashtags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        let tag = if tag.starts_with('#') {
            tag.to_string()
        } else {
            format!("#{}", tag)
        };
        if seen.insert(tag.clone()) {
            normalized.push(tag);
        }
    }
    normalized
}
