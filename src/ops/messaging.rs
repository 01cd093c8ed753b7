use chrono::Utc;
use uuid::Uuid;

use super::{require_current, OpError};
use crate::models::{AppData, Message};

/// Append a chat message from the current user. Messages start unread and
/// stay so until the recipient opens the conversation.
pub fn send_message(data: &mut AppData, to_user_id: &str, text: &str) -> Result<String, OpError> {
    let from = require_current(data)?.id.clone();
    if data.user_by_id(to_user_id).is_none() {
        return Err(OpError::UnknownUser(to_user_id.to_string()));
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(OpError::EmptyMessage);
    }

    let message = Message {
        id: Uuid::new_v4().to_string(),
        from_user_id: from.clone(),
        to_user_id: to_user_id.to_string(),
        text: text.to_string(),
        read: false,
        created_at: Utc::now(),
    };
    let id = message.id.clone();
    data.messages.push(message);
    tracing::debug!("Message {} -> {}", from, to_user_id);
    Ok(id)
}

/// Mark everything the partner sent to the current user as read, returning
/// how many messages changed.
pub fn mark_conversation_read(data: &mut AppData, partner_id: &str) -> Result<usize, OpError> {
    let current = require_current(data)?.id.clone();

    let mut marked = 0;
    for message in &mut data.messages {
        if message.from_user_id == partner_id && message.to_user_id == current && !message.read {
            message.read = true;
            marked += 1;
        }
    }
    Ok(marked)
}
