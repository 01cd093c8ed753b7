// Operation exports
pub mod journal;
pub mod messaging;
pub mod profile;
pub mod requests;

pub use journal::{add_event, add_post, add_rating};
pub use messaging::{mark_conversation_read, send_message};
pub use profile::{save_profile, ProfileDraft};
pub use requests::{
    accept_request, decline_request, notifications, send_request, Notifications, UpcomingPlan,
};

use thiserror::Error;

use crate::core::filters;
use crate::models::{AppData, User};

/// Errors the operations layer can report back to the caller
#[derive(Debug, Error)]
pub enum OpError {
    #[error("no current user; save a profile first")]
    NoCurrentUser,

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("unknown request: {0}")]
    UnknownRequest(String),

    #[error("a pending request to this user already exists")]
    RequestAlreadyPending,

    #[error("cannot target yourself")]
    SelfTarget,

    #[error("message text is empty")]
    EmptyMessage,

    #[error("post content is empty")]
    EmptyPost,

    #[error("stars must be between 1 and 5, got {0}")]
    InvalidStars(u8),

    #[error("you can only rate partners you attended an event with")]
    NoSharedEvent,

    #[error("you already rated this user")]
    AlreadyRated,

    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// The current user, or the error every mutating operation shares.
pub(crate) fn require_current(data: &AppData) -> Result<&User, OpError> {
    data.current_user().ok_or(OpError::NoCurrentUser)
}

/// Unread messages and pending requests, as shown on the nav badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeCounts {
    pub unread_messages: usize,
    pub pending_requests: usize,
}

/// Badge counts for the current user; all zero when nobody is logged in.
pub fn badge_counts(data: &AppData) -> BadgeCounts {
    let Some(current) = data.current_user() else {
        return BadgeCounts::default();
    };
    BadgeCounts {
        unread_messages: filters::unread_message_count(data, &current.id),
        pending_requests: filters::pending_requests_for(data, &current.id).len(),
    }
}
