// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::ConversationSummary;
pub use matcher::Matcher;
pub use scoring::{compute_match_score, MAX_SCORE, SELF_SCORE};
