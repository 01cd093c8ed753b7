//! Partner Match - matching core for the Activity Partner app
//!
//! Profiles, hashtag/availability match scoring, outing requests, chat, and
//! past-event ratings over a single versioned JSON document on disk.

pub mod config;
pub mod core;
pub mod models;
pub mod ops;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_match_score, Matcher};
pub use crate::models::{AppData, AvailabilitySlot, ScoredMatch, SlotBonuses, TimeSlot, User};
pub use crate::services::JsonStore;
