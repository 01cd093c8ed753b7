// Model exports
pub mod domain;
pub mod state;

pub use domain::{
    AvailabilitySlot, Event, MediaAttachment, MediaKind, Message, OutingRequest, Plan, Post,
    PostKind, Rating, RequestStatus, ScoredMatch, SlotBonuses, TimeSlot, User,
};
pub use state::{AppData, SCHEMA_VERSION};
