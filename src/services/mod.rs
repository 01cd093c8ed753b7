// Service exports
pub mod seed;
pub mod storage;

pub use seed::seed_data;
pub use storage::{JsonStore, StoreError};
