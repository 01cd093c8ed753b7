use serde::{Deserialize, Serialize};

use super::domain::{Event, Message, OutingRequest, Plan, Post, Rating, User};

/// Schema version the store writes; older documents are migrated at load.
pub const SCHEMA_VERSION: u32 = 1;

/// The whole persisted state: one document, seven collections.
///
/// Every collection is serde-defaulted, so a field missing on disk loads as
/// empty instead of failing the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub current_user_id: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub requests: Vec<OutingRequest>,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            current_user_id: None,
            users: Vec::new(),
            events: Vec::new(),
            ratings: Vec::new(),
            posts: Vec::new(),
            messages: Vec::new(),
            requests: Vec::new(),
            plans: Vec::new(),
        }
    }
}

impl AppData {
    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// The designated "me" profile, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user_id
            .as_deref()
            .and_then(|id| self.user_by_id(id))
    }

    pub fn users_excluding<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a User> + 'a {
        self.users.iter().filter(move |u| u.id != id)
    }
}
