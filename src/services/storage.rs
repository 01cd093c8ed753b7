use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde_json::Value;
use thiserror::Error;

use super::seed::seed_data;
use crate::models::{AppData, SCHEMA_VERSION};

/// Errors that can occur when persisting the data document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed JSON store for the whole application state
///
/// The document is versioned; `load` migrates older layouts once, before
/// typed deserialization, and falls back to the seed data set when the file
/// is missing or corrupt. `save` always writes the current schema version.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state document. Missing or unparseable files recover to the
    /// seed data set rather than erroring.
    pub fn load(&self) -> AppData {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No data file at {}, starting from seed data",
                    self.path.display()
                );
                return seed_data();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read {} ({}), recovering with seed data",
                    self.path.display(),
                    e
                );
                return seed_data();
            }
        };

        match parse_document(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "Corrupt data file {} ({}), recovering with seed data",
                    self.path.display(),
                    e
                );
                seed_data()
            }
        }
    }

    /// Write the whole state document back to disk, creating parent
    /// directories on demand.
    pub fn save(&self, data: &AppData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        tracing::debug!(
            "Saved {} users, {} messages to {}",
            data.users.len(),
            data.messages.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parse a raw document and migrate it to the current schema.
fn parse_document(raw: &str) -> Result<AppData, serde_json::Error> {
    let mut value: Value = serde_json::from_str(raw)?;
    migrate(&mut value);
    serde_json::from_value(value)
}

/// One-shot schema migration, run once at load time.
///
/// v0 documents embed the whole current user object and may carry a legacy
/// single `schedule` object per user instead of the `availability` list.
fn migrate(value: &mut Value) {
    let Some(root) = value.as_object_mut() else {
        return;
    };
    let version = root.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version >= u64::from(SCHEMA_VERSION) {
        return;
    }

    // The embedded currentUser object becomes a plain id reference.
    if let Some(current) = root.remove("currentUser") {
        if let Some(id) = current.get("id").and_then(Value::as_str) {
            root.insert("currentUserId".to_string(), Value::from(id));
        }
    }

    if let Some(users) = root.get_mut("users").and_then(Value::as_array_mut) {
        for user in users.iter_mut() {
            migrate_user(user);
        }
    }

    root.insert("version".to_string(), Value::from(SCHEMA_VERSION));
    tracing::info!("Migrated data document from v{} to v{}", version, SCHEMA_VERSION);
}

/// Fold a legacy single `schedule` into a one-element availability list.
fn migrate_user(user: &mut Value) {
    let Some(user) = user.as_object_mut() else {
        return;
    };
    let Some(schedule) = user.remove("schedule") else {
        return;
    };
    if user.get("availability").is_some() {
        return;
    }

    let now = chrono::Local::now();
    let month = lenient_u32(schedule.get("month")).unwrap_or(now.month());
    let day = lenient_u32(schedule.get("day")).unwrap_or(1);
    let time = schedule
        .get("time")
        .cloned()
        .unwrap_or_else(|| Value::from("flexible"));

    let slot = serde_json::json!({
        "year": now.year(),
        "month": month,
        "day": day,
        "time": time,
    });
    user.insert("availability".to_string(), Value::from(vec![slot]));
}

/// Accept both JSON numbers and numeric strings, as legacy documents did.
fn lenient_u32(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
