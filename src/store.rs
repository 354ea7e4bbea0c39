use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, warn};

use crate::migrate;
use crate::model::AssessmentState;
use crate::schema;
use crate::util;

mod file;
mod memory;
mod sqlite;

pub use file::FileAdapter;
pub use memory::MemoryAdapter;
pub use sqlite::SqliteAdapter;

/// Key holding the serialized state in the primary store.
pub const STATE_KEY: &str = "assessment_state";
/// Durable-store key holding a verbatim copy of the primary value.
pub const BACKUP_KEY: &str = "assessment_state_backup";
/// Durable-store key holding the ISO-8601 stamp of the last backup.
pub const BACKUP_AT_KEY: &str = "assessment_state_backup_at";

/// Minimal key-value surface the store runs against. Implementations map onto
/// whatever medium holds the bytes; faults surface as errors here and are
/// absorbed by `ResponseStore`.
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Sole owner of the two underlying stores: a primary session-scoped store for
/// the live state and a durable store used only for backup/restore.
///
/// Every operation recovers storage and serialization faults locally: reads
/// fall back to schema defaults, writes report `false`. Nothing here panics or
/// propagates an error to the caller.
pub struct ResponseStore<P, D> {
    primary: P,
    durable: D,
}

impl<P: StorageAdapter, D: StorageAdapter> ResponseStore<P, D> {
    pub fn new(primary: P, durable: D) -> Self {
        Self { primary, durable }
    }

    /// Read the current state, migrating older stored shapes transparently.
    /// A migrated value is written back best-effort; failure to persist it
    /// still returns the correctly migrated in-memory copy.
    pub fn load(&mut self) -> AssessmentState {
        let now = util::now_utc_string();

        let raw = match self.primary.get(STATE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "primary store read failed, using defaults");
                return schema::default_state(&now);
            }
        };
        let Some(raw) = raw else {
            return schema::default_state(&now);
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "stored state is not valid json, using defaults");
                return schema::default_state(&now);
            }
        };

        let version = value
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or(schema::LEGACY_VERSION);
        if version != schema::CURRENT_VERSION {
            debug!(from = version, to = schema::CURRENT_VERSION, "migrating stored state");
            let migrated = migrate::migrate(value, &now);
            self.write_back(&migrated);
            return self.into_typed(migrated, &now);
        }

        match serde_json::from_value(value.clone()) {
            Ok(state) => state,
            // Version matches but the shape drifted; reconcile and retry.
            Err(_) => {
                let repaired = migrate::migrate(value, &now);
                self.write_back(&repaired);
                self.into_typed(repaired, &now)
            }
        }
    }

    /// Merge a response map into the stored state and persist it. Returns
    /// whether the write took effect.
    pub fn save_responses(&mut self, responses: &BTreeMap<String, i64>) -> bool {
        let mut state = self.load();
        state
            .responses
            .extend(responses.iter().map(|(id, value)| (id.clone(), *value)));
        state.metadata.last_saved = util::now_utc_string();
        state.metadata.attempt_count += 1;
        state.metadata.question_count = state.responses.len();

        self.persist(&state)
    }

    /// Set a single response and persist.
    pub fn update_response(&mut self, question_id: &str, value: i64) -> bool {
        let responses = BTreeMap::from([(question_id.to_string(), value)]);
        self.save_responses(&responses)
    }

    /// Remove the primary store entry.
    pub fn clear(&mut self) -> bool {
        match self.primary.remove(STATE_KEY) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to clear stored state");
                false
            }
        }
    }

    /// Copy the raw primary value into the durable store, stamped with the
    /// backup time. Nothing to back up counts as success.
    pub fn backup(&mut self) -> bool {
        let raw = match self.primary.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return true,
            Err(err) => {
                warn!(error = %err, "primary store read failed, backup skipped");
                return false;
            }
        };

        let stamp = util::now_utc_string();
        let written = self
            .durable
            .set(BACKUP_KEY, &raw)
            .and_then(|()| self.durable.set(BACKUP_AT_KEY, &stamp));
        match written {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to write backup");
                false
            }
        }
    }

    /// Bring the durable backup into the primary store, migrating it on the
    /// way in. Returns false when no usable backup exists.
    pub fn restore_from_backup(&mut self) -> bool {
        let raw = match self.durable.get(BACKUP_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(err) => {
                warn!(error = %err, "durable store read failed, restore skipped");
                return false;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "backup is not valid json, restore skipped");
                return false;
            }
        };

        let migrated = migrate::migrate(value, &util::now_utc_string());
        let serialized = match serde_json::to_string(&migrated) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize restored state");
                return false;
            }
        };
        match self.primary.set(STATE_KEY, &serialized) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to write restored state");
                false
            }
        }
    }

    /// Timestamp of the most recent backup, if one exists.
    pub fn backup_stamp(&self) -> Option<String> {
        match self.durable.get(BACKUP_AT_KEY) {
            Ok(stamp) => stamp,
            Err(err) => {
                warn!(error = %err, "durable store read failed");
                None
            }
        }
    }

    fn persist(&mut self, state: &AssessmentState) -> bool {
        let serialized = match serde_json::to_string(state) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize state");
                return false;
            }
        };
        match self.primary.set(STATE_KEY, &serialized) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to write state");
                false
            }
        }
    }

    fn write_back(&mut self, migrated: &Value) {
        let Ok(serialized) = serde_json::to_string(migrated) else {
            return;
        };
        if let Err(err) = self.primary.set(STATE_KEY, &serialized) {
            warn!(error = %err, "failed to persist migrated state, continuing in memory");
        }
    }

    fn into_typed(&self, migrated: Value, now: &str) -> AssessmentState {
        serde_json::from_value(migrated).unwrap_or_else(|err| {
            warn!(error = %err, "migrated state failed to deserialize, using defaults");
            schema::default_state(now)
        })
    }
}
