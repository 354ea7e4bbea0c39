use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::model::{AssessmentState, StageProgress, StateMetadata};


/// Every schema version ever shipped, oldest first.
pub const SCHEMA_VERSIONS: [&str; 2] = ["1.0", "1.1"];

/// Version written by the current release; the shape callers always observe.
pub const CURRENT_VERSION: &str = "1.1";

/// Stored objects predating the `version` field are treated as this version.
pub const LEGACY_VERSION: &str = "1.0";

/// Canonical default shape for a known version. An unknown version yields the
/// current shape, so callers always receive a complete field set. Timestamps
/// come from the caller-supplied `now` to keep the catalog deterministic.
pub fn defaults_for(version: &str, now: &str) -> Value {
    match version {
        "1.0" => json!({
            "responses": {},
            "metadata": default_metadata(now),
        }),
        _ => json!({
            "version": CURRENT_VERSION,
            "responses": {},
            "currentStage": null,
            "progress": {
                "completed": [],
                "lastAccessed": now,
            },
            "metadata": default_metadata(now),
        }),
    }
}

fn default_metadata(now: &str) -> Value {
    json!({
        "lastSaved": now,
        "questionCount": 0,
        "timeSpent": 0,
        "attemptCount": 0,
    })
}

/// Typed defaults for the current version, used when storage holds nothing.
/// Mirrors `defaults_for(CURRENT_VERSION)` field for field.
pub fn default_state(now: &str) -> AssessmentState {
    AssessmentState {
        version: CURRENT_VERSION.to_string(),
        responses: BTreeMap::new(),
        current_stage: None,
        progress: StageProgress {
            completed: Vec::new(),
            last_accessed: now.to_string(),
        },
        metadata: StateMetadata {
            last_saved: now.to_string(),
            question_count: 0,
            time_spent: 0,
            attempt_count: 0,
        },
    }
}
