use serde_json::{Map, Value, json};

use crate::schema::{CURRENT_VERSION, LEGACY_VERSION, SCHEMA_VERSIONS, defaults_for};


type MigrationStep = fn(Value, &str) -> Value;

/// Ordered migration chain, keyed by the version each step upgrades from.
const MIGRATIONS: [(&str, MigrationStep); 1] = [("1.0", migrate_1_0_to_1_1)];

/// Upgrade a stored state object of any past version to the current version.
///
/// Pure: the result depends only on `stored` and `now`, and migrating an
/// already-current object again is a no-op. An unrecognized version tag is
/// treated as already current and only reconciled against the default shape.
pub fn migrate(stored: Value, now: &str) -> Value {
    let version = stored
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or(LEGACY_VERSION)
        .to_string();

    let mut state = stored;
    if let Some(start) = SCHEMA_VERSIONS.iter().position(|v| *v == version) {
        for (from, step) in &MIGRATIONS {
            let applies = SCHEMA_VERSIONS
                .iter()
                .position(|v| v == from)
                .is_some_and(|index| index >= start);
            if applies {
                state = step(state, now);
            }
        }
    }

    reconcile(defaults_for(CURRENT_VERSION, now), state)
}

/// Adds the `version`, `currentStage`, and `progress` fields introduced in 1.1
/// and seeds `metadata`. A 1.0 object on disk implies at least one completed
/// save, so `attemptCount` defaults to 1 rather than 0.
fn migrate_1_0_to_1_1(state: Value, now: &str) -> Value {
    let mut fields = into_object(state);

    fields.insert("version".to_string(), json!("1.1"));
    fields
        .entry("currentStage".to_string())
        .or_insert(Value::Null);
    fields.entry("progress".to_string()).or_insert_with(|| {
        json!({
            "completed": [],
            "lastAccessed": now,
        })
    });

    let responses = fields
        .get("responses")
        .and_then(Value::as_object)
        .map(Map::len)
        .unwrap_or(0);
    let seeded = json!({
        "lastSaved": now,
        "questionCount": responses,
        "timeSpent": 0,
        "attemptCount": 1,
    });
    let metadata = fields.remove("metadata").unwrap_or(Value::Null);
    fields.insert("metadata".to_string(), reconcile(seeded, metadata));

    Value::Object(fields)
}

/// Structural merge of a stored object onto a default shape. Stored values win
/// field by field, nested objects merge recursively, and stored `null` never
/// clobbers a default. Fields outside the default shape are dropped at the top
/// level only; nested maps such as `responses` are open, so saved entries
/// survive even though the default for the map is empty.
fn reconcile(defaults: Value, stored: Value) -> Value {
    merge_shapes(defaults, stored, true)
}

fn merge_shapes(defaults: Value, stored: Value, drop_unknown: bool) -> Value {
    let (mut merged, stored) = match (defaults, stored) {
        (Value::Object(defaults), Value::Object(stored)) => (defaults, stored),
        (defaults, Value::Null) => return defaults,
        (defaults @ Value::Object(_), _) => return defaults,
        (_, stored) => return stored,
    };

    for (key, stored_value) in stored {
        match merged.get_mut(&key) {
            Some(default_value) if default_value.is_object() && stored_value.is_object() => {
                let nested = std::mem::take(default_value);
                *default_value = merge_shapes(nested, stored_value, false);
            }
            Some(default_value) => {
                // currentStage legitimately stores null; the default is null
                // too, so skipping stored nulls loses nothing there.
                if !stored_value.is_null() {
                    *default_value = stored_value;
                }
            }
            None => {
                if !drop_unknown && !stored_value.is_null() {
                    merged.insert(key, stored_value);
                }
            }
        }
    }

    Value::Object(merged)
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}
