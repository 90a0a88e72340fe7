// src/project.rs

//! Output Projector: the persisted form of a record, with internal-only
//! fields removed.

use serde_json::Value;

/// Keys stripped from the external form.
pub const EXCLUDED_KEYS: &[&str] = &[
    "currentClubId",
    "preferredFoot",
    "hairColour",
    "hairstyle",
    "skinColour",
    "facialHair",
    "url",
    "playerId",
    "squadNumber",
];

/// Remove the exclusion set, recursively through nested records and
/// arrays. Every other key passes through unchanged, empty strings
/// included; applying this twice is a no-op.
pub fn project(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !EXCLUDED_KEYS.contains(&key.as_str()))
                .map(|(key, v)| (key.clone(), project(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(project).collect()),
        other => other.clone(),
    }
}
