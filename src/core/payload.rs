use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a single-object response. Anything other than a JSON object is
/// treated as "no data".
pub fn decode_object<T: DeserializeOwned>(value: Value, what: &str) -> Option<T> {
    if !value.is_object() {
        tracing::warn!("Expected an object for {}, got {}", what, kind(&value));
        return None;
    }

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Could not decode {}: {}", what, e);
            None
        }
    }
}

/// Decode a collection response. A non-array body is "no data"; elements
/// that are not objects are dropped with a warning and the rest are kept.
pub fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> Option<Vec<T>> {
    let Value::Array(items) = value else {
        tracing::warn!("Expected an array for {}, got {}", what, kind(&value));
        return None;
    };

    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!("Skipping {} #{}: not an object", what, index);
                return None;
            }
            serde_json::from_value(item)
                .map_err(|e| tracing::warn!("Skipping {} #{}: {}", what, index, e))
                .ok()
        })
        .collect();

    if decoded.len() < total {
        tracing::debug!("Decoded {}/{} {}", decoded.len(), total, what);
    }
    Some(decoded)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Profile, SkillEntry};
    use serde_json::json;

    #[test]
    fn test_decode_list_drops_non_objects() {
        let skills: Vec<SkillEntry> =
            decode_list(json!([{"name": "Rust"}, 42, null, {"name": "Go"}]), "skills").unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].name.as_deref(), Some("Go"));
    }

    #[test]
    fn test_decode_list_rejects_non_array() {
        let skills: Option<Vec<SkillEntry>> = decode_list(json!({"name": "Rust"}), "skills");
        assert!(skills.is_none());
    }

    #[test]
    fn test_decode_object() {
        let profile: Option<Profile> = decode_object(json!({"phone": 5550100}), "profile");
        assert_eq!(profile.unwrap().phone.as_deref(), Some("5550100"));

        let not_profile: Option<Profile> = decode_object(json!([1, 2]), "profile");
        assert!(not_profile.is_none());
    }
}
