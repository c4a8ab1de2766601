//! Payload validation for user creation
//!
//! Pure input transformation: an untyped JSON value either becomes a fully
//! typed [`NewUser`] or a non-empty list of field-level errors. The store is
//! never consulted here.

use crate::types::NewUser;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (`"body"` for a malformed payload)
    pub field: String,

    /// Human-readable reason
    pub reason: String,
}

impl FieldError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Validate a user-creation payload
///
/// Required fields: `id`, `name` (non-empty strings). Optional: `story_count`
/// (integer, or a string parseable as one; defaults to 0) and `last_story`
/// (`YYYY-MM-DD` date string; defaults to absent).
///
/// All field errors are collected, not just the first one. A payload that is
/// not a JSON object is itself a validation failure, reported against `body`.
///
/// # Errors
///
/// Returns the non-empty list of field errors when the payload is invalid.
pub fn validate_new_user(payload: &Value) -> Result<NewUser, Vec<FieldError>> {
    let Some(object) = payload.as_object() else {
        return Err(vec![FieldError::new("body", "payload must be a JSON object")]);
    };

    let mut errors = Vec::new();

    let id = required_string(object.get("id"), "id", &mut errors);
    let name = required_string(object.get("name"), "name", &mut errors);

    let story_count = match object.get("story_count") {
        None | Some(Value::Null) => Some(0),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(count) => Some(count),
            None => {
                errors.push(FieldError::new("story_count", "must be an integer"));
                None
            }
        },
        // Form-style clients send numbers as strings
        Some(Value::String(s)) => match s.parse::<i64>() {
            Ok(count) => Some(count),
            Err(_) => {
                errors.push(FieldError::new("story_count", "must be an integer"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("story_count", "must be an integer"));
            None
        }
    };

    let last_story = match object.get("last_story") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => match s.parse::<NaiveDate>() {
            Ok(date) => Some(Some(date)),
            Err(_) => {
                errors.push(FieldError::new("last_story", "must be a YYYY-MM-DD date"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("last_story", "must be a YYYY-MM-DD date"));
            None
        }
    };

    match (id, name, story_count, last_story) {
        (Some(id), Some(name), Some(story_count), Some(last_story)) if errors.is_empty() => {
            Ok(NewUser {
                id,
                name,
                story_count,
                last_story,
            })
        }
        _ => Err(errors),
    }
}

fn required_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        Some(Value::Null) | None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_payload() {
        let payload = json!({
            "id": "LOLJK",
            "name": "dal",
            "story_count": 5,
            "last_story": "2024-03-01"
        });

        let new_user = validate_new_user(&payload).expect("payload should validate");
        assert_eq!(new_user.id, "LOLJK");
        assert_eq!(new_user.name, "dal");
        assert_eq!(new_user.story_count, 5);
        assert_eq!(
            new_user.last_story,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn defaults_optional_fields() {
        let payload = json!({ "id": "BIGMAN", "name": "steve" });

        let new_user = validate_new_user(&payload).expect("payload should validate");
        assert_eq!(new_user.story_count, 0);
        assert_eq!(new_user.last_story, None);
    }

    #[test]
    fn accepts_story_count_as_string() {
        let payload = json!({ "id": "ICE422", "name": "jaina", "story_count": "4" });

        let new_user = validate_new_user(&payload).expect("payload should validate");
        assert_eq!(new_user.story_count, 4);
    }

    #[test]
    fn rejects_missing_required_fields() {
        let payload = json!({ "story_count": 1 });

        let errors = validate_new_user(&payload).expect_err("payload should fail");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"name"));
    }

    #[test]
    fn rejects_empty_strings() {
        let payload = json!({ "id": "  ", "name": "" });

        let errors = validate_new_user(&payload).expect_err("payload should fail");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.reason == "must not be empty"));
    }

    #[test]
    fn rejects_non_object_payload() {
        let errors = validate_new_user(&json!("just a string")).expect_err("payload should fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn rejects_bad_story_count_and_date() {
        let payload = json!({
            "id": "LOLJK",
            "name": "dal",
            "story_count": "five",
            "last_story": "yesterday"
        });

        let errors = validate_new_user(&payload).expect_err("payload should fail");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["story_count", "last_story"]);
    }

    #[test]
    fn collects_all_errors_at_once() {
        let payload = json!({ "story_count": 1.5 });

        let errors = validate_new_user(&payload).expect_err("payload should fail");
        assert_eq!(errors.len(), 3);
    }
}
