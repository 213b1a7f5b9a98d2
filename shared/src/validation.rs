//! Validation utilities for the AgriSmart advisory platform
//!
//! Request bodies arrive as loose JSON. These helpers pull required
//! fields out of a body while collecting one diagnostic per problem, so
//! a response can report every offending field at once.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A single field-level validation diagnostic
#[derive(Debug, Clone, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Extract a required non-empty string field from a JSON object
///
/// Records a diagnostic and returns an empty placeholder when the field
/// is missing, not a string, or empty. Callers must treat the result as
/// unusable once `errors` is non-empty.
pub fn required_string(
    errors: &mut Vec<FieldError>,
    body: &Value,
    field: &str,
    message: &str,
) -> String {
    match body.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            errors.push(FieldError::new(field, message));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Required Field Tests
    // ========================================================================

    #[test]
    fn test_required_string_present() {
        let mut errors = Vec::new();
        let body = json!({ "location": "Pune" });
        let value = required_string(&mut errors, &body, "location", "Location is required");
        assert_eq!(value, "Pune");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_string_missing() {
        let mut errors = Vec::new();
        let body = json!({});
        required_string(&mut errors, &body, "season", "Season is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "season");
        assert_eq!(errors[0].message, "Season is required");
    }

    #[test]
    fn test_required_string_empty() {
        let mut errors = Vec::new();
        let body = json!({ "soilType": "" });
        required_string(&mut errors, &body, "soilType", "Soil type is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "soilType");
    }

    #[test]
    fn test_required_string_wrong_type() {
        let mut errors = Vec::new();
        let body = json!({ "budget": 50000 });
        required_string(&mut errors, &body, "budget", "Budget range is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "budget");
    }

    #[test]
    fn test_collects_multiple_diagnostics() {
        let mut errors = Vec::new();
        let body = json!({ "location": "Pune" });
        required_string(&mut errors, &body, "location", "Location is required");
        required_string(&mut errors, &body, "soilType", "Soil type is required");
        required_string(&mut errors, &body, "season", "Season is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "soilType");
        assert_eq!(errors[1].field, "season");
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new("season", "Season is required");
        assert_eq!(error.to_string(), "season: Season is required");
    }
}
