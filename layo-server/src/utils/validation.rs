//! Input validation helpers
//!
//! Request payloads arrive as loose JSON objects (or multipart text fields
//! folded into one). These helpers pull typed values out of them:
//! - strings must be strings; empty / whitespace-only counts as missing
//! - numbers accept a JSON number or a numeric string
//! - `mediaType` empty counts as absent

use serde_json::{Map, Value};

use crate::db::models::MediaType;
use crate::utils::{AppError, AppResult};

/// Loose request payload
pub type Fields = Map<String, Value>;

fn missing(field: &str) -> AppError {
    AppError::validation(format!("{field} is required")).with_detail("field", field)
}

fn invalid(field: &str, expected: &str) -> AppError {
    AppError::validation(format!("{field} must be {expected}")).with_detail("field", field)
}

/// Optional string field. `null`, empty and whitespace-only are `None`.
pub fn optional_text(fields: &Fields, field: &str) -> AppResult<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(field, "a string")),
    }
}

/// Validate that a required string is present and non-empty.
pub fn required_text(fields: &Fields, field: &str) -> AppResult<String> {
    optional_text(fields, field)?.ok_or_else(|| missing(field))
}

/// Validate a required number (JSON number or numeric string).
pub fn required_number(fields: &Fields, field: &str) -> AppResult<f64> {
    let value = match fields.get(field) {
        None | Some(Value::Null) => return Err(missing(field)),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(missing(field)),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(field, "a number"))
}

/// `mediaType`: absent or empty → `None`, otherwise `image` | `video`.
pub fn optional_media_type(fields: &Fields) -> AppResult<Option<MediaType>> {
    let Some(raw) = optional_text(fields, "mediaType")? else {
        return Ok(None);
    };
    raw.parse::<MediaType>()
        .map(Some)
        .map_err(|_| invalid("mediaType", "\"image\" or \"video\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_required_text() {
        let f = fields(json!({ "name": "Cap", "blank": "   ", "n": 3 }));
        assert_eq!(required_text(&f, "name").unwrap(), "Cap");

        let err = required_text(&f, "blank").unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()["field"], "blank");

        assert!(required_text(&f, "absent").is_err());
        let err = required_text(&f, "n").unwrap_err();
        assert!(err.message.contains("must be a string"));
    }

    #[test]
    fn test_required_number_accepts_numeric_strings() {
        let f = fields(json!({ "a": 12.5, "b": "7", "c": "seven", "d": "", "e": true }));
        assert_eq!(required_number(&f, "a").unwrap(), 12.5);
        assert_eq!(required_number(&f, "b").unwrap(), 7.0);
        assert!(required_number(&f, "c").is_err());
        assert!(required_number(&f, "d").unwrap_err().message.contains("required"));
        assert!(required_number(&f, "e").is_err());
        assert!(required_number(&f, "missing").is_err());
    }

    #[test]
    fn test_required_number_rejects_non_finite() {
        let f = fields(json!({ "p": "inf", "q": "NaN" }));
        assert!(required_number(&f, "p").is_err());
        assert!(required_number(&f, "q").is_err());
    }

    #[test]
    fn test_optional_media_type() {
        assert_eq!(optional_media_type(&fields(json!({}))).unwrap(), None);
        assert_eq!(
            optional_media_type(&fields(json!({ "mediaType": "" }))).unwrap(),
            None
        );
        assert_eq!(
            optional_media_type(&fields(json!({ "mediaType": "video" }))).unwrap(),
            Some(MediaType::Video)
        );
        assert!(optional_media_type(&fields(json!({ "mediaType": "audio" }))).is_err());
    }
}
