//! Loose JSON body extractor
//!
//! Handlers validate fields one by one, so the body is read as a plain JSON
//! object instead of a typed struct:
//! - empty body, or a body not declared as JSON → `{}`
//! - malformed JSON, or JSON that is not an object → 400

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::{HeaderMap, header};
use serde_json::Value;

use crate::utils::error::body_error;
use crate::utils::validation::Fields;
use crate::utils::{AppError, AppResult};

/// Request body as a JSON object
#[derive(Debug, Clone, Default)]
pub struct JsonFields(pub Fields);

/// `application/json`, `application/*+json`
pub fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse a JSON body; blank input is an empty object
pub fn parse_fields(bytes: &[u8]) -> AppResult<Fields> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::invalid_request("Request body must be a JSON object")),
        Err(e) => Err(AppError::invalid_request(format!("Malformed JSON: {e}"))),
    }
}

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(JsonFields::default());
        }
        let bytes = Bytes::from_request(req, state).await.map_err(body_error)?;
        parse_fields(&bytes).map(JsonFields)
    }
}
