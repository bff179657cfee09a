//! Product submission extractor
//!
//! `POST /api/products` accepts either a JSON body or `multipart/form-data`.
//! Multipart text parts are folded into the same field map as JSON; at most
//! one file may be attached, under the `media` field.
//!
//! The file is screened against the media allow-list while the body is
//! parsed, so a disallowed file is refused before credentials are checked.
//! Its bytes stay in memory until the handler decides to write them.

use axum::extract::{FromRequest, Multipart, Request};
use serde_json::Value;

use crate::api::fields::{JsonFields, is_json};
use crate::services::{MediaStore, MediaUpload};
use crate::utils::error::multipart_error;
use crate::utils::validation::Fields;
use crate::utils::{AppError, ErrorCode};

/// Multipart field carrying the media file
pub const MEDIA_FIELD: &str = "media";

/// Parsed product creation request
#[derive(Debug, Default)]
pub struct ProductSubmission {
    pub fields: Fields,
    pub media: Option<MediaUpload>,
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

fn unexpected_field(name: &str) -> AppError {
    AppError::new(ErrorCode::UnexpectedMediaField).with_detail("field", name)
}

impl<S> FromRequest<S> for ProductSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            if is_json(req.headers()) {
                let JsonFields(fields) = JsonFields::from_request(req, state).await?;
                return Ok(Self {
                    fields,
                    media: None,
                });
            }
            return Ok(Self::default());
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {e}")))?;

        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            let Some(file_name) = field.file_name().map(str::to_string) else {
                let text = field.text().await.map_err(multipart_error)?;
                submission.fields.insert(name, Value::String(text));
                continue;
            };
            let content_type = field.content_type().map(str::to_string);

            // Untouched file input: empty filename, no bytes
            if file_name.is_empty() {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.is_empty() {
                    continue;
                }
                if name != MEDIA_FIELD || submission.media.is_some() {
                    return Err(unexpected_field(&name));
                }
                return Err(AppError::media_rejected());
            }

            if name != MEDIA_FIELD || submission.media.is_some() {
                return Err(unexpected_field(&name));
            }

            MediaStore::screen(&file_name, content_type.as_deref())?;

            let bytes = field.bytes().await.map_err(multipart_error)?;
            submission.media = Some(MediaUpload {
                file_name,
                content_type,
                bytes,
            });
        }

        Ok(submission)
    }
}
