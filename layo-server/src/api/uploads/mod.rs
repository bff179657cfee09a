//! Uploaded media routes
//!
//! `GET /uploads/{*path}` serves files written by product creation. The
//! content type is guessed from the extension.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Serve uploaded file handler
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> AppResult<impl IntoResponse> {
    let file_path = state.media.resolve(&path)?;

    let content = match tokio::fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Uploaded file not found");
            return Err(AppError::not_found("File"));
        }
    };

    let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
    Ok((
        [(header::CONTENT_TYPE, mime.essence_str().to_string())],
        Bytes::from(content),
    ))
}

/// Build uploads router
pub fn router() -> Router<ServerState> {
    Router::new().route("/uploads/{*path}", get(serve_uploaded_file))
}
