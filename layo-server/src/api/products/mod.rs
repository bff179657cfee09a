//! Product API 模块

mod form;
mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get},
};

use crate::core::ServerState;

pub use form::{MEDIA_FIELD, ProductSubmission};

/// `max_upload_bytes` bounds the creation body (multipart included)
pub fn router(max_upload_bytes: usize) -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes(max_upload_bytes))
}

fn product_routes(max_upload_bytes: usize) -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/{id}", delete(handler::delete))
}
