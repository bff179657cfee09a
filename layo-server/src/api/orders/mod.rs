//! Order API Module
//!
//! Customers place pickup orders; there is no read endpoint.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    // 下单无需认证
    Router::new().route("/", post(handler::create))
}
