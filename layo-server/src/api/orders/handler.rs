//! Order API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::JsonFields;
use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::{OrderRepository, Repository};
use crate::utils::validation::{Fields, required_number, required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub success: bool,
    pub order: Order,
}

fn validate_order(fields: &Fields) -> AppResult<OrderCreate> {
    Ok(OrderCreate {
        customer_name: required_text(fields, "customerName")?,
        phone: required_text(fields, "phone")?,
        pickup_location: required_text(fields, "pickupLocation")?,
        quantity: required_number(fields, "quantity")?,
        product_id: required_text(fields, "productId")?,
    })
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    JsonFields(fields): JsonFields,
) -> AppResult<Json<OrderPlaced>> {
    let data = validate_order(&fields)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .create(data)
        .await
        .map_err(|e| AppError::storage_rejected(e.to_string()))?;

    tracing::info!(
        order_id = %order.id,
        product_id = %order.product_id,
        quantity = order.quantity,
        "Order placed"
    );
    Ok(Json(OrderPlaced {
        success: true,
        order,
    }))
}
