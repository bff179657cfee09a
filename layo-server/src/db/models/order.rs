//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pickup order placed by a customer
///
/// `productId` is stored as given; it is not checked against `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub pickup_location: String,
    pub quantity: f64,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub phone: String,
    pub pickup_location: String,
    pub quantity: f64,
    pub product_id: String,
}

impl Order {
    pub fn from_create(id: String, data: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: data.customer_name,
            phone: data.phone,
            pickup_location: data.pickup_location,
            quantity: data.quantity,
            product_id: data.product_id,
            created_at,
        }
    }
}
