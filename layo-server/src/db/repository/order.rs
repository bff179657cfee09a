//! Order Repository

use super::{BaseRepository, RepoResult, Repository, new_key};
use crate::db::models::{Order, OrderCreate};
use chrono::Utc;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

/// Stored document: the create payload plus its timestamp
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    #[serde(flatten)]
    data: OrderCreate,
    created_at: chrono::DateTime<Utc>,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Order, OrderCreate> for OrderRepository {
    /// Oldest first
    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, customerName, phone, pickupLocation, quantity, \
                 productId, createdAt FROM orders ORDER BY createdAt",
            )
            .await?
            .take(0)?;
        Ok(orders)
    }

    async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let key = new_key();
        let created_at = Utc::now();
        let doc = OrderDocument {
            data: data.clone(),
            created_at,
        };
        self.base
            .db()
            .query("CREATE type::thing('orders', $key) CONTENT $doc RETURN NONE")
            .bind(("key", key.clone()))
            .bind(("doc", doc))
            .await?
            .check()?;
        Ok(Order::from_create(key, data, created_at))
    }
}
