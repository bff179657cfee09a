//! Database Module
//!
//! Embedded SurrealDB document store: RocksDB on disk, or the in-memory
//! engine when `DATABASE_PATH=memory`.

pub mod models;
pub mod repository;

use crate::core::DatabaseConfig;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Product table name, also the id prefix accepted by DELETE
pub const PRODUCTS: &str = "products";

const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS products SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS sellers SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS sellers_username ON sellers FIELDS username UNIQUE;
"#;

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store, select namespace/database and declare the tables
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let db = if config.is_memory() {
            Surreal::new::<Mem>(()).await
        } else {
            std::fs::create_dir_all(&config.path).map_err(|e| {
                AppError::database(format!("Failed to create {}: {e}", config.path))
            })?;
            Surreal::new::<RocksDb>(config.path.as_str()).await
        }
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|r| r.check())
            .map_err(|e| AppError::database(format!("Failed to define tables: {e}")))?;

        tracing::info!(
            path = %config.path,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self { db })
    }
}
