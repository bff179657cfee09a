//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. Record keys are plain strings
//! (uuid simple form for products/orders, the username for sellers); queries
//! project `record::id(id)` so callers never see the `table:` prefix.

pub mod order;
pub mod product;
pub mod seller;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use seller::SellerRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for the insert-and-list collections
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// New record key: uuid v4 in simple (hex) form
pub fn new_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Accept both `abc` and `products:abc`
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
