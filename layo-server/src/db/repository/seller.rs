//! Seller Repository

use super::{BaseRepository, RepoResult};
use crate::db::models::Seller;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct SellerRepository {
    base: BaseRepository,
}

impl SellerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find seller by username (the record key)
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Seller>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT username, password FROM type::thing('sellers', $username)")
            .bind(("username", username_owned))
            .await?;
        let sellers: Vec<Seller> = result.take(0)?;
        Ok(sellers.into_iter().next())
    }

    /// Insert or replace the seller keyed by username
    pub async fn upsert(&self, seller: Seller) -> RepoResult<()> {
        self.base
            .db()
            .query("UPSERT type::thing('sellers', $username) CONTENT $doc RETURN NONE")
            .bind(("username", seller.username.clone()))
            .bind(("doc", seller))
            .await?
            .check()?;
        Ok(())
    }
}
