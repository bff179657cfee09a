//! Product Repository

use super::{BaseRepository, RepoResult, Repository, new_key, record_key};
use crate::db::PRODUCTS;
use crate::db::models::{Product, ProductCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Delete a product by id. Unknown ids are not an error.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(PRODUCTS, id).to_string();
        self.base
            .db()
            .query("DELETE type::thing('products', $key)")
            .bind(("key", key))
            .await?
            .check()?;
        Ok(())
    }
}

impl Repository<Product, ProductCreate> for ProductRepository {
    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, price, description, category, media, mediaType \
                 FROM products",
            )
            .await?
            .take(0)?;
        Ok(products)
    }

    async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let key = new_key();
        self.base
            .db()
            .query("CREATE type::thing('products', $key) CONTENT $doc RETURN NONE")
            .bind(("key", key.clone()))
            .bind(("doc", data.clone()))
            .await?
            .check()?;
        Ok(Product::from_create(key, data))
    }
}
