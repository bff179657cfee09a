//! Database Models

pub mod order;
pub mod product;
pub mod seller;

// Re-exports
pub use order::{Order, OrderCreate};
pub use product::{MediaType, Product, ProductCreate};
pub use seller::Seller;
