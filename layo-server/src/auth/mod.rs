//! 认证模块
//!
//! 单一卖家账号，凭据随请求体提交：
//! - [`SellerAuthenticator`] - 校验凭据，签发 [`AuthenticatedSeller`]
//! - [`ensure_seller`] - 启动时写入卖家账号
//! - [`password`] - Argon2 哈希与校验

pub mod bootstrap;
pub mod credentials;
pub mod password;

pub use bootstrap::ensure_seller;
pub use credentials::{AuthenticatedSeller, Credentials, SellerAuthenticator};
