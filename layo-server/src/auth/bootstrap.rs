//! 启动引导: 写入配置中的卖家账号
//!
//! Runs before the listener binds. Every run re-hashes the configured password
//! and overwrites the stored record, so configuration always wins.

use crate::auth::password;
use crate::core::SellerConfig;
use crate::db::models::Seller;
use crate::db::repository::SellerRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Upsert the configured seller
pub async fn ensure_seller(sellers: &SellerRepository, config: &SellerConfig) -> AppResult<()> {
    if config.username.trim().is_empty() || config.password.is_empty() {
        return Err(AppError::with_message(
            shared::ErrorCode::ConfigError,
            "SELLER_USERNAME and SELLER_PASSWORD must not be empty",
        ));
    }

    let hash = password::hash_password(config.password.clone()).await?;
    sellers
        .upsert(Seller {
            username: config.username.clone(),
            password: hash,
        })
        .await
        .map_err(AppError::from)?;

    security_log!(INFO, "seller_bootstrapped", username = %config.username);
    Ok(())
}
