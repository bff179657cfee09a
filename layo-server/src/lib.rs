//! Layo Server - 小型电商店铺后端
//!
//! # 架构概述
//!
//! 商品列表、下单，以及单一卖家账号对商品的增删 (可附带图片/视频)：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (`products` / `orders` / `sellers`)
//! - **认证** (`auth`): 请求体携带卖家凭据 + Argon2 校验，启动时写入卖家账号
//! - **媒体** (`services`): 上传文件的筛选、落盘与删除
//! - **HTTP API** (`api`): RESTful API 接口与 `/uploads` 文件访问
//!
//! # 模块结构
//!
//! ```text
//! layo-server/src/
//! ├── core/          # 配置、状态、启动
//! ├── auth/          # 卖家认证、启动引导
//! ├── services/      # 媒体文件存储
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、字段校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{AuthenticatedSeller, Credentials, SellerAuthenticator};
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 日志 + 启动检查
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log.level,
        config.log.json,
        config.log.dir.as_deref(),
    )?;

    if config.seller.uses_default_password() && !config.is_development() {
        security_log!(
            WARN,
            "default_seller_password",
            environment = %config.environment,
            username = %config.seller.username
        );
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __
   / /   ____ ___  ______
  / /   / __ `/ / / / __ \
 / /___/ /_/ / /_/ / /_/ /
/_____/\__,_/\__, /\____/
            /____/
    "#
    );
}
