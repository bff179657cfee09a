use std::path::PathBuf;

/// Default bootstrap identity, kept for compatibility with existing seller panels.
pub const DEFAULT_SELLER_USERNAME: &str = "admin";
pub const DEFAULT_SELLER_PASSWORD: &str = "Layo@1ly";

/// Sentinel `DATABASE_PATH` selecting the in-memory engine
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置 - 店铺后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | data/layo-investment | RocksDB 目录 (`memory` 为内存库) |
/// | DATABASE_NAMESPACE | layo | SurrealDB namespace |
/// | DATABASE_NAME | layo-investment | SurrealDB database |
/// | UPLOADS_DIR | uploads | 媒体文件目录 |
/// | MAX_UPLOAD_BYTES | 104857600 | 商品创建请求体上限 |
/// | SELLER_USERNAME | admin | 启动时写入的卖家账号 |
/// | SELLER_PASSWORD | Layo@1ly | 启动时写入的卖家密码 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | 控制台 JSON 日志 |
/// | LOG_DIR | - | 文件日志目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DATABASE_PATH=memory cargo run -p layo-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 上传文件目录
    pub uploads_dir: PathBuf,
    /// POST /api/products 的请求体上限 (字节)
    pub max_upload_bytes: usize,
    /// 启动引导的卖家账号
    pub seller: SellerConfig,
    /// 日志配置
    pub log: LogConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

/// Document store location
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// RocksDB directory, or [`MEMORY_DATABASE`]
    pub path: String,
    pub namespace: String,
    pub database: String,
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.path == MEMORY_DATABASE
    }

    /// In-memory store, used by tests
    pub fn memory() -> Self {
        Self {
            path: MEMORY_DATABASE.into(),
            namespace: "layo".into(),
            database: "layo-investment".into(),
        }
    }
}

/// Seller identity upserted at startup
#[derive(Clone)]
pub struct SellerConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SellerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellerConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SellerConfig {
    /// Whether the compiled-in default password is still in use
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_SELLER_PASSWORD
    }
}

impl Default for SellerConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_SELLER_USERNAME.into(),
            password: DEFAULT_SELLER_PASSWORD.into(),
        }
    }
}

/// Logging options
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            dir: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("PORT", 3000),
            database: DatabaseConfig {
                path: env_or("DATABASE_PATH", "data/layo-investment"),
                namespace: env_or("DATABASE_NAMESPACE", "layo"),
                database: env_or("DATABASE_NAME", "layo-investment"),
            },
            uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", "uploads")),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", 100 * 1024 * 1024),
            seller: SellerConfig {
                username: env_or("SELLER_USERNAME", DEFAULT_SELLER_USERNAME),
                password: env_or("SELLER_PASSWORD", DEFAULT_SELLER_PASSWORD),
            },
            log: LogConfig {
                level: env_or("LOG_LEVEL", "info"),
                json: env_parse("LOG_JSON", false),
                dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            },
            environment: env_or("ENVIRONMENT", "development"),
        }
    }

    /// 测试用配置：内存数据库 + 指定上传目录
    pub fn for_testing(uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            http_port: 0,
            database: DatabaseConfig::memory(),
            uploads_dir: uploads_dir.into(),
            max_upload_bytes: 10 * 1024 * 1024,
            seller: SellerConfig::default(),
            log: LogConfig::default(),
            environment: "test".into(),
        }
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_testing_uses_memory_store() {
        let config = Config::for_testing("/tmp/uploads");
        assert!(config.database.is_memory());
        assert_eq!(config.uploads_dir, PathBuf::from("/tmp/uploads"));
        assert_eq!(config.seller.username, "admin");
        assert!(!config.is_development());
    }

    #[test]
    fn test_seller_debug_redacts_password() {
        let seller = SellerConfig::default();
        let printed = format!("{:?}", seller);
        assert!(printed.contains("admin"));
        assert!(!printed.contains(DEFAULT_SELLER_PASSWORD));
        assert!(seller.uses_default_password());
    }

    #[test]
    fn test_rocksdb_path_is_not_memory() {
        let db = DatabaseConfig {
            path: "data/layo-investment".into(),
            namespace: "layo".into(),
            database: "layo-investment".into(),
        };
        assert!(!db.is_memory());
    }
}
