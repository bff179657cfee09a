use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{SellerAuthenticator, ensure_seller};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::SellerRepository;
use crate::services::MediaStore;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 克隆成本很低: SurrealDB 句柄内部是 Arc，其余字段是小结构体。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | media | MediaStore | 媒体文件目录 |
/// | authenticator | SellerAuthenticator | 卖家凭据校验 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 媒体文件存储
    pub media: MediaStore,
    /// 卖家认证
    pub authenticator: SellerAuthenticator,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self {
            media: MediaStore::new(config.uploads_dir.clone()),
            authenticator: SellerAuthenticator::new(SellerRepository::new(db.clone())),
            config,
            db,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (RocksDB 或内存库) 与表定义
    /// 2. 上传目录
    /// 3. 写入配置中的卖家账号
    ///
    /// 全部完成后才返回，监听端口在此之后才绑定。
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::connect(&config.database).await?.db;
        let state = Self::new(config.clone(), db);

        state.media.ensure_dir().await?;
        ensure_seller(&SellerRepository::new(state.db.clone()), &config.seller).await?;

        tracing::info!(
            uploads_dir = %config.uploads_dir.display(),
            seller = %config.seller.username,
            "Server state initialized"
        );
        Ok(state)
    }
}
