use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::database::{MemoryTransactionStore, SeaOrmTransactionStore, SharedStore};
use crate::error::AppResult;

pub const MEMORY_URL_SCHEME: &str = "memory://";

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let pool = Database::connect(options).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

/// 根据配置创建记录存储：`memory://` 使用进程内存储，其余按数据库连接串处理并执行迁移
pub async fn create_store(config: &DatabaseConfig) -> AppResult<SharedStore> {
    if config.url.starts_with(MEMORY_URL_SCHEME) {
        log::warn!("Using in-memory transaction store, data will not survive a restart");
        return Ok(Arc::new(MemoryTransactionStore::new()));
    }

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    log::info!("Database connected and migrations applied");
    Ok(Arc::new(SeaOrmTransactionStore::new(pool)))
}
