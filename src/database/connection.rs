use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let pool = Database::connect(options).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

/// 启动时确保三张表存在；失败只记日志，不中断服务
pub async fn ensure_schema(pool: &DbPool) {
    match run_migrations(pool).await {
        Ok(()) => log::info!("Database schema is ready"),
        Err(e) => log::error!("Error creating tables: {e}"),
    }
}

/// 单连接内存库，供各模块测试使用
#[cfg(test)]
pub async fn test_pool() -> DbPool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = test_pool().await;
        ensure_schema(&pool).await;
        run_migrations(&pool).await.unwrap();

        for table in ["customers", "orders", "feedback"] {
            let row = pool
                .query_one(Statement::from_sql_and_values(
                    pool.get_database_backend(),
                    "SELECT COUNT(*) AS cnt FROM sqlite_master WHERE type = 'table' AND name = ?",
                    [table.into()],
                ))
                .await
                .unwrap()
                .unwrap();
            let count: i64 = row.try_get("", "cnt").unwrap();
            assert_eq!(count, 1, "table {table} should exist once");
        }
    }
}
