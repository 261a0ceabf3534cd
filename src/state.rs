use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::prepare(&db).await?;
        Ok(Self { db, config })
    }

    /// Migrated in-memory database on a single connection, so every query
    /// sees the same data.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        use crate::config::ServerConfig;

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
        });
        let db = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.database_url)
            .await
            .expect("in-memory pool ok");
        db::prepare(&db).await.expect("migrations ok");
        Self { db, config }
    }
}
