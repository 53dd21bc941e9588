use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

#[cfg(feature = "postgres")]
use super::entity::blog;

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Connection pool to the database that holds the `blog` table.
#[cfg(feature = "postgres")]
pub struct DbPool {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DbPool {
    /// Connect using the given configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(DatabaseConfig::CONNECT_TIMEOUT)
            .idle_timeout(DatabaseConfig::IDLE_TIMEOUT)
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Create the `blog` table from the entity definition if it is missing.
    /// Existing tables are left as they are.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(blog::Entity);
        table.if_not_exists();

        self.conn.execute(backend.build(&table)).await?;
        tracing::info!("Table 'blog' ready");

        Ok(())
    }
}
