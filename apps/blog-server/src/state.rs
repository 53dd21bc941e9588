//! Application state - shared across all handlers.
//!
//! Wiring is explicit: repository → service → state.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::ports::BlogRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DbPool, PostgresBlogRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo = Self::build_repository(db_config).await;
        tracing::info!("Application state initialized");
        Self::with_repository(repo)
    }

    /// State over an already constructed repository.
    pub fn with_repository(repo: Arc<dyn BlogRepository>) -> Self {
        Self {
            blogs: BlogService::new(repo),
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn BlogRepository> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryBlogRepository::new());
        };

        let pool = match DbPool::init(config).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Arc::new(InMemoryBlogRepository::new());
            }
        };

        if let Err(e) = pool.ensure_schema().await {
            tracing::error!(
                "Failed to prepare blog table: {}. Using in-memory fallback.",
                e
            );
            return Arc::new(InMemoryBlogRepository::new());
        }

        Arc::new(PostgresBlogRepository::new(pool.conn))
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn BlogRepository> {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryBlogRepository::new())
    }
}
