//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use blog_core::error::RepoError;
use blog_core::ports::{BlogRecord, BlogRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_all(&self) -> Result<Vec<BlogRecord>, RepoError> {
        let result = BlogEntity::find()
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Loaded blogs");
        Ok(result.into_iter().map(Into::into).collect())
    }
}
