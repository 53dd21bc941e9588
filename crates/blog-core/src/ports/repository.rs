use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::RepoError;

/// Storage-shaped blog row.
///
/// `id` is `None` until the record has been inserted; `save` uses that to
/// choose between insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRecord {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl BlogRecord {
    /// A record that has not been persisted yet, stamped with `now`.
    pub fn new(title: String, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title,
            content,
            created_date: now,
            last_modified_date: now,
        }
    }
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<BlogRecord, i64> {
    /// All blogs in ascending id order. An empty store yields an empty vector.
    async fn find_all(&self) -> Result<Vec<BlogRecord>, RepoError>;
}
