//! In-memory blog repository - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRecord, BlogRepository};

/// In-memory blog store keyed by id.
///
/// Ids come from a monotonic counter and are never reused, even after a
/// delete. Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<BTreeMap<i64, BlogRecord>>,
    next_id: AtomicI64,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogRecord, i64> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogRecord>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, mut entity: BlogRecord) -> Result<BlogRecord, RepoError> {
        let mut store = self.store.write().await;

        match entity.id {
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                entity.id = Some(id);
                store.insert(id, entity.clone());
            }
            Some(id) => {
                let existing = store.get_mut(&id).ok_or(RepoError::NotFound)?;
                // created_date is write-once
                entity.created_date = existing.created_date;
                *existing = entity.clone();
            }
        }

        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<BlogRecord>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}
