use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Blog, BlogInput};
use crate::error::{DomainError, RepoError};
use crate::ports::{BlogRecord, BlogRepository};

/// Blog use cases: existence checks, validation and record translation.
///
/// Each operation performs at most one read followed by at most one write.
/// Concurrent updates of the same blog are last-write-wins.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo
            .find_all()
            .await?
            .into_iter()
            .map(Blog::try_from)
            .collect()
    }

    pub async fn get_blog(&self, id: i64) -> Result<Blog, DomainError> {
        self.find_existing(id).await?.try_into()
    }

    /// Validate and insert a new blog. The store assigns the id; both
    /// timestamps are set to the same instant.
    pub async fn create_blog(&self, input: BlogInput) -> Result<Blog, DomainError> {
        input.validate()?;

        let record = BlogRecord::new(input.title, input.content, Utc::now());
        self.repo.save(record).await?.try_into()
    }

    /// Replace title and content of an existing blog.
    ///
    /// `created_at` and `id` are kept; `updated_at` moves to now, or stays put
    /// if the clock went backwards.
    pub async fn update_blog(&self, id: i64, input: BlogInput) -> Result<Blog, DomainError> {
        input.validate()?;

        let mut record = self.find_existing(id).await?;
        record.title = input.title;
        record.content = input.content;
        record.last_modified_date = Utc::now().max(record.last_modified_date);

        self.repo
            .save(record)
            .await
            .map_err(|e| not_found_or_internal(e, id))?
            .try_into()
    }

    pub async fn delete_blog(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| not_found_or_internal(e, id))
    }

    async fn find_existing(&self, id: i64) -> Result<BlogRecord, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::blog_not_found(id))
    }
}

/// The store reports an absent row as `RepoError::NotFound`; every other
/// storage failure stays internal.
fn not_found_or_internal(err: RepoError, id: i64) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::blog_not_found(id),
        other => other.into(),
    }
}
