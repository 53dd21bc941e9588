//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::{CONTENT_MAX_LEN, TITLE_MAX_LEN, check_text};
use serde::{Deserialize, Serialize};

/// Body of `POST /blogs` and `PUT /blogs/{id}`.
///
/// Both fields are optional on the wire so that a missing or `null` field is
/// reported by [`BlogRequest::validate`] instead of failing deserialization.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Field constraints: present, not blank, and within the size bounds.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            check("title", self.title.as_deref(), TITLE_MAX_LEN),
            check("content", self.content.as_deref(), CONTENT_MAX_LEN),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Presence is a wire concern; the text rule itself is the domain's.
fn check(field: &str, value: Option<&str>, max_len: usize) -> Option<String> {
    match value {
        None => Some(format!("{field} is required")),
        Some(v) => check_text(field, v, max_len).err(),
    }
}

/// A blog as returned to clients. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_date: i64,
    pub last_modified_date: i64,
}
