use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::ports::BlogRecord;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum content length, in characters.
pub const CONTENT_MAX_LEN: usize = 10_000;

/// Blog entity - a blog post that has been persisted at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRecord> for Blog {
    type Error = DomainError;

    fn try_from(record: BlogRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .ok_or_else(|| DomainError::Internal("blog record has no id".to_string()))?;

        Ok(Self {
            id,
            title: record.title,
            content: record.content,
            created_at: record.created_date,
            updated_at: record.last_modified_date,
        })
    }
}

/// Caller-supplied fields of a blog, used by both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogInput {
    pub title: String,
    pub content: String,
}

impl BlogInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check every field constraint, reporting all violations at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let errors: Vec<String> = [
            check_text("title", &self.title, TITLE_MAX_LEN),
            check_text("content", &self.content, CONTENT_MAX_LEN),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

/// A required text field must contain something other than whitespace and
/// hold at most `max_len` characters.
pub fn check_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be blank"));
    }

    if value.chars().count() > max_len {
        return Err(format!("{field} size must be between 1 and {max_len}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_at_bounds() {
        let input = BlogInput::new("t".repeat(TITLE_MAX_LEN), "c".repeat(CONTENT_MAX_LEN));
        assert!(input.validate().is_ok());

        let input = BlogInput::new("T", "C");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_blank_and_oversized_fields_are_rejected() {
        let long_title = "t".repeat(TITLE_MAX_LEN + 1);
        for title in ["", " ", "\t\n", long_title.as_str()] {
            let err = BlogInput::new(title, "Content").validate().unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref e) if e.len() == 1));
        }

        let long_content = "c".repeat(CONTENT_MAX_LEN + 1);
        for content in ["", "   ", long_content.as_str()] {
            let err = BlogInput::new("Title", content).validate().unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref e) if e.len() == 1));
        }
    }

    #[test]
    fn test_all_violations_reported() {
        let err = BlogInput::new("", "").validate().unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].starts_with("title"));
                assert!(errors[1].starts_with("content"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_LEN);
        assert!(title.len() > TITLE_MAX_LEN);
        assert!(check_text("title", &title, TITLE_MAX_LEN).is_ok());
    }

    #[test]
    fn test_record_without_id_is_internal_error() {
        let record = BlogRecord::new("Title".into(), "Content".into(), Utc::now());
        assert!(matches!(
            Blog::try_from(record),
            Err(DomainError::Internal(_))
        ));
    }
}
