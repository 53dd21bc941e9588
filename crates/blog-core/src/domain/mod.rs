//! Domain entities - the core business objects.

mod blog;

pub use blog::{Blog, BlogInput, CONTENT_MAX_LEN, TITLE_MAX_LEN, check_text};
