//! Application services - orchestrate ports on behalf of the HTTP layer.

mod blog;

pub use blog::BlogService;
