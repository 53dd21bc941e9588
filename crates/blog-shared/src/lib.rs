//! # Blog Shared
//!
//! Wire types exchanged with HTTP clients: request/response DTOs and the
//! uniform error body.

pub mod dto;
pub mod response;

pub use dto::{BlogRequest, BlogResponse};
pub use response::ErrorResponse;
