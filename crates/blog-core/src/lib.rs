//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the blog model, its validation rules, the repository
//! port and the service that orchestrates them. It has no infrastructure
//! dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::BlogService;
