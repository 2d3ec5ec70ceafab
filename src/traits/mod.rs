//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for the external
//! collaborators the console depends on, enabling dependency injection,
//! mocking, and better testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`IdentityStore`] - Operator identity persistence
//! - [`MediaStore`] - Binary media upload/delete

pub mod http;
pub mod identity;
pub mod media;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use identity::{IdentityError, IdentityStore};
pub use media::{MediaAsset, MediaError, MediaStore, ProgressFn};
