//! Identity store trait abstraction.
//!
//! The console remembers the logged-in operator across restarts through a
//! simple key-value persistence: read once at startup, written on login,
//! cleared on logout. This trait abstracts that storage so tests can swap
//! in an in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::session::Operator;

/// Identity storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Failed to load the stored identity
    #[error("Failed to load identity: {0}")]
    LoadFailed(String),
    /// Failed to save the identity
    #[error("Failed to save identity: {0}")]
    SaveFailed(String),
    /// Failed to clear the identity
    #[error("Failed to clear identity: {0}")]
    ClearFailed(String),
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Other error
    #[error("Identity error: {0}")]
    Other(String),
}

/// Trait for operator identity storage and retrieval.
///
/// Implementations include the production file-based store and an
/// in-memory mock for tests.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Load the stored operator identity, if any.
    async fn load(&self) -> Result<Option<Operator>, IdentityError>;

    /// Persist the operator identity.
    async fn save(&self, operator: &Operator) -> Result<(), IdentityError>;

    /// Remove any stored identity.
    async fn clear(&self) -> Result<(), IdentityError>;
}
