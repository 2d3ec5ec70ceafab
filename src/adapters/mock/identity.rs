//! In-memory identity store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::session::Operator;
use crate::traits::{IdentityError, IdentityStore};

/// Identity store backed by process memory; nothing touches disk.
#[derive(Debug, Clone, Default)]
pub struct MockIdentityStore {
    stored: Arc<Mutex<Option<Operator>>>,
}

impl MockIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with an operator.
    pub fn with_operator(operator: Operator) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(operator))),
        }
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
    async fn load(&self) -> Result<Option<Operator>, IdentityError> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, operator: &Operator) -> Result<(), IdentityError> {
        *self.stored.lock().unwrap() = Some(operator.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), IdentityError> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}
