//! Operator session.
//!
//! The original console kept the signed-in user in an ambient global
//! context. Here the session is an explicit object constructed once at
//! startup and passed by `Arc` to every gateway and controller. Lifecycle:
//! restore from the identity store on startup, save on login, clear on
//! logout.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::traits::{Headers, IdentityError, IdentityStore};

/// The signed-in operator as persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operator {
    /// Backend user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role string as the backend reports it (e.g. `admin`).
    pub role: String,
    /// Bearer token for API calls, when the backend issues one.
    #[serde(default)]
    pub token: Option<String>,
}

impl Operator {
    /// Check whether this operator may use the admin console.
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Shared operator session.
///
/// Cheap to clone via [`Arc`]; all clones observe the same login state.
pub struct Session {
    operator: RwLock<Option<Operator>>,
    store: Arc<dyn IdentityStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session backed by the given identity store. The session
    /// starts signed out; call [`Session::restore`] to pick up a
    /// persisted identity.
    pub fn new(store: Arc<dyn IdentityStore>) -> Arc<Self> {
        Arc::new(Self {
            operator: RwLock::new(None),
            store,
        })
    }

    /// Load a persisted operator identity, if one exists.
    ///
    /// Called once at startup. Returns whether an identity was restored.
    pub async fn restore(&self) -> Result<bool, IdentityError> {
        let operator = self.store.load().await?;
        let restored = operator.is_some();
        *self.operator.write().unwrap() = operator;
        Ok(restored)
    }

    /// Sign in and persist the identity.
    pub async fn login(&self, operator: Operator) -> Result<(), IdentityError> {
        self.store.save(&operator).await?;
        *self.operator.write().unwrap() = Some(operator);
        Ok(())
    }

    /// Sign out and clear the persisted identity.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        self.store.clear().await?;
        *self.operator.write().unwrap() = None;
        Ok(())
    }

    /// Get a copy of the current operator, if signed in.
    pub fn operator(&self) -> Option<Operator> {
        self.operator.read().unwrap().clone()
    }

    /// Check whether an operator is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.operator.read().unwrap().is_some()
    }

    /// Headers every gateway call attaches.
    ///
    /// Includes a bearer token when the operator has one.
    pub fn auth_headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(operator) = self.operator.read().unwrap().as_ref() {
            if let Some(token) = &operator.token {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }
        headers
    }
}
