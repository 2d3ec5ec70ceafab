//! Action error types.
//!
//! Errors surfaced when an operator action (approve, reject, delete, edit)
//! cannot be dispatched or fails remotely. Validation and conflict errors
//! are caught locally before any network call is made.

use std::fmt;

use super::GatewayError;

/// Errors returned by [`ViewController::perform_action`].
///
/// [`ViewController::perform_action`]: crate::controller::ViewController::perform_action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A client-side required-field check failed; no call was made.
    Validation { field: String, message: String },

    /// A mutation for the same record id is already in flight; no call
    /// was made.
    Conflict { id: String },

    /// The gateway call was dispatched and failed.
    Gateway(GatewayError),
}

impl ActionError {
    /// True when the action never reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ActionError::Validation { .. } | ActionError::Conflict { .. }
        )
    }

    /// Get an operator-facing message.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Validation { message, .. } => message.clone(),
            ActionError::Conflict { .. } => {
                "This record already has an action in progress.".to_string()
            }
            ActionError::Gateway(err) => err.user_message(),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Validation { field, message } => {
                write!(f, "Validation failed for '{}': {}", field, message)
            }
            ActionError::Conflict { id } => {
                write!(f, "Action already pending for record '{}'", id)
            }
            ActionError::Gateway(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GatewayError> for ActionError {
    fn from(err: GatewayError) -> Self {
        ActionError::Gateway(err)
    }
}
