//! Gateway error types.
//!
//! Errors produced while talking to the backend REST API: transport
//! failures, non-2xx responses, and undecodable bodies.

use std::fmt;

use crate::traits::HttpError;

/// Errors returned by gateway operations.
///
/// Transport and HTTP failures are normalized into this taxonomy at the
/// gateway boundary; callers never see `reqwest` errors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No response reached the server (connection refused, DNS, etc.).
    Network { message: String },

    /// The request timed out in transit.
    Timeout { operation: String },

    /// The server answered with a non-2xx status.
    Server { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    Decode { message: String },

    /// The resource has no endpoint for the requested operation.
    Unsupported { operation: String },
}

impl GatewayError {
    /// Check if re-triggering the same call could plausibly succeed.
    ///
    /// The gateway never retries on its own; this only informs the UI
    /// whether a "try again" affordance makes sense.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network { .. } => true,
            GatewayError::Timeout { .. } => true,
            GatewayError::Server { status, .. } => *status >= 500 || *status == 429,
            GatewayError::Decode { .. } => false,
            GatewayError::Unsupported { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Network { .. } => "E_GW_NET",
            GatewayError::Timeout { .. } => "E_GW_TIMEOUT",
            GatewayError::Server { .. } => "E_GW_SERVER",
            GatewayError::Decode { .. } => "E_GW_DECODE",
            GatewayError::Unsupported { .. } => "E_GW_UNSUPPORTED",
        }
    }

    /// Get an operator-facing message for the notification area.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network { .. } => {
                "Unable to reach the server. Please check your connection and try again."
                    .to_string()
            }
            GatewayError::Timeout { operation } => {
                format!("The {} request timed out. The server may be slow.", operation)
            }
            GatewayError::Server { status, message } => match *status {
                401 => "Session expired. Please sign in again.".to_string(),
                403 => "You don't have permission for this action.".to_string(),
                404 => "The record no longer exists on the server.".to_string(),
                _ if message.is_empty() => {
                    format!("The server returned an error (HTTP {}).", status)
                }
                _ => message.clone(),
            },
            GatewayError::Decode { .. } => {
                "The server returned an unexpected response.".to_string()
            }
            GatewayError::Unsupported { operation } => {
                format!("This record type does not support '{}'.", operation)
            }
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network { message } => write!(f, "Network error: {}", message),
            GatewayError::Timeout { operation } => write!(f, "{} timed out", operation),
            GatewayError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            GatewayError::Decode { message } => write!(f, "Decode error: {}", message),
            GatewayError::Unsupported { operation } => {
                write!(f, "Unsupported operation '{}'", operation)
            }
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => GatewayError::Network { message },
            HttpError::Timeout(operation) => GatewayError::Timeout { operation },
            HttpError::InvalidUrl(message) => GatewayError::Network { message },
            HttpError::Other(message) => GatewayError::Network { message },
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_retryable_only_above_500() {
        let err = GatewayError::Server {
            status: 503,
            message: String::new(),
        };
        assert!(err.is_retryable());

        let err = GatewayError::Server {
            status: 404,
            message: String::new(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_decode_errors_are_not_retryable() {
        let err = GatewayError::Decode {
            message: "bad json".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), "E_GW_DECODE");
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = GatewayError::Server {
            status: 422,
            message: "Reason is required".to_string(),
        };
        assert_eq!(err.user_message(), "Reason is required");
    }
}
