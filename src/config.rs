//! Client configuration.
//!
//! Defines where the backend API lives and how requests are shaped.
//! The base URL comes from the environment in deployments and from the
//! builder in tests.

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "LMS_ADMIN_API_URL";

/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Configuration for the admin API client.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use lms_admin::config::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_base_url("https://api.example.com")
///     .with_timeout_secs(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("lms-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Create config from the environment.
    ///
    /// Reads `LMS_ADMIN_API_URL`, falling back to localhost for
    /// development.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Join the base URL with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
