//! URL Validation Port
//!
//! Abstract interface for deciding whether a bookmark URL is
//! well-formed and currently reachable.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::InvalidUrl;

/// URL validation interface
///
/// Implementations perform at most one outbound request per call and
/// never retry: a single failed attempt rejects the URL.
///
/// # Example
///
/// ```rust,ignore
/// use bookmarks::ports::UrlValidator;
///
/// struct HttpUrlValidator { /* reqwest client */ }
///
/// #[async_trait]
/// impl UrlValidator for HttpUrlValidator {
///     async fn validate_url(&self, url: &str) -> Result<(), InvalidUrl> {
///         // Parse with WebUrl, then GET with a timeout
///     }
/// }
/// ```
#[async_trait]
pub trait UrlValidator: Send + Sync {
    /// Check format, then liveness
    ///
    /// # Errors
    /// * [`InvalidUrl::Empty`] for a blank string
    /// * [`InvalidUrl::Malformed`] when the string is not an absolute URL
    ///   with an allowed scheme
    /// * [`InvalidUrl::Status`] for a non-success HTTP response
    /// * [`InvalidUrl::Timeout`] when no response arrived in time
    /// * [`InvalidUrl::Unreachable`] for any other transport failure
    async fn validate_url(&self, url: &str) -> Result<(), InvalidUrl>;
}

/// Default User-Agent sent with liveness checks
pub const DEFAULT_USER_AGENT: &str = "Bookmark-Manager/1.0";

/// Default liveness timeout in seconds
pub const DEFAULT_URL_TIMEOUT_SECS: u64 = 10;

/// Configuration for URL liveness checks
#[derive(Debug, Clone)]
pub struct UrlValidatorConfig {
    /// Hard limit for one liveness request
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl UrlValidatorConfig {
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(secs),
            ..Self::default()
        }
    }
}

impl Default for UrlValidatorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_URL_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
