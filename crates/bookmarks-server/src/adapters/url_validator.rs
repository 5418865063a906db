//! HTTP URL Validator
//!
//! Checks bookmark URLs for liveness using reqwest.

use async_trait::async_trait;
use reqwest::{redirect, Client};

use bookmarks::{InvalidUrl, UrlValidator, UrlValidatorConfig, WebUrl};

/// HTTP implementation of UrlValidator
pub struct HttpUrlValidator {
    client: Client,
    config: UrlValidatorConfig,
}

impl HttpUrlValidator {
    pub fn new(config: UrlValidatorConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            // One request per check; a redirect answer already proves the host is live
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl UrlValidator for HttpUrlValidator {
    async fn validate_url(&self, url: &str) -> Result<(), InvalidUrl> {
        tracing::debug!("Validating URL: {}", url);

        let url = WebUrl::parse(url)?;

        if !matches!(url.scheme(), "http" | "https") {
            tracing::warn!("No liveness check available for {}", url);
            return Err(InvalidUrl::Unreachable(format!(
                "unsupported scheme for liveness check: {}",
                url.scheme()
            )));
        }

        // The body is never read; dropping the response closes the stream
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("URL validation failed for {}: {}", url, e);
                if e.is_timeout() {
                    InvalidUrl::Timeout(self.config.timeout)
                } else {
                    InvalidUrl::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            tracing::warn!("URL validation failed for {}: HTTP {}", url, status);
            return Err(InvalidUrl::Status(status.as_u16()));
        }

        tracing::debug!("URL validation successful for: {}", url);
        Ok(())
    }
}
