//! WebUrl - A syntactically valid, absolute bookmark URL

use std::fmt;

use url::Url;

use crate::domain::errors::InvalidUrl;

/// Schemes a bookmark may point at
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// An absolute URL with one of the [`ALLOWED_SCHEMES`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(Url);

impl WebUrl {
    /// Parse a candidate URL, checking format only (no network access)
    pub fn parse(raw: &str) -> Result<Self, InvalidUrl> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidUrl::Empty);
        }

        let url = Url::parse(trimmed).map_err(|e| {
            tracing::debug!("Rejected malformed URL {:?}: {}", raw, e);
            InvalidUrl::Malformed(e.to_string())
        })?;

        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(InvalidUrl::Malformed(format!(
                "unknown protocol: {}",
                url.scheme()
            )));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(WebUrl::parse(""), Err(InvalidUrl::Empty));
        assert_eq!(WebUrl::parse("   "), Err(InvalidUrl::Empty));
    }

    #[test]
    fn test_relative_is_malformed() {
        assert!(matches!(
            WebUrl::parse("not-a-url"),
            Err(InvalidUrl::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_scheme_is_malformed() {
        assert!(matches!(
            WebUrl::parse("mailto:someone@example.com"),
            Err(InvalidUrl::Malformed(_))
        ));
    }

    #[test]
    fn test_accepts_allowed_schemes() {
        for raw in [
            "http://example.com",
            "https://example.com/path?q=1",
            "ftp://files.example.com/pub",
        ] {
            let url = WebUrl::parse(raw).unwrap();
            assert!(ALLOWED_SCHEMES.contains(&url.scheme()));
        }
    }
}
