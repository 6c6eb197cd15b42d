//! Error types for scrapekit

use thiserror::Error;

/// Errors that can occur while fetching or scraping a page
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// URL is missing
    #[error("url is required")]
    MissingUrl,

    /// URL could not be parsed or does not use http/https
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Site identifier outside the supported set
    #[error("source {0} is not supported")]
    UnsupportedSource(String),

    /// Failed to build HTTP client
    #[error("failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Page retrieval failed (transport error or non-success status)
    #[error("failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ScrapeError {
    /// Wrap a reqwest error raised while fetching `url`
    pub fn fetch_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        ScrapeError::FetchFailed {
            url: url.into(),
            source,
        }
    }

    /// True for errors raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScrapeError::MissingUrl | ScrapeError::InvalidUrl(_) | ScrapeError::UnsupportedSource(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ScrapeError::MissingUrl.to_string(), "url is required");
        assert_eq!(
            ScrapeError::InvalidUrl("ftp://example.com".to_string()).to_string(),
            "invalid url: ftp://example.com"
        );
        assert_eq!(
            ScrapeError::UnsupportedSource("unsupported".to_string()).to_string(),
            "source unsupported is not supported"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ScrapeError::MissingUrl.is_validation());
        assert!(ScrapeError::InvalidUrl(String::new()).is_validation());
        assert!(ScrapeError::UnsupportedSource(String::new()).is_validation());
    }
}
