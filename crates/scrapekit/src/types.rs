//! Core types for scrapekit

use crate::error::ScrapeError;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Visible link label mapped to its absolute URL
///
/// A label seen twice keeps the URL of the last anchor.
pub type LinkMap = BTreeMap<String, String>;

/// Websites with a dedicated scraper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The Guardian (articles and front-page links)
    Guardian,
    /// Microsoft Learn
    Microsoft,
    /// go.dev documentation
    Go,
    /// Tofugu
    Tofugu,
}

impl Source {
    /// Every supported source, in CLI help order
    pub const ALL: [Source; 4] = [
        Source::Guardian,
        Source::Microsoft,
        Source::Go,
        Source::Tofugu,
    ];

    /// Identifier used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Guardian => "guardian",
            Source::Microsoft => "microsoft",
            Source::Go => "go",
            Source::Tofugu => "tofugu",
        }
    }

    /// Whether the source can produce a link index
    pub fn supports_links(&self) -> bool {
        matches!(self, Source::Guardian)
    }
}

impl FromStr for Source {
    type Err = ScrapeError;

    // Case-sensitive: "Guardian" is not a source.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ScrapeError::UnsupportedSource(s.to_string()))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!(Source::from_str("guardian").unwrap(), Source::Guardian);
        assert_eq!(Source::from_str("microsoft").unwrap(), Source::Microsoft);
        assert_eq!(Source::from_str("go").unwrap(), Source::Go);
        assert_eq!(Source::from_str("tofugu").unwrap(), Source::Tofugu);
    }

    #[test]
    fn test_source_from_str_is_case_sensitive() {
        assert!(Source::from_str("Guardian").is_err());
        assert!(Source::from_str("GO").is_err());
        assert!(Source::from_str(" go").is_err());
    }

    #[test]
    fn test_source_from_str_error_names_identifier() {
        let err = Source::from_str("bbc").unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedSource(ref s) if s == "bbc"));
        assert_eq!(err.to_string(), "source bbc is not supported");

        assert!(Source::from_str("").is_err());
    }

    #[test]
    fn test_source_display_round_trips() {
        for source in Source::ALL {
            assert_eq!(Source::from_str(&source.to_string()).unwrap(), source);
        }
    }

    #[test]
    fn test_supports_links() {
        assert!(Source::Guardian.supports_links());
        assert!(!Source::Microsoft.supports_links());
        assert!(!Source::Go.supports_links());
        assert!(!Source::Tofugu.supports_links());
    }
}
