//! Site-specific scrapers
//!
//! Design: each site gets its own scraper that walks a hard-coded region
//! of that site's DOM. Scrapers declare their capabilities through two
//! narrow traits, [`ArticleScraper`] and [`LinkScraper`]; the factory
//! functions map a site identifier to a boxed implementation.

mod blocks;
mod go_doc;
mod guardian;
mod microsoft_learn;
mod tofugu;

pub use go_doc::GoDocScraper;
pub use guardian::GuardianScraper;
pub use microsoft_learn::MicrosoftLearnScraper;
pub use tofugu::TofuguScraper;

use crate::client::{fetch_page, FetchOptions};
use crate::error::ScrapeError;
use crate::types::{LinkMap, Source};
use async_trait::async_trait;
use scraper::Html;
use tracing::debug;
use url::Url;

/// Behaviour shared by every site scraper
pub trait SiteScraper: Send + Sync {
    /// Site identifier (for logging/debugging)
    fn source(&self) -> Source;

    /// Options used for the page fetch
    fn options(&self) -> &FetchOptions;
}

/// Scraper that converts an article page to Markdown
///
/// Implementors provide the pure DOM conversions; the provided `scrape_*`
/// methods fetch the page once and apply them.
#[async_trait]
pub trait ArticleScraper: SiteScraper {
    /// Render the article as Markdown
    ///
    /// Fragments are appended matcher by matcher, each matcher visiting
    /// its elements in document order.
    fn render_article(&self, document: &Html) -> String;

    /// Text of the last title element, trimmed; empty when there is none
    fn extract_title(&self, document: &Html) -> String;

    /// Derive a filename from the scraped title and the requested URL
    fn filename_for(&self, title: &str, url: &str) -> String;

    /// Scrape the article at `url` as Markdown
    async fn scrape_article(&self, url: &str) -> Result<String, ScrapeError> {
        let page = fetch_page(url, self.options()).await?;
        let markdown = self.render_article(&page.document());
        debug!(source = %self.source(), bytes = markdown.len(), "Rendered article");
        Ok(markdown)
    }

    /// Scrape the bare title of the article at `url`
    async fn scrape_title(&self, url: &str) -> Result<String, ScrapeError> {
        let page = fetch_page(url, self.options()).await?;
        Ok(self.extract_title(&page.document()))
    }

    /// Scrape the title of the article at `url` and derive a filename
    async fn scrape_filename(&self, url: &str) -> Result<String, ScrapeError> {
        let title = self.scrape_title(url).await?;
        Ok(self.filename_for(&title, url))
    }
}

/// Scraper that extracts an index of article links
#[async_trait]
pub trait LinkScraper: SiteScraper {
    /// Collect qualifying links, resolving hrefs against `base`
    fn extract_links(&self, document: &Html, base: &Url) -> LinkMap;

    /// Scrape the link index at `url`
    async fn scrape_links(&self, url: &str) -> Result<LinkMap, ScrapeError> {
        let page = fetch_page(url, self.options()).await?;
        let links = self.extract_links(&page.document(), &page.url);
        debug!(source = %self.source(), count = links.len(), "Extracted links");
        Ok(links)
    }
}

/// Create the article scraper for a site identifier
///
/// Identifiers are matched case-sensitively; anything else (including the
/// empty string) is rejected with [`ScrapeError::UnsupportedSource`].
pub fn create_article_scraper(
    source: &str,
    options: FetchOptions,
) -> Result<Box<dyn ArticleScraper>, ScrapeError> {
    let source: Source = source.parse()?;
    debug!(%source, "Using article scraper");

    let scraper: Box<dyn ArticleScraper> = match source {
        Source::Guardian => Box::new(GuardianScraper::new(options)),
        Source::Microsoft => Box::new(MicrosoftLearnScraper::new(options)),
        Source::Go => Box::new(GoDocScraper::new(options)),
        Source::Tofugu => Box::new(TofuguScraper::new(options)),
    };
    Ok(scraper)
}

/// Create the link scraper for a site identifier
///
/// Only sources whose [`Source::supports_links`] is true are accepted.
pub fn create_link_scraper(
    source: &str,
    options: FetchOptions,
) -> Result<Box<dyn LinkScraper>, ScrapeError> {
    let parsed: Source = source.parse()?;
    debug!(source = %parsed, "Using link scraper");

    match parsed {
        Source::Guardian => Ok(Box::new(GuardianScraper::new(options))),
        Source::Microsoft | Source::Go | Source::Tofugu => {
            Err(ScrapeError::UnsupportedSource(source.to_string()))
        }
    }
}
