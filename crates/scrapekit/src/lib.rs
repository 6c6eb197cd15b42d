//! scrapekit - site-specific article scraping
//!
//! This crate fetches pages from a small set of known websites and turns
//! their article markup into Markdown, extracts bare titles and derived
//! filenames, or collects an index of article links.
//!
//! ## Scraper System
//!
//! Each site has a dedicated scraper that walks a hard-coded region of the
//! site's DOM. Capabilities are split into two traits:
//! - [`ArticleScraper`] - article Markdown, title and filename
//! - [`LinkScraper`] - link label to absolute URL index
//!
//! Use [`create_article_scraper`] or [`create_link_scraper`] to pick a
//! scraper from a site identifier such as `"guardian"` or `"go"`.

pub mod client;
pub mod dom;
mod error;
pub mod scrapers;
pub mod text;
mod types;

pub use client::{fetch_page, FetchOptions, Page};
pub use error::ScrapeError;
pub use scrapers::{
    create_article_scraper, create_link_scraper, ArticleScraper, GoDocScraper, GuardianScraper,
    LinkScraper, MicrosoftLearnScraper, SiteScraper, TofuguScraper,
};
pub use types::{LinkMap, Source};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = concat!("scrapekit/", env!("CARGO_PKG_VERSION"));
