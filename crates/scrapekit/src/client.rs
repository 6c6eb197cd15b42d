//! HTTP client for scrapekit
//!
//! Every scrape performs exactly one GET through [`fetch_page`]. There are
//! no retries; any failure to obtain the page is reported as a
//! [`ScrapeError`].

use crate::error::ScrapeError;
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use scraper::Html;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetch options shared by every scraper
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Total request timeout (client default when unset)
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fetched HTML page
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects, used to resolve relative links
    pub url: Url,
    /// Response body
    pub body: String,
}

impl Page {
    /// Parse the body into a DOM tree
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Parse and validate a page URL
pub fn parse_page_url(url: &str) -> Result<Url, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::MissingUrl);
    }

    let parsed = Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ScrapeError::InvalidUrl(url.to_string())),
    }
}

/// Fetch a page with a single GET request
///
/// Non-success HTTP statuses are treated the same as transport failures.
pub async fn fetch_page(url: &str, options: &FetchOptions) -> Result<Page, ScrapeError> {
    let parsed = parse_page_url(url)?;

    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html, application/xhtml+xml, */*;q=0.8"),
    );

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(ScrapeError::ClientBuild)?;

    debug!(url = %parsed, "Fetching page");

    let response = client
        .get(parsed.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| ScrapeError::fetch_failed(url, e))?;

    let status = response.status().as_u16();
    let final_url = response.url().clone();
    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::fetch_failed(url, e))?;

    debug!(url = %final_url, status, bytes = body.len(), "Fetched page");

    Ok(Page {
        url: final_url,
        body,
    })
}
