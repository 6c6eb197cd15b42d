//! The Guardian scraper
//!
//! Articles: headline (`h1`), standfirst paragraphs as subtitles and the
//! paragraphs of the article body. Links: front-page cards in the first
//! container group.

use crate::client::FetchOptions;
use crate::dom::{attr, element_text, find_all, has_ancestor, has_class, is_tag};
use crate::scrapers::{ArticleScraper, LinkScraper, SiteScraper};
use crate::text::{filename_from_title, trim_spaces_and_line_breaks};
use crate::types::{LinkMap, Source};
use scraper::{ElementRef, Html};
use tracing::warn;
use url::Url;

/// Marker that `data-link-name` must contain for a card link to qualify
const LINK_GROUP_MARKER: &str = "group-0";

/// Scraper for www.theguardian.com
#[derive(Debug, Clone, Default)]
pub struct GuardianScraper {
    options: FetchOptions,
}

impl GuardianScraper {
    /// Create a new Guardian scraper
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

fn is_standfirst(element: ElementRef<'_>) -> bool {
    is_tag(element, "div") && attr(element, "data-gu-name") == Some("standfirst")
}

fn is_article_body(element: ElementRef<'_>) -> bool {
    is_tag(element, "div") && has_class(element, "article-body-commercial-selector")
}

fn paragraphs_within<'a>(
    document: &'a Html,
    container: fn(ElementRef<'_>) -> bool,
) -> Vec<ElementRef<'a>> {
    find_all(document, |el| is_tag(el, "p") && has_ancestor(el, container))
}

impl SiteScraper for GuardianScraper {
    fn source(&self) -> Source {
        Source::Guardian
    }

    fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl ArticleScraper for GuardianScraper {
    fn render_article(&self, document: &Html) -> String {
        let mut markdown = String::new();

        for heading in find_all(document, |el| is_tag(el, "h1")) {
            markdown.push_str(&format!("# {}\n\n", element_text(heading)));
        }

        for subtitle in paragraphs_within(document, is_standfirst) {
            markdown.push_str(&format!("## {}\n\n", element_text(subtitle)));
        }

        for paragraph in paragraphs_within(document, is_article_body) {
            markdown.push_str(&format!("{}\n\n", element_text(paragraph)));
        }

        markdown
    }

    fn extract_title(&self, document: &Html) -> String {
        find_all(document, |el| is_tag(el, "h1"))
            .last()
            .map(|h1| trim_spaces_and_line_breaks(&element_text(*h1)).to_string())
            .unwrap_or_default()
    }

    fn filename_for(&self, title: &str, _url: &str) -> String {
        filename_from_title(title)
    }
}

impl LinkScraper for GuardianScraper {
    fn extract_links(&self, document: &Html, base: &Url) -> LinkMap {
        let mut links = LinkMap::new();

        let anchors = find_all(document, |el| {
            is_tag(el, "a")
                && attr(el, "data-link-name").is_some_and(|name| name.contains(LINK_GROUP_MARKER))
        });

        for anchor in anchors {
            let Some(href) = attr(anchor, "href") else {
                continue;
            };
            let target = match base.join(href) {
                Ok(target) => target,
                Err(e) => {
                    warn!(href, error = %e, "Skipping link with unresolvable href");
                    continue;
                }
            };
            let label = match attr(anchor, "aria-label") {
                Some(label) => label.to_string(),
                None => trim_spaces_and_line_breaks(&element_text(anchor)).to_string(),
            };
            links.insert(label, target.to_string());
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(html: &str) -> String {
        GuardianScraper::default().render_article(&Html::parse_document(html))
    }

    fn links(html: &str) -> LinkMap {
        let base = Url::parse("https://www.theguardian.com/international").unwrap();
        GuardianScraper::default().extract_links(&Html::parse_document(html), &base)
    }

    #[test]
    fn test_render_title_only() {
        let html = "<html><body><h1>Breaking News: Important Event</h1></body></html>";
        assert_eq!(render(html), "# Breaking News: Important Event\n\n");
    }

    #[test]
    fn test_render_full_article_in_matcher_order() {
        let html = r#"<html><body>
            <div class="article-body-commercial-selector">
                <p>First body paragraph.</p>
                <p>Second body paragraph.</p>
            </div>
            <div data-gu-name="standfirst"><p>The standfirst</p></div>
            <h1>Main Headline</h1>
        </body></html>"#;

        assert_eq!(
            render(html),
            "# Main Headline\n\n## The standfirst\n\nFirst body paragraph.\n\nSecond body paragraph.\n\n"
        );
    }

    #[test]
    fn test_render_ignores_paragraphs_outside_body() {
        let html = r#"<html><body>
            <h1>Title</h1>
            <p>Sidebar text</p>
            <div class="article-body-commercial-selector"><p>Body</p></div>
        </body></html>"#;

        let result = render(html);
        assert!(!result.contains("Sidebar"));
        assert!(result.contains("Body\n\n"));
    }

    #[test]
    fn test_render_every_h1() {
        let html = "<html><body><h1>First</h1><h1>Second</h1></body></html>";
        assert_eq!(render(html), "# First\n\n# Second\n\n");
    }

    #[test]
    fn test_render_no_title() {
        let html = r#"<html><body><div class="article-body-commercial-selector"><p>Only body</p></div></body></html>"#;
        assert_eq!(render(html), "Only body\n\n");
    }

    #[test]
    fn test_extract_title_last_wins() {
        let doc = Html::parse_document("<h1>First</h1><h1>\n  Second Title \n</h1>");
        assert_eq!(GuardianScraper::default().extract_title(&doc), "Second Title");
    }

    #[test]
    fn test_extract_title_missing() {
        let doc = Html::parse_document("<p>No heading</p>");
        assert_eq!(GuardianScraper::default().extract_title(&doc), "");
    }

    #[test]
    fn test_filename_for() {
        let scraper = GuardianScraper::default();
        assert_eq!(
            scraper.filename_for("Heatwave Hits Europe", "https://www.theguardian.com/x"),
            "heatwave_hits_europe"
        );
    }

    #[test]
    fn test_extract_links_filters_group() {
        let html = r#"<html><body>
            <a data-link-name="group-0 | card-1" aria-label="Featured" href="/world/featured">F</a>
            <a data-link-name="group-0 | card-2" aria-label="Second" href="/world/second">S</a>
            <a data-link-name="group-1 | card-1" aria-label="Other" href="/world/other">O</a>
            <a aria-label="Plain" href="/plain">P</a>
        </body></html>"#;

        let result = links(html);
        assert_eq!(result.len(), 2);
        assert!(result.contains_key("Featured"));
        assert!(result.contains_key("Second"));
        assert!(!result.contains_key("Other"));
        assert!(!result.contains_key("Plain"));
    }

    #[test]
    fn test_extract_links_resolves_relative_href() {
        let html = r#"<a data-link-name="group-0 | card-1" aria-label="Article" href="/world/2024/x">Link</a>"#;
        let result = links(html);
        assert_eq!(
            result.get("Article").map(String::as_str),
            Some("https://www.theguardian.com/world/2024/x")
        );
    }

    #[test]
    fn test_extract_links_keeps_absolute_href() {
        let html = r#"<a data-link-name="group-0" aria-label="Elsewhere" href="https://example.com/a">x</a>"#;
        assert_eq!(
            links(html).get("Elsewhere").map(String::as_str),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn test_extract_links_last_label_wins() {
        let html = r#"
            <a data-link-name="group-0" aria-label="Same" href="/first">1</a>
            <a data-link-name="group-0" aria-label="Same" href="/second">2</a>"#;
        let result = links(html);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get("Same").map(String::as_str),
            Some("https://www.theguardian.com/second")
        );
    }

    #[test]
    fn test_extract_links_label_falls_back_to_text() {
        let html = r#"<a data-link-name="group-0" href="/a">  Visible text </a>"#;
        assert!(links(html).contains_key("Visible text"));
    }

    #[test]
    fn test_extract_links_skips_missing_href() {
        let html = r#"<a data-link-name="group-0" aria-label="No href">x</a>"#;
        assert!(links(html).is_empty());
    }

    #[test]
    fn test_extract_links_empty_page() {
        assert!(links("<p>No links here</p>").is_empty());
    }
}
