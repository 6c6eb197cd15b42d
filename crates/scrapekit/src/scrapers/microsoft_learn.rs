//! Microsoft Learn scraper

use crate::client::FetchOptions;
use crate::dom::{child_elements, element_text, find_all, has_class, is_tag, InlineStyle};
use crate::scrapers::blocks::{self, NOTE_CLASS};
use crate::scrapers::{ArticleScraper, SiteScraper};
use crate::text::{filename_from_title, trim_spaces_and_line_breaks};
use crate::types::Source;
use scraper::{ElementRef, Html};

/// Inline images on Microsoft Learn are wrapped in `span`s
const INLINE_STYLE: InlineStyle = InlineStyle {
    image_tag: "span",
    skip_empty: false,
    expand_nested_lists: false,
};

/// Scraper for learn.microsoft.com
#[derive(Debug, Clone, Default)]
pub struct MicrosoftLearnScraper {
    options: FetchOptions,
}

impl MicrosoftLearnScraper {
    /// Create a new Microsoft Learn scraper
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

/// Render one direct child of `div.content`; unknown tags render nothing
fn render_block(child: ElementRef<'_>) -> Option<String> {
    match child.value().name() {
        "p" => Some(blocks::paragraph(child, &INLINE_STYLE)),
        "ul" => Some(blocks::bullet_list(child, &INLINE_STYLE)),
        "div" if has_class(child, NOTE_CLASS) => Some(blocks::note(child, &INLINE_STYLE)),
        "h2" => Some(blocks::heading(2, child)),
        "h3" => Some(blocks::heading(3, child)),
        _ => None,
    }
}

impl SiteScraper for MicrosoftLearnScraper {
    fn source(&self) -> Source {
        Source::Microsoft
    }

    fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl ArticleScraper for MicrosoftLearnScraper {
    fn render_article(&self, document: &Html) -> String {
        let mut markdown = String::new();

        for heading in find_all(document, |el| is_tag(el, "h1")) {
            markdown.push_str(&blocks::heading(1, heading));
        }

        for content in find_all(document, |el| is_tag(el, "div") && has_class(el, "content")) {
            for block in child_elements(content).filter_map(render_block) {
                markdown.push_str(&block);
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn render(body: &str) -> String {
        let html = format!("<!DOCTYPE html><html><head><title>Test</title></head><body>{body}</body></html>");
        MicrosoftLearnScraper::default().render_article(&Html::parse_document(&html))
    }

    #[test]
    fn test_render_title() {
        assert_eq!(
            render(r#"<h1>Azure Overview</h1><div class="content"></div>"#),
            "# Azure Overview\n\n"
        );
    }

    #[test]
    fn test_render_headings_in_order() {
        let result = render(
            r#"<h1>Main</h1><div class="content"><h2>First</h2><h3>Sub</h3><h2>Second</h2></div>"#,
        );
        assert_eq!(result, "# Main\n\n## First\n\n### Sub\n\n## Second\n\n");
    }

    #[test]
    fn test_render_image_span() {
        let result = render(r#"<h1>T</h1><div class="content"><p><span class="icon">icon</span> Select it</p></div>"#);
        assert!(result.contains("_image_ Select it\n\n"), "got: {result:?}");
    }

    #[test]
    fn test_render_paragraph_with_bold() {
        let result = render(r#"<div class="content"><p>Open <b>Settings</b> now</p></div>"#);
        assert_eq!(result, "Open **Settings** now\n\n");
    }

    #[test]
    fn test_render_unordered_list() {
        let result = render(r#"<div class="content"><ul><li>One</li><li>Two</li><li>Three</li></ul></div>"#);
        assert_eq!(result, "* One\n* Two\n* Three\n\n");
    }

    #[test]
    fn test_render_note_skips_alert() {
        let result = render(
            r#"<div class="content"><div class="NOTE"><p class="alert">Note</p><p>Keep this</p></div></div>"#,
        );
        assert_eq!(result, "> Keep this\n\n\n");
        assert_eq!(result.matches("> ").count(), 1);
    }

    #[test]
    fn test_render_ignores_other_divs() {
        let result = render(r#"<div class="content"><div class="other"><p>Hidden</p></div></div>"#);
        assert_eq!(result, "");
    }

    #[test]
    fn test_render_without_content_div() {
        let result = render("<h1>Only Title</h1><p>Stray paragraph</p>");
        assert_eq!(result, "# Only Title\n\n");
    }

    #[test]
    fn test_render_no_h1() {
        let result = render(r#"<div class="content"><p>Body</p></div>"#);
        assert!(!result.contains("# "));
        assert_eq!(result, "Body\n\n");
    }

    #[test]
    fn test_render_multiple_h1() {
        let result = render("<h1>One</h1><h1>Two</h1>");
        assert_eq!(result, "# One\n\n# Two\n\n");
    }

    #[test]
    fn test_extract_title_trims() {
        let doc = Html::parse_document("<h1>\n   Quickstart: Create a VM  \n</h1>");
        assert_eq!(
            MicrosoftLearnScraper::default().extract_title(&doc),
            "Quickstart: Create a VM"
        );
    }

    #[test]
    fn test_filename_for() {
        assert_eq!(
            MicrosoftLearnScraper::default().filename_for("Quickstart: Create a VM", ""),
            "quickstart:_create_a_vm"
        );
    }
}
