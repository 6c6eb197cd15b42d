//! go.dev documentation scraper

use crate::client::FetchOptions;
use crate::dom::{
    child_elements, descendants_named, element_text, find_all, has_class, is_tag, InlineStyle,
};
use crate::scrapers::blocks::{self, NOTE_CLASS};
use crate::scrapers::{ArticleScraper, SiteScraper};
use crate::text::{filename_from_title, trim_spaces_and_line_breaks};
use crate::types::Source;
use scraper::{ElementRef, Html};

const INLINE_STYLE: InlineStyle = InlineStyle {
    image_tag: "img",
    skip_empty: true,
    expand_nested_lists: true,
};

/// Scraper for go.dev documentation pages
#[derive(Debug, Clone, Default)]
pub struct GoDocScraper {
    options: FetchOptions,
}

impl GoDocScraper {
    /// Create a new Go documentation scraper
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

/// Fenced block holding the text of every `code` inside `pre`
fn code_block(pre: ElementRef<'_>) -> String {
    let mut markdown = String::from("```\n");
    for code in descendants_named(pre, "code") {
        let text = element_text(code);
        markdown.push_str(text.trim_end_matches('\n'));
        markdown.push('\n');
    }
    markdown.push_str("```\n\n");
    markdown
}

/// Render one direct child of `article`; unknown tags render nothing
fn render_block(child: ElementRef<'_>) -> Option<String> {
    match child.value().name() {
        "h2" => Some(blocks::heading(2, child)),
        "h3" => Some(blocks::heading(3, child)),
        "p" => Some(blocks::paragraph(child, &INLINE_STYLE)),
        "ul" => Some(blocks::bullet_list(child, &INLINE_STYLE)),
        "div" if has_class(child, NOTE_CLASS) => Some(blocks::note(child, &INLINE_STYLE)),
        "pre" => Some(code_block(child)),
        _ => None,
    }
}

impl SiteScraper for GoDocScraper {
    fn source(&self) -> Source {
        Source::Go
    }

    fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl ArticleScraper for GoDocScraper {
    fn render_article(&self, document: &Html) -> String {
        let mut markdown = String::new();

        for heading in find_all(document, |el| is_tag(el, "h1")) {
            markdown.push_str(&blocks::heading(1, heading));
        }

        for article in find_all(document, |el| is_tag(el, "article")) {
            for block in child_elements(article).filter_map(render_block) {
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
