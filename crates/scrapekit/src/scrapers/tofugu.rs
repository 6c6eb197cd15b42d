//! Tofugu scraper
//!
//! Tofugu articles put the body in `article div.main`. Besides headings and
//! paragraphs the body uses tables of contents (nested `ul`), example
//! sentence pairs (`ul.example-sentence`), numbered steps, tables and
//! block quotes.

use crate::client::FetchOptions;
use crate::dom::{
    child_elements, children_named, descendants_named, element_text, find_all, has_ancestor,
    has_class, is_tag,
};
use crate::scrapers::{ArticleScraper, SiteScraper};
use crate::text::{
    basename_from_url, blockquote_text, remove_extra_spaces, sanitize_filename, table_cell_text,
    trim_spaces_and_line_breaks, FALLBACK_BASENAME,
};
use crate::types::Source;
use scraper::{ElementRef, Html};

/// Scraper for www.tofugu.com
#[derive(Debug, Clone, Default)]
pub struct TofuguScraper {
    options: FetchOptions,
}

impl TofuguScraper {
    /// Create a new Tofugu scraper
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

fn is_article_title(element: ElementRef<'_>) -> bool {
    is_tag(element, "h1") && has_class(element, "article-title")
}

fn is_meta_list(element: ElementRef<'_>) -> bool {
    is_tag(element, "ul")
        && has_class(element, "meta")
        && has_ancestor(element, |el| {
            is_tag(el, "div") && has_class(el, "article-header-elements")
        })
}

fn is_main_body(element: ElementRef<'_>) -> bool {
    is_tag(element, "div")
        && has_class(element, "main")
        && has_ancestor(element, |el| is_tag(el, "article"))
}

fn heading(level: usize, element: ElementRef<'_>) -> String {
    format!(
        "{} {}\n\n",
        "#".repeat(level),
        remove_extra_spaces(&element_text(element))
    )
}

/// Label of a table-of-contents entry: the first non-blank line of its text
fn list_item_label(item: ElementRef<'_>) -> String {
    element_text(item)
        .lines()
        .map(trim_spaces_and_line_breaks)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn table_of_contents_items(list: ElementRef<'_>, level: usize, markdown: &mut String) {
    for item in children_named(list, "li") {
        markdown.push_str(&"  ".repeat(level));
        markdown.push_str("* ");
        markdown.push_str(&list_item_label(item));
        markdown.push('\n');

        for nested in children_named(item, "ul") {
            table_of_contents_items(nested, level + 1, markdown);
        }
    }
}

/// Bulleted outline, indenting nested lists by two spaces per level
fn table_of_contents(list: ElementRef<'_>) -> String {
    let mut markdown = String::new();
    table_of_contents_items(list, 0, &mut markdown);
    markdown.push('\n');
    markdown
}

/// Japanese sentence followed by its English translation
fn example_sentence(list: ElementRef<'_>) -> String {
    let mut markdown = String::from("Example\n\n");
    for (index, item) in children_named(list, "li").enumerate() {
        match index {
            0 => markdown.push_str("- Japanese:\n"),
            1 => markdown.push_str("- English:\n"),
            _ => {}
        }
        markdown.push_str(&format!(
            "  * {}\n\n",
            trim_spaces_and_line_breaks(&element_text(item))
        ));
    }
    markdown.push('\n');
    markdown
}

fn ordered_list(list: ElementRef<'_>) -> String {
    let mut markdown = String::new();
    for (index, item) in children_named(list, "li").enumerate() {
        markdown.push_str(&format!(
            "{}. {}\n",
            index + 1,
            trim_spaces_and_line_breaks(&element_text(item))
        ));
    }
    markdown.push('\n');
    markdown
}

fn cells(row: ElementRef<'_>, markdown: &mut String, tag: &str) {
    for cell in children_named(row, tag) {
        markdown.push_str("| ");
        markdown.push_str(&table_cell_text(&element_text(cell)));
        markdown.push(' ');
    }
}

/// Markdown table; a table without header cells gets a blank header row
fn table(table: ElementRef<'_>) -> String {
    let mut markdown = String::new();

    for (row_index, row) in descendants_named(table, "tr").enumerate() {
        let header_count = children_named(row, "th").count();
        let data_count = children_named(row, "td").count();

        cells(row, &mut markdown, "th");
        if row_index == 0 {
            if header_count > 0 {
                markdown.push_str("|\n");
                markdown.push_str(&"| --- ".repeat(header_count));
            } else {
                markdown.push_str(&"| ".repeat(data_count));
                markdown.push_str("|\n");
                markdown.push_str(&"|---".repeat(data_count));
                markdown.push_str("|\n");
            }
        }
        cells(row, &mut markdown, "td");
        markdown.push_str("|\n");
    }

    markdown.push('\n');
    markdown
}

/// Render one direct child of the article body; unknown tags render nothing
fn render_block(child: ElementRef<'_>) -> Option<String> {
    match child.value().name() {
        "h2" => Some(heading(2, child)),
        "h3" => Some(heading(3, child)),
        "h4" => Some(heading(4, child)),
        "h5" => Some(heading(5, child)),
        "p" => Some(format!("{}\n\n", remove_extra_spaces(&element_text(child)))),
        "ul" if has_class(child, "example-sentence") => Some(example_sentence(child)),
        "ul" => Some(table_of_contents(child)),
        "ol" => Some(ordered_list(child)),
        "table" => Some(table(child)),
        "blockquote" => Some(format!("> {}\n\n", blockquote_text(&element_text(child)))),
        _ => None,
    }
}

impl SiteScraper for TofuguScraper {
    fn source(&self) -> Source {
        Source::Tofugu
    }

    fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl ArticleScraper for TofuguScraper {
    fn render_article(&self, document: &Html) -> String {
        let mut markdown = String::new();

        for title in find_all(document, is_article_title) {
            markdown.push_str(&format!(
                "# {}\n\n",
                trim_spaces_and_line_breaks(&element_text(title))
            ));
        }

        for meta in find_all(document, is_meta_list) {
            markdown.push_str(&format!(
                "{}\n\n",
                trim_spaces_and_line_breaks(&element_text(meta))
            ));
        }

        for body in find_all(document, is_main_body) {
            for block in child_elements(body).filter_map(render_block) {
                markdown.push_str(&block);
            }
        }

        markdown
    }

    fn extract_title(&self, document: &Html) -> String {
        find_all(document, is_article_title)
            .last()
            .map(|h1| trim_spaces_and_line_breaks(&element_text(*h1)).to_string())
            .unwrap_or_default()
    }

    /// Allow-listed title characters, else the URL's last path segment
    fn filename_for(&self, title: &str, url: &str) -> String {
        let from_title = sanitize_filename(title);
        if !from_title.is_empty() {
            return from_title;
        }

        let from_url = sanitize_filename(&basename_from_url(url));
        if from_url.is_empty() {
            FALLBACK_BASENAME.to_string()
        } else {
            from_url
        }
    }
}
