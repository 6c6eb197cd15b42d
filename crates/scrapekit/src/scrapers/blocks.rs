//! Markdown fragments shared by the documentation-style scrapers

use crate::dom::{children_named, element_text, has_class, inline_text, InlineStyle};
use scraper::ElementRef;

/// Class that marks a note box
pub(crate) const NOTE_CLASS: &str = "NOTE";

/// Class of the label paragraph inside a note box
pub(crate) const ALERT_CLASS: &str = "alert";

/// `#`-prefixed heading from the element's raw text
pub(crate) fn heading(level: usize, element: ElementRef<'_>) -> String {
    format!("{} {}\n\n", "#".repeat(level), element_text(element))
}

/// Paragraph rendered as inline text
pub(crate) fn paragraph(element: ElementRef<'_>, style: &InlineStyle) -> String {
    format!("{}\n\n", inline_text(element, style))
}

/// `* item` per direct `li`, followed by a blank line
pub(crate) fn bullet_list(list: ElementRef<'_>, style: &InlineStyle) -> String {
    let mut markdown = String::new();
    for item in children_named(list, "li") {
        markdown.push_str(&format!("* {}\n", inline_text(item, style)));
    }
    markdown.push('\n');
    markdown
}

/// Block quote per paragraph of a note box; the alert label is dropped
pub(crate) fn note(container: ElementRef<'_>, style: &InlineStyle) -> String {
    let mut markdown = String::new();
    for p in children_named(container, "p").filter(|p| !has_class(*p, ALERT_CLASS)) {
        markdown.push_str(&format!("> {}\n\n", inline_text(p, style)));
    }
    markdown.push('\n');
    markdown
}
