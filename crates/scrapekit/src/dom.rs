//! DOM traversal and inline rendering helpers
//!
//! Scrapers match elements with plain predicates over [`ElementRef`]
//! instead of CSS selectors, so a typo can never turn into a runtime
//! selector error.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Token emitted in place of an image
pub const IMAGE_PLACEHOLDER: &str = "_image_";

/// Per-site rules for rendering inline content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineStyle {
    /// Tag that marks an image on this site
    pub image_tag: &'static str,
    /// Drop child elements that render to nothing instead of emitting `****`
    pub skip_empty: bool,
    /// Expand a `ul` nested in an `li` as indented `  * ` items
    pub expand_nested_lists: bool,
}

/// Whether the element has the given tag name
pub fn is_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element.value().name() == tag
}

/// Whether the element carries the given CSS class (case-sensitive)
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Attribute value, if present
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Whether any ancestor element satisfies `predicate`
pub fn has_ancestor<'a>(element: ElementRef<'a>, predicate: impl Fn(ElementRef<'a>) -> bool) -> bool {
    element.ancestors().filter_map(ElementRef::wrap).any(predicate)
}

/// Immediate child elements, in document order
pub fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Immediate child elements with the given tag name
pub fn children_named<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(element).filter(move |child| is_tag(*child, tag))
}

/// Descendant elements (excluding `element` itself), in document order
pub fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Descendant elements with the given tag name
pub fn descendants_named<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> {
    descendant_elements(element).filter(move |child| is_tag(*child, tag))
}

/// Every element in the document satisfying `predicate`, in document order
pub fn find_all<'a>(
    document: &'a Html,
    predicate: impl Fn(ElementRef<'a>) -> bool,
) -> Vec<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| predicate(*element))
        .collect()
}

/// Concatenated text of every text node under `element`
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Render the children of `element` as inline Markdown
///
/// Text nodes are copied verbatim, the site's image tag becomes
/// [`IMAGE_PLACEHOLDER`], and every other element is rendered recursively
/// and wrapped in `**`.
pub fn inline_text(element: ElementRef<'_>, style: &InlineStyle) -> String {
    let mut output = String::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => output.push_str(text),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };

                if is_tag(child, style.image_tag) {
                    output.push_str(IMAGE_PLACEHOLDER);
                    continue;
                }

                if style.expand_nested_lists && is_tag(element, "li") && is_tag(child, "ul") {
                    for item in children_named(child, "li") {
                        output.push_str("  * ");
                        output.push_str(&inline_text(item, style));
                        output.push('\n');
                    }
                    continue;
                }

                let inner = inline_text(child, style);
                if style.skip_empty && inner.is_empty() {
                    continue;
                }
                output.push_str("**");
                output.push_str(&inner);
                output.push_str("**");
            }
            _ => {}
        }
    }

    output
}
