//! Text normalization helpers shared by the site scrapers

use url::Url;

/// Basename used when neither the title nor the URL yields one
pub const FALLBACK_BASENAME: &str = "article";

/// Strip leading and trailing spaces, tabs and line breaks
pub fn trim_spaces_and_line_breaks(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Drop line breaks and collapse runs of spaces into a single space
///
/// Only `' '` is collapsed; tabs and other whitespace are kept as-is.
pub fn remove_extra_spaces(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut previous_space = false;
    for c in raw.chars() {
        match c {
            '\n' | '\r' => continue,
            ' ' if previous_space => continue,
            ' ' => {
                cleaned.push(c);
                previous_space = true;
            }
            _ => {
                cleaned.push(c);
                previous_space = false;
            }
        }
    }
    cleaned
}

/// Text up to (not including) the first `\n`
pub fn first_line(s: &str) -> &str {
    s.split('\n').next().unwrap_or_default()
}

/// Lowercase, underscore-joined filename derived from a title
pub fn filename_from_title(title: &str) -> String {
    title.replace(' ', "_").replace("__", "_").to_lowercase()
}

/// Keep only characters that are safe in a filename on every platform
///
/// ASCII letters, digits, `_`, `-` and `.` survive; Japanese script, the
/// wave dash, parentheses, whitespace and punctuation are removed.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Last non-empty path segment of a URL, or [`FALLBACK_BASENAME`]
pub fn basename_from_url(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    match path.trim_end_matches('/').rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => FALLBACK_BASENAME.to_string(),
    }
}

/// Flatten a table cell to a single line, joining its lines with `"; "`
pub fn table_cell_text(text: &str) -> String {
    trim_spaces_and_line_breaks(text)
        .replace("\n\n", "\n")
        .replace('\n', "; ")
}

/// Continue a block quote across line breaks
pub fn blockquote_text(text: &str) -> String {
    trim_spaces_and_line_breaks(text).replace('\n', "\n> ")
}
