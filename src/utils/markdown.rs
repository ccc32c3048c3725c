//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::Options;

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Bare URL autolinks
///
/// The output is sanitized using `ammonia`; raw HTML embedded in section
/// content is never trusted.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.autolink = true;

    let html = comrak::markdown_to_html(markdown, &options);
    ammonia::clean(&html)
}
