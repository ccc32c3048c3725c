//! Utility modules for web, DOM, and content operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_json_cached`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`validate_link`] - Link validation for author-supplied URLs

pub mod cache;
pub mod dom;
mod fetch;
mod markdown;
mod url;

pub use fetch::{fetch_json, fetch_json_cached};
pub use markdown::markdown_to_html;
pub use url::{Link, validate_link};
