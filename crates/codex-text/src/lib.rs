//! Text processing for The Elidoras Codex content pipeline.
//!
//! # Scope
//!
//! - [`sanitize()`] - strip `script`/`style` blocks, inline event handlers and
//!   `javascript:` URIs from HTML, leaving other markup untouched
//! - [`extract_text`] - reduce HTML to its text with entities decoded and
//!   whitespace collapsed, using the streaming tokenizer from `codex-html`
//! - [`truncate`] - shorten text at a word boundary
//! - [`clean_filename`] - make a string safe to use as a filename
//! - [`content`] - WordPress post helpers (titles, slugs, SEO excerpts,
//!   image URLs, paragraph wrapping)
//!
//! Every function is pure and safe to call from any thread.

/// WordPress post content helpers.
pub mod content;
/// Plain-text extraction.
pub mod extract;
/// Truncation and filename cleaning.
pub mod format;
/// Compiled regular expressions shared by the pattern-based passes.
mod patterns;
/// Pattern-based HTML sanitization.
pub mod sanitize;

pub use extract::{extract_text, extract_text_with, extract_text_with_issues};
pub use format::{clean_filename, truncate, truncate_with};
pub use sanitize::sanitize;
