//! Helpers that prepare generated posts for WordPress.
//!
//! Titles, slugs and SEO excerpts are counted in characters, like
//! [`truncate`](crate::truncate).

use codex_common::config::ContentConfig;
use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::extract::{collapse_whitespace, extract_text};
use crate::patterns::{
    RE_H1, RE_IMAGE_URL, RE_IMG_EMPTY_ALT, RE_IMG_TAG, RE_LEADING_TAG, compiled, replace_all_with,
};

const ELLIPSIS: &str = "...";

/// Title and excerpt for a post's SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSummary {
    /// Title, shortened to fit search result listings.
    pub seo_title: String,
    /// Leading text of the post body, always ending in `...`.
    pub excerpt: String,
}

fn take_chars(text: &str, n: usize) -> &str {
    &text[..text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)]
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Cut `text` to `max_length - 3` characters plus `...` if it is longer than
/// `max_length`.
fn ellipsize(text: String, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text;
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    format!("{}{ELLIPSIS}", take_chars(&text, keep))
}

/// Normalize a post title: whitespace runs become one space, the ends are
/// trimmed, and titles longer than `max_length` are cut with `...`.
#[must_use]
pub fn sanitize_title(title: &str, max_length: usize) -> String {
    ellipsize(collapse_whitespace(title), max_length)
}

/// Build a URL slug from a title.
///
/// The title is lowercased, everything except letters, digits, `_`, `-` and
/// whitespace is dropped, and runs of whitespace or hyphens become a single
/// `-`. Slugs longer than `max_length` are cut and lose any trailing `-`.
///
/// ```
/// use codex_text::content::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World! It's 2024", 60), "hello-world-its-2024");
/// ```
#[must_use]
pub fn generate_slug(title: &str, max_length: usize) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        let c = if c.is_whitespace() {
            '-'
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            continue;
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    if slug.chars().count() > max_length {
        take_chars(&slug, max_length).trim_end_matches('-').to_string()
    } else {
        slug
    }
}

/// Derive SEO metadata from a post's title and HTML body.
///
/// The excerpt is the first `excerpt_length` characters of the body's
/// extracted text, with `...` appended even when nothing was cut.
#[must_use]
pub fn seo_summary(title: &str, content: &str, config: &ContentConfig) -> SeoSummary {
    let text = extract_text(content);
    SeoSummary {
        seo_title: ellipsize(title.to_string(), config.seo_title_max_length),
        excerpt: format!("{}{ELLIPSIS}", take_chars(&text, config.excerpt_length)),
    }
}

/// Absolute `http(s)` image URLs referenced by `src="..."` attributes, in
/// document order.
#[must_use]
pub fn extract_image_urls(content: &str) -> Vec<String> {
    compiled(&RE_IMAGE_URL, "image-url").map_or_else(Vec::new, |regex| {
        regex
            .captures_iter(content)
            .map(|caps| group(&caps, 1).to_string())
            .collect()
    })
}

/// Wrap plain-text blocks in `<p>` tags. Content that already starts with a
/// tag is returned as is.
fn wrap_paragraphs(content: &str) -> String {
    if content.trim_start().starts_with('<') {
        return content.to_string();
    }
    let leading_tag = compiled(&RE_LEADING_TAG, "leading-tag");
    content
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            if leading_tag.is_some_and(|regex| regex.is_match(block)) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.trim())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepare post content for publishing.
///
/// Plain text is split on blank lines into `<p>` paragraphs, `<h1>` headings
/// are demoted to `<h2>` (the post title is the page's `h1`), and every
/// `<img>` without alt text gets `alt_placeholder`.
///
/// ```
/// use codex_text::content::optimize_html;
///
/// assert_eq!(
///     optimize_html("First.\n\nSecond.", "img"),
///     "<p>First.</p>\n<p>Second.</p>"
/// );
/// ```
#[must_use]
pub fn optimize_html(content: &str, alt_placeholder: &str) -> String {
    let content = wrap_paragraphs(content);
    let content = replace_all_with(&RE_H1, "h1", &content, |caps| {
        format!("<h2{}>{}</h2>", group(caps, 1), group(caps, 2))
    });
    let content = replace_all_with(&RE_IMG_EMPTY_ALT, "img-empty-alt", &content, |caps| {
        format!(
            r#"<img{}alt="{alt_placeholder}"{}>"#,
            group(caps, 1),
            group(caps, 2)
        )
    });
    let content = replace_all_with(&RE_IMG_TAG, "img-tag", &content, |caps| {
        let attributes = group(caps, 1);
        if attributes.contains("alt=") {
            return group(caps, 0).to_string();
        }
        match attributes.trim_end().strip_suffix('/') {
            Some(attributes) => {
                format!(r#"<img{} alt="{alt_placeholder}" />"#, attributes.trim_end())
            }
            None => format!(r#"<img{attributes} alt="{alt_placeholder}">"#),
        }
    });
    content.into_owned()
}
