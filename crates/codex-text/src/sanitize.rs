//! Pattern-based removal of executable content from HTML.
//!
//! The sanitizer is four linear passes over the raw markup followed by a
//! trim. It does not parse the document, so markup that is split or
//! obfuscated across the passes (`<scr<script></script>ipt>`) survives.

use crate::patterns::{
    RE_EVENT_HANDLER, RE_JAVASCRIPT_URI, RE_SCRIPT_BLOCK, RE_STYLE_BLOCK, replace_all,
};

/// Strip `<script>` and `<style>` blocks, inline `on*` event handler
/// attributes and `javascript:` URIs from `html`, then trim the result.
///
/// Absent or empty input yields an empty string. Everything else in the
/// markup, entities included, is left untouched.
///
/// ```
/// use codex_text::sanitize;
///
/// assert_eq!(
///     sanitize(r#"<a href="javascript:go()" onclick="go()">x</a>"#),
///     r#"<a href="go()">x</a>"#
/// );
/// assert_eq!(sanitize(None), "");
/// ```
#[must_use]
pub fn sanitize<'a>(html: impl Into<Option<&'a str>>) -> String {
    let Some(html) = html.into().filter(|html| !html.is_empty()) else {
        return String::new();
    };

    let html = replace_all(&RE_SCRIPT_BLOCK, "script-block", html, "");
    let html = replace_all(&RE_STYLE_BLOCK, "style-block", &html, "");
    let html = replace_all(&RE_EVENT_HANDLER, "event-handler", &html, "");
    let html = replace_all(&RE_JAVASCRIPT_URI, "javascript-uri", &html, "");
    html.trim().to_string()
}
