use std::borrow::Cow;
use std::sync::LazyLock;

use codex_common::warning::warn_once;
use regex::{Captures, Regex};

/// A lazily compiled pattern. `None` only if the pattern failed to compile.
pub type Pattern = LazyLock<Option<Regex>>;

macro_rules! text_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: Pattern = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Sanitizer passes, applied in this order ───────────────────────────────
text_pattern!(RE_SCRIPT_BLOCK, r"(?is)<script[^>]*>.*?</script>");
text_pattern!(RE_STYLE_BLOCK, r"(?is)<style[^>]*>.*?</style>");
text_pattern!(RE_EVENT_HANDLER, r#"(?i)\s*on\w+\s*=\s*["'][^"']*["']"#);
text_pattern!(RE_JAVASCRIPT_URI, r"(?i)javascript:");

// ── Content helpers ───────────────────────────────────────────────────────
text_pattern!(
    RE_IMAGE_URL,
    r#"src="(https?://[^"]+\.(?:jpg|jpeg|png|gif|webp))""#
);
text_pattern!(RE_LEADING_TAG, r"^\s*<\w+");
text_pattern!(RE_H1, r"<h1([^>]*)>(.*?)</h1>");
text_pattern!(RE_IMG_EMPTY_ALT, r#"<img([^>]*?)alt=""([^>]*?)>"#);
text_pattern!(RE_IMG_TAG, r"<img([^>]*)>");

/// Resolve a pattern, warning once if it failed to compile.
pub fn compiled(pattern: &'static Pattern, name: &str) -> Option<&'static Regex> {
    let regex = LazyLock::force(pattern).as_ref();
    if regex.is_none() {
        warn_once("Text", &format!("pattern {name} failed to compile; pass skipped"));
    }
    regex
}

/// Replace every match of `pattern`, or return the input unchanged if the
/// pattern is unavailable.
pub fn replace_all<'t>(
    pattern: &'static Pattern,
    name: &str,
    text: &'t str,
    replacement: &str,
) -> Cow<'t, str> {
    compiled(pattern, name).map_or(Cow::Borrowed(text), |regex| {
        regex.replace_all(text, regex::NoExpand(replacement))
    })
}

/// Like [`replace_all`], computing each replacement from the match.
pub fn replace_all_with<'t>(
    pattern: &'static Pattern,
    name: &str,
    text: &'t str,
    replacer: impl FnMut(&Captures<'_>) -> String,
) -> Cow<'t, str> {
    compiled(pattern, name).map_or(Cow::Borrowed(text), |regex| regex.replace_all(text, replacer))
}
