//! Truncation and filename cleaning.

use codex_common::config::TruncateConfig;

/// Characters that are never allowed in a cleaned filename.
const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Returned by [`clean_filename`] when nothing usable is left.
pub const UNTITLED: &str = "untitled";

/// Byte offset of the `n`th character of `text`, or its length if shorter.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Shorten `text` to at most `max_length` characters, preferring to cut at
/// a space.
///
/// Lengths are counted in characters. When `text` is too long, the cutoff is
/// `max_length` minus the length of `suffix`; the text is cut at the last
/// space before the cutoff (if that space is not the first character) or
/// else exactly at the cutoff, and `suffix` is appended.
///
/// A suffix longer than `max_length` puts the cutoff at zero, so the result
/// is the suffix alone; the cutoff is never counted back from the end of
/// `text`.
///
/// ```
/// use codex_text::truncate;
///
/// assert_eq!(truncate("short text", 160, "..."), "short text");
/// assert_eq!(truncate("The quick brown fox", 14, "..."), "The quick...");
/// assert_eq!(truncate("abcdefghij", 6, "..."), "abc...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let cutoff = max_length.saturating_sub(suffix.chars().count());
    let head = &text[..byte_offset(text, cutoff)];
    let cut = match head.rfind(' ') {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    format!("{cut}{suffix}")
}

/// [`truncate`] with the length and suffix taken from `config`.
#[must_use]
pub fn truncate_with(text: &str, config: &TruncateConfig) -> String {
    truncate(text, config.max_length, &config.suffix)
}

/// Turn an arbitrary string into something safe to use as a filename.
///
/// `< > : " / \ | ? *` are removed, spaces become underscores, runs of
/// underscores collapse to one, and leading or trailing underscores and dots
/// are stripped. If nothing is left the result is `"untitled"`.
///
/// ```
/// use codex_text::clean_filename;
///
/// assert_eq!(clean_filename("My File:Name?.txt"), "My_FileName.txt");
/// assert_eq!(clean_filename("???"), "untitled");
/// ```
#[must_use]
pub fn clean_filename(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        if INVALID_FILENAME_CHARS.contains(&c) {
            continue;
        }
        let c = if c == ' ' { '_' } else { c };
        if c == '_' && cleaned.ends_with('_') {
            continue;
        }
        cleaned.push(c);
    }

    let cleaned = cleaned.trim_matches(['_', '.']);
    if cleaned.is_empty() {
        UNTITLED.to_string()
    } else {
        cleaned.to_string()
    }
}
