//! Tests for the warning registry.
//!
//! The registry is process-wide, so everything runs in a single test.

use codex_common::warning::{clear_warnings, warn_once, warning_count};

#[test]
fn test_warnings_are_deduplicated_until_cleared() {
    clear_warnings();
    assert_eq!(warning_count(), 0);

    warn_once("Tokenizer", "eof-in-tag at byte 3");
    warn_once("Tokenizer", "eof-in-tag at byte 3");
    assert_eq!(warning_count(), 1);

    // Same message from another component is a different warning.
    warn_once("Text", "eof-in-tag at byte 3");
    warn_once("Tokenizer", "duplicate-attribute at byte 9");
    assert_eq!(warning_count(), 3);

    clear_warnings();
    assert_eq!(warning_count(), 0);
    warn_once("Tokenizer", "eof-in-tag at byte 3");
    assert_eq!(warning_count(), 1);
}
