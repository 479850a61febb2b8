//! Tests for truncation and filename cleaning.

use codex_common::config::TruncateConfig;
use codex_text::format::UNTITLED;
use codex_text::{clean_filename, truncate, truncate_with};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// =============================================================================
// truncate
// =============================================================================

#[test]
fn test_short_text_unchanged() {
    assert_eq!(truncate("short text", 160, "..."), "short text");
}

#[test]
fn test_text_exactly_at_limit_unchanged() {
    assert_eq!(truncate("abcde", 5, "..."), "abcde");
}

#[test]
fn test_cut_at_last_space_before_cutoff() {
    // cutoff = 20 - 3 = 17: "The quick brown f", last space at 15
    assert_eq!(
        truncate("The quick brown fox jumps over the lazy dog", 20, "..."),
        "The quick brown..."
    );
}

#[test]
fn test_space_at_cutoff_boundary_is_outside_window() {
    // cutoff = 12 - 3 = 9: "The quick", the space at index 9 is not searched
    assert_eq!(truncate("The quick brown", 12, "..."), "The...");
}

#[test]
fn test_no_space_falls_back_to_hard_cut() {
    assert_eq!(truncate("abcdefghijklmnop", 10, "..."), "abcdefg...");
}

#[test]
fn test_space_only_at_index_zero_is_hard_cut() {
    assert_eq!(truncate(" abcdefghijklmnop", 10, "..."), " abcdef...");
}

#[test]
fn test_custom_suffix() {
    assert_eq!(truncate("one two three four", 12, " [more]"), "one [more]");
    assert_eq!(truncate("one two three four", 9, ""), "one two");
}

#[test]
fn test_suffix_longer_than_limit() {
    assert_eq!(truncate("abcdef", 2, "..."), "...");
}

#[test]
fn test_lengths_are_characters() {
    assert_eq!(truncate("héllo wörld ünïcode", 14, "…"), "héllo wörld…");
    assert_eq!(truncate("日本語のテキスト", 5, "..."), "日本...");
}

#[test]
fn test_truncate_with_config() {
    let config = TruncateConfig::default();
    let long = "word ".repeat(50);
    let result = truncate_with(&long, &config);
    assert!(result.ends_with("..."));
    assert!(result.chars().count() <= 160);

    let config = TruncateConfig {
        max_length: 8,
        suffix: "!".to_string(),
    };
    assert_eq!(truncate_with("abc defgh ijk", &config), "abc!");
}

#[quickcheck]
fn prop_result_fits_when_a_space_qualifies(text: String, max_length: u8) -> TestResult {
    let max_length = usize::from(max_length);
    let suffix = "...";
    let cutoff = max_length.saturating_sub(3);
    let window: String = text.chars().take(cutoff).collect();
    let qualifies = window.char_indices().skip(1).any(|(_, c)| c == ' ');
    if text.chars().count() <= max_length || !qualifies {
        return TestResult::discard();
    }

    let result = truncate(&text, max_length, suffix);
    TestResult::from_bool(result.chars().count() <= max_length && result.ends_with(suffix))
}

#[quickcheck]
fn prop_short_text_is_identity(text: String) -> bool {
    let max_length = text.chars().count();
    truncate(&text, max_length, "...") == text
}

#[quickcheck]
fn prop_result_is_prefix_plus_suffix(text: String, max_length: u8) -> bool {
    let result = truncate(&text, usize::from(max_length), "~");
    result == text || result.strip_suffix('~').is_some_and(|head| text.starts_with(head))
}

// =============================================================================
// clean_filename
// =============================================================================

#[test]
fn test_invalid_characters_removed_spaces_replaced() {
    assert_eq!(clean_filename("My File:Name?.txt"), "My_FileName.txt");
}

#[test]
fn test_every_invalid_character_removed() {
    assert_eq!(clean_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
}

#[test]
fn test_underscore_runs_collapsed() {
    assert_eq!(clean_filename("a   b__c _ d"), "a_b_c_d");
    assert_eq!(clean_filename("a _:_ b"), "a_b");
}

#[test]
fn test_leading_and_trailing_underscores_and_dots_stripped() {
    assert_eq!(clean_filename("  ..hidden file.. "), "hidden_file");
    assert_eq!(clean_filename("_report_.pdf_"), "report_.pdf");
}

#[test]
fn test_empty_results_become_untitled() {
    assert_eq!(clean_filename(""), UNTITLED);
    assert_eq!(clean_filename("<>:\"/\\|?*"), "untitled");
    assert_eq!(clean_filename(" . _ ."), "untitled");
}

#[test]
fn test_unicode_kept() {
    assert_eq!(clean_filename("résumé final.docx"), "résumé_final.docx");
}

#[quickcheck]
fn prop_clean_filename_invariants(name: String) -> bool {
    let cleaned = clean_filename(&name);
    !cleaned.is_empty()
        && !cleaned.contains(['<', '>', ':', '"', '/', '\\', '|', '?', '*', ' '])
        && !cleaned.contains("__")
        && (cleaned == UNTITLED
            || !(cleaned.starts_with(['_', '.']) || cleaned.ends_with(['_', '.'])))
}

#[quickcheck]
fn prop_clean_filename_is_idempotent(name: String) -> bool {
    let once = clean_filename(&name);
    clean_filename(&once) == once
}
