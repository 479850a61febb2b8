//! Tests for plain-text extraction.

use codex_common::config::ExtractConfig;
use codex_html::HTMLTokenizer;
use codex_text::extract::{TextExtractor, collapse_whitespace};
use codex_text::{extract_text, extract_text_with, extract_text_with_issues};

fn without_raw_text() -> ExtractConfig {
    ExtractConfig {
        include_raw_text: false,
    }
}

#[test]
fn test_absent_and_empty_input() {
    assert_eq!(extract_text(None), "");
    assert_eq!(extract_text(""), "");
}

#[test]
fn test_tags_and_attributes_removed() {
    assert_eq!(
        extract_text("<p>This is a <b>test</b> with <a href='https://example.com'>link</a>.</p>"),
        "This is a test with link."
    );
}

#[test]
fn test_fragments_concatenated_without_separators() {
    assert_eq!(extract_text("<b>bold</b><i>italic</i>"), "bolditalic");
}

#[test]
fn test_entities_decoded() {
    assert_eq!(
        extract_text("Fish &amp; chips &lt;3 &#169; &#x41;&eacute;"),
        "Fish & chips <3 © Aé"
    );
}

#[test]
fn test_entities_decoded_again_after_concatenation() {
    assert_eq!(extract_text("&amp;lt;"), "<");
    assert_eq!(extract_text("&amp;amp;amp;"), "&amp;");
    assert_eq!(extract_text("&am<b></b>p; x"), "& x");
}

#[test]
fn test_entities_in_raw_text_decoded() {
    assert_eq!(extract_text("<script>a &amp; b</script>"), "a & b");
    assert_eq!(extract_text("<style>q::before{content:'&lt;'}</style>"), "q::before{content:'<'}");
}

#[test]
fn test_full_named_reference_table() {
    assert_eq!(extract_text("&THORN;&star;&rarrw;"), "\u{00DE}\u{2606}\u{219D}");
    assert_eq!(extract_text("&NotEqualTilde; &fjlig;"), "\u{2242}\u{0338} fj");
}

#[test]
fn test_control_character_references_dropped() {
    assert_eq!(extract_text("a&#1;b&#x7f;c&#xFFFF;d"), "abcd");
}

#[test]
fn test_unterminated_raw_text_dropped() {
    assert_eq!(extract_text("<p>kept</p><script>abc"), "kept");
    assert_eq!(extract_text("<style>a{}</style>b<style>c{"), "a{}b");
}

#[test]
fn test_whitespace_collapsed_and_trimmed() {
    assert_eq!(
        extract_text("\n  <div>\n\tOne\n\n   two&nbsp;&nbsp;three  </div>\r\n"),
        "One two three"
    );
}

#[test]
fn test_comments_and_doctype_dropped() {
    assert_eq!(
        extract_text("<!DOCTYPE html><!-- hidden <b>text</b> -->shown"),
        "shown"
    );
}

#[test]
fn test_attribute_with_angle_bracket_does_not_leak() {
    assert_eq!(
        extract_text(r#"<img alt="a > b" title='<b>nope</b>'>yes"#),
        "yes"
    );
}

#[test]
fn test_malformed_markup_is_best_effort() {
    assert_eq!(extract_text("<p>unclosed <b>bold"), "unclosed bold");
    assert_eq!(extract_text("a < b"), "a < b");
    assert_eq!(extract_text("text <div class=\"x"), "text");
}

#[test]
fn test_raw_text_kept_by_default() {
    assert_eq!(
        extract_text("<p>a</p><script>var x = '<b>';</script><style>p{}</style>b"),
        "avar x = '<b>';p{}b"
    );
}

#[test]
fn test_raw_text_dropped_when_configured() {
    assert_eq!(
        extract_text_with(
            "<p>a</p><script>var x = 1;</script> <style>p{}</style>b",
            &without_raw_text()
        ),
        "a b"
    );
}

#[test]
fn test_self_closing_script_does_not_hide_following_text() {
    assert_eq!(
        extract_text_with("<script src=x.js />after", &without_raw_text()),
        "after"
    );
}

#[test]
fn test_issues_reported() {
    let (text, issues) =
        extract_text_with_issues("<p id=a id=b>x &bogus; y", &ExtractConfig::default());
    assert_eq!(text, "x &bogus; y");
    let messages: Vec<_> = issues.iter().map(|issue| issue.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["duplicate-attribute", "unknown-named-character-reference"]
    );
}

#[test]
fn test_clean_input_has_no_issues() {
    let (_, issues) = extract_text_with_issues("<p>fine</p>", &ExtractConfig::default());
    assert!(issues.is_empty());
}

#[test]
fn test_extractor_as_sink() {
    let mut extractor = TextExtractor::new(&ExtractConfig::default());
    HTMLTokenizer::new("<h1> Title </h1>\n<p>Body</p>").run(&mut extractor);
    assert_eq!(extractor.collected(), " Title \nBody");
    assert_eq!(extractor.finish(), "Title Body");
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
    assert_eq!(collapse_whitespace(" \n "), "");
}
