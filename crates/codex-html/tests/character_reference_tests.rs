//! Integration tests for character reference decoding in the tokenizer.

use codex_html::tokenizer::character_reference::resolve_numeric_reference;
use codex_html::{HTMLTokenizer, Token};

fn decode(input: &str) -> (String, Vec<String>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    let mut tokens = Vec::new();
    tokenizer.run(&mut tokens);
    let text = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect();
    let issues = tokenizer
        .into_issues()
        .into_iter()
        .map(|issue| issue.message)
        .collect();
    (text, issues)
}

#[test]
fn test_named_references() {
    assert_eq!(decode("Fish &amp; Chips").0, "Fish & Chips");
    assert_eq!(decode("&lt;p&gt;").0, "<p>");
    assert_eq!(decode("caf&eacute;").0, "caf\u{00E9}");
    assert_eq!(decode("&copy; 2025").0, "\u{00A9} 2025");
}

#[test]
fn test_legacy_reference_without_semicolon() {
    let (text, issues) = decode("AT&amp T");
    assert_eq!(text, "AT& T");
    assert_eq!(issues, vec!["missing-semicolon-after-character-reference"]);
}

#[test]
fn test_longest_prefix_match() {
    // "&ampx" has no entity of its own; "&amp" matches and "x" stays text.
    assert_eq!(decode("&ampx").0, "&x");
}

#[test]
fn test_unknown_reference_is_literal() {
    let (text, issues) = decode("&bogus; &");
    assert_eq!(text, "&bogus; &");
    assert_eq!(issues, vec!["unknown-named-character-reference"]);
}

#[test]
fn test_decimal_and_hex_references() {
    assert_eq!(decode("&#65;&#x42;&#X43;").0, "ABC");
    assert_eq!(decode("&#8212;").0, "\u{2014}");
    assert_eq!(decode("&#x1F600;").0, "\u{1F600}");
}

#[test]
fn test_numeric_reference_without_semicolon() {
    let (text, issues) = decode("&#65B");
    assert_eq!(text, "AB");
    assert_eq!(issues, vec!["missing-semicolon-after-character-reference"]);
}

#[test]
fn test_numeric_reference_without_digits() {
    let (text, issues) = decode("&#; &#xZ");
    assert_eq!(text, "&#; &#xZ");
    assert_eq!(
        issues,
        vec![
            "absence-of-digits-in-numeric-character-reference",
            "absence-of-digits-in-numeric-character-reference"
        ]
    );
}

#[test]
fn test_invalid_numeric_references() {
    assert_eq!(resolve_numeric_reference(0).0, Some('\u{FFFD}'));
    assert_eq!(resolve_numeric_reference(0xD800).0, Some('\u{FFFD}'));
    assert_eq!(resolve_numeric_reference(0x11_0000).0, Some('\u{FFFD}'));
    assert_eq!(decode("&#99999999999999;").0, "\u{FFFD}");
}

#[test]
fn test_windows_1252_replacements() {
    assert_eq!(
        resolve_numeric_reference(0x80),
        (Some('\u{20AC}'), Some("control-character-reference"))
    );
    assert_eq!(decode("&#147;quoted&#148;").0, "\u{201C}quoted\u{201D}");
    assert_eq!(resolve_numeric_reference(0x81).0, Some('\u{81}'));
}

#[test]
fn test_references_in_attribute_values() {
    let mut tokens = Vec::new();
    HTMLTokenizer::new(r#"<a href="/?a=1&amp;b=2" title="&quot;hi&quot;">"#).run(&mut tokens);
    assert_eq!(tokens[0].attribute("href"), Some("/?a=1&b=2"));
    assert_eq!(tokens[0].attribute("title"), Some("\"hi\""));
}

#[test]
fn test_legacy_reference_in_attribute_followed_by_alnum_is_literal() {
    let mut tokens = Vec::new();
    HTMLTokenizer::new(r#"<a href="/?x=1&copy=2&ampfoo">"#).run(&mut tokens);
    assert_eq!(tokens[0].attribute("href"), Some("/?x=1&copy=2&ampfoo"));
}

#[test]
fn test_control_and_noncharacter_references_produce_nothing() {
    let (text, issues) = decode("a&#1;b&#x7F;c&#xFDD0;d&#x1FFFF;e&#11;f");
    assert_eq!(text, "abcdef");
    assert_eq!(
        issues,
        vec![
            "control-character-reference",
            "control-character-reference",
            "noncharacter-character-reference",
            "noncharacter-character-reference",
            "control-character-reference",
        ]
    );
    assert_eq!(resolve_numeric_reference(0xFFFE), (None, Some("noncharacter-character-reference")));
}

#[test]
fn test_whitespace_references_are_kept() {
    assert_eq!(decode("a&#9;b&#10;c&#13;d").0, "a\tb\nc\rd");
}
