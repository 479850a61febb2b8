//! Integration tests for named character reference lookup.

use codex_html::tokenizer::named_character_references::{any_entity_has_prefix, lookup_entity};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("hellip;"), Some("\u{2026}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("gt"), Some(">"));
    assert_eq!(lookup_entity("nbsp"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("copy"), Some("\u{00A9}"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("Eacute;"), Some("\u{00C9}"));
    assert_eq!(lookup_entity("eacute;"), Some("\u{00E9}"));
    assert_eq!(lookup_entity("AMP;"), Some("&"));
    assert_eq!(lookup_entity("aMp;"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(any_entity_has_prefix("a")); // amp, apos, alpha, etc.
    assert!(any_entity_has_prefix("am")); // amp
    assert!(any_entity_has_prefix("amp")); // amp, amp;
    assert!(any_entity_has_prefix("amp;")); // amp;
    assert!(!any_entity_has_prefix("ampx")); // nothing
    assert!(!any_entity_has_prefix("xyz")); // nothing
}

#[test]
fn test_lookup_less_common_entities() {
    assert_eq!(lookup_entity("THORN;"), Some("\u{00DE}"));
    assert_eq!(lookup_entity("star;"), Some("\u{2606}"));
    assert_eq!(lookup_entity("rarrw;"), Some("\u{219D}"));
    assert_eq!(lookup_entity("CounterClockwiseContourIntegral;"), Some("\u{2233}"));
    assert_eq!(lookup_entity("NewLine;"), Some("\n"));
}

#[test]
fn test_lookup_multi_code_point_entity() {
    assert_eq!(lookup_entity("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
}

#[test]
fn test_prefix_matching_at_table_edges() {
    assert!(any_entity_has_prefix("AE")); // AElig, first in the table
    assert!(any_entity_has_prefix("zwnj;")); // last in the table
    assert!(!any_entity_has_prefix("zz"));
    assert!(!any_entity_has_prefix("AA"));
}
