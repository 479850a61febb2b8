//! Tests for the pattern-based sanitizer.

use codex_text::sanitize;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn test_absent_and_empty_input() {
    assert_eq!(sanitize(None), "");
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize(Some("")), "");
}

#[test]
fn test_script_block_removed_with_surrounding_markup_kept() {
    assert_eq!(
        sanitize(r#"<p>This is a <b>test</b> with <script>alert("XSS")</script> content.</p>"#),
        "<p>This is a <b>test</b> with  content.</p>"
    );
}

#[test]
fn test_script_block_multiline_case_insensitive_with_attributes() {
    let html = "before<SCRIPT type=\"text/javascript\">\nvar a = 1;\nvar b = 2;\n</Script>after";
    assert_eq!(sanitize(html), "beforeafter");
}

#[test]
fn test_each_script_block_removed_separately() {
    let html = "<script>a()</script>keep<script>b()</script>";
    assert_eq!(sanitize(html), "keep");
}

#[test]
fn test_style_block_removed() {
    let html = "<style media=\"screen\">\np { color: red; }\n</STYLE><p>x</p>";
    assert_eq!(sanitize(html), "<p>x</p>");
}

#[test]
fn test_event_handlers_removed_tag_kept() {
    assert_eq!(
        sanitize(r#"<img src="a.png" onerror="steal()"><div ONCLICK = 'x()' id="d">"#),
        r#"<img src="a.png"><div id="d">"#
    );
}

#[test]
fn test_javascript_uri_removed() {
    assert_eq!(
        sanitize(r#"<a href="JavaScript:alert(1)">go</a>"#),
        r#"<a href="alert(1)">go</a>"#
    );
}

#[test]
fn test_result_is_trimmed() {
    assert_eq!(sanitize("  \n<script>x</script>\n <p>hi</p>\t"), "<p>hi</p>");
}

#[test]
fn test_entities_and_benign_markup_untouched() {
    let html = r#"<p class="note">Fish &amp; chips &lt;3</p>"#;
    assert_eq!(sanitize(html), html);
}

#[test]
fn test_unclosed_script_is_left_alone() {
    // No closing tag means no block match.
    assert_eq!(sanitize("<script>alert(1)"), "<script>alert(1)");
}

#[test]
fn test_split_script_tags_are_a_known_gap() {
    // The passes are linear, so removing the inner block reassembles an outer one.
    assert_eq!(
        sanitize("<scr<script></script>ipt>alert(1)</scr<script></script>ipt>"),
        "<script>alert(1)</script>"
    );
}

#[quickcheck]
fn prop_script_content_never_survives(before: String, payload: String, after: String) -> TestResult {
    let clean = |s: &str| s.chars().filter(char::is_ascii_alphanumeric).collect::<String>();
    let (before, payload, after) = (clean(&before), clean(&payload), clean(&after));
    let kept = format!("{before}{after}");
    if payload.is_empty() || kept.contains(&payload) || kept.to_lowercase().contains("script") {
        return TestResult::discard();
    }

    let html = format!("{before}<script>\n{payload}\n</SCRIPT>{after}");
    let sanitized = sanitize(html.as_str());
    TestResult::from_bool(!sanitized.contains(&payload) && !sanitized.contains("script"))
}
