//! Tests for the WordPress content helpers.

use codex_common::config::{ContentConfig, DEFAULT_IMAGE_ALT};
use codex_text::content::{
    SeoSummary, extract_image_urls, generate_slug, optimize_html, sanitize_title, seo_summary,
};

// =============================================================================
// Titles and slugs
// =============================================================================

#[test]
fn test_sanitize_title_collapses_whitespace() {
    assert_eq!(
        sanitize_title("  The   Elidoras\n\tCodex  ", 100),
        "The Elidoras Codex"
    );
}

#[test]
fn test_sanitize_title_cuts_long_titles() {
    let title = "x".repeat(120);
    let result = sanitize_title(&title, 100);
    assert_eq!(result.chars().count(), 100);
    assert!(result.ends_with("xxx..."));
}

#[test]
fn test_sanitize_title_at_limit_unchanged() {
    let title = "y".repeat(100);
    assert_eq!(sanitize_title(&title, 100), title);
}

#[test]
fn test_generate_slug_basic() {
    assert_eq!(
        generate_slug("Hello, World! It's 2024", 60),
        "hello-world-its-2024"
    );
}

#[test]
fn test_generate_slug_collapses_separators() {
    assert_eq!(generate_slug("AI  --  the   Future", 60), "ai-the-future");
    assert_eq!(generate_slug("snake_case stays", 60), "snake_case-stays");
}

#[test]
fn test_generate_slug_keeps_unicode_letters() {
    assert_eq!(generate_slug("Café Über", 60), "café-über");
}

#[test]
fn test_generate_slug_cut_drops_trailing_hyphen() {
    // The 10th character is the hyphen between the words.
    assert_eq!(generate_slug("abcdefghi jklmnop", 10), "abcdefghi");
}

// =============================================================================
// SEO summary
// =============================================================================

#[test]
fn test_seo_summary_short_title_and_content() {
    let summary = seo_summary(
        "Short title",
        "<p>Body with <b>markup</b> &amp; entities.</p>",
        &ContentConfig::default(),
    );
    assert_eq!(
        summary,
        SeoSummary {
            seo_title: "Short title".to_string(),
            excerpt: "Body with markup & entities....".to_string(),
        }
    );
}

#[test]
fn test_seo_summary_cuts_long_title_and_excerpt() {
    let title = "t".repeat(70);
    let content = format!("<p>{}</p>", "word ".repeat(100));
    let summary = seo_summary(&title, &content, &ContentConfig::default());
    assert_eq!(summary.seo_title.chars().count(), 60);
    assert!(summary.seo_title.ends_with("..."));
    assert_eq!(summary.excerpt.chars().count(), 160);
    assert!(summary.excerpt.starts_with("word word"));
}

#[test]
fn test_seo_summary_respects_config() {
    let config = ContentConfig {
        seo_title_max_length: 10,
        excerpt_length: 4,
        ..ContentConfig::default()
    };
    let summary = seo_summary("A fairly long title", "<p>Excerpt</p>", &config);
    assert_eq!(summary.seo_title, "A fairl...");
    assert_eq!(summary.excerpt, "Exce...");
}

#[test]
fn test_seo_summary_serializes_as_json() {
    let summary = SeoSummary {
        seo_title: "T".to_string(),
        excerpt: "E...".to_string(),
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["seo_title"], "T");
    assert_eq!(json["excerpt"], "E...");
}

// =============================================================================
// Images
// =============================================================================

#[test]
fn test_extract_image_urls() {
    let html = r#"
        <img src="https://cdn.example.com/a.png" alt="a">
        <img src="http://example.com/b.JPG">
        <img src="/relative/c.jpg">
        <img src="https://example.com/d.webp">
        <a href="https://example.com/e.gif">not a src</a>
    "#;
    assert_eq!(
        extract_image_urls(html),
        vec![
            "https://cdn.example.com/a.png".to_string(),
            "https://example.com/d.webp".to_string(),
        ]
    );
}

#[test]
fn test_extract_image_urls_none() {
    assert!(extract_image_urls("<p>no images</p>").is_empty());
}

// =============================================================================
// optimize_html
// =============================================================================

#[test]
fn test_plain_text_wrapped_in_paragraphs() {
    assert_eq!(
        optimize_html("  First paragraph.  \n\nSecond\nparagraph.\n\n\n\n", DEFAULT_IMAGE_ALT),
        "<p>First paragraph.</p>\n<p>Second\nparagraph.</p>"
    );
}

#[test]
fn test_blocks_starting_with_tags_not_wrapped() {
    assert_eq!(
        optimize_html("Intro text\n\n<ul><li>item</li></ul>", DEFAULT_IMAGE_ALT),
        "<p>Intro text</p>\n<ul><li>item</li></ul>"
    );
}

#[test]
fn test_html_content_not_rewrapped() {
    let html = "<p>Already</p>\n\nloose text";
    assert_eq!(optimize_html(html, DEFAULT_IMAGE_ALT), html);
}

#[test]
fn test_h1_demoted_to_h2() {
    assert_eq!(
        optimize_html(r#"<h1 class="t">Title</h1><h1>Two</h1>"#, DEFAULT_IMAGE_ALT),
        r#"<h2 class="t">Title</h2><h2>Two</h2>"#
    );
}

#[test]
fn test_empty_alt_filled() {
    assert_eq!(
        optimize_html(r#"<img src="a.png" alt="" width="10">"#, "Pic"),
        r#"<img src="a.png" alt="Pic" width="10">"#
    );
}

#[test]
fn test_missing_alt_added() {
    assert_eq!(
        optimize_html(r#"<p><img src="a.png"><img src="b.png" /></p>"#, "Pic"),
        r#"<p><img src="a.png" alt="Pic"><img src="b.png" alt="Pic" /></p>"#
    );
}

#[test]
fn test_existing_alt_kept() {
    let html = r#"<img src="a.png" alt="A cat">"#;
    assert_eq!(optimize_html(html, "Pic"), html);
}
