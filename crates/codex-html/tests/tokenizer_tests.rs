//! Integration tests for the HTML tokenizer.

use codex_html::{HTMLTokenizer, Token, TokenSink, tokenize};

/// Concatenate the character tokens of a token stream.
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

/// Tags only, rendered with their `Display` form.
fn tags_of(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| matches!(token, Token::StartTag { .. } | Token::EndTag { .. }))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_empty_input_is_just_eof() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(
        tokens[0],
        Token::Doctype {
            name: Some("html".to_string())
        }
    );
}

#[test]
fn test_doctype_with_identifiers() {
    let tokens = tokenize(
        r#"<!doctype HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">x"#,
    );
    assert_eq!(
        tokens[0],
        Token::Doctype {
            name: Some("html".to_string())
        }
    );
    assert_eq!(text_of(&tokens), "x");
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DIV Class='a'></Div>");
    assert_eq!(tags_of(&tokens), vec![r#"<div class="a">"#, "</div>"]);
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens.len(), 2);
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: " hello ".to_string()
        }
    );
}

#[test]
fn test_comment_with_inner_dashes() {
    let tokens = tokenize("<!-- a -- b --->after");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: " a -- b -".to_string()
        }
    );
    assert_eq!(text_of(&tokens), "after");
}

#[test]
fn test_comment_closed_with_bang() {
    let tokens = tokenize("<!--x--!>y");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "x".to_string()
        }
    );
    assert_eq!(text_of(&tokens), "y");
}

#[test]
fn test_attribute_double_quoted() {
    let tokens = tokenize(r#"<div class="foo">"#);
    assert_eq!(tokens[0].attribute("class"), Some("foo"));
}

#[test]
fn test_attribute_single_quoted() {
    let tokens = tokenize("<div class='bar'>");
    assert_eq!(tokens[0].attribute("class"), Some("bar"));
}

#[test]
fn test_attribute_unquoted() {
    let tokens = tokenize("<input value=yes disabled>");
    assert_eq!(tokens[0].attribute("value"), Some("yes"));
    assert_eq!(tokens[0].attribute("disabled"), Some(""));
}

#[test]
fn test_attribute_text_never_leaks_into_character_tokens() {
    let tokens = tokenize(r#"<a href="https://example.com" title='a > b'>link</a>"#);
    assert_eq!(text_of(&tokens), "link");
    assert_eq!(tokens[0].attribute("title"), Some("a > b"));
}

#[test]
fn test_duplicate_attribute_is_dropped() {
    let mut tokenizer = HTMLTokenizer::new(r#"<p id="a" id="b">"#);
    let mut tokens = Vec::new();
    tokenizer.run(&mut tokens);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].value, "a");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(
        tokenizer
            .issues()
            .iter()
            .any(|issue| issue.message == "duplicate-attribute")
    );
}

#[test]
fn test_duplicate_attribute_value_is_discarded() {
    let tokens = tokenize("<p id=a id=b class=c>");
    assert_eq!(tags_of(&tokens), vec![r#"<p id="a" class="c">"#]);
}

#[test]
fn test_lone_less_than_is_text() {
    let tokens = tokenize("1 < 2 and 3 <= 4");
    assert_eq!(text_of(&tokens), "1 < 2 and 3 <= 4");
}

#[test]
fn test_processing_instruction_is_bogus_comment() {
    let tokens = tokenize("<?php echo 1; ?>text");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "?php echo 1; ?"));
    assert_eq!(text_of(&tokens), "text");
}

#[test]
fn test_cdata_is_bogus_comment() {
    let tokens = tokenize("<![CDATA[x]]>y");
    assert!(matches!(tokens[0], Token::Comment { .. }));
    assert_eq!(text_of(&tokens), "y");
}

#[test]
fn test_script_content_is_raw_text() {
    let tokens = tokenize("<script>if (a < b) { x = '<p>'; }</script><p>after</p>");
    assert_eq!(
        tags_of(&tokens),
        vec!["<script>", "</script>", "<p>", "</p>"]
    );
    assert_eq!(text_of(&tokens), "if (a < b) { x = '<p>'; }after");
}

#[test]
fn test_raw_text_end_tag_is_case_insensitive() {
    let tokens = tokenize("<style>a{}</STYLE>b");
    assert_eq!(tags_of(&tokens), vec!["<style>", "</style>"]);
    assert_eq!(text_of(&tokens), "a{}b");
}

#[test]
fn test_raw_text_ignores_other_end_tags() {
    let tokens = tokenize("<script>document.write('</div>')</script>");
    assert_eq!(tags_of(&tokens), vec!["<script>", "</script>"]);
    assert_eq!(text_of(&tokens), "document.write('</div>')");
}

#[test]
fn test_raw_text_entities_are_not_decoded() {
    let tokens = tokenize("<script>a &amp;&amp; b</script>");
    assert_eq!(text_of(&tokens), "a &amp;&amp; b");
}

#[test]
fn test_self_closing_script_does_not_start_raw_text() {
    let tokens = tokenize("<script src=x.js /><b>bold</b>");
    assert_eq!(tags_of(&tokens).len(), 3);
    assert_eq!(text_of(&tokens), "bold");
}

#[test]
fn test_eof_in_tag_drops_tag() {
    let mut tokenizer = HTMLTokenizer::new("text<div class=\"x");
    let mut tokens = Vec::new();
    tokenizer.run(&mut tokens);
    assert_eq!(text_of(&tokens), "text");
    assert!(tags_of(&tokens).is_empty());
    assert_eq!(tokens.last(), Some(&Token::EndOfFile));
    assert_eq!(tokenizer.issues()[0].message, "eof-in-tag");
}

#[test]
fn test_eof_in_comment_emits_comment() {
    let tokens = tokenize("<!-- unterminated");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " unterminated"));
}

#[test]
fn test_carriage_returns_are_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}

#[test]
fn test_sink_receives_end_once() {
    #[derive(Default)]
    struct Counter {
        tokens: usize,
        ends: usize,
    }
    impl TokenSink for Counter {
        fn process_token(&mut self, _token: Token) {
            self.tokens += 1;
        }
        fn end(&mut self) {
            self.ends += 1;
        }
    }

    let mut counter = Counter::default();
    HTMLTokenizer::new("<p>hi</p>").run(&mut counter);
    assert_eq!(counter.tokens, 5); // <p>, h, i, </p>, EOF
    assert_eq!(counter.ends, 1);
}

#[test]
fn test_parse_issue_records_state() {
    let mut tokenizer = HTMLTokenizer::new("</>");
    let mut tokens = Vec::new();
    tokenizer.run(&mut tokens);
    let issues = tokenizer.into_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "missing-end-tag-name");
    assert_eq!(issues[0].state.to_string(), "EndTagOpen");
}
