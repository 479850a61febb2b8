//! Plain-text extraction on top of the streaming tokenizer.

use codex_common::config::ExtractConfig;
use codex_html::tokenizer::helpers::RAW_TEXT_ELEMENTS;
use codex_html::{HTMLTokenizer, ParseIssue, Token, TokenSink, decode_character_references};

/// A [`TokenSink`] that keeps the character data of a document and drops
/// everything else.
///
/// Contents of `script` and `style` are held back until their end tag
/// arrives, so an element left open at the end of input contributes nothing.
/// They are kept unless the extractor was built to skip them.
#[derive(Debug, Default)]
pub struct TextExtractor {
    text: String,
    pending_raw_text: String,
    skip_raw_text: bool,
    in_raw_text: bool,
}

impl TextExtractor {
    /// Create an extractor honoring `config`.
    #[must_use]
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            skip_raw_text: !config.include_raw_text,
            ..Self::default()
        }
    }

    /// The text collected so far, undecoded and with whitespace untouched.
    #[must_use]
    pub fn collected(&self) -> &str {
        &self.text
    }

    /// Finish extraction: decode character references left in the collected
    /// text, collapse whitespace runs to one space and trim.
    ///
    /// Data-state text was already decoded by the tokenizer, so it goes
    /// through a second decoding here: `&amp;lt;` ends up as `<`.
    #[must_use]
    pub fn finish(self) -> String {
        collapse_whitespace(&decode_character_references(&self.text))
    }
}

impl TokenSink for TextExtractor {
    fn process_token(&mut self, token: Token) {
        match token {
            Token::Character { data } if self.in_raw_text => self.pending_raw_text.push(data),
            Token::Character { data } => self.text.push(data),
            Token::StartTag {
                name, self_closing, ..
            } => {
                if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    self.in_raw_text = true;
                }
            }
            Token::EndTag { name } => {
                if self.in_raw_text && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    self.in_raw_text = false;
                    if !self.skip_raw_text {
                        self.text.push_str(&self.pending_raw_text);
                    }
                    self.pending_raw_text.clear();
                }
            }
            // Raw text still pending here never saw its end tag.
            Token::EndOfFile => self.pending_raw_text.clear(),
            Token::Doctype { .. } | Token::Comment { .. } => {}
        }
    }
}

/// Replace every run of whitespace with a single space and trim both ends.
///
/// Whitespace is Unicode `White_Space`, which includes the no-break space
/// produced by `&nbsp;`.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the visible text of `html` with the default [`ExtractConfig`].
///
/// Tags, attributes, comments and doctypes are discarded, entities are
/// decoded, and whitespace is collapsed. Absent or empty input yields an
/// empty string.
///
/// ```
/// use codex_text::extract_text;
///
/// assert_eq!(extract_text("<p>Fish &amp; <b>chips</b></p>"), "Fish & chips");
/// ```
#[must_use]
pub fn extract_text<'a>(html: impl Into<Option<&'a str>>) -> String {
    extract_text_with(html, &ExtractConfig::default())
}

/// Extract the visible text of `html` as configured by `config`.
#[must_use]
pub fn extract_text_with<'a>(html: impl Into<Option<&'a str>>, config: &ExtractConfig) -> String {
    extract_text_with_issues(html, config).0
}

/// Extract text and also return the parse errors the tokenizer recovered
/// from.
#[must_use]
pub fn extract_text_with_issues<'a>(
    html: impl Into<Option<&'a str>>,
    config: &ExtractConfig,
) -> (String, Vec<ParseIssue>) {
    let Some(html) = html.into().filter(|html| !html.is_empty()) else {
        return (String::new(), Vec::new());
    };

    let mut extractor = TextExtractor::new(config);
    let mut tokenizer = HTMLTokenizer::new(html);
    tokenizer.run(&mut extractor);
    (extractor.finish(), tokenizer.into_issues())
}
