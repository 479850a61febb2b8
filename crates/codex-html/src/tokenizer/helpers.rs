//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Current token mutation
//! - Token emission ("Emit the current token")
//! - RAWTEXT helpers for `script` and `style`

use super::core::{HTMLTokenizer, ParseIssue, TokenizerState};
use super::token::Token;

/// Elements whose content is tokenized as raw text.
pub const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current character.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// "ASCII case-insensitive match for the word 'DOCTYPE'"
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .get(..target.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(target))
    }

    /// Consume the given ASCII string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// "U+0009 CHARACTER TABULATION (tab)", "U+000A LINE FEED (LF)",
    /// "U+000C FORM FEED (FF)", "U+0020 SPACE"
    ///
    /// CR is absent because the input is newline-normalized first.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Current Token Helpers
// =============================================================================

impl HTMLTokenizer {
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_tag_name(c);
        }
    }

    pub(super) fn append_to_data(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_data(c);
        }
    }

    pub(super) fn start_new_attribute(&mut self) {
        self.discarding_attribute = false;
        if let Some(ref mut token) = self.current_token {
            token.start_new_attribute();
        }
    }

    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_name(c);
        }
    }

    pub(super) fn append_to_attribute_value(&mut self, text: &str) {
        if self.discarding_attribute {
            return;
        }
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_value(text);
        }
    }

    pub(super) fn append_char_to_attribute_value(&mut self, c: char) {
        let mut buf = [0; 4];
        self.append_to_attribute_value(c.encode_utf8(&mut buf));
    }

    /// "When the user agent leaves the attribute name state ... if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error and the new attribute must be
    /// removed from the token."
    pub(super) fn check_duplicate_attribute(&mut self) {
        let removed = self
            .current_token
            .as_mut()
            .is_some_and(Token::remove_duplicate_attribute);
        if removed {
            self.discarding_attribute = true;
            self.log_parse_error("duplicate-attribute");
        }
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token" - adds the token to the output stream.
    ///
    /// Start tags for `script` and `style` switch the tokenizer to the RAWTEXT
    /// state, as the tree builder would. A self-closing `<script/>` does not.
    pub(super) fn emit_token(&mut self) {
        let Some(token) = self.current_token.take() else {
            return;
        };
        if let Token::StartTag {
            ref name,
            self_closing,
            ..
        } = token
        {
            self.last_start_tag_name = Some(name.clone());
            if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.switch_to(TokenizerState::RAWTEXT);
            }
        }
        self.token_stream.push(token);
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::Character { data: c });
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::EndOfFile);
        self.at_eof = true;
    }

    /// "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is dropped.
    pub(super) fn emit_eof_in_tag(&mut self) {
        self.log_parse_error("eof-in-tag");
        self.current_token = None;
        self.emit_eof_token();
    }

    /// "EOF - This is an eof-in-comment parse error. Emit the current comment
    /// token. Emit an end-of-file token."
    pub(super) fn emit_eof_in_comment(&mut self) {
        self.log_parse_error("eof-in-comment");
        self.emit_token();
        self.emit_eof_token();
    }
}

// =============================================================================
// RAWTEXT Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        match (&self.last_start_tag_name, &self.current_token) {
            (Some(last_start_tag), Some(Token::EndTag { name })) => name == last_start_tag,
            _ => false,
        }
    }

    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    ///
    /// "Anything else":
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer... Reconsume in the RAWTEXT state."
    pub(super) fn emit_rawtext_end_tag_name_anything_else(&mut self) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        let buffer = std::mem::take(&mut self.temporary_buffer);
        for c in buffer.chars() {
            self.emit_character_token(c);
        }
        self.current_token = None;
        self.reconsume_in(TokenizerState::RAWTEXT);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error. Parse errors in HTML are not fatal - the
    /// tokenizer recovers and continues.
    pub(super) fn log_parse_error(&mut self, message: &str) {
        self.issues.push(ParseIssue {
            message: message.to_string(),
            position: self.current_pos,
            state: self.state,
        });
    }
}
