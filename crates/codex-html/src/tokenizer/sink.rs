//! Consumers of the tokenizer's output.

use super::core::HTMLTokenizer;
use super::token::Token;

/// Receives tokens from [`HTMLTokenizer::run`] in document order.
pub trait TokenSink {
    /// Handle one token.
    fn process_token(&mut self, token: Token);

    /// Called once after the end-of-file token has been delivered.
    fn end(&mut self) {}
}

/// Collects every token, including the trailing [`Token::EndOfFile`].
impl TokenSink for Vec<Token> {
    fn process_token(&mut self, token: Token) {
        self.push(token);
    }
}

/// Tokenize `input` into a vector of tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    HTMLTokenizer::new(input).run(&mut tokens);
    tokens
}
