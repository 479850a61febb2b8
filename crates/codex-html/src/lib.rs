//! HTML tokenizer for the Codex text toolkit.
//!
//! # Scope
//!
//! This crate implements a reduced form of the
//! **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//! - Data, raw text (`script`/`style`) and tag states
//! - Comment, DOCTYPE and bogus comment handling
//! - Named, decimal and hexadecimal character references
//! - Attribute parsing
//!
//! Tokens are streamed into a [`TokenSink`] as they are produced.
//!
//! # Not Implemented
//!
//! - Tree construction
//! - RCDATA (`title`, `textarea`) and script data escape states
//! - CDATA sections (treated as bogus comments)

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, HTMLTokenizer, ParseIssue, Token, TokenSink, decode_character_references, tokenize,
};
