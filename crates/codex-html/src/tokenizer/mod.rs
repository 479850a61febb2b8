//! HTML tokenizer module.
//!
//! Implements a subset of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Character reference decoding per § 13.2.5.72.
pub mod character_reference;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Consumers of the token stream.
pub mod sink;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::character_reference::decode_character_references;
pub use self::core::{HTMLTokenizer, ParseIssue, TokenizerState};
pub use sink::{TokenSink, tokenize};
pub use token::{Attribute, Token};
