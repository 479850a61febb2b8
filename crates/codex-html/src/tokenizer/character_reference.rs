//! Character reference decoding for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The named, numeric and ambiguous-ampersand states are collapsed into one
//! lookahead routine that runs right after the `&` has been consumed.

use super::core::HTMLTokenizer;
use super::named_character_references::{any_entity_has_prefix, lookup_entity};

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is one of the numbers in the first column of the following
/// table, then find the row with that number in the first column, and set the
/// character reference code to the number in the second column of that row."
const C1_REPLACEMENTS: [(u32, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// Any code point above this is out of range.
const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Controls and noncharacters that a numeric reference drops entirely.
///
/// CR, TAB, LF and FF are not included; C1 controls go through
/// [`C1_REPLACEMENTS`] first.
const fn is_dropped_code_point(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF)
        || (code & 0xFFFE) == 0xFFFE
}

/// Map a numeric character reference to the character it produces.
///
/// Returns the character (`None` for control and noncharacter code points,
/// which produce nothing) and, when the reference was invalid, the parse
/// error it raises.
#[must_use]
pub fn resolve_numeric_reference(code: u32) -> (Option<char>, Option<&'static str>) {
    match code {
        0 => (Some('\u{FFFD}'), Some("null-character-reference")),
        c if c > MAX_CODE_POINT => (
            Some('\u{FFFD}'),
            Some("character-reference-outside-unicode-range"),
        ),
        0xD800..=0xDFFF => (Some('\u{FFFD}'), Some("surrogate-character-reference")),
        0x80..=0x9F => {
            let replacement = C1_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == code)
                .map(|(_, to)| *to);
            // Unmapped C1 controls pass through as themselves.
            (
                replacement.or_else(|| char::from_u32(code)),
                Some("control-character-reference"),
            )
        }
        c if is_dropped_code_point(c) => {
            let error = if c >= 0xFDD0 {
                "noncharacter-character-reference"
            } else {
                "control-character-reference"
            };
            (None, Some(error))
        }
        _ => (char::from_u32(code), None),
    }
}

/// Decode every character reference in `text`, leaving everything else as is.
///
/// References are resolved exactly as in the data state, so unknown names
/// and `&` followed by anything else stay literal. Line endings are
/// normalized to `\n` like any tokenizer input.
///
/// ```
/// use codex_html::tokenizer::character_reference::decode_character_references;
///
/// assert_eq!(decode_character_references("a &lt; b &amp;&amp; c"), "a < b && c");
/// assert_eq!(decode_character_references("<p>&bogus;</p>"), "<p>&bogus;</p>");
/// ```
#[must_use]
pub fn decode_character_references(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut tokenizer = HTMLTokenizer::new(text);
    let mut decoded = String::with_capacity(text.len());
    while let Some(c) = tokenizer.consume() {
        if c == '&' {
            decoded.push_str(&tokenizer.consume_character_reference(false));
        } else {
            decoded.push(c);
        }
    }
    decoded
}

impl HTMLTokenizer {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// Called with the `&` already consumed. Consumes as much of the reference
    /// as matches and returns the text to emit (or to append to the current
    /// attribute value). Anything that is not a reference comes back as a
    /// literal `&` and is left in the input.
    pub(super) fn consume_character_reference(&mut self, in_attribute: bool) -> String {
        match self.peek_codepoint(0) {
            Some('#') => self.consume_numeric_character_reference(),
            Some(c) if c.is_ascii_alphanumeric() => {
                self.consume_named_character_reference(in_attribute)
            }
            _ => String::from('&'),
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the first column of the named
    /// character references table."
    fn consume_named_character_reference(&mut self, in_attribute: bool) -> String {
        let rest = &self.input[self.current_pos..];
        let mut candidate = String::new();
        for c in rest.chars() {
            if !(c.is_ascii_alphanumeric() || c == ';') {
                break;
            }
            candidate.push(c);
            if c == ';' || !any_entity_has_prefix(&candidate) {
                break;
            }
        }

        let matched = (1..=candidate.len())
            .rev()
            .find_map(|len| lookup_entity(&candidate[..len]).map(|text| (len, text)));
        let next_after_match = matched.and_then(|(len, _)| rest[len..].chars().next());
        // [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
        // "U+003B SEMICOLON (;) - This is an unknown-named-character-reference parse error."
        let unknown_reference = rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .starts_with(';');

        let Some((len, text)) = matched else {
            if unknown_reference {
                self.log_parse_error("unknown-named-character-reference");
            }
            return String::from('&');
        };

        let ends_with_semicolon = candidate[..len].ends_with(';');
        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;), and
        // the next input character is either a U+003D EQUALS SIGN character (=) or
        // an ASCII alphanumeric, then, for historical reasons, flush code points
        // consumed as a character reference and switch to the return state."
        if in_attribute
            && !ends_with_semicolon
            && next_after_match.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            return String::from('&');
        }
        if !ends_with_semicolon {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }
        self.current_pos += len;
        text.to_string()
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    fn consume_numeric_character_reference(&mut self) -> String {
        let start = self.current_pos;
        // "#"
        self.current_pos += 1;
        let hex = matches!(self.peek_codepoint(0), Some('x' | 'X'));
        if hex {
            self.current_pos += 1;
        }
        let radix = if hex { 16 } else { 10 };

        let mut code: u32 = 0;
        let mut digits = 0usize;
        while let Some(digit) = self.peek_codepoint(0).and_then(|c| c.to_digit(radix)) {
            // Saturate past the Unicode range; the value only needs to stay out of range.
            code = code
                .saturating_mul(radix)
                .saturating_add(digit)
                .min(MAX_CODE_POINT + 1);
            digits += 1;
            self.current_pos += 1;
        }

        // [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
        // "This is an absence-of-digits-in-numeric-character-reference parse
        // error. Flush code points consumed as a character reference."
        if digits == 0 {
            self.log_parse_error("absence-of-digits-in-numeric-character-reference");
            let consumed = format!("&{}", &self.input[start..self.current_pos]);
            return consumed;
        }

        if self.peek_codepoint(0) == Some(';') {
            self.current_pos += 1;
        } else {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }

        let (c, error) = resolve_numeric_reference(code);
        if let Some(error) = error {
            self.log_parse_error(error);
        }
        c.map(String::from).unwrap_or_default()
    }
}
