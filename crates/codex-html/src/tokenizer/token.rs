use core::fmt;

/// An attribute on a start tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Attribute value with character references decoded.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokens handed to a [`TokenSink`](super::TokenSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE name ...>`. Only the name is kept.
    Doctype {
        /// Lowercased DOCTYPE name, if one was given.
        name: Option<String>,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes"
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Set by a trailing `/>`.
        self_closing: bool,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// End tag token. Attributes on end tags are parsed and dropped.
    EndTag {
        /// Lowercased tag name.
        name: String,
    },

    /// Comments, including bogus comments such as `<?php ... ?>`.
    Comment {
        /// Comment text.
        data: String,
    },

    /// A single character of text.
    Character {
        /// The character, with references already decoded.
        data: char,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset (its other state is that it be set), and its attributes list must
    /// be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Create a new comment token with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Create a new DOCTYPE token with a missing name.
    #[must_use]
    pub const fn new_doctype() -> Self {
        Self::Doctype { name: None }
    }

    /// Value of the named attribute on a start tag token.
    #[must_use]
    pub fn attribute(&self, attr_name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == attr_name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => name.push(c),
            _ => panic!("append_to_tag_name called on non-tag token"),
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token." End tags ignore it.
    pub const fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// Append text to a comment token's data, or to a DOCTYPE token's name.
    ///
    /// # Panics
    ///
    /// Panics if called on a tag, character or EOF token.
    pub fn append_to_data(&mut self, c: char) {
        match self {
            Self::Comment { data } => data.push(c),
            Self::Doctype { name } => name.get_or_insert_with(String::new).push(c),
            _ => panic!("append_to_data called on non-comment token"),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    ///
    /// "Start a new attribute in the current tag token." End tags collect
    /// nothing.
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "Append the current input character to the current attribute's name."
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self {
            if let Some(attr) = attributes.last_mut() {
                attr.name.push(c);
            }
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    ///
    /// "Append the current input character to the current attribute's value."
    pub fn append_to_current_attribute_value(&mut self, text: &str) {
        if let Self::StartTag { attributes, .. } = self {
            if let Some(attr) = attributes.last_mut() {
                attr.value.push_str(text);
            }
        }
    }

    /// "if there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute
    /// must be removed from the token."
    ///
    /// Returns true if an attribute was removed.
    pub fn remove_duplicate_attribute(&mut self) -> bool {
        let Self::StartTag { attributes, .. } = self else {
            return false;
        };
        let Some((current, earlier)) = attributes.split_last() else {
            return false;
        };
        if earlier.iter().any(|attr| attr.name == current.name) {
            let _ = attributes.pop();
            return true;
        }
        false
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype { name } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => match data {
                '\n' => write!(f, "Character(\\n)"),
                '\t' => write!(f, "Character(\\t)"),
                ' ' => write!(f, "Character(SPACE)"),
                c => write!(f, "Character({c})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
