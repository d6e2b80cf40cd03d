//! Decoded protocol values.
//!
//! Every response line is decoded into a sequence of [`ProtocolValue`]s:
//! `NIL`, a [`Text`] (atom, quoted string or literal) or a parenthesized list.

mod text;

use std::fmt;

pub use text::{Backing, LiteralStream, Text, TextReader};

/// A single decoded protocol element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProtocolValue {
    /// The `NIL` atom.
    Nil,
    /// An atom, quoted string or literal.
    Text(Text),
    /// A parenthesized list. May be empty and may nest.
    List(Vec<ProtocolValue>),
}

impl ProtocolValue {
    /// Creates a text value from a string.
    #[must_use]
    pub fn text(s: &str) -> Self {
        Self::Text(Text::from(s))
    }

    /// Returns true if this is `NIL`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the children, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text as a number, if this is a numeric text value.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_text().and_then(|t| t.to_u64().ok())
    }
}

impl From<Text> for ProtocolValue {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Self>> for ProtocolValue {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// Renders values in wire-like notation. Text is always shown quoted.
impl fmt::Display for ProtocolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("NIL"),
            Self::Text(t) => {
                f.write_str("\"")?;
                for c in t.to_string_lossy().chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
