//! Command fragments.

use std::fmt;
use std::io::Read;

use bytes::Bytes;

/// Options of a literal fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralOptions {
    /// Send without waiting for a continuation (`{n+}`, RFC 7888).
    pub non_sync: bool,
    /// Announce as literal8 (`~{n}`, RFC 3516).
    pub literal8: bool,
}

impl LiteralOptions {
    /// A synchronizing conventional literal.
    pub const SYNC: Self = Self {
        non_sync: false,
        literal8: false,
    };

    /// A non-synchronizing conventional literal.
    pub const NON_SYNC: Self = Self {
        non_sync: true,
        literal8: false,
    };

    /// Returns these options announced as literal8.
    #[must_use]
    pub const fn literal8(mut self) -> Self {
        self.literal8 = true;
        self
    }
}

/// Where a literal's payload comes from.
pub enum LiteralSource {
    /// An in-memory payload.
    Buffer(Bytes),
    /// A reader yielding exactly the announced number of bytes.
    Stream(Box<dyn Read + Send>),
}

impl fmt::Debug for LiteralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(b) => f.debug_tuple("Buffer").field(b).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// A literal payload with its announced length.
#[derive(Debug)]
pub struct Literal {
    pub(crate) source: LiteralSource,
    pub(crate) len: u64,
    pub(crate) options: LiteralOptions,
    /// Payload bytes already written.
    pub(crate) sent: u64,
}

impl Literal {
    /// Returns the announced length.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the literal options.
    #[must_use]
    pub const fn options(&self) -> LiteralOptions {
        self.options
    }
}

/// One element of a command line.
#[derive(Debug)]
pub enum Fragment {
    /// Written verbatim.
    Text(Bytes),
    /// Written as a quoted string with `"` and `\` escaped.
    Quoted(Bytes),
    /// A parenthesized, space-separated group. May be empty.
    Group(Vec<Fragment>),
    /// A byte-counted literal.
    Literal(Literal),
    /// The terminating CRLF.
    LineEnd,
}

impl Fragment {
    /// Creates a verbatim text fragment.
    #[must_use]
    pub fn text(s: impl Into<Bytes>) -> Self {
        Self::Text(s.into())
    }

    /// Creates a quoted string fragment.
    #[must_use]
    pub fn quoted(s: impl Into<Bytes>) -> Self {
        Self::Quoted(s.into())
    }

    /// Creates a parenthesized group.
    #[must_use]
    pub fn group(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Group(items.into_iter().collect())
    }

    /// Creates a literal from an in-memory payload.
    #[must_use]
    pub fn literal(payload: impl Into<Bytes>, options: LiteralOptions) -> Self {
        let payload = payload.into();
        Self::Literal(Literal {
            len: payload.len() as u64,
            source: LiteralSource::Buffer(payload),
            options,
            sent: 0,
        })
    }

    /// Creates a literal read from `source`, which must yield exactly `len`
    /// bytes. Extra bytes are not read.
    #[must_use]
    pub fn literal_stream(
        source: impl Read + Send + 'static,
        len: u64,
        options: LiteralOptions,
    ) -> Self {
        Self::Literal(Literal {
            source: LiteralSource::Stream(Box::new(source)),
            len,
            options,
            sent: 0,
        })
    }

    /// Creates the CRLF terminating a command line.
    #[must_use]
    pub const fn line_end() -> Self {
        Self::LineEnd
    }

    /// Picks the cheapest astring form for `s` (RFC 3501): an atom if every
    /// byte is an atom char, a quoted string if quoting suffices, otherwise a
    /// synchronizing literal.
    #[must_use]
    pub fn astring(s: impl Into<Bytes>) -> Self {
        let s = s.into();
        if s.iter().any(|&b| needs_literal(b)) {
            Self::literal(s, LiteralOptions::SYNC)
        } else if s.is_empty()
            || s.eq_ignore_ascii_case(b"NIL")
            || s.iter().any(|&b| needs_quoting(b))
        {
            Self::Quoted(s)
        } else {
            Self::Text(s)
        }
    }

    /// Returns `NIL` for `None`, otherwise the astring form of the value.
    #[must_use]
    pub fn nstring(s: Option<impl Into<Bytes>>) -> Self {
        s.map_or_else(|| Self::text("NIL"), Self::astring)
    }
}

impl From<&'static str> for Fragment {
    fn from(s: &'static str) -> Self {
        Self::text(s)
    }
}

/// Returns true if the byte cannot appear in an atom.
const fn needs_quoting(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'"' | b'\\' | b'(' | b')' | b'{' | b'%' | b'*' | b'[' | b']'
    ) || b < 0x20
        || b == 0x7F
}

/// Returns true if the byte cannot appear in a quoted string.
const fn needs_literal(b: u8) -> bool {
    matches!(b, b'\r' | b'\n' | 0) || b > 0x7F
}
