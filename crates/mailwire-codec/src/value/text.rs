//! Text values and their storage.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use bytes::{Buf, Bytes};

use crate::{Error, Result};

/// Storage behind a [`Text`] value.
#[derive(Debug, Clone)]
pub enum Backing {
    /// Owned, contiguous buffer. Used for atoms, quoted strings and small literals.
    Bytes(Bytes),
    /// Chunks taken directly from the channel buffer. Used for large literals.
    Stream(LiteralStream),
}

/// Large literal payload kept as the chunks it arrived in.
///
/// Each chunk is a zero-copy slice of the channel's receive buffer, so the
/// payload is never duplicated into one contiguous allocation. Holding a
/// `LiteralStream` keeps those receive buffers alive.
#[derive(Debug, Clone, Default)]
pub struct LiteralStream {
    chunks: Vec<Bytes>,
    len: usize,
}

impl LiteralStream {
    /// Creates an empty stream.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Appends a chunk.
    pub fn push(&mut self, chunk: Bytes) {
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    /// Returns the total number of bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the stream holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns a reader positioned at the start of the stream.
    #[must_use]
    pub fn reader(&self) -> TextReader {
        TextReader {
            chunks: self.chunks.iter().cloned().collect(),
        }
    }
}

/// Sequential reader over a [`Text`] value.
///
/// Implements both [`io::Read`] and [`bytes::Buf`].
#[derive(Debug, Clone)]
pub struct TextReader {
    chunks: VecDeque<Bytes>,
}

impl io::Read for TextReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(front) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let n = front.len().min(buf.len());
        buf[..n].copy_from_slice(&front[..n]);
        front.advance(n);
        if front.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }
}

impl Buf for TextReader {
    fn remaining(&self) -> usize {
        self.chunks.iter().map(Bytes::len).sum()
    }

    fn chunk(&self) -> &[u8] {
        match self.chunks.front() {
            Some(c) => c,
            None => &[],
        }
    }

    fn advance(&mut self, mut cnt: usize) {
        while cnt > 0 {
            let Some(front) = self.chunks.front_mut() else {
                return;
            };
            let n = front.len().min(cnt);
            front.advance(n);
            cnt -= n;
            if front.is_empty() {
                self.chunks.pop_front();
            }
        }
    }
}

/// An ordered byte sequence: an atom, quoted string or literal payload.
///
/// Two values compare equal when their bytes are equal, regardless of backing.
#[derive(Clone)]
pub struct Text {
    backing: Backing,
}

impl Text {
    /// Creates a text value backed by an owned buffer.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            backing: Backing::Bytes(bytes.into()),
        }
    }

    /// Creates a text value backed by a literal stream.
    #[must_use]
    pub const fn from_stream(stream: LiteralStream) -> Self {
        Self {
            backing: Backing::Stream(stream),
        }
    }

    /// Returns the storage backing this value.
    #[must_use]
    pub const fn backing(&self) -> &Backing {
        &self.backing
    }

    /// Returns true if the value is backed by a literal stream.
    #[must_use]
    pub const fn is_streamed(&self) -> bool {
        matches!(self.backing, Backing::Stream(_))
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Bytes(b) => b.len(),
            Backing::Stream(s) => s.len(),
        }
    }

    /// Returns true if the value has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bytes, borrowing when the storage is contiguous.
    #[must_use]
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match &self.backing {
            Backing::Bytes(b) => Cow::Borrowed(&b[..]),
            Backing::Stream(s) => match s.chunks.as_slice() {
                [] => Cow::Borrowed(&[]),
                [only] => Cow::Borrowed(&only[..]),
                chunks => Cow::Owned(chunks.concat()),
            },
        }
    }

    /// Decodes the bytes as UTF-8, returning `None` if they are not valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        match self.to_bytes() {
            Cow::Borrowed(b) => std::str::from_utf8(b).ok().map(Cow::Borrowed),
            Cow::Owned(v) => String::from_utf8(v).ok().map(Cow::Owned),
        }
    }

    /// Decodes the bytes as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Parses the bytes as an unsigned decimal number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] if the value is empty or contains
    /// non-digits, and [`Error::IntegerOverflow`] if it exceeds `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64> {
        let bytes = self.to_bytes();
        if bytes.is_empty() {
            return Err(Error::InvalidNumber);
        }
        bytes.iter().try_fold(0u64, |acc, &b| {
            if !b.is_ascii_digit() {
                return Err(Error::InvalidNumber);
            }
            acc.checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(b - b'0')))
                .ok_or(Error::IntegerOverflow)
        })
    }

    /// Copies bytes starting at `offset` into `buf`, returning how many were copied.
    #[must_use]
    pub fn copy_to(&self, offset: usize, buf: &mut [u8]) -> usize {
        let mut skip = offset;
        let mut written = 0;
        for chunk in self.chunks() {
            if written == buf.len() {
                break;
            }
            if skip >= chunk.len() {
                skip -= chunk.len();
                continue;
            }
            let src = &chunk[skip..];
            skip = 0;
            let n = src.len().min(buf.len() - written);
            buf[written..written + n].copy_from_slice(&src[..n]);
            written += n;
        }
        written
    }

    /// Returns a reader over the bytes.
    #[must_use]
    pub fn reader(&self) -> TextReader {
        match &self.backing {
            Backing::Bytes(b) => TextReader {
                chunks: std::iter::once(b.clone()).filter(|c| !c.is_empty()).collect(),
            },
            Backing::Stream(s) => s.reader(),
        }
    }

    fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        let (single, many): (Option<&Bytes>, &[Bytes]) = match &self.backing {
            Backing::Bytes(b) => (Some(b), &[]),
            Backing::Stream(s) => (None, &s.chunks),
        };
        single.into_iter().chain(many).map(|c| &c[..])
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.len() == other.len() && *self.to_bytes() == *other
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self == other.as_bytes()
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_streamed() { "stream" } else { "bytes" };
        if self.len() > 64 {
            write!(f, "Text<{kind}>({} bytes)", self.len())
        } else {
            write!(f, "Text<{kind}>({:?})", self.to_string_lossy())
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl From<Vec<u8>> for Text {
    fn from(v: Vec<u8>) -> Self {
        Self::from_bytes(v)
    }
}
