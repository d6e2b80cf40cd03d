//! Incremental response decoder.
//!
//! The decoder turns buffered response lines into [`ProtocolValue`]s. A single
//! response unit may span several lines when it embeds literals:
//!
//! ```text
//! * 1 FETCH (BODY[] {12}\r\n
//! test message)\r\n
//! ```
//!
//! Decoding is resumable. When the channel runs out of data, either before a
//! line is complete or in the middle of a literal payload, [`ResponseDecoder::decode`]
//! returns `Ok(None)` and records where it stopped in the caller-held
//! [`DecodeContext`]. The next call continues from that point; bytes that were
//! already consumed are never parsed again.
//!
//! # Example
//!
//! ```
//! use mailwire_codec::{DecodeContext, LineChannel, ProtocolValue, ResponseDecoder};
//!
//! let decoder = ResponseDecoder::new();
//! let mut channel = LineChannel::new();
//! let mut ctx = DecodeContext::new();
//!
//! channel.feed(b"(BODY[] {5}\r\nhel");
//! assert!(decoder.decode(&mut channel, &mut ctx).unwrap().is_none());
//!
//! channel.feed(b"lo)\r\n");
//! let values = decoder.decode(&mut channel, &mut ctx).unwrap().unwrap();
//! let list = values[0].as_list().unwrap();
//! assert_eq!(list[1], ProtocolValue::text("hello"));
//! ```

mod scan;

use bytes::{Bytes, BytesMut};

use crate::channel::LineChannel;
use crate::config::DecoderConfig;
use crate::value::{LiteralStream, ProtocolValue, Text};
use crate::{Error, Result};

pub use scan::Announcement;

/// Literal payload being collected.
#[derive(Debug)]
enum Payload {
    Buffered(BytesMut),
    Streamed(LiteralStream),
}

impl Payload {
    fn push(&mut self, chunk: Bytes) {
        match self {
            Self::Buffered(buf) => buf.extend_from_slice(&chunk),
            Self::Streamed(stream) => stream.push(chunk),
        }
    }

    fn into_text(self) -> Text {
        match self {
            Self::Buffered(buf) => Text::from_bytes(buf.freeze()),
            Self::Streamed(stream) => Text::from_stream(stream),
        }
    }
}

#[derive(Debug)]
struct PendingLiteral {
    remaining: usize,
    payload: Payload,
}

/// Resumption state of a response unit being decoded.
///
/// Hold one per connection and pass it to every [`ResponseDecoder::decode`]
/// call. After a decode error the context is no longer meaningful and must be
/// replaced with a fresh one.
#[derive(Debug)]
pub struct DecodeContext {
    /// Lists under construction; index 0 holds the top-level values.
    stack: Vec<Vec<ProtocolValue>>,
    pending: Option<PendingLiteral>,
    /// Offset into the first line, consumed when that line is read.
    start_offset: usize,
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a context whose first line is decoded from `offset` onwards.
    ///
    /// Use this when a prefix of the line (a tag and status, say) has
    /// already been interpreted by the caller via [`LineChannel::peek_line`].
    #[must_use]
    pub fn starting_at(offset: usize) -> Self {
        Self {
            stack: vec![Vec::new()],
            pending: None,
            start_offset: offset,
        }
    }

    /// Returns true if no response unit is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none() && self.stack.len() == 1 && self.stack[0].is_empty()
    }

    /// Returns the current list nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Returns the number of literal bytes still expected, if a literal is pending.
    #[must_use]
    pub fn literal_remaining(&self) -> Option<usize> {
        self.pending.as_ref().map(|p| p.remaining)
    }

    fn push(&mut self, value: ProtocolValue) {
        if let Some(top) = self.stack.last_mut() {
            top.push(value);
        }
    }

    fn open_list(&mut self) {
        self.stack.push(Vec::new());
    }

    fn close_list(&mut self, position: usize) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(Error::UnbalancedList { position });
        }
        let items = self.stack.pop().unwrap_or_default();
        self.push(ProtocolValue::List(items));
        Ok(())
    }

    fn finish(&mut self) -> Vec<ProtocolValue> {
        let values = self.stack.pop().unwrap_or_default();
        *self = Self::new();
        values
    }
}

/// How a line ended.
enum LineEnd {
    /// CRLF reached with no open list: the response unit is complete.
    Complete,
    /// The line ended with a literal announcement.
    Literal(Announcement),
}

/// Incremental decoder for IMAP/POP3 response data.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    config: DecoderConfig,
}

impl ResponseDecoder {
    /// Creates a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with the given configuration.
    #[must_use]
    pub const fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes the next response unit from the channel.
    ///
    /// Returns `Ok(Some(values))` once the unit is complete and resets `ctx`,
    /// or `Ok(None)` when more data is needed; in that case `ctx` holds the
    /// resumption state and the call should be repeated after feeding the
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns a decode error for malformed data, [`Error::LineTooLong`] and
    /// [`Error::UnexpectedEndOfChannel`] from the channel. After an error the
    /// response unit is lost and `ctx` must be discarded.
    pub fn decode(
        &self,
        channel: &mut LineChannel,
        ctx: &mut DecodeContext,
    ) -> Result<Option<Vec<ProtocolValue>>> {
        loop {
            if let Some(pending) = ctx.pending.as_mut() {
                if !Self::fill_literal(channel, pending)? {
                    return Ok(None);
                }
                if let Some(done) = ctx.pending.take() {
                    ctx.push(ProtocolValue::Text(done.payload.into_text()));
                }
            }

            let Some(line) = channel.read_line()? else {
                return Ok(None);
            };
            let offset = std::mem::take(&mut ctx.start_offset);

            match self.decode_line(&line, offset, ctx)? {
                LineEnd::Complete => return Ok(Some(ctx.finish())),
                LineEnd::Literal(announcement) => self.begin_literal(announcement, ctx)?,
            }
        }
    }

    /// Decodes text that has no CRLF terminator, such as the remainder of a
    /// status line or the inside of a response code.
    ///
    /// List rules apply as usual. A literal announcement has no payload to
    /// read and results in [`Error::UnexpectedEndOfChannel`].
    ///
    /// # Errors
    ///
    /// Returns the same decode errors as [`ResponseDecoder::decode`].
    pub fn decode_text(&self, text: &[u8]) -> Result<Vec<ProtocolValue>> {
        let mut channel = LineChannel::with_max_line_length(text.len() + 2);
        channel.feed(text);
        channel.feed(b"\r\n");
        channel.close();

        let mut ctx = DecodeContext::new();
        self.decode(&mut channel, &mut ctx)?
            .ok_or(Error::UnexpectedEndOfChannel)
    }

    /// Moves buffered literal bytes into the pending payload.
    ///
    /// Returns true once the payload is complete.
    fn fill_literal(channel: &mut LineChannel, pending: &mut PendingLiteral) -> Result<bool> {
        while pending.remaining > 0 {
            let chunk = channel.read_up_to(pending.remaining)?;
            if chunk.is_empty() {
                return Ok(false);
            }
            pending.remaining -= chunk.len();
            pending.payload.push(chunk);
        }
        Ok(true)
    }

    fn begin_literal(&self, announcement: Announcement, ctx: &mut DecodeContext) -> Result<()> {
        let len = usize::try_from(announcement.len).map_err(|_| Error::LiteralTooLarge {
            size: announcement.len,
            max: self.config.max_literal_size,
        })?;

        let payload = if len >= self.config.literal_stream_threshold {
            tracing::debug!(len, "streaming large literal");
            Payload::Streamed(LiteralStream::new())
        } else {
            Payload::Buffered(BytesMut::with_capacity(len))
        };

        tracing::trace!(
            len,
            literal8 = announcement.literal8,
            non_sync = announcement.non_sync,
            "literal announced"
        );

        ctx.pending = Some(PendingLiteral {
            remaining: len,
            payload,
        });
        Ok(())
    }

    /// Decodes one line from `offset`, pushing values into `ctx`.
    fn decode_line(&self, line: &Bytes, offset: usize, ctx: &mut DecodeContext) -> Result<LineEnd> {
        let end = line.len().saturating_sub(2);
        let mut pos = offset.min(end);

        loop {
            while pos < end && line[pos] == b' ' {
                pos += 1;
            }
            if pos == end {
                if ctx.depth() > 0 {
                    return Err(Error::UnbalancedList { position: pos });
                }
                return Ok(LineEnd::Complete);
            }

            match line[pos] {
                b'"' => {
                    let (text, next) = scan::quoted(line, pos, end)?;
                    ctx.push(ProtocolValue::Text(Text::from_bytes(text)));
                    pos = next;
                }
                b'(' => {
                    ctx.open_list();
                    pos += 1;
                }
                b')' => {
                    ctx.close_list(pos)?;
                    pos += 1;
                }
                b'{' => {
                    return scan::announcement(line, pos, end, self.config.max_literal_size)
                        .map(LineEnd::Literal);
                }
                b'~' if line.get(pos + 1) == Some(&b'{') => {
                    return scan::announcement(line, pos, end, self.config.max_literal_size)
                        .map(LineEnd::Literal);
                }
                _ => {
                    let (atom, next) = scan::atom(line, pos, end)?;
                    if atom.eq_ignore_ascii_case(b"NIL") {
                        ctx.push(ProtocolValue::Nil);
                    } else {
                        ctx.push(ProtocolValue::Text(Text::from_bytes(atom)));
                    }
                    pos = next;
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decode_all(input: &[u8]) -> Result<Option<Vec<ProtocolValue>>> {
        let mut channel = LineChannel::new();
        channel.feed(input);
        ResponseDecoder::new().decode(&mut channel, &mut DecodeContext::new())
    }

    fn decode_ok(input: &[u8]) -> Vec<ProtocolValue> {
        decode_all(input).unwrap().unwrap()
    }

    fn text(s: &str) -> ProtocolValue {
        ProtocolValue::text(s)
    }

    #[test]
    fn test_nil() {
        assert_eq!(decode_ok(b"NIL\r\n"), vec![ProtocolValue::Nil]);
        assert_eq!(decode_ok(b"nil\r\n"), vec![ProtocolValue::Nil]);
        assert_eq!(decode_ok(b"\"NIL\"\r\n"), vec![text("NIL")]);
    }

    #[test]
    fn test_atoms_separated_by_spaces() {
        assert_eq!(
            decode_ok(b"INBOX   NIL   ~/Mail/foo\r\n"),
            vec![text("INBOX"), ProtocolValue::Nil, text("~/Mail/foo")]
        );
    }

    #[test]
    fn test_atom_with_section() {
        assert_eq!(
            decode_ok(b"BODY[HEADER.FIELDS (SUBJECT DATE)]\r\n"),
            vec![text("BODY[HEADER.FIELDS (SUBJECT DATE)]")]
        );
    }

    #[test]
    fn test_quoted() {
        assert_eq!(
            decode_ok(b"\"INBOX.\\\"QUOTED\\\"\" \"INBOX.\\\\(^o^)/\"\r\n"),
            vec![text("INBOX.\"QUOTED\""), text("INBOX.\\(^o^)/")]
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(decode_ok(b"\r\n"), Vec::<ProtocolValue>::new());
    }

    #[test]
    fn test_lists() {
        assert_eq!(decode_ok(b"()\r\n"), vec![ProtocolValue::List(vec![])]);
        assert_eq!(
            decode_ok(b"(() ())\r\n"),
            vec![ProtocolValue::List(vec![
                ProtocolValue::List(vec![]),
                ProtocolValue::List(vec![]),
            ])]
        );
        assert_eq!(
            decode_ok(b"(NIL \\Noselect \"a b\")\r\n"),
            vec![ProtocolValue::List(vec![
                ProtocolValue::Nil,
                text("\\Noselect"),
                text("a b"),
            ])]
        );
    }

    #[test]
    fn test_nested_lists() {
        let values = decode_ok(b"(2)(3 6 (4 23)(44 7 96))\r\n");
        assert_eq!(values.len(), 2);

        let first = values[0].as_list().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].as_u64(), Some(2));

        let second = values[1].as_list().unwrap();
        assert_eq!(second.len(), 4);
        assert_eq!(second[0].as_u64(), Some(3));
        assert_eq!(second[1].as_u64(), Some(6));
        let third: Vec<_> = second[2].as_list().unwrap().iter().map(ProtocolValue::as_u64).collect();
        assert_eq!(third, vec![Some(4), Some(23)]);
        let fourth: Vec<_> = second[3].as_list().unwrap().iter().map(ProtocolValue::as_u64).collect();
        assert_eq!(fourth, vec![Some(44), Some(7), Some(96)]);
    }

    #[test]
    fn test_literal_zero_length() {
        let values = decode_ok(b"{0}\r\n\r\n");
        assert_eq!(values.len(), 1);
        let text = values[0].as_text().unwrap();
        assert!(text.is_empty());
        assert!(!text.is_streamed());
    }

    #[test]
    fn test_literal_ending_with_crlf() {
        assert_eq!(decode_ok(b"{8}\r\nabcdef\r\n\r\n"), vec![text("abcdef\r\n")]);
    }

    #[test]
    fn test_literal_containing_specials() {
        assert_eq!(
            decode_ok(b"{16}\r\n(\"quoted\r\n {8}\")\r\n"),
            vec![text("(\"quoted\r\n {8}\")")]
        );
    }

    #[test]
    fn test_literal8() {
        assert_eq!(
            decode_ok(b"~{8}\r\n\x00\x01\x02\x03\x04\x05\x06\x07\r\n"),
            vec![ProtocolValue::Text(Text::from(vec![0, 1, 2, 3, 4, 5, 6, 7]))]
        );
    }

    #[test]
    fn test_tilde_atom_is_not_literal8() {
        assert_eq!(decode_ok(b"~/Mail/foo\r\n"), vec![text("~/Mail/foo")]);
    }

    #[test]
    fn test_literals_following_literal() {
        assert_eq!(
            decode_ok(b"{8}\r\n12345678 {4}\r\n1234 {4}\r\n5678\r\n"),
            vec![text("12345678"), text("1234"), text("5678")]
        );
    }

    #[test]
    fn test_literal_inside_list() {
        assert_eq!(
            decode_ok(b"(BODY[] {12}\r\ntest message)\r\n"),
            vec![ProtocolValue::List(vec![text("BODY[]"), text("test message")])]
        );
    }

    #[test]
    fn test_non_sync_literal_decodes_like_sync() {
        assert_eq!(decode_ok(b"{3+}\r\nabc\r\n"), vec![text("abc")]);
    }

    #[test]
    fn test_incomplete_then_resume() {
        let decoder = ResponseDecoder::new();
        let mut channel = LineChannel::new();
        let mut ctx = DecodeContext::new();

        channel.feed(b"(\"a\" {4}\r\n12");
        assert!(decoder.decode(&mut channel, &mut ctx).unwrap().is_none());
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.literal_remaining(), Some(2));

        channel.feed(b"34");
        assert!(decoder.decode(&mut channel, &mut ctx).unwrap().is_none());
        assert_eq!(ctx.literal_remaining(), None);

        channel.feed(b")\r\n");
        let values = decoder.decode(&mut channel, &mut ctx).unwrap().unwrap();
        assert_eq!(values, vec![ProtocolValue::List(vec![text("a"), text("1234")])]);
        assert!(ctx.is_idle());
    }

    #[test]
    fn test_consecutive_units() {
        let decoder = ResponseDecoder::new();
        let mut channel = LineChannel::new();
        let mut ctx = DecodeContext::new();
        channel.feed(b"A {1}\r\nx\r\nB\r\n");

        assert_eq!(
            decoder.decode(&mut channel, &mut ctx).unwrap().unwrap(),
            vec![text("A"), text("x")]
        );
        assert_eq!(
            decoder.decode(&mut channel, &mut ctx).unwrap().unwrap(),
            vec![text("B")]
        );
        assert!(decoder.decode(&mut channel, &mut ctx).unwrap().is_none());
    }

    #[test]
    fn test_start_offset() {
        let decoder = ResponseDecoder::new();
        let mut channel = LineChannel::new();
        channel.feed(b"* LIST (\\HasNoChildren) \"/\" INBOX\r\n");

        let prefix = channel.peek_line().unwrap();
        assert!(prefix.starts_with(b"* LIST "));

        let mut ctx = DecodeContext::starting_at(7);
        let values = decoder.decode(&mut channel, &mut ctx).unwrap().unwrap();
        assert_eq!(
            values,
            vec![
                ProtocolValue::List(vec![text("\\HasNoChildren")]),
                text("/"),
                text("INBOX"),
            ]
        );
    }

    #[test]
    fn test_large_literal_is_streamed() {
        let payload = vec![b'x'; 1024 * 1024];
        let mut input = format!("{{{}}}\r\n", payload.len()).into_bytes();
        input.extend_from_slice(&payload);
        input.extend_from_slice(b"\r\n");

        let values = decode_ok(&input);
        let text = values[0].as_text().unwrap();
        assert!(text.is_streamed());
        assert_eq!(text.len(), payload.len());
        assert_eq!(*text, payload[..]);
    }

    #[test]
    fn test_small_literal_is_buffered() {
        let values = decode_ok(b"{8}\r\n12345678\r\n");
        assert!(!values[0].as_text().unwrap().is_streamed());
    }

    #[test]
    fn test_threshold_is_configurable() {
        let decoder =
            ResponseDecoder::with_config(DecoderConfig::builder().literal_stream_threshold(4).build());
        let mut channel = LineChannel::new();
        channel.feed(b"{4}\r\nabcd {3}\r\nabc\r\n");
        let values = decoder
            .decode(&mut channel, &mut DecodeContext::new())
            .unwrap()
            .unwrap();
        assert!(values[0].as_text().unwrap().is_streamed());
        assert!(!values[1].as_text().unwrap().is_streamed());
    }

    #[test]
    fn test_unbalanced_lists() {
        assert!(matches!(
            decode_all(b"(a\r\n"),
            Err(Error::UnbalancedList { position: 2 })
        ));
        assert!(matches!(
            decode_all(b"a)\r\n"),
            Err(Error::UnbalancedList { position: 1 })
        ));
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_all(b"\"open\r\n"),
            Err(Error::UnterminatedQuotedString { .. })
        ));
        assert!(matches!(
            decode_all(b"{x}\r\n"),
            Err(Error::MalformedLiteralCount { .. })
        ));
        assert!(matches!(
            decode_all(b"{5} trailing\r\n"),
            Err(Error::MalformedLiteralCount { .. })
        ));
    }

    #[test]
    fn test_literal_too_large() {
        let decoder =
            ResponseDecoder::with_config(DecoderConfig::builder().max_literal_size(10).build());
        let mut channel = LineChannel::new();
        channel.feed(b"{11}\r\n");
        let err = decoder
            .decode(&mut channel, &mut DecodeContext::new())
            .unwrap_err();
        assert!(matches!(err, Error::LiteralTooLarge { size: 11, max: 10 }));
    }

    #[test]
    fn test_channel_closed_mid_literal() {
        let decoder = ResponseDecoder::new();
        let mut channel = LineChannel::new();
        let mut ctx = DecodeContext::new();
        channel.feed(b"{10}\r\nabc");
        assert!(decoder.decode(&mut channel, &mut ctx).unwrap().is_none());

        channel.close();
        assert!(matches!(
            decoder.decode(&mut channel, &mut ctx),
            Err(Error::UnexpectedEndOfChannel)
        ));
    }

    #[test]
    fn test_decode_text() {
        let values = ResponseDecoder::new()
            .decode_text(b"BADCHARSET (UTF-8 SHIFT-JIS)")
            .unwrap();
        assert_eq!(
            values,
            vec![
                text("BADCHARSET"),
                ProtocolValue::List(vec![text("UTF-8"), text("SHIFT-JIS")]),
            ]
        );
    }

    #[test]
    fn test_decode_text_with_literal_fails() {
        assert!(matches!(
            ResponseDecoder::new().decode_text(b"X {3}"),
            Err(Error::UnexpectedEndOfChannel)
        ));
    }
}
