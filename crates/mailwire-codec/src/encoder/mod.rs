//! Command encoder.
//!
//! Commands are built as a queue of [`Fragment`]s and flushed into a
//! [`LineChannel`] with [`CommandEncoder::send`]. Fragments are separated by a
//! single space; no space follows `(`, a CRLF or a literal announcement, and
//! none precedes `)` or the line end.
//!
//! A synchronizing literal (`{n}`) may only be transmitted after the server
//! answered its announcement with a continuation request. `send` therefore
//! stops right after the announcement and keeps the rest of the queue. Once
//! the caller has seen a `+` line it calls
//! [`CommandEncoder::continuation_observed`] and `send` again.
//!
//! Stream-backed literals are copied at most [`STREAM_WINDOW_SIZE`] bytes per
//! `send`, so the outbound buffer stays bounded. `send` returns a non-zero
//! count without awaiting a continuation until the payload is drained; the
//! caller flushes the channel and calls `send` again.
//!
//! ```
//! use mailwire_codec::{CommandEncoder, Fragment, LineChannel, LiteralOptions};
//!
//! let mut encoder = CommandEncoder::new();
//! let mut channel = LineChannel::new();
//!
//! encoder.enqueue([
//!     Fragment::text("A001"),
//!     Fragment::text("LOGIN"),
//!     Fragment::literal("fred", LiteralOptions::SYNC),
//!     Fragment::quoted("secret"),
//!     Fragment::line_end(),
//! ]);
//!
//! assert_eq!(encoder.send(&mut channel).unwrap(), 3);
//! assert_eq!(&channel.take_outbound()[..], b"A001 LOGIN {4}\r\n");
//!
//! encoder.continuation_observed();
//! assert_eq!(encoder.send(&mut channel).unwrap(), 0);
//! assert_eq!(&channel.take_outbound()[..], b"fred \"secret\"\r\n");
//! ```

mod fragment;

use std::collections::VecDeque;
use std::io::{self, Read};

use bytes::Bytes;

use crate::channel::LineChannel;
use crate::config::EncoderConfig;
use crate::{Error, Result};

pub use fragment::{Fragment, Literal, LiteralOptions, LiteralSource};

/// Size of the buffer used to copy stream-backed literals.
const COPY_BUFFER_SIZE: usize = 8192;

/// Most stream-literal bytes written to the channel by one `send`.
pub const STREAM_WINDOW_SIZE: usize = COPY_BUFFER_SIZE * 8;

/// Flattened unit of output.
#[derive(Debug)]
enum Piece {
    Token(Bytes),
    Open,
    Close,
    Literal(Literal),
    LineEnd,
}

#[derive(Debug)]
struct Queued {
    piece: Piece,
    /// Last piece of a top-level fragment.
    ends_fragment: bool,
}

/// Encoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing is half-sent.
    Idle,
    /// A synchronizing literal was announced; its payload waits for `+`.
    AwaitingContinuation,
    /// The announcement is out and the payload may be sent, possibly in part.
    Continued,
}

/// Serializes command fragments, honoring the synchronizing-literal handshake.
#[derive(Debug)]
pub struct CommandEncoder {
    config: EncoderConfig,
    queue: VecDeque<Queued>,
    unsent: usize,
    state: State,
    needs_space: bool,
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandEncoder {
    /// Creates an encoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Creates an encoder with the given configuration.
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            config,
            queue: VecDeque::new(),
            unsent: 0,
            state: State::Idle,
            needs_space: false,
        }
    }

    /// Returns the encoder configuration.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Appends fragments to the queue.
    pub fn enqueue(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.flatten(fragment, true);
            self.unsent += 1;
        }
    }

    fn flatten(&mut self, fragment: Fragment, ends_fragment: bool) {
        let piece = match fragment {
            Fragment::Text(text) => Piece::Token(text),
            Fragment::Quoted(text) => Piece::Token(quote(&text)),
            Fragment::Literal(literal) => Piece::Literal(literal),
            Fragment::LineEnd => Piece::LineEnd,
            Fragment::Group(items) => {
                self.queue.push_back(Queued {
                    piece: Piece::Open,
                    ends_fragment: false,
                });
                for item in items {
                    self.flatten(item, false);
                }
                Piece::Close
            }
        };
        self.queue.push_back(Queued {
            piece,
            ends_fragment,
        });
    }

    /// Writes as much of the queue as the protocol state allows.
    ///
    /// Returns the number of top-level fragments still unsent. A non-zero
    /// result with [`is_awaiting_continuation`](Self::is_awaiting_continuation)
    /// set means a synchronizing literal waits for the server; otherwise a
    /// stream literal has more payload to copy once the channel is flushed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LiteralLengthMismatch`] if a literal stream ends
    /// before its announced length, or [`Error::Io`] if reading it fails.
    /// The encoder is [`reset`](Self::reset) before the error is returned;
    /// the command is incomplete on the wire and the connection should not
    /// be reused for it.
    pub fn send(&mut self, channel: &mut LineChannel) -> Result<usize> {
        if self.state == State::AwaitingContinuation {
            return Ok(self.unsent);
        }

        while let Some(front) = self.queue.front_mut() {
            match &mut front.piece {
                Piece::Token(bytes) => {
                    write_space(channel, self.needs_space);
                    channel.write(bytes);
                    self.needs_space = !bytes.ends_with(b"\r\n");
                }
                Piece::Open => {
                    write_space(channel, self.needs_space);
                    channel.write(b"(");
                    self.needs_space = false;
                }
                Piece::Close => {
                    channel.write(b")");
                    self.needs_space = true;
                }
                Piece::LineEnd => {
                    channel.write(b"\r\n");
                    self.needs_space = false;
                }
                Piece::Literal(literal) => {
                    if self.state == State::Idle {
                        let non_sync = literal.options.non_sync
                            && self.config.non_sync_literals.permits(literal.len);
                        if literal.options.non_sync && !non_sync {
                            tracing::debug!(
                                len = literal.len,
                                "non-synchronizing literal not permitted, waiting for continuation"
                            );
                        }

                        write_space(channel, self.needs_space);
                        channel.write(announcement(literal, non_sync).as_bytes());
                        self.needs_space = false;

                        if !non_sync {
                            tracing::trace!(len = literal.len, "awaiting continuation");
                            self.state = State::AwaitingContinuation;
                            return Ok(self.unsent);
                        }
                    }
                    let written = write_payload(literal, channel);
                    match written {
                        Ok(true) => {}
                        Ok(false) => {
                            self.state = State::Continued;
                            return Ok(self.unsent);
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, "literal payload failed, dropping command");
                            self.reset();
                            return Err(e);
                        }
                    }
                    self.state = State::Idle;
                    self.needs_space = true;
                }
            }

            if let Some(done) = self.queue.pop_front()
                && done.ends_fragment
            {
                self.unsent -= 1;
            }
        }

        tracing::trace!(outbound = channel.outbound().len(), "command flushed");
        Ok(self.unsent)
    }

    /// Signals that the server sent a continuation request.
    ///
    /// Has no effect unless a literal is awaiting one.
    pub fn continuation_observed(&mut self) {
        if self.state == State::AwaitingContinuation {
            tracing::trace!("continuation observed");
            self.state = State::Continued;
        }
    }

    /// Returns the number of top-level fragments not yet fully sent.
    #[must_use]
    pub const fn unsent_fragments(&self) -> usize {
        self.unsent
    }

    /// Returns true if a synchronizing literal waits for a continuation.
    #[must_use]
    pub fn is_awaiting_continuation(&self) -> bool {
        self.state == State::AwaitingContinuation
    }

    /// Drops all queued fragments and returns to the idle state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.unsent = 0;
        self.state = State::Idle;
        self.needs_space = false;
    }
}

fn write_space(channel: &mut LineChannel, needs_space: bool) {
    if needs_space {
        channel.write(b" ");
    }
}

/// Renders a quoted string.
fn quote(text: &[u8]) -> Bytes {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'"');
    for &b in text {
        if b == b'"' || b == b'\\' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out.push(b'"');
    Bytes::from(out)
}

fn announcement(literal: &Literal, non_sync: bool) -> String {
    format!(
        "{}{{{}{}}}\r\n",
        if literal.options.literal8 { "~" } else { "" },
        literal.len,
        if non_sync { "+" } else { "" }
    )
}

/// Writes the next part of a literal's payload.
///
/// Returns true once the whole payload has been written.
fn write_payload(literal: &mut Literal, channel: &mut LineChannel) -> Result<bool> {
    let len = literal.len;
    match &mut literal.source {
        LiteralSource::Buffer(bytes) => {
            channel.write(bytes);
            literal.sent = len;
        }
        LiteralSource::Stream(source) => {
            let mut buf = [0u8; COPY_BUFFER_SIZE];
            let mut window = 0;
            while literal.sent < len && window < STREAM_WINDOW_SIZE {
                let want = usize::try_from(len - literal.sent)
                    .map_or(COPY_BUFFER_SIZE, |left| left.min(COPY_BUFFER_SIZE));
                let n = match source.read(&mut buf[..want]) {
                    Ok(0) => {
                        return Err(Error::LiteralLengthMismatch {
                            expected: len,
                            actual: literal.sent,
                        });
                    }
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                channel.write(&buf[..n]);
                literal.sent += n as u64;
                window += n;
            }
            tracing::trace!(sent = literal.sent, len, "literal stream copied");
        }
    }
    Ok(literal.sent == len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::NonSyncPolicy;

    fn send_all(fragments: Vec<Fragment>) -> (usize, Bytes) {
        let mut encoder = CommandEncoder::with_config(
            EncoderConfig::builder()
                .non_sync_literals(NonSyncPolicy::Allowed)
                .build(),
        );
        let mut channel = LineChannel::new();
        encoder.enqueue(fragments);
        let unsent = encoder.send(&mut channel).unwrap();
        (unsent, channel.take_outbound())
    }

    fn nil_line() -> [Fragment; 2] {
        [Fragment::text("NIL"), Fragment::line_end()]
    }

    fn with_nil_line(first: Fragment) -> Vec<Fragment> {
        let mut fragments = vec![first];
        fragments.extend(nil_line());
        fragments
    }

    #[test]
    fn test_send_text() {
        let (unsent, out) = send_all(with_nil_line(Fragment::text("string")));
        assert_eq!(unsent, 0);
        assert_eq!(&out[..], b"string NIL\r\n");

        let (_, out) = send_all(nil_line().into());
        assert_eq!(&out[..], b"NIL\r\n");
    }

    #[test]
    fn test_text_ending_in_crlf_needs_no_space() {
        let (_, out) = send_all(vec![
            Fragment::text("A001 NOOP\r\n"),
            Fragment::text("A002 NOOP\r\n"),
        ]);
        assert_eq!(&out[..], b"A001 NOOP\r\nA002 NOOP\r\n");
    }

    #[test]
    fn test_send_groups() {
        let (_, out) = send_all(with_nil_line(Fragment::group([
            Fragment::text("NIL"),
            Fragment::text("NIL"),
        ])));
        assert_eq!(&out[..], b"(NIL NIL) NIL\r\n");

        let (_, out) = send_all(with_nil_line(Fragment::group([
            Fragment::group([Fragment::text("NIL"), Fragment::text("NIL")]),
            Fragment::group([]),
            Fragment::group([Fragment::text("NIL")]),
        ])));
        assert_eq!(&out[..], b"((NIL NIL) () (NIL)) NIL\r\n");

        let (_, out) = send_all(vec![
            Fragment::text("NIL"),
            Fragment::group([Fragment::text("NIL"), Fragment::text("NIL")]),
            Fragment::text("NIL"),
            Fragment::line_end(),
        ]);
        assert_eq!(&out[..], b"NIL (NIL NIL) NIL\r\n");
    }

    #[test]
    fn test_send_nested_search_keys() {
        let (_, out) = send_all(with_nil_line(Fragment::group([
            Fragment::text("OR"),
            Fragment::group([Fragment::text("UNFLAGGED"), Fragment::text("UNSEEN")]),
            Fragment::group([Fragment::text("UNFLAGGED"), Fragment::text("DRAFT")]),
        ])));
        assert_eq!(&out[..], b"(OR (UNFLAGGED UNSEEN) (UNFLAGGED DRAFT)) NIL\r\n");
    }

    #[test]
    fn test_send_quoted() {
        let (_, out) = send_all(with_nil_line(Fragment::quoted("quoted")));
        assert_eq!(&out[..], b"\"quoted\" NIL\r\n");

        let (_, out) = send_all(with_nil_line(Fragment::quoted("\"\\Sent\"")));
        assert_eq!(&out[..], b"\"\\\"\\\\Sent\\\"\" NIL\r\n");
    }

    #[test]
    fn test_synchronizing_literal_waits() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue(with_nil_line(Fragment::literal("literal", LiteralOptions::SYNC)));

        assert_eq!(encoder.send(&mut channel).unwrap(), 3);
        assert!(encoder.is_awaiting_continuation());
        assert_eq!(channel.outbound(), b"{7}\r\n");

        // Nothing moves until the continuation arrives.
        assert_eq!(encoder.send(&mut channel).unwrap(), 3);
        assert_eq!(channel.outbound(), b"{7}\r\n");

        encoder.continuation_observed();
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert!(!encoder.is_awaiting_continuation());
        assert_eq!(channel.outbound(), b"{7}\r\nliteral NIL\r\n");
    }

    #[test]
    fn test_non_synchronizing_literal() {
        let (unsent, out) =
            send_all(with_nil_line(Fragment::literal("literal", LiteralOptions::NON_SYNC)));
        assert_eq!(unsent, 0);
        assert_eq!(&out[..], b"{7+}\r\nliteral NIL\r\n");
    }

    #[test]
    fn test_literal8() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue(with_nil_line(Fragment::literal(
            &b"literal\0"[..],
            LiteralOptions::SYNC.literal8(),
        )));
        assert!(encoder.send(&mut channel).unwrap() > 0);
        assert_eq!(channel.outbound(), b"~{8}\r\n");
        encoder.continuation_observed();
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert_eq!(channel.outbound(), b"~{8}\r\nliteral\0 NIL\r\n");

        let (_, out) = send_all(with_nil_line(Fragment::literal(
            &b"literal\0"[..],
            LiteralOptions::NON_SYNC.literal8(),
        )));
        assert_eq!(&out[..], b"~{8+}\r\nliteral\0 NIL\r\n");
    }

    #[test]
    fn test_literal_stream() {
        let (_, out) = send_all(with_nil_line(Fragment::literal_stream(
            Cursor::new(vec![1u8, 2, 3, 4, 5, 6, 7, 8]),
            8,
            LiteralOptions::NON_SYNC,
        )));
        assert_eq!(&out[..], b"{8+}\r\n\x01\x02\x03\x04\x05\x06\x07\x08 NIL\r\n");

        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue(with_nil_line(Fragment::literal_stream(
            Cursor::new(vec![0u8, 1, 2, 3, 4, 5, 6, 7]),
            8,
            LiteralOptions::SYNC.literal8(),
        )));
        encoder.send(&mut channel).unwrap();
        assert_eq!(channel.outbound(), b"~{8}\r\n");
        encoder.continuation_observed();
        encoder.send(&mut channel).unwrap();
        assert_eq!(
            channel.outbound(),
            b"~{8}\r\n\x00\x01\x02\x03\x04\x05\x06\x07 NIL\r\n"
        );
    }

    #[test]
    fn test_literal_stream_extra_bytes_not_read() {
        let (_, out) = send_all(with_nil_line(Fragment::literal_stream(
            Cursor::new(b"abcdef".to_vec()),
            3,
            LiteralOptions::NON_SYNC,
        )));
        assert_eq!(&out[..], b"{3+}\r\nabc NIL\r\n");
    }

    #[test]
    fn test_literal_stream_too_short() {
        let mut encoder = CommandEncoder::with_config(
            EncoderConfig::builder()
                .non_sync_literals(NonSyncPolicy::Allowed)
                .build(),
        );
        let mut channel = LineChannel::new();
        encoder.enqueue([Fragment::literal_stream(
            Cursor::new(b"abc".to_vec()),
            5,
            LiteralOptions::NON_SYNC,
        )]);
        let err = encoder.send(&mut channel).unwrap_err();
        assert!(matches!(
            err,
            Error::LiteralLengthMismatch {
                expected: 5,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_failed_literal_drops_command() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue([
            Fragment::text("A1"),
            Fragment::text("APPEND"),
            Fragment::text("INBOX"),
            Fragment::literal_stream(Cursor::new(b"abc".to_vec()), 5, LiteralOptions::NON_SYNC),
            Fragment::line_end(),
        ]);
        assert!(encoder.send(&mut channel).is_err());
        assert_eq!(encoder.unsent_fragments(), 0);
        assert!(!encoder.is_awaiting_continuation());
        assert_eq!(&channel.take_outbound()[..], b"A1 APPEND INBOX {5+}\r\nabc");

        // A second send must not announce the literal again.
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert!(channel.outbound().is_empty());

        encoder.enqueue([Fragment::text("A2"), Fragment::text("NOOP"), Fragment::line_end()]);
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert_eq!(channel.outbound(), b"A2 NOOP\r\n");
    }

    #[test]
    fn test_default_encoder_sends_large_non_sync_literal() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue([
            Fragment::literal(vec![b'a'; 5000], LiteralOptions::NON_SYNC),
            Fragment::line_end(),
        ]);
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert!(!encoder.is_awaiting_continuation());
        assert!(channel.outbound().starts_with(b"{5000+}\r\naaa"));
        assert_eq!(channel.outbound().len(), 9 + 5000 + 2);
    }

    #[test]
    fn test_stream_literal_is_sent_in_bounded_windows() {
        const LEN: u64 = 8 * 1024 * 1024;
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue([
            Fragment::text("A1"),
            Fragment::literal_stream(io::repeat(b'x').take(LEN), LEN, LiteralOptions::NON_SYNC),
            Fragment::line_end(),
        ]);

        let header = b"A1 {8388608+}\r\n";
        assert_eq!(encoder.send(&mut channel).unwrap(), 2);
        assert!(!encoder.is_awaiting_continuation());
        let first = channel.take_outbound();
        assert!(first.starts_with(header));
        assert_eq!(first.len(), header.len() + STREAM_WINDOW_SIZE);

        let mut total = first.len();
        let mut sends = 1;
        loop {
            let unsent = encoder.send(&mut channel).unwrap();
            sends += 1;
            let chunk = channel.take_outbound();
            assert!(chunk.len() <= STREAM_WINDOW_SIZE + 2);
            total += chunk.len();
            if unsent == 0 {
                assert!(chunk.ends_with(b"x\r\n"));
                break;
            }
            assert_eq!(unsent, 2);
        }
        assert_eq!(total, header.len() + 8 * 1024 * 1024 + 2);
        assert_eq!(sends, 8 * 1024 * 1024 / STREAM_WINDOW_SIZE);
    }

    #[test]
    fn test_sync_stream_literal_waits_then_streams() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        let payload = vec![b'y'; STREAM_WINDOW_SIZE + 10];
        let len = payload.len() as u64;
        encoder.enqueue([
            Fragment::literal_stream(Cursor::new(payload), len, LiteralOptions::SYNC),
            Fragment::line_end(),
        ]);

        assert_eq!(encoder.send(&mut channel).unwrap(), 2);
        assert!(encoder.is_awaiting_continuation());
        channel.take_outbound();

        encoder.continuation_observed();
        assert_eq!(encoder.send(&mut channel).unwrap(), 2);
        assert!(!encoder.is_awaiting_continuation());
        assert_eq!(channel.take_outbound().len(), STREAM_WINDOW_SIZE);

        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert_eq!(&channel.take_outbound()[..], b"yyyyyyyyyy\r\n");
    }

    #[test]
    fn test_non_sync_downgraded_by_policy() {
        let mut encoder = CommandEncoder::with_config(
            EncoderConfig::builder()
                .non_sync_literals(NonSyncPolicy::Disallowed)
                .build(),
        );
        let mut channel = LineChannel::new();
        encoder.enqueue([Fragment::literal("abc", LiteralOptions::NON_SYNC)]);
        assert_eq!(encoder.send(&mut channel).unwrap(), 1);
        assert_eq!(channel.outbound(), b"{3}\r\n");
        assert!(encoder.is_awaiting_continuation());
    }

    #[test]
    fn test_literal_minus_limit() {
        let mut encoder = CommandEncoder::with_config(
            EncoderConfig::builder()
                .non_sync_literals(NonSyncPolicy::UpTo(4096))
                .build(),
        );
        let mut channel = LineChannel::new();
        encoder.enqueue([
            Fragment::literal(vec![b'a'; 4096], LiteralOptions::NON_SYNC),
            Fragment::literal(vec![b'b'; 4097], LiteralOptions::NON_SYNC),
        ]);
        assert_eq!(encoder.send(&mut channel).unwrap(), 1);
        assert!(channel.outbound().starts_with(b"{4096+}\r\n"));
        assert!(channel.outbound().ends_with(b"a {4097}\r\n"));
    }

    #[test]
    fn test_literal_inside_group() {
        let mut encoder = CommandEncoder::new();
        let mut channel = LineChannel::new();
        encoder.enqueue([
            Fragment::text("A003"),
            Fragment::text("APPEND"),
            Fragment::text("saved-messages"),
            Fragment::group([Fragment::text("\\Seen")]),
            Fragment::group([Fragment::literal("hi", LiteralOptions::SYNC)]),
            Fragment::line_end(),
        ]);
        assert_eq!(encoder.send(&mut channel).unwrap(), 2);
        assert_eq!(channel.outbound(), b"A003 APPEND saved-messages (\\Seen) ({2}\r\n");

        encoder.continuation_observed();
        assert_eq!(encoder.send(&mut channel).unwrap(), 0);
        assert_eq!(
            channel.outbound(),
            b"A003 APPEND saved-messages (\\Seen) ({2}\r\nhi)\r\n"
        );
    }

    #[test]
    fn test_continuation_ignored_when_idle() {
        let mut encoder = CommandEncoder::new();
        encoder.continuation_observed();
        assert!(!encoder.is_awaiting_continuation());

        let mut channel = LineChannel::new();
        encoder.enqueue([Fragment::literal("x", LiteralOptions::SYNC)]);
        encoder.send(&mut channel).unwrap();
        assert_eq!(channel.outbound(), b"{1}\r\n");
    }

    #[test]
    fn test_zero_length_literal() {
        let (_, out) = send_all(with_nil_line(Fragment::literal("", LiteralOptions::NON_SYNC)));
        assert_eq!(&out[..], b"{0+}\r\n NIL\r\n");
    }
}
