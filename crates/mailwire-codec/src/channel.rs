//! Line-buffered channel.
//!
//! IMAP and POP3 are CRLF-terminated line protocols with embedded byte-counted
//! literals. `LineChannel` buffers whatever the transport has delivered so far
//! and hands it out either as complete lines or as raw byte runs. It never
//! performs I/O itself: the transport layer calls [`LineChannel::feed`] with
//! received bytes and drains [`LineChannel::take_outbound`] to send.
//!
//! Every read primitive is non-blocking. When not enough data is buffered the
//! call returns `None` and the caller retries after feeding more bytes.

use bytes::{Bytes, BytesMut};

use crate::config::DEFAULT_MAX_LINE_LENGTH;
use crate::{Error, Result};

/// Default buffer size for reading.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Sans-I/O buffered channel with line and exact-length reads.
#[derive(Debug)]
pub struct LineChannel {
    inbound: BytesMut,
    outbound: BytesMut,
    /// Bytes of `inbound` already searched for CRLF.
    scanned: usize,
    max_line_length: usize,
    closed: bool,
}

impl Default for LineChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChannel {
    /// Creates a channel with the default line length limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    /// Creates a channel with the given line length limit.
    #[must_use]
    pub fn with_max_line_length(max_line_length: usize) -> Self {
        Self {
            inbound: BytesMut::with_capacity(DEFAULT_BUFFER_SIZE),
            outbound: BytesMut::with_capacity(DEFAULT_BUFFER_SIZE),
            scanned: 0,
            max_line_length,
            closed: false,
        }
    }

    /// Appends bytes received from the transport.
    pub fn feed(&mut self, data: &[u8]) {
        self.inbound.extend_from_slice(data);
    }

    /// Marks the transport as closed. Buffered bytes stay readable.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns true if the transport has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of buffered, unread bytes.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.inbound.len()
    }

    /// Returns the next buffered byte without consuming it.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        self.inbound.first().copied()
    }

    /// Returns the next complete line (including CRLF) without consuming it.
    #[must_use]
    pub fn peek_line(&self) -> Option<&[u8]> {
        let pos = find_crlf(&self.inbound, self.scanned.saturating_sub(1))?;
        Some(&self.inbound[..pos + 2])
    }

    /// Reads one CRLF-terminated line, including the CRLF.
    ///
    /// Returns `Ok(None)` if no complete line is buffered yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineTooLong`] if more than the configured maximum is
    /// buffered without a CRLF, and [`Error::UnexpectedEndOfChannel`] if the
    /// channel is closed before a line completes.
    pub fn read_line(&mut self) -> Result<Option<Bytes>> {
        // Back up one byte so a CR at the end of the previous scan pairs with a new LF.
        let from = self.scanned.saturating_sub(1);
        if let Some(pos) = find_crlf(&self.inbound, from) {
            self.scanned = 0;
            return Ok(Some(self.inbound.split_to(pos + 2).freeze()));
        }

        self.scanned = self.inbound.len();

        if self.inbound.len() > self.max_line_length {
            return Err(Error::LineTooLong {
                max: self.max_line_length,
            });
        }
        if self.closed {
            return Err(Error::UnexpectedEndOfChannel);
        }
        Ok(None)
    }

    /// Reads exactly `n` bytes, or nothing if fewer are buffered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEndOfChannel`] if the channel is closed and
    /// fewer than `n` bytes remain.
    pub fn read_exact(&mut self, n: usize) -> Result<Option<Bytes>> {
        if self.inbound.len() < n {
            if self.closed {
                return Err(Error::UnexpectedEndOfChannel);
            }
            return Ok(None);
        }
        Ok(Some(self.take(n)))
    }

    /// Reads up to `n` bytes, whatever is currently buffered.
    ///
    /// The returned chunk is a zero-copy view of the receive buffer.
    /// An empty chunk means nothing is buffered yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEndOfChannel`] if the channel is closed,
    /// `n > 0` and nothing is buffered.
    pub fn read_up_to(&mut self, n: usize) -> Result<Bytes> {
        let available = self.inbound.len().min(n);
        if available == 0 && n > 0 && self.closed {
            return Err(Error::UnexpectedEndOfChannel);
        }
        Ok(self.take(available))
    }

    fn take(&mut self, n: usize) -> Bytes {
        self.scanned = self.scanned.saturating_sub(n);
        self.inbound.split_to(n).freeze()
    }

    /// Queues bytes for sending.
    pub fn write(&mut self, data: &[u8]) {
        self.outbound.extend_from_slice(data);
    }

    /// Returns the queued outbound bytes without removing them.
    #[must_use]
    pub fn outbound(&self) -> &[u8] {
        &self.outbound
    }

    /// Removes and returns all queued outbound bytes.
    pub fn take_outbound(&mut self) -> Bytes {
        self.outbound.split().freeze()
    }
}

/// Finds the position of CRLF in a buffer, starting the search at `from`.
fn find_crlf(buf: &[u8], from: usize) -> Option<usize> {
    buf.get(from..)?
        .windows(2)
        .position(|w| w == b"\r\n")
        .map(|pos| pos + from)
}
