//! Async framing over a tokio stream.
//!
//! [`FramedStream`] owns a [`LineChannel`] and moves bytes between it and the
//! underlying transport. Decoding and encoding stay sans-I/O; this module only
//! pumps reads until the decoder has a complete response unit and drives the
//! continuation handshake while a command is sent.

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::channel::LineChannel;
use crate::config::DecoderConfig;
use crate::decoder::{DecodeContext, ResponseDecoder};
use crate::encoder::CommandEncoder;
use crate::value::ProtocolValue;
use crate::{Error, Result};

/// Default buffer size for reading.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Framed connection driving the codec over an async stream.
pub struct FramedStream<S> {
    stream: S,
    channel: LineChannel,
    decoder: ResponseDecoder,
    read_buf: BytesMut,
}

impl<S> FramedStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Creates a framed stream with the default decoder configuration.
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, DecoderConfig::default())
    }

    /// Creates a framed stream with the given decoder configuration.
    pub fn with_config(stream: S, config: DecoderConfig) -> Self {
        Self {
            stream,
            channel: LineChannel::with_max_line_length(config.max_line_length),
            decoder: ResponseDecoder::with_config(config),
            read_buf: BytesMut::with_capacity(DEFAULT_BUFFER_SIZE),
        }
    }

    /// Reads until the next response unit is decoded.
    ///
    /// # Errors
    ///
    /// Returns decode errors, [`Error::UnexpectedEndOfChannel`] if the peer
    /// closes the stream mid-unit, or [`Error::Io`].
    pub async fn read_values(&mut self, ctx: &mut DecodeContext) -> Result<Vec<ProtocolValue>> {
        loop {
            if let Some(values) = self.decoder.decode(&mut self.channel, ctx)? {
                return Ok(values);
            }
            self.fill().await?;
        }
    }

    /// Reads one raw CRLF-terminated line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineTooLong`], [`Error::UnexpectedEndOfChannel`] or
    /// [`Error::Io`].
    pub async fn read_line(&mut self) -> Result<Bytes> {
        loop {
            if let Some(line) = self.channel.read_line()? {
                return Ok(line);
            }
            self.fill().await?;
        }
    }

    /// Sends every fragment queued in `encoder`.
    ///
    /// Stream literals are written one bounded window at a time, flushing
    /// between windows. While a synchronizing literal waits, the peer's
    /// responses are read:
    ///
    /// - a `+` continuation lets the encoder proceed
    /// - untagged `*` data is decoded and collected, literals included
    /// - any other line aborts the command and resets the encoder
    ///
    /// Returns the untagged responses received while waiting, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContinuationRejected`] with the peer's line, decode
    /// or encoder errors, or [`Error::Io`]. The encoder is reset on error.
    pub async fn send_command(
        &mut self,
        encoder: &mut CommandEncoder,
    ) -> Result<Vec<Vec<ProtocolValue>>> {
        let mut untagged = Vec::new();
        let result = self.drive_command(encoder, &mut untagged).await;
        if result.is_err() {
            encoder.reset();
        }
        result.map(|()| untagged)
    }

    async fn drive_command(
        &mut self,
        encoder: &mut CommandEncoder,
        untagged: &mut Vec<Vec<ProtocolValue>>,
    ) -> Result<()> {
        loop {
            let unsent = encoder.send(&mut self.channel)?;
            self.flush().await?;
            if unsent == 0 {
                return Ok(());
            }

            while encoder.is_awaiting_continuation() {
                match self.peek_byte().await? {
                    b'+' => {
                        self.read_line().await?;
                        encoder.continuation_observed();
                    }
                    b'*' => {
                        let values = self.read_values(&mut DecodeContext::new()).await?;
                        tracing::trace!(
                            len = values.len(),
                            "untagged response while awaiting continuation"
                        );
                        untagged.push(values);
                    }
                    _ => {
                        let line = self.read_line().await?;
                        let text = line.strip_suffix(b"\r\n").unwrap_or(&line[..]);
                        tracing::debug!(line = %String::from_utf8_lossy(text), "literal rejected");
                        return Err(Error::ContinuationRejected(
                            String::from_utf8_lossy(text).into_owned(),
                        ));
                    }
                }
            }
        }
    }

    /// Writes all queued outbound bytes to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails.
    pub async fn flush(&mut self) -> Result<()> {
        let data = self.channel.take_outbound();
        if !data.is_empty() {
            tracing::trace!(len = data.len(), "writing");
            self.stream.write_all(&data).await?;
        }
        self.stream.flush().await?;
        Ok(())
    }

    async fn peek_byte(&mut self) -> Result<u8> {
        loop {
            if let Some(b) = self.channel.peek_byte() {
                return Ok(b);
            }
            if self.channel.is_closed() {
                return Err(Error::UnexpectedEndOfChannel);
            }
            self.fill().await?;
        }
    }

    async fn fill(&mut self) -> Result<()> {
        self.read_buf.clear();
        self.read_buf.reserve(DEFAULT_BUFFER_SIZE);
        let n = self.stream.read_buf(&mut self.read_buf).await?;
        if n == 0 {
            tracing::debug!("stream closed by peer");
            self.channel.close();
        } else {
            self.channel.feed(&self.read_buf);
        }
        Ok(())
    }

    /// Returns the line channel.
    pub const fn channel(&self) -> &LineChannel {
        &self.channel
    }

    /// Returns the line channel mutably.
    pub const fn channel_mut(&mut self) -> &mut LineChannel {
        &mut self.channel
    }

    /// Gets a reference to the underlying stream.
    pub const fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Consumes the framed stream and returns the inner stream.
    ///
    /// Note: Any buffered data will be lost.
    pub fn into_inner(self) -> S {
        self.stream
    }
}
