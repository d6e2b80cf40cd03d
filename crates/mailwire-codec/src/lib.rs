//! # mailwire-codec
//!
//! Client-side wire codec for IMAP4 (RFC 3501 / RFC 9051) and POP3 (RFC 1939).
//!
//! ## Features
//!
//! - **Resumable decoding**: responses arriving in arbitrary chunks are decoded
//!   incrementally; a [`DecodeContext`] carries nesting and literal progress
//!   between calls, so no byte is parsed twice
//! - **Large literals without copies**: payloads above a threshold are kept as
//!   zero-copy chunks of the receive buffer and read back through [`TextReader`]
//! - **Literal handshake**: the [`CommandEncoder`] pauses after a synchronizing
//!   literal announcement until the server's continuation arrives, and sends
//!   LITERAL+ / LITERAL- / literal8 forms when allowed
//! - **Sans-I/O core**: [`LineChannel`] buffers bytes; [`FramedStream`] drives
//!   it over any tokio stream
//! - **Token registries**: canonical response codes and capabilities in
//!   [`token`]
//!
//! ## Quick Start
//!
//! ```
//! use mailwire_codec::{DecodeContext, LineChannel, ProtocolValue, ResponseDecoder};
//!
//! let decoder = ResponseDecoder::new();
//! let mut channel = LineChannel::new();
//! let mut ctx = DecodeContext::new();
//!
//! channel.feed(b"* LIST (\\HasNoChildren) \"/\" INBOX\r\n");
//! let values = decoder.decode(&mut channel, &mut ctx).unwrap().unwrap();
//!
//! assert_eq!(values[0], ProtocolValue::text("*"));
//! assert_eq!(values[2].as_list().unwrap().len(), 1);
//! assert_eq!(values[4], ProtocolValue::text("INBOX"));
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! transport ──feed──→ LineChannel ──→ ResponseDecoder ──→ ProtocolValue
//! transport ←─take_outbound── LineChannel ←── CommandEncoder ←── Fragment
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod config;
pub mod decoder;
pub mod encoder;
mod error;
pub mod framed;
pub mod token;
pub mod value;

pub use channel::LineChannel;
pub use config::{
    DecoderConfig, DecoderConfigBuilder, EncoderConfig, EncoderConfigBuilder, NonSyncPolicy,
};
pub use decoder::{DecodeContext, ResponseDecoder};
pub use encoder::{CommandEncoder, Fragment, LiteralOptions};
pub use error::{Error, Result};
pub use framed::FramedStream;
pub use token::KnownToken;
pub use value::{ProtocolValue, Text, TextReader};
