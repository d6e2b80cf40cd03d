//! Codec configuration types.

/// Default size at which literal payloads switch to stream backing (40 KiB).
pub const DEFAULT_LITERAL_STREAM_THRESHOLD: usize = 40 * 1024;

/// Default maximum literal size accepted from the peer (100 MiB).
pub const DEFAULT_MAX_LITERAL_SIZE: u64 = 100 * 1024 * 1024;

/// Default maximum length of a single line (1 MiB).
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

/// Maximum payload of a non-synchronizing literal under LITERAL- (RFC 7888).
pub const LITERAL_MINUS_LIMIT: u64 = 4096;

/// Response decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Literals of at least this many bytes are exposed as streams instead of
    /// being copied into an owned buffer.
    pub literal_stream_threshold: usize,
    /// Largest literal the decoder accepts.
    pub max_literal_size: u64,
    /// Longest line the channel buffers while waiting for CRLF.
    pub max_line_length: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            literal_stream_threshold: DEFAULT_LITERAL_STREAM_THRESHOLD,
            max_literal_size: DEFAULT_MAX_LITERAL_SIZE,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl DecoderConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::new()
    }
}

/// Builder for decoder configuration.
#[derive(Debug, Clone)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl Default for DecoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::default(),
        }
    }

    /// Sets the stream backing threshold.
    #[must_use]
    pub const fn literal_stream_threshold(mut self, bytes: usize) -> Self {
        self.config.literal_stream_threshold = bytes;
        self
    }

    /// Sets the maximum accepted literal size.
    #[must_use]
    pub const fn max_literal_size(mut self, bytes: u64) -> Self {
        self.config.max_literal_size = bytes;
        self
    }

    /// Sets the maximum line length.
    #[must_use]
    pub const fn max_line_length(mut self, bytes: usize) -> Self {
        self.config.max_line_length = bytes;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> DecoderConfig {
        self.config
    }
}

/// How the encoder treats non-synchronizing literals.
///
/// Which policy applies depends on whether the server advertised LITERAL+ or
/// LITERAL- (RFC 7888). The default honors every literal requested as
/// non-synchronizing; use [`NonSyncPolicy::from_capabilities`] to restrict it
/// to what a server advertised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonSyncPolicy {
    /// LITERAL+: any size may be sent without waiting.
    Allowed,
    /// LITERAL-: only payloads up to the given size may be sent without waiting.
    UpTo(u64),
    /// No support: every literal is sent synchronizing.
    Disallowed,
}

impl Default for NonSyncPolicy {
    fn default() -> Self {
        Self::Allowed
    }
}

impl NonSyncPolicy {
    /// Returns true if a payload of `len` bytes may be sent non-synchronizing.
    #[must_use]
    pub const fn permits(self, len: u64) -> bool {
        match self {
            Self::Allowed => true,
            Self::UpTo(max) => len <= max,
            Self::Disallowed => false,
        }
    }

    /// Derives the policy from the capability names a server advertised.
    ///
    /// LITERAL+ wins over LITERAL- when both are present.
    #[must_use]
    pub fn from_capabilities<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        use crate::token::{CAPABILITIES, capability};

        let mut policy = Self::Disallowed;
        for name in names {
            match CAPABILITIES.get(name, &[]) {
                Some(c) if std::ptr::eq(c, &capability::LITERAL_PLUS) => return Self::Allowed,
                Some(c) if std::ptr::eq(c, &capability::LITERAL_MINUS) => {
                    policy = Self::UpTo(LITERAL_MINUS_LIMIT);
                }
                _ => {}
            }
        }
        policy
    }
}

/// Command encoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Policy for literals requested as non-synchronizing.
    pub non_sync_literals: NonSyncPolicy,
}

impl EncoderConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

/// Builder for encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfigBuilder {
    config: EncoderConfig,
}

impl EncoderConfigBuilder {
    /// Sets the non-synchronizing literal policy.
    #[must_use]
    pub const fn non_sync_literals(mut self, policy: NonSyncPolicy) -> Self {
        self.config.non_sync_literals = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> EncoderConfig {
        self.config
    }
}
