//! Well-known protocol tokens.
//!
//! Response codes and capabilities are identified by a case-insensitive name
//! and an optional list of sub-arguments (e.g. `METADATA LONGENTRIES`). The
//! registries map decoded names onto canonical `static` instances so callers
//! can compare them by identity; unknown names are synthesized on demand.
//!
//! ```
//! use std::borrow::Cow;
//! use mailwire_codec::token::{response_code, RESPONSE_CODES};
//!
//! let code = RESPONSE_CODES.lookup("uidnext", &["4392"]);
//! assert!(matches!(code, Cow::Borrowed(c) if std::ptr::eq(c, &response_code::UIDNEXT)));
//! ```

pub mod capability;
pub mod response_code;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use crate::value::ProtocolValue;

/// A named protocol token with optional required sub-arguments.
///
/// Two canonical tokens are equal when both name and sub-arguments match. A
/// synthesized token carries no sub-arguments and is equal to any token with
/// the same name.
#[derive(Debug, Clone)]
pub struct KnownToken {
    name: Cow<'static, str>,
    args: Cow<'static, [&'static str]>,
    synthesized: bool,
}

impl KnownToken {
    /// Creates a token without sub-arguments.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            args: Cow::Borrowed(&[]),
            synthesized: false,
        }
    }

    /// Creates a token that requires the given sub-arguments.
    #[must_use]
    pub const fn with_args(name: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            args: Cow::Borrowed(args),
            synthesized: false,
        }
    }

    /// Creates a token for a name the registry does not know.
    #[must_use]
    pub fn synthesized(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            args: Cow::Borrowed(&[]),
            synthesized: true,
        }
    }

    /// Returns the token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the token was created for an unknown name.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    /// Returns the required sub-arguments.
    #[must_use]
    pub fn args(&self) -> &[&'static str] {
        &self.args
    }

    /// Returns true if every required sub-argument appears in `decoded`.
    fn is_satisfied_by(&self, decoded: &[&str]) -> bool {
        self.args
            .iter()
            .all(|required| decoded.iter().any(|d| d.eq_ignore_ascii_case(required)))
    }
}

impl PartialEq for KnownToken {
    fn eq(&self, other: &Self) -> bool {
        if !self.name.eq_ignore_ascii_case(&other.name) {
            return false;
        }
        self.synthesized
            || other.synthesized
            || (self.args.len() == other.args.len()
                && self
                    .args
                    .iter()
                    .zip(other.args.iter())
                    .all(|(a, b)| a.eq_ignore_ascii_case(b)))
    }
}

impl Eq for KnownToken {}

impl Hash for KnownToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl fmt::Display for KnownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in self.args.iter() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Immutable map from token names to canonical instances.
///
/// Populated once; safe for concurrent lookups.
#[derive(Debug)]
pub struct TokenRegistry {
    by_name: HashMap<String, Vec<&'static KnownToken>>,
}

impl TokenRegistry {
    /// Builds a registry from canonical tokens.
    #[must_use]
    pub fn new(tokens: &[&'static KnownToken]) -> Self {
        let mut by_name: HashMap<String, Vec<&'static KnownToken>> = HashMap::new();
        for &token in tokens {
            by_name
                .entry(token.name.to_ascii_uppercase())
                .or_default()
                .push(token);
        }
        // Most specific candidate first.
        for candidates in by_name.values_mut() {
            candidates.sort_by(|a, b| b.args.len().cmp(&a.args.len()));
        }
        Self { by_name }
    }

    /// Returns the canonical token for `name` and decoded `args`, or a
    /// synthesized one if the name is unknown.
    ///
    /// A canonical token matches when its name matches case-insensitively and
    /// `args` contains all of its required sub-arguments.
    #[must_use]
    pub fn lookup(&self, name: &str, args: &[&str]) -> Cow<'static, KnownToken> {
        self.get(name, args)
            .map_or_else(|| Cow::Owned(KnownToken::synthesized(name)), Cow::Borrowed)
    }

    /// Returns the canonical token for `name` and `args`, if there is one.
    #[must_use]
    pub fn get(&self, name: &str, args: &[&str]) -> Option<&'static KnownToken> {
        self.by_name
            .get(&name.to_ascii_uppercase())?
            .iter()
            .copied()
            .find(|token| token.is_satisfied_by(args))
    }

    /// Looks up a token from decoded values: the first value is the name and
    /// the following text values are its arguments.
    ///
    /// Returns `None` if the first value is not text.
    #[must_use]
    pub fn lookup_values(&self, values: &[ProtocolValue]) -> Option<Cow<'static, KnownToken>> {
        let (first, rest) = values.split_first()?;
        let name = first.as_text()?.to_string_lossy();
        let args: Vec<String> = rest
            .iter()
            .filter_map(ProtocolValue::as_text)
            .map(crate::value::Text::to_string_lossy)
            .collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Some(self.lookup(&name, &args))
    }

    /// Returns the number of canonical tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    /// Returns true if the registry holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// IMAP response codes.
pub static RESPONSE_CODES: LazyLock<TokenRegistry> =
    LazyLock::new(|| TokenRegistry::new(&response_code::ALL));

/// IMAP capabilities.
pub static CAPABILITIES: LazyLock<TokenRegistry> =
    LazyLock::new(|| TokenRegistry::new(&capability::ALL));

/// POP3 extended response codes (RFC 2449, RFC 3206).
pub static POP3_RESPONSE_CODES: LazyLock<TokenRegistry> =
    LazyLock::new(|| TokenRegistry::new(&response_code::POP3_ALL));

/// POP3 CAPA tags (RFC 2449).
pub static POP3_CAPABILITIES: LazyLock<TokenRegistry> =
    LazyLock::new(|| TokenRegistry::new(&capability::POP3_ALL));
