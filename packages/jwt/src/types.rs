//! JWT type definitions

use crate::error::JwtError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Algorithm name written into every header
pub const ALGORITHM: &str = "HS256";

/// Token type written into every header
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signing algorithm
    pub alg: String,
    /// Token type
    pub typ: String,
}

impl Header {
    /// The fixed HS256 header
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}

/// Signed claims: who the token is for and when it stops being valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Subject identifier
    #[serde(rename = "username")]
    pub subject: String,
    /// Expiry, unix seconds
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Payload {
    /// Create a payload for `subject` expiring at `expires_at`
    #[must_use]
    pub fn new(subject: impl Into<String>, expires_at: i64) -> Self {
        Self {
            subject: subject.into(),
            expires_at,
        }
    }

    /// Whether the payload is expired at `now_ms` milliseconds
    ///
    /// Valid up to and including the instant `expires_at` seconds; any later
    /// reading, even by a millisecond, is expired.
    #[must_use]
    pub fn is_expired_at_millis(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at.saturating_mul(1000)
    }
}

/// Encoded token: `header.payload.signature`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub(crate) fn from_segments(header: &str, payload: &str, signature: &str) -> Self {
        Self(format!("{header}.{payload}.{signature}"))
    }

    /// The full token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning its text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Base64url-encoded header
    #[must_use]
    pub fn header_segment(&self) -> &str {
        self.segment(0)
    }

    /// Base64url-encoded payload
    #[must_use]
    pub fn payload_segment(&self) -> &str {
        self.segment(1)
    }

    /// Base64url-encoded HMAC-SHA256 signature
    #[must_use]
    pub fn signature_segment(&self) -> &str {
        self.segment(2)
    }

    fn segment(&self, index: usize) -> &str {
        // Construction guarantees exactly three segments
        self.0.split('.').nth(index).unwrap_or_default()
    }
}

impl FromStr for Token {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s.split('.').count();
        if segments != 3 {
            return Err(JwtError::Malformed(format!(
                "expected 3 segments, found {segments}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
