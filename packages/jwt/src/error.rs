//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// Every verification gate fails with its own variant so callers can branch
/// on [`JwtError::kind`] instead of matching message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Wrong segment count, or the payload is not the expected record shape
    #[error("Malformed JWT token: {0}")]
    Malformed(String),
    /// Recomputed signature does not match the supplied one
    #[error("Invalid JWT signature")]
    InvalidSignature,
    /// Current time is past the payload's expiry
    #[error("JWT token has expired (exp: {expires_at}, now: {now_ms} ms)")]
    TokenExpired {
        /// Expiry carried by the token, unix seconds
        expires_at: i64,
        /// Clock reading at verification time, unix milliseconds
        now_ms: i64,
    },
    /// Input is not valid unpadded base64url
    #[error("Invalid base64url input: {0}")]
    Decode(String),
    /// Key rejected by the MAC backend
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Record could not be written in canonical form
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Discriminant of a [`JwtError`], without the diagnostic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`JwtError::Malformed`]
    Malformed,
    /// See [`JwtError::InvalidSignature`]
    InvalidSignature,
    /// See [`JwtError::TokenExpired`]
    TokenExpired,
    /// See [`JwtError::Decode`]
    Decode,
    /// See [`JwtError::InvalidKey`]
    InvalidKey,
    /// See [`JwtError::Serialization`]
    Serialization,
}

impl JwtError {
    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::Malformed(msg.to_string())
    }

    /// Create an invalid signature error
    #[inline]
    #[must_use]
    pub fn invalid_signature() -> Self {
        JwtError::InvalidSignature
    }

    /// Create a token expired error; `now_ms` is in milliseconds
    #[inline]
    #[must_use]
    pub fn token_expired(expires_at: i64, now_ms: i64) -> Self {
        JwtError::TokenExpired { expires_at, now_ms }
    }

    /// Create a base64url decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: &str) -> Self {
        JwtError::Decode(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// The kind of failure, for branching without string matching
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::Malformed(_) => ErrorKind::Malformed,
            JwtError::InvalidSignature => ErrorKind::InvalidSignature,
            JwtError::TokenExpired { .. } => ErrorKind::TokenExpired,
            JwtError::Decode(_) => ErrorKind::Decode,
            JwtError::InvalidKey(_) => ErrorKind::InvalidKey,
            JwtError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Diagnostic text attached to the error, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            JwtError::Malformed(msg)
            | JwtError::Decode(msg)
            | JwtError::InvalidKey(msg)
            | JwtError::Serialization(msg) => Some(msg),
            JwtError::InvalidSignature | JwtError::TokenExpired { .. } => None,
        }
    }
}

impl From<base64::DecodeError> for JwtError {
    fn from(err: base64::DecodeError) -> Self {
        JwtError::Decode(err.to_string())
    }
}
