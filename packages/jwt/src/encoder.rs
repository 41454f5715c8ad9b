//! Token issuing

use crate::clock::{Clock, SystemClock};
use crate::codec::{base64url, canonicalize};
use crate::crypto::hmac_sha256;
use crate::error::JwtResult;
use crate::keys::SecretKey;
use crate::types::{Header, Payload, Token, ALGORITHM};
use minijwt_common::LoggingTransformer;
use std::sync::Arc;

/// Issues HS256 tokens with a fixed secret
///
/// Holds no mutable state; one encoder can be shared across threads.
#[derive(Clone)]
pub struct Encoder {
    secret: SecretKey,
    clock: Arc<dyn Clock>,
}

impl Encoder {
    /// Encoder using the system clock
    #[must_use]
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self::with_clock(secret.into(), Arc::new(SystemClock))
    }

    pub(crate) fn with_clock(secret: SecretKey, clock: Arc<dyn Clock>) -> Self {
        Self { secret, clock }
    }

    /// Issue a token for `subject` that expires `lifetime_seconds` from now
    ///
    /// `exp` is the current second (floored) plus the lifetime. A zero
    /// lifetime yields a token that expires on the next millisecond; a
    /// negative one is already expired.
    ///
    /// # Errors
    ///
    /// Fails only if the MAC backend rejects the key or a record cannot be
    /// serialized; neither happens for HMAC-SHA256 with string subjects.
    pub fn encode(&self, subject: &str, lifetime_seconds: i64) -> JwtResult<Token> {
        let expires_at = self.clock.now().saturating_add(lifetime_seconds);
        self.encode_payload(&Payload::new(subject, expires_at))
    }

    /// Sign an explicit payload
    ///
    /// The same payload and secret always produce the same token.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode`].
    pub fn encode_payload(&self, payload: &Payload) -> JwtResult<Token> {
        let header_segment = base64url::encode(canonicalize(&Header::hs256())?);
        let payload_segment = base64url::encode(canonicalize(payload)?);

        let signature_segment = hmac_sha256::signature_segment(
            header_segment.as_bytes(),
            payload_segment.as_bytes(),
            self.secret.expose(),
        )
        .inspect_err(|e| LoggingTransformer::log_crypto_error("jwt_signing", e))?;

        tracing::debug!(alg = ALGORITHM, expires_at = payload.expires_at, "issued token");

        Ok(Token::from_segments(
            &header_segment,
            &payload_segment,
            &signature_segment,
        ))
    }
}

impl std::fmt::Debug for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoder")
            .field("secret", &self.secret)
            .finish_non_exhaustive()
    }
}

/// Issue a token for `subject` valid for `lifetime_seconds`, signed with `key`
///
/// # Errors
///
/// See [`Encoder::encode`].
pub fn encode(subject: &str, lifetime_seconds: i64, key: impl AsRef<[u8]>) -> JwtResult<Token> {
    Encoder::new(key.as_ref()).encode(subject, lifetime_seconds)
}
