//! Token verification
//!
//! Verification is a linear pipeline where each step is a terminal gate:
//! segment split, signature check, payload parse, expiry check. The
//! signature is checked before any payload byte is interpreted.

use crate::clock::{Clock, SystemClock};
use crate::codec::{base64url, parse_payload};
use crate::crypto::hmac_sha256;
use crate::error::{JwtError, JwtResult};
use crate::keys::SecretKey;
use crate::types::{Payload, ALGORITHM};
use minijwt_common::LoggingTransformer;
use std::sync::Arc;

/// Verifies HS256 tokens against a fixed secret
///
/// Holds no mutable state; one decoder can be shared across threads.
#[derive(Clone)]
pub struct Decoder {
    secret: SecretKey,
    clock: Arc<dyn Clock>,
}

impl Decoder {
    /// Decoder using the system clock
    #[must_use]
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self::with_clock(secret.into(), Arc::new(SystemClock))
    }

    pub(crate) fn with_clock(secret: SecretKey, clock: Arc<dyn Clock>) -> Self {
        Self { secret, clock }
    }

    /// Verify `token` and return its subject
    ///
    /// # Errors
    ///
    /// - [`JwtError::Malformed`] if the token does not have three segments or
    ///   the payload is not a `{exp, username}` record
    /// - [`JwtError::InvalidSignature`] if the signature does not match
    /// - [`JwtError::Decode`] if the signed payload is not valid base64url
    /// - [`JwtError::TokenExpired`] if the current time is past `exp`
    pub fn decode(&self, token: impl AsRef<[u8]>) -> JwtResult<String> {
        self.verify(token).map(|payload| payload.subject)
    }

    /// Verify `token` and return the whole payload
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    pub fn verify(&self, token: impl AsRef<[u8]>) -> JwtResult<Payload> {
        match self.verify_inner(token.as_ref()) {
            Ok(payload) => {
                LoggingTransformer::log_auth_event(
                    "jwt_verification",
                    Some(payload.subject.as_str()),
                    true,
                );
                tracing::debug!(alg = ALGORITHM, expires_at = payload.expires_at, "token verified");
                Ok(payload)
            }
            Err(e) => {
                LoggingTransformer::log_jwt_error("jwt_verification", ALGORITHM, &e.to_string());
                tracing::warn!(alg = ALGORITHM, kind = ?e.kind(), "token rejected");
                Err(e)
            }
        }
    }

    fn verify_inner(&self, token: &[u8]) -> JwtResult<Payload> {
        let (header_segment, payload_segment, signature_segment) = split_segments(token)?;

        if !hmac_sha256::signature_matches(
            header_segment,
            payload_segment,
            signature_segment,
            self.secret.expose(),
        )? {
            return Err(JwtError::invalid_signature());
        }

        let payload = parse_payload(&base64url::decode(payload_segment)?)?;

        let now_ms = self.clock.now_millis();
        if payload.is_expired_at_millis(now_ms) {
            return Err(JwtError::token_expired(payload.expires_at, now_ms));
        }

        Ok(payload)
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("secret", &self.secret)
            .finish_non_exhaustive()
    }
}

fn split_segments(token: &[u8]) -> JwtResult<(&[u8], &[u8], &[u8])> {
    let segments: Vec<&[u8]> = token.split(|b| *b == b'.').collect();
    match segments.as_slice() {
        &[header, payload, signature] => Ok((header, payload, signature)),
        other => Err(JwtError::Malformed(format!(
            "expected 3 segments, found {}",
            other.len()
        ))),
    }
}

/// Verify `token` with `key` and return its subject
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(token: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> JwtResult<String> {
    Decoder::new(key.as_ref()).decode(token)
}

/// Read the payload without checking the signature or expiry
///
/// The result is attacker-controlled. Use it for diagnostics only, never
/// to authenticate anyone.
///
/// # Errors
///
/// [`JwtError::Malformed`] or [`JwtError::Decode`] if the payload cannot be
/// read.
pub fn decode_unverified_payload(token: impl AsRef<[u8]>) -> JwtResult<Payload> {
    let (_, payload_segment, _) = split_segments(token.as_ref())?;
    parse_payload(&base64url::decode(payload_segment)?)
}
