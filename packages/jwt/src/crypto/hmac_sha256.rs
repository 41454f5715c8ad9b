//! HMAC-SHA256 operations for JWT signing and verification

use crate::codec::base64url;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over raw bytes
pub fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Base64url signature over `header_segment "." payload_segment`
pub fn signature_segment(
    header_segment: &[u8],
    payload_segment: &[u8],
    secret: &[u8],
) -> JwtResult<String> {
    let mut signing_input = Vec::with_capacity(header_segment.len() + payload_segment.len() + 1);
    signing_input.extend_from_slice(header_segment);
    signing_input.push(b'.');
    signing_input.extend_from_slice(payload_segment);

    let signature = hmac_sha256_sign(&signing_input, secret)?;
    Ok(base64url::encode(signature))
}

/// Recompute the signature and compare it with `supplied` in constant time
pub fn signature_matches(
    header_segment: &[u8],
    payload_segment: &[u8],
    supplied: &[u8],
    secret: &[u8],
) -> JwtResult<bool> {
    let expected = signature_segment(header_segment, payload_segment, secret)?;
    Ok(expected.as_bytes().ct_eq(supplied).into())
}
