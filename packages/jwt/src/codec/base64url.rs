//! Base64 URL-safe encoding without padding (RFC 7515)

use crate::error::JwtResult;
use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};

/// Encode bytes as base64url with trailing `=` stripped
#[inline]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url
///
/// Padding is restored to a multiple of four before decoding. Input that
/// is still invalid afterwards fails with [`JwtError::Decode`].
///
/// [`JwtError::Decode`]: crate::JwtError::Decode
pub fn decode(input: impl AsRef<[u8]>) -> JwtResult<Vec<u8>> {
    let input = input.as_ref();
    let pad_count = (4 - input.len() % 4) % 4;

    let mut padded = Vec::with_capacity(input.len() + pad_count);
    padded.extend_from_slice(input);
    padded.resize(input.len() + pad_count, b'=');

    Ok(URL_SAFE.decode(&padded)?)
}
