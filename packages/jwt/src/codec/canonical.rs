//! Canonical serialization for signed records
//!
//! The signature covers the encoded bytes, so one logical record must always
//! produce the same bytes: fields sorted byte-wise by name, no whitespace,
//! `"name":value` pairs joined with `,` inside `{}`. Only string and integer
//! fields are accepted.

use crate::error::{JwtError, JwtResult};
use crate::types::Payload;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Serialize a flat record into canonical bytes
///
/// # Errors
///
/// Returns [`JwtError::Serialization`] if `record` is not a flat object of
/// strings and integers.
pub fn canonicalize<T: Serialize>(record: &T) -> JwtResult<Vec<u8>> {
    let Value::Object(fields) =
        serde_json::to_value(record).map_err(|e| JwtError::serialization(&e.to_string()))?
    else {
        return Err(JwtError::serialization("canonical record must be an object"));
    };

    // Map ordering is independent of serde_json's map features
    let sorted: BTreeMap<String, Value> = fields.into_iter().collect();

    let mut out = Vec::with_capacity(64);
    out.push(b'{');
    for (index, (name, value)) in sorted.iter().enumerate() {
        if index > 0 {
            out.push(b',');
        }
        write_string(&mut out, name)?;
        out.push(b':');
        match value {
            Value::String(s) => write_string(&mut out, s)?,
            Value::Number(n) => {
                let n = n.as_i64().ok_or_else(|| {
                    JwtError::Serialization(format!("field '{name}' is not a signed 64-bit integer"))
                })?;
                out.extend_from_slice(n.to_string().as_bytes());
            }
            _ => {
                return Err(JwtError::Serialization(format!(
                    "field '{name}' must be a string or an integer"
                )));
            }
        }
    }
    out.push(b'}');

    Ok(out)
}

/// Write `s` as an ASCII-only JSON string literal
///
/// Anything outside printable ASCII becomes a lowercase `\uXXXX` escape,
/// with a UTF-16 surrogate pair above U+FFFF.
fn write_string(out: &mut Vec<u8>, s: &str) -> JwtResult<()> {
    let quoted = serde_json::to_string(s).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let mut units = [0_u16; 2];
    for c in quoted.chars() {
        if (' '..='~').contains(&c) {
            out.push(c as u8);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.extend_from_slice(format!("\\u{unit:04x}").as_bytes());
            }
        }
    }
    Ok(())
}

/// Parse canonical payload bytes back into a [`Payload`]
///
/// # Errors
///
/// Returns [`JwtError::Malformed`] unless the bytes hold an `exp` integer
/// and a `username` string.
pub fn parse_payload(bytes: &[u8]) -> JwtResult<Payload> {
    serde_json::from_slice(bytes)
        .map_err(|e| JwtError::Malformed(format!("payload is not a valid record: {e}")))
}
