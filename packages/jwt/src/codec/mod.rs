//! Byte-level encoding shared by the encoder and decoder
//!
//! - [`canonical`]: deterministic JSON for flat string/integer records
//! - [`base64url`]: URL-safe base64 without `=` padding

pub mod base64url;
pub mod canonical;

pub use canonical::{canonicalize, parse_payload};
