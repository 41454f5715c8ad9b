//! Builder API
//!
//! `Jwt::hs256().with_secret(key)` configures the secret (and optionally a
//! clock) once, then hands out encoders and decoders that share it.

pub mod hs256_builder;

pub use hs256_builder::{Hs256Builder, Hs256WithSecret};

/// Entry point for the builder API
pub struct Jwt;

impl Jwt {
    /// Start configuring HS256 tokens
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder::new()
    }
}
