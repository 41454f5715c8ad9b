//! Compact HS256 tokens binding a subject to an expiry time
//!
//! Tokens have the usual three-segment shape
//! `base64url(header).base64url(payload).base64url(hmac_sha256)` with:
//! - header `{"alg":"HS256","typ":"JWT"}`
//! - payload `{"exp":<unix seconds>,"username":"<subject>"}`
//! - no `=` padding anywhere
//!
//! ```
//! let token = minijwt::encode("my_name", 200, "123456")?;
//! assert_eq!(minijwt::decode(&token, "123456")?, "my_name");
//! # Ok::<(), minijwt::JwtError>(())
//! ```
//!
//! Decoding checks the signature before reading the payload, then rejects
//! tokens whose `exp` is in the past. Both directions are synchronous and
//! only read the clock.

pub mod api;
pub mod clock;
pub mod codec;
pub(crate) mod crypto;
pub mod decoder;
pub mod encoder;
mod error;
pub mod keys;
mod types;

pub use api::{Hs256Builder, Hs256WithSecret, Jwt};
pub use clock::{Clock, FixedClock, SystemClock};
pub use decoder::{decode, decode_unverified_payload, Decoder};
pub use encoder::{encode, Encoder};
pub use error::*;
pub use keys::SecretKey;
pub use types::*;
