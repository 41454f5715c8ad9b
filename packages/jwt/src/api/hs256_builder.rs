//! HS256 builder

use crate::clock::{Clock, SystemClock};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::keys::SecretKey;
use std::sync::Arc;

/// HS256 builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder;

impl Hs256Builder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the HMAC-SHA256 secret
    #[must_use]
    pub fn with_secret(self, secret: impl Into<SecretKey>) -> Hs256WithSecret {
        Hs256WithSecret {
            secret: secret.into(),
            clock: Arc::new(SystemClock),
        }
    }
}

/// HS256 builder with secret configured
#[derive(Clone)]
pub struct Hs256WithSecret {
    secret: SecretKey,
    clock: Arc<dyn Clock>,
}

impl Hs256WithSecret {
    /// Replace the system clock
    ///
    /// Pass an `Arc<FixedClock>` to keep a handle for moving time.
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Encoder sharing this secret and clock
    #[must_use]
    pub fn encoder(&self) -> Encoder {
        Encoder::with_clock(self.secret.clone(), Arc::clone(&self.clock))
    }

    /// Decoder sharing this secret and clock
    #[must_use]
    pub fn decoder(&self) -> Decoder {
        Decoder::with_clock(self.secret.clone(), Arc::clone(&self.clock))
    }
}

impl std::fmt::Debug for Hs256WithSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hs256WithSecret")
            .field("secret", &self.secret)
            .finish_non_exhaustive()
    }
}
