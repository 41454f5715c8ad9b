//! Structured logging infrastructure
//!
//! Provides `env_logger`-based logging with secure handling of sensitive data
//! and proper integration with the standard log crate.

use log::{error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure shared by the token crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above (recommended for production)
    /// - `RUST_LOG=minijwt=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed token operation
    ///
    /// Only the operation, algorithm and error text are written. Callers
    /// must not pass key material in `error`.
    pub fn log_jwt_error(operation: &str, algorithm: &str, error: &str) {
        warn!("JWT operation failed: {operation} (alg: {algorithm}, error: {error})");
    }

    /// Log cryptographic errors without exposing sensitive data
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log authentication events securely
    ///
    /// Subjects are hashed for privacy while maintaining traceability
    pub fn log_auth_event(event: &str, subject: Option<&str>, success: bool) {
        if success {
            let subject_hash =
                subject.map_or_else(|| "anonymous".to_string(), Self::secure_hash_key);
            info!("Authentication succeeded: {event} (subject_hash: {subject_hash})");
        } else {
            warn!("Authentication failed: {event}");
        }
    }

    /// SHA-256 fingerprint of an identifier for log output.
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let prefix: String = hash.iter().take(6).map(|b| format!("{b:02x}")).collect();
        format!("#{prefix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let key1 = "my_name";
        let key2 = "someone_else";

        let hash1 = LoggingTransformer::secure_hash_key(key1);
        let hash2 = LoggingTransformer::secure_hash_key(key2);

        assert_ne!(hash1, hash2);
        assert_eq!(hash1, LoggingTransformer::secure_hash_key(key1));

        // '#' plus 12 hex chars
        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
        assert!(hash1[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_does_not_contain_subject() {
        let hash = LoggingTransformer::secure_hash_key("alice");
        assert!(!hash.contains("alice"));
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic
        LoggingTransformer::log_auth_event("token_verify", Some("user123"), true);
        LoggingTransformer::log_auth_event("token_verify", None, false);
        LoggingTransformer::log_jwt_error("jwt_verification", "HS256", "JWT token has expired");
    }
}
