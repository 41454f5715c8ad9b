//! Common infrastructure for the minijwt crates
//!
//! Currently this is the logging layer: `env_logger` setup plus helpers that
//! log token and authentication events without leaking subjects or keys.

pub mod logging;

pub use logging::LoggingTransformer;
