//! Configuration for the contact book.
//!
//! Everything is optional with sensible defaults; a `.env` file is honored
//! if present. Logging goes to stderr, so the default level is kept quiet
//! to leave stdout to the conversation itself.

use std::env;

/// Default tracing level when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing level filter (default: "error")
    pub fn from_env() -> Self {
        // Load .env if it exists, without failing when it doesn't.
        let _ = dotenvy::dotenv();

        let log_level =
            env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Self { log_level }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
