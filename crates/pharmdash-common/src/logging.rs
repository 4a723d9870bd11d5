//! Logging initialization for pharmdash
//!
//! All crates emit `tracing` events; this module owns the one-time
//! subscriber setup so binaries and tests configure it in a single place.
//! The filter follows the usual `RUST_LOG` conventions, with an explicit
//! default that keeps pharmdash crates at debug and everything else at warn.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor an explicit filter is given.
const DEFAULT_FILTER: &str = "warn,pharmdash=debug";

/// Logging configuration options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Explicit filter directive, overriding `RUST_LOG`
    pub filter: Option<String>,
    /// Suppress timestamps and ANSI colors (test-friendly output)
    pub plain: bool,
}

/// Initialize the global subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Use [`try_init`]
/// when initialization may race with another caller (tests).
pub fn init(options: LogOptions) {
    try_init(options).expect("logging already initialized");
}

/// Initialize the global subscriber, returning an error if one is already
/// installed instead of panicking.
pub fn try_init(options: LogOptions) -> Result<(), String> {
    let filter = match &options.filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if options.plain {
        builder.without_time().with_ansi(false).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_init_is_idempotent_at_the_error_level() {
        // Whichever test initializes first wins; the second call must not
        // panic, only report the conflict.
        let first = try_init(LogOptions {
            filter: Some("debug".to_string()),
            plain: true,
        });
        let second = try_init(LogOptions::default());
        assert!(first.is_ok() || second.is_err());
    }

    #[test]
    fn default_options_have_no_filter() {
        let options = LogOptions::default();
        assert!(options.filter.is_none());
        assert!(!options.plain);
    }
}
