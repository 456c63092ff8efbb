//! Diagnostics on stderr through `tracing`.
//!
//! Level precedence: `RUST_LOG`, then `-v` flags, then `log_level` from the
//! configuration file.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Use the configured level.
    #[default]
    Configured,
    /// `-v`: debug and above.
    Verbose,
    /// `-vv` or more: everything.
    Trace,
}

impl Verbosity {
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Configured,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    fn level(&self) -> Option<Level> {
        match self {
            Self::Configured => None,
            Self::Verbose => Some(Level::DEBUG),
            Self::Trace => Some(Level::TRACE),
        }
    }
}

/// Filter directive for this crate, e.g. `qrattend=debug`.
pub fn filter_directive(verbosity: Verbosity, configured: &str) -> String {
    let level = match verbosity.level() {
        Some(l) => l.to_string().to_lowercase(),
        None => normalize_level(configured),
    };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

fn normalize_level(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    match lower.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => lower,
        _ => "warn".to_string(),
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity, configured: &str) {
    let default_filter = filter_directive(verbosity, configured);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_config() {
        assert_eq!(filter_directive(Verbosity::Configured, "info"), "qrattend=info");
        assert_eq!(filter_directive(Verbosity::Verbose, "error"), "qrattend=debug");
        assert_eq!(filter_directive(Verbosity::Trace, "error"), "qrattend=trace");
    }

    #[test]
    fn unknown_config_level_falls_back_to_warn() {
        assert_eq!(filter_directive(Verbosity::Configured, "chatty"), "qrattend=warn");
        assert_eq!(filter_directive(Verbosity::Configured, " DEBUG "), "qrattend=debug");
    }

    #[test]
    fn occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Configured);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_occurrences(4), Verbosity::Trace);
    }
}
