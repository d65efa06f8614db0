//! Subscriber setup for applications embedding rigging.
//!
//! Only available with the `logging` feature. Library users who already
//! install a subscriber get rigging's tracing events without it.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Warn,
    #[default]
    Info,
    Debug,
    /// Includes per-invocation rule and plugin counts
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "rigging=off,rigging_config=off",
            LogLevel::Warn => "rigging=warn,rigging_config=warn",
            LogLevel::Info => "rigging=info,rigging_config=info",
            LogLevel::Debug => "rigging=debug,rigging_config=debug",
            LogLevel::Trace => "rigging=trace,rigging_config=trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Install a compact stderr subscriber. `RUST_LOG` takes precedence over
/// `level`. Only the first call in a process has any effect.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

        // A subscriber installed elsewhere wins; ours is then simply dropped.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn directives_cover_both_crates() {
        for level in [LogLevel::Silent, LogLevel::Warn, LogLevel::Debug] {
            let directive = level.directive();
            assert!(directive.contains("rigging="));
            assert!(directive.contains("rigging_config="));
            let _filter = EnvFilter::new(directive);
        }
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LogLevel::Debug);
        init_logging(LogLevel::Silent);
    }
}
