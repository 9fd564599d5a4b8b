//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library only emits events: `debug` for comparison counts and CSV
//! reads, `info` for written report paths, `warn` for mismatches and
//! failed writes. Test suites install a subscriber once with
//! [`init_test_logging`]; `RUST_LOG` overrides the configured level.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_target: bool,
    pub with_ansi: bool,
    /// Route output through the test harness so it is captured per test.
    pub test_writer: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: false,
            with_ansi: true,
            test_writer: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_test_writer(mut self, enable: bool) -> Self {
        self.test_writer = enable;
        self
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber. Returns `false` when one was already set,
/// which is expected when several tests share a process.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = build_env_filter(config.level);
    let layer = fmt::layer()
        .compact()
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    if config.test_writer {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_test_writer())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .is_ok()
    }
}

/// Debug-level logging captured by the test harness.
pub fn init_test_logging() -> bool {
    init_logging(
        &LogConfig::default()
            .with_level(Level::DEBUG)
            .with_ansi(false)
            .with_test_writer(true),
    )
}
