//! # Structured Tracing for Negotiation
//!
//! Subscriber setup and span helpers for suite enumeration and selection.
//! The library itself only emits events; installing a subscriber is left to
//! the binary through [`init_tracing`].

use std::time::{Duration, Instant};

use tracing::{Level, Span, debug, error, span, trace};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Negotiation tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level applied when `RUST_LOG` is not set
    pub log_level: Level,
    /// Include thread ids in formatted output
    pub thread_ids: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self { log_level: Level::INFO, thread_ids: true }
    }
}

impl TracingConfig {
    /// Enable debug logging
    #[must_use]
    pub fn debug() -> Self {
        Self { log_level: Level::DEBUG, ..Default::default() }
    }

    /// Enable trace logging, which prints every enabled suite by name
    #[must_use]
    pub fn trace() -> Self {
        Self { log_level: Level::TRACE, ..Default::default() }
    }

    /// Drop thread ids from formatted output
    #[must_use]
    pub fn without_thread_ids(mut self) -> Self {
        self.thread_ids = false;
        self
    }
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Example
/// ```no_run
/// use algo_priority::tracing::{TracingConfig, init_tracing};
///
/// init_tracing(&TracingConfig::debug());
/// ```
pub fn init_tracing(config: &TracingConfig) -> bool {
    let filter =
        EnvFilter::builder().with_default_directive(config.log_level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(config.thread_ids))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Span wrapper timing one negotiation step
#[derive(Debug)]
pub struct NegotiationSpan {
    span: Span,
    start_time: Instant,
}

impl NegotiationSpan {
    /// Create a span for an arbitrary operation
    pub fn new(operation: &str) -> Self {
        let span = span!(Level::DEBUG, "negotiation", operation = %operation);
        span.in_scope(|| {
            trace!("Starting {}", operation);
        });
        Self { span, start_time: Instant::now() }
    }

    /// Create a span for suite selection against a peer offer
    pub fn selection(offered: usize) -> Self {
        let span = span!(Level::DEBUG, "suite_selection", offered = offered);
        span.in_scope(|| {
            debug!("Selecting from {} offered suites", offered);
        });
        Self { span, start_time: Instant::now() }
    }

    /// Get elapsed time since span creation
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Complete the span successfully
    pub fn complete(self) {
        let duration = self.elapsed();
        self.span.in_scope(|| {
            debug!(
                elapsed_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                "Negotiation step completed"
            );
        });
    }

    /// Complete the span with an error
    pub fn error<E>(self, error: &E)
    where
        E: std::error::Error,
    {
        let duration = self.elapsed();
        self.span.in_scope(|| {
            error!(
                error = %error,
                error_type = %std::any::type_name::<E>(),
                elapsed_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                "Negotiation step failed"
            );
        });
    }

    /// Enter span scope
    pub fn in_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.span.in_scope(f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_levels() {
        assert_eq!(TracingConfig::default().log_level, Level::INFO);
        assert_eq!(TracingConfig::debug().log_level, Level::DEBUG);
        assert_eq!(TracingConfig::trace().log_level, Level::TRACE);
        assert!(!TracingConfig::debug().without_thread_ids().thread_ids);
    }

    #[test]
    fn test_span_scope_returns_value() {
        let span = NegotiationSpan::new("unit");
        let value = span.in_scope(|| 7);
        assert_eq!(value, 7);
        let first = span.elapsed();
        assert!(span.elapsed() >= first);
        span.complete();
    }

    #[test]
    fn test_second_init_reports_false() {
        let _first = init_tracing(&TracingConfig::default());
        assert!(!init_tracing(&TracingConfig::default()));
    }
}
