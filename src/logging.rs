//! Logging and tracing setup.
//!
//! The library only emits `tracing` events; binaries and tests install a
//! subscriber with one of the functions below.

use std::sync::Once;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` overrides `default_level`. Subsequent calls are ignored.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true);

        match tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(fmt_layer)
            .try_init()
        {
            Ok(()) => info!("shannon tracing initialized"),
            Err(err) => warn!(error = %err, "Global subscriber already set, keeping it"),
        }
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json(default_level: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_current_span(true);

        match tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(fmt_layer)
            .try_init()
        {
            Ok(()) => info!("shannon tracing initialized (JSON mode)"),
            Err(err) => warn!(error = %err, "Global subscriber already set, keeping it"),
        }
    });
}
