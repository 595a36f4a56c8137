//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber that `TracingSink` and the
//!   crate's own diagnostics write to
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the default filter
//! - Module thresholds already gate records, so the default filter should
//!   let them through

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber with `default_filter` unless `RUST_LOG` is set.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
