//! Tracing setup

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops. `RUST_LOG` overrides the default filter.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    INIT.call_once(|| {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    });
}
