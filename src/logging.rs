//! Tracing setup for hosts embedding the customizer.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "template_customizer=info";

/// Build the filter used by [`init_tracing`].
///
/// Log level is controlled by:
/// 1. `debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("template_customizer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber for logging.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_tracing(debug: bool) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter(debug))
        .try_init();
}
