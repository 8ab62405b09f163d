//! Diagnostic logging. Events go to stderr so they never mix with the
//! stdout dialogue.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const APP_TARGET: &str = "nbu_rate";

/// Level for this crate's events when `RUST_LOG` is not set.
fn app_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

fn default_directive(verbose: bool) -> String {
    format!("{APP_TARGET}={}", app_level(verbose))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence; otherwise
/// only this crate logs, and only with `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
