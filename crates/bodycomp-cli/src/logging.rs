//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays parseable (`--json`, `export`).
//! The filter comes from `BODYCOMP_LOG` (e.g. `debug`, `bodycomp_core=trace`)
//! and defaults to warnings only.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call once per process.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
