//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the report text. The filter comes
//! from `RUST_LOG` (a `.env` file is honoured), defaulting to `epl_rfa=info`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "epl_rfa=info";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
