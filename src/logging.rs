//! Logging setup on top of tracing-subscriber
//!
//! Logs always go to stderr. `RUST_LOG` picks the filter unless `--verbose`
//! forces debug output for this crate.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const VERBOSE_FILTER: &str = "wine_desktop_assets=debug,info";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init(verbose: bool, json: bool) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(verbose).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
