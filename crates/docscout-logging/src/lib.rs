//! Logging initialization
//!
//! stdout is reserved for the rendered documentation block, so every
//! diagnostic line goes to stderr.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "DOCSCOUT_LOG";

/// Initialize the logging system. `level` applies when `DOCSCOUT_LOG` is
/// unset.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
