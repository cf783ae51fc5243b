use std::io;

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG` and falls back to `info`. Logs go to stderr so they
/// never interleave with console output on stdout. Fails when a global
/// subscriber is already installed.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
