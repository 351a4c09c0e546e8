//! Log output for the `flakeid` binary.
//!
//! Events go to stderr through a `fmt` layer so that stdout carries only the
//! minted IDs. The filter is read from `RUST_LOG` and defaults to `warn`;
//! `RUST_LOG=flakeid=trace` shows every generation span from the library.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()?;

    Ok(())
}
