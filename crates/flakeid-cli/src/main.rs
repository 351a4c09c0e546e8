#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use config::{CliArgs, CliConfig, OutputFormat};
use flakeid::{SnowflakeGenerator, SnowflakeId};
use serde::Serialize;
use telemetry::init_telemetry;

/// One decoded ID in `--format json` output.
#[derive(Serialize)]
struct IdRecord {
    id: SnowflakeId,
    bits: String,
    timestamp_ms: u64,
    datacenter_id: u64,
    machine_id: u64,
    sequence: u64,
}

impl From<SnowflakeId> for IdRecord {
    fn from(id: SnowflakeId) -> Self {
        Self {
            id,
            bits: id.to_bit_string(),
            timestamp_ms: id.timestamp(),
            datacenter_id: id.datacenter_id(),
            machine_id: id.machine_id(),
            sequence: id.sequence(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;

    let config = CliConfig::try_from(args)?;
    tracing::debug!(?config, "starting");

    let generator: SnowflakeGenerator = SnowflakeGenerator::default();
    let mut out = BufWriter::new(io::stdout().lock());

    for _ in 0..config.count {
        let id = generator.generate_from(config.options.iter().copied())?;
        match config.format {
            OutputFormat::Text => {
                writeln!(out, "int64: {}", id.to_i64())?;
                writeln!(out, " bits: {}", id.to_bit_string())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &IdRecord::from(id))?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
