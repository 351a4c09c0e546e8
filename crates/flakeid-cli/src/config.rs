use anyhow::bail;
use clap::{Parser, ValueEnum};
use flakeid::{Config, IdOption};

/// Runtime configuration for the `flakeid` binary.
///
/// Every flag can also be supplied through the environment (and therefore a
/// `.env` file). Unset fields fall back to the library defaults: the current
/// time, the default epoch, and zero-valued IDs.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flakeid",
    version,
    about = "Mint Snowflake IDs: 41-bit timestamp, 5-bit datacenter, 5-bit machine, 12-bit sequence"
)]
pub struct CliArgs {
    /// Explicit timestamp in milliseconds since the Unix epoch. Defaults to
    /// the current time.
    ///
    /// Environment variable: `FLAKEID_TIMESTAMP_MS`
    #[arg(long, env = "FLAKEID_TIMESTAMP_MS", allow_hyphen_values = true)]
    pub timestamp_ms: Option<i64>,

    /// Epoch override in milliseconds since the Unix epoch. Defaults to
    /// 2024-01-01T00:00:00Z.
    ///
    /// Environment variable: `FLAKEID_EPOCH_MS`
    #[arg(long, env = "FLAKEID_EPOCH_MS", allow_hyphen_values = true)]
    pub epoch_ms: Option<i64>,

    /// Datacenter ID, 0 through 31.
    ///
    /// Environment variable: `FLAKEID_DATACENTER_ID`
    #[arg(long, env = "FLAKEID_DATACENTER_ID")]
    pub datacenter_id: Option<u64>,

    /// Machine ID, 0 through 31.
    ///
    /// Environment variable: `FLAKEID_MACHINE_ID`
    #[arg(long, env = "FLAKEID_MACHINE_ID")]
    pub machine_id: Option<u64>,

    /// Sequence number, 0 through 4095.
    ///
    /// Environment variable: `FLAKEID_SEQUENCE`
    #[arg(long, env = "FLAKEID_SEQUENCE")]
    pub sequence: Option<u64>,

    /// Fill datacenter ID, machine ID and sequence with random values when
    /// they are left at zero.
    ///
    /// Environment variable: `FLAKEID_RANDOM`
    #[arg(short, long, env = "FLAKEID_RANDOM", default_value_t = false)]
    pub random: bool,

    /// Number of IDs to mint.
    ///
    /// Environment variable: `FLAKEID_COUNT`
    #[arg(short = 'n', long, env = "FLAKEID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Output format.
    ///
    /// Environment variable: `FLAKEID_FORMAT`
    #[arg(long, env = "FLAKEID_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `int64:` and `bits:` lines per ID.
    Text,
    /// One JSON object per line with the decoded fields.
    Json,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub options: Vec<IdOption>,
    pub count: usize,
    pub format: OutputFormat,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("FLAKEID_COUNT must be greater than 0");
        }

        let options: Vec<IdOption> = [
            args.timestamp_ms.map(IdOption::TimestampMillis),
            args.epoch_ms.map(IdOption::EpochMillis),
            args.datacenter_id.map(IdOption::DatacenterId),
            args.machine_id.map(IdOption::MachineId),
            args.sequence.map(IdOption::Sequence),
            args.random.then_some(IdOption::Randomize),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Surface range errors before any output is written.
        Config::from_options(options.iter().copied())?;

        Ok(Self {
            options,
            count: args.count,
            format: args.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flakeid::Error;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("flakeid").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_to_options_in_order() {
        let config = CliConfig::try_from(parse(&[
            "--timestamp-ms",
            "1706745600000",
            "--datacenter-id",
            "31",
            "--machine-id",
            "15",
            "--sequence",
            "1",
        ]))
        .unwrap();

        assert_eq!(
            config.options,
            vec![
                IdOption::TimestampMillis(1_706_745_600_000),
                IdOption::DatacenterId(31),
                IdOption::MachineId(15),
                IdOption::Sequence(1),
            ]
        );
        assert_eq!(config.count, 1);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn random_flag_and_json_format() {
        let config = CliConfig::try_from(parse(&["--random", "-n", "3", "--format", "json"])).unwrap();
        assert_eq!(config.options, vec![IdOption::Randomize]);
        assert_eq!(config.count, 3);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn negative_epoch_is_accepted() {
        let config = CliConfig::try_from(parse(&["--epoch-ms", "-1000"])).unwrap();
        assert_eq!(config.options, vec![IdOption::EpochMillis(-1000)]);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = CliConfig::try_from(parse(&["--count", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "FLAKEID_COUNT must be greater than 0");
    }

    #[test]
    fn out_of_range_ids_are_rejected_up_front() {
        let err = CliConfig::try_from(parse(&["--machine-id", "32"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidMachineId { value: 32 })
        );
    }
}
