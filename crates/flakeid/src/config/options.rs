use std::time::SystemTime;

use crate::{Config, Error, Result, SnowflakeId, time::unix_millis};

/// A single configuration step for one generation call.
///
/// Options are applied in the order they are supplied. Range-checked options
/// fail on the spot, and the first failure aborts the whole call.
///
/// # Example
///
/// ```
/// use flakeid::{Error, IdOption, generate};
///
/// let err = generate([IdOption::MachineId(3), IdOption::DatacenterId(32)]).unwrap_err();
/// assert_eq!(err, Error::InvalidDatacenterId { value: 32 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdOption {
    /// Uses this instant instead of sampling the clock. Not validated until
    /// the clock is resolved.
    Timestamp(SystemTime),
    /// Like [`IdOption::Timestamp`], in milliseconds since the Unix epoch.
    TimestampMillis(i64),
    /// Sets the datacenter ID. Must be in `0..=31`.
    DatacenterId(u64),
    /// Sets the machine ID. Must be in `0..=31`.
    MachineId(u64),
    /// Sets the sequence number. Must be in `0..=4095`.
    Sequence(u64),
    /// Measures the timestamp from this epoch instead of the generator's
    /// default.
    Epoch(SystemTime),
    /// Like [`IdOption::Epoch`], in milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Fills datacenter ID, machine ID and sequence with random values when
    /// they are still zero after all options have run.
    Randomize,
}

impl IdOption {
    /// Applies this option to `config`.
    ///
    /// # Errors
    ///
    /// Returns the matching range error when a datacenter ID, machine ID or
    /// sequence number does not fit its field. `config` is left untouched in
    /// that case.
    pub fn apply(self, config: &mut Config) -> Result<()> {
        match self {
            Self::Timestamp(at) => config.timestamp = Some(unix_millis(at)),
            Self::TimestampMillis(ms) => config.timestamp = Some(ms),
            Self::DatacenterId(value) => {
                if value > SnowflakeId::max_datacenter_id() {
                    return Err(Error::InvalidDatacenterId { value });
                }
                config.datacenter_id = value;
            }
            Self::MachineId(value) => {
                if value > SnowflakeId::max_machine_id() {
                    return Err(Error::InvalidMachineId { value });
                }
                config.machine_id = value;
            }
            Self::Sequence(value) => {
                if value > SnowflakeId::max_sequence() {
                    return Err(Error::InvalidSequenceNumber { value });
                }
                config.sequence = value;
            }
            Self::Epoch(at) => config.epoch = Some(unix_millis(at)),
            Self::EpochMillis(ms) => config.epoch = Some(ms),
            Self::Randomize => config.randomize = true,
        }
        Ok(())
    }
}
