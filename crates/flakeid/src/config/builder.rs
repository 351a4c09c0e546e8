use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{IdOption, Result};

/// The call-scoped configuration consumed by one generation.
///
/// A `Config` is built fresh for every call, either from an ordered list of
/// [`IdOption`]s or through [`ConfigBuilder`]. Unset fields keep their zero
/// defaults; unset time fields fall back to the clock and to the generator's
/// epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) timestamp: Option<i64>,
    pub(crate) datacenter_id: u64,
    pub(crate) machine_id: u64,
    pub(crate) sequence: u64,
    pub(crate) epoch: Option<i64>,
    pub(crate) randomize: bool,
}

impl Config {
    /// Returns a builder starting from the zero configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Applies `options` in order to a fresh configuration.
    ///
    /// # Errors
    ///
    /// Returns the first range error encountered. Options after the failing
    /// one are not applied.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::{Config, Error, IdOption};
    ///
    /// let config = Config::from_options([IdOption::MachineId(15), IdOption::Randomize])?;
    /// assert_eq!(config.machine_id(), 15);
    /// assert!(config.randomize());
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(options)))]
    pub fn from_options<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = IdOption>,
    {
        options.into_iter().try_fold(Self::default(), |mut config, option| {
            option.apply(&mut config)?;
            Ok(config)
        })
    }

    /// The explicit timestamp in Unix milliseconds, if one was set.
    pub const fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp
    }

    pub const fn datacenter_id(&self) -> u64 {
        self.datacenter_id
    }

    pub const fn machine_id(&self) -> u64 {
        self.machine_id
    }

    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The epoch override in Unix milliseconds, if one was set.
    pub const fn epoch_millis(&self) -> Option<i64> {
        self.epoch
    }

    /// Whether zero-valued fields are filled randomly.
    pub const fn randomize(&self) -> bool {
        self.randomize
    }
}

/// A validating builder for [`Config`].
///
/// Range-checked setters return `Result<Self>`, so chaining them with `?`
/// keeps the options semantics: setters run in call order and the first
/// invalid value stops the chain.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flakeid::{Config, Error, SnowflakeGenerator};
///
/// let config = Config::builder()
///     .timestamp(UNIX_EPOCH + Duration::from_millis(1_706_745_600_000))
///     .datacenter_id(31)?
///     .machine_id(15)?
///     .sequence(1)?
///     .build();
///
/// let generator: SnowflakeGenerator = SnowflakeGenerator::default();
/// let id = generator.generate(&config)?;
/// assert_eq!(id.to_i64(), 11_234_023_837_724_673);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    fn with(mut self, option: IdOption) -> Result<Self> {
        option.apply(&mut self.config)?;
        Ok(self)
    }

    fn set(mut self, option: IdOption) -> Self {
        // Unchecked options never fail.
        let _ = option.apply(&mut self.config);
        self
    }

    /// See [`IdOption::Timestamp`].
    pub fn timestamp(self, at: SystemTime) -> Self {
        self.set(IdOption::Timestamp(at))
    }

    /// See [`IdOption::TimestampMillis`].
    pub fn timestamp_millis(self, ms: i64) -> Self {
        self.set(IdOption::TimestampMillis(ms))
    }

    /// See [`IdOption::DatacenterId`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDatacenterId`] if `value > 31`.
    pub fn datacenter_id(self, value: u64) -> Result<Self> {
        self.with(IdOption::DatacenterId(value))
    }

    /// See [`IdOption::MachineId`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMachineId`] if `value > 31`.
    pub fn machine_id(self, value: u64) -> Result<Self> {
        self.with(IdOption::MachineId(value))
    }

    /// See [`IdOption::Sequence`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSequenceNumber`] if `value > 4095`.
    pub fn sequence(self, value: u64) -> Result<Self> {
        self.with(IdOption::Sequence(value))
    }

    /// See [`IdOption::Epoch`].
    pub fn epoch(self, at: SystemTime) -> Self {
        self.set(IdOption::Epoch(at))
    }

    /// See [`IdOption::EpochMillis`].
    pub fn epoch_millis(self, ms: i64) -> Self {
        self.set(IdOption::EpochMillis(ms))
    }

    /// See [`IdOption::Randomize`].
    pub fn randomize(self) -> Self {
        self.set(IdOption::Randomize)
    }

    pub fn build(self) -> Config {
        self.config
    }
}
