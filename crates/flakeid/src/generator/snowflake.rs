use core::time::Duration;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Config, DEFAULT_EPOCH, Error, IdOption, Result, SnowflakeId,
    rand::{RandSource, ThreadRandom},
    time::{SystemClock, TimeSource, epoch_millis},
};

/// A stateless Snowflake ID generator.
///
/// Every call runs the same linear pipeline over a fresh [`Config`]:
///
/// 1. apply the options in order, rejecting out-of-range fields;
/// 2. resolve the elapsed milliseconds between the effective timestamp and
///    the effective epoch;
/// 3. optionally fill zero-valued fields from the [`RandSource`];
/// 4. pack the fields into a [`SnowflakeId`].
///
/// Nothing is carried over between calls, so no lock is taken and one
/// generator can be shared freely between threads when `T` and `R` allow it.
/// Two calls in the same millisecond with the same fields produce the same ID.
///
/// ## See Also
/// - [`generate`] for a one-shot call with the default sources
///
/// [`generate`]: crate::generate
#[derive(Clone, Debug)]
pub struct SnowflakeGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource,
{
    epoch: i64,
    time: T,
    rng: R,
}

impl Default for SnowflakeGenerator {
    /// Constructs a generator using the system clock, the thread-local RNG and
    /// [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self::new(SystemClock, ThreadRandom)
    }
}

impl<T, R> SnowflakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a generator measuring time from [`DEFAULT_EPOCH`].
    ///
    /// # Parameters
    ///
    /// - `time`: A [`TimeSource`] sampled when a call sets no explicit
    ///   timestamp.
    /// - `rng`: A [`RandSource`] used when a call enables randomization.
    ///
    /// # Example
    /// ```
    /// use flakeid::{IdOption, SnowflakeGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = SnowflakeGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.generate_from([IdOption::Randomize]).unwrap();
    /// assert!(id.to_i64() > 0);
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::with_epoch(DEFAULT_EPOCH, time, rng)
    }

    /// Creates a generator whose default epoch is `epoch`, given as a
    /// [`Duration`] since the Unix epoch. Calls may still override it with
    /// [`IdOption::Epoch`].
    ///
    /// # Example
    /// ```
    /// use flakeid::{IdOption, SnowflakeGenerator, SystemClock, ThreadRandom, time::TWITTER_EPOCH};
    ///
    /// let generator = SnowflakeGenerator::with_epoch(TWITTER_EPOCH, SystemClock, ThreadRandom);
    /// let id = generator.generate_from([IdOption::TimestampMillis(1_288_834_974_658)]).unwrap();
    /// assert_eq!(id.timestamp(), 1);
    /// ```
    pub fn with_epoch(epoch: Duration, time: T, rng: R) -> Self {
        Self {
            epoch: epoch_millis(epoch),
            time,
            rng,
        }
    }

    /// The default epoch of this generator, in Unix milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.epoch
    }

    /// Applies `options` in order and generates an ID from the result.
    ///
    /// # Errors
    ///
    /// Returns the first range error raised by `options`, otherwise any error
    /// from [`Self::generate`].
    pub fn generate_from<I>(&self, options: I) -> Result<SnowflakeId>
    where
        I: IntoIterator<Item = IdOption>,
    {
        let config = Config::from_options(options);
        #[cfg(feature = "tracing")]
        if let Err(e) = &config {
            tracing::debug!(error = %e, "rejected option");
        }
        self.generate(&config?)
    }

    /// Generates an ID from an already validated configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTimestamp`] if the effective timestamp is at or
    ///   before the effective epoch.
    /// - [`Error::OverLifetime`] if it is more than `2^41 - 1` ms after it.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, config: &Config) -> Result<SnowflakeId> {
        let elapsed = self.resolve_elapsed(config);
        #[cfg(feature = "tracing")]
        if let Err(e) = &elapsed {
            tracing::debug!(error = %e, "clock resolution failed");
        }
        let elapsed = elapsed?;

        let (datacenter_id, machine_id, sequence) = if config.randomize() {
            (
                self.fill(config.datacenter_id(), SnowflakeId::max_datacenter_id()),
                self.fill(config.machine_id(), SnowflakeId::max_machine_id()),
                self.fill(config.sequence(), SnowflakeId::max_sequence()),
            )
        } else {
            (config.datacenter_id(), config.machine_id(), config.sequence())
        };

        Ok(SnowflakeId::from_components(
            elapsed,
            datacenter_id,
            machine_id,
            sequence,
        ))
    }

    /// Returns the milliseconds between the effective timestamp and epoch,
    /// checked against the 41-bit timestamp field.
    fn resolve_elapsed(&self, config: &Config) -> Result<u64> {
        let at = match config.timestamp_millis() {
            Some(at) => at,
            None => self.time.current_millis(),
        };
        let epoch = config.epoch_millis().unwrap_or(self.epoch);

        let elapsed_ms = at.saturating_sub(epoch);
        match u64::try_from(elapsed_ms) {
            Ok(0) | Err(_) => Err(Error::InvalidTimestamp { elapsed_ms }),
            Ok(elapsed) if elapsed > SnowflakeId::max_timestamp() => {
                Err(Error::OverLifetime { elapsed_ms })
            }
            Ok(elapsed) => Ok(elapsed),
        }
    }

    /// Keeps a non-zero field, otherwise draws a value in `0..=max`. `max` is
    /// always `2^bits - 1`, so masking keeps the draw uniform.
    fn fill(&self, value: u64, max: u64) -> u64 {
        if value == 0 {
            self.rng.rand() & max
        } else {
            value
        }
    }
}
