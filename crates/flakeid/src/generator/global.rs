use crate::{IdOption, Result, SnowflakeGenerator, SnowflakeId};

/// Generates a Snowflake ID with the default generator and returns it as an
/// `i64`.
///
/// The default generator samples the system clock, draws random fields from
/// the thread-local RNG and measures time from [`DEFAULT_EPOCH`]. Options are
/// applied in order; the first invalid one aborts the call.
///
/// # Errors
///
/// Any [`Error`] from option validation or clock resolution. No ID is
/// produced on failure.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flakeid::{IdOption, generate};
///
/// let id = generate([
///     IdOption::Timestamp(UNIX_EPOCH + Duration::from_millis(1_706_745_600_000)),
///     IdOption::DatacenterId(31),
///     IdOption::MachineId(15),
///     IdOption::Sequence(1),
/// ])?;
/// assert_eq!(id, 11_234_023_837_724_673);
/// assert_eq!(
///     format!("{id:064b}"),
///     "0000000000100111111010010100100100000000001111101111000000000001"
/// );
/// # Ok::<(), flakeid::Error>(())
/// ```
///
/// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
/// [`Error`]: crate::Error
pub fn generate<I>(options: I) -> Result<i64>
where
    I: IntoIterator<Item = IdOption>,
{
    generate_id(options).map(i64::from)
}

/// Like [`generate`], returning the typed [`SnowflakeId`].
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_id<I>(options: I) -> Result<SnowflakeId>
where
    I: IntoIterator<Item = IdOption>,
{
    <SnowflakeGenerator>::default().generate_from(options)
}
