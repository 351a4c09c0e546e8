use std::time::{SystemTime, UNIX_EPOCH};

use crate::time::TimeSource;

/// A [`TimeSource`] backed by the operating system's wall clock.
///
/// Each call samples [`SystemTime::now`]. There is no caching or ticker
/// thread, so the value follows any adjustment made to the system clock.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> i64 {
        unix_millis(SystemTime::now())
    }
}

/// Converts a [`SystemTime`] into milliseconds since the Unix epoch.
///
/// Instants before 1970 produce negative values, rounded toward negative
/// infinity. Values outside the `i64` range saturate.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use flakeid::time::unix_millis;
///
/// assert_eq!(unix_millis(UNIX_EPOCH + Duration::from_millis(1_500)), 1_500);
/// assert_eq!(unix_millis(UNIX_EPOCH - Duration::from_micros(1)), -1);
/// ```
pub fn unix_millis(at: SystemTime) -> i64 {
    match at.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
        Err(before) => {
            let before = before.duration();
            let partial = u128::from(before.subsec_nanos() % 1_000_000 != 0);
            i64::try_from(before.as_millis() + partial).map_or(i64::MIN, |ms| -ms)
        }
    }
}
