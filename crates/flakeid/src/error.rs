use crate::SnowflakeId;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `flakeid` can produce.
///
/// Every variant is surfaced synchronously to the caller; nothing is retried
/// or recovered internally. A failed call never yields a partial ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The effective timestamp is at or before the effective epoch.
    #[error("invalid timestamp: {elapsed_ms}ms since epoch, must be positive")]
    InvalidTimestamp {
        /// The computed offset from the epoch, in milliseconds.
        elapsed_ms: i64,
    },

    /// The effective timestamp lies past the 41-bit lifetime of the layout
    /// (roughly 69 years after the epoch).
    #[error(
        "over the maximum lifetime: {elapsed_ms}ms since epoch exceeds {}ms",
        SnowflakeId::max_timestamp()
    )]
    OverLifetime {
        /// The computed offset from the epoch, in milliseconds.
        elapsed_ms: i64,
    },

    /// The datacenter ID does not fit in its 5-bit field.
    #[error("invalid datacenter ID {value}, must be in 0..={}", SnowflakeId::max_datacenter_id())]
    InvalidDatacenterId {
        /// The rejected value.
        value: u64,
    },

    /// The machine ID does not fit in its 5-bit field.
    #[error("invalid machine ID {value}, must be in 0..={}", SnowflakeId::max_machine_id())]
    InvalidMachineId {
        /// The rejected value.
        value: u64,
    },

    /// The sequence number does not fit in its 12-bit field.
    #[error("invalid sequence number {value}, must be in 0..={}", SnowflakeId::max_sequence())]
    InvalidSequenceNumber {
        /// The rejected value.
        value: u64,
    },

    /// A raw value has the reserved sign bit set and is not a valid ID.
    #[error("invalid ID 0x{raw:016x}: reserved bit is set")]
    ReservedBitSet {
        /// The rejected raw value.
        raw: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field_and_its_range() {
        let err = Error::InvalidDatacenterId { value: 32 };
        assert_eq!(err.to_string(), "invalid datacenter ID 32, must be in 0..=31");

        let err = Error::InvalidMachineId { value: 40 };
        assert_eq!(err.to_string(), "invalid machine ID 40, must be in 0..=31");

        let err = Error::InvalidSequenceNumber { value: 4096 };
        assert_eq!(
            err.to_string(),
            "invalid sequence number 4096, must be in 0..=4095"
        );
    }

    #[test]
    fn lifetime_message_includes_the_ceiling() {
        let err = Error::OverLifetime {
            elapsed_ms: 2_209_075_200_000,
        };
        assert_eq!(
            err.to_string(),
            "over the maximum lifetime: 2209075200000ms since epoch exceeds 2199023255551ms"
        );
    }
}
