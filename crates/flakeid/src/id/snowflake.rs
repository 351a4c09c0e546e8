use core::fmt;

use crate::{
    Error, Result,
    id::{FieldLayout, layout::write_bit_layout_debug},
};

/// A 63-bit Snowflake ID packed into a `u64` whose sign bit is always clear.
///
/// - 1 bit reserved (always zero, so the value fits a positive `i64`)
/// - 41 bits timestamp (ms since the generator's epoch)
/// - 5 bits datacenter ID
/// - 5 bits machine ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21                 17 16              12 11             0
///              +--------------+----------------+---------------------+------------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | datacenter ID (5)   | machine ID (5)   | sequence (12) |
///              +--------------+----------------+---------------------+------------------+---------------+
///              |<------------------------------ MSB ---- 64 bits ---- LSB ------------------------------>|
/// ```
///
/// # Example
///
/// ```
/// use flakeid::SnowflakeId;
///
/// let id = SnowflakeId::from_components(2_678_400_000, 31, 15, 1);
/// assert_eq!(id.to_i64(), 11_234_023_837_724_673);
/// assert_eq!(id.timestamp(), 2_678_400_000);
/// assert_eq!(id.datacenter_id(), 31);
/// assert_eq!(id.machine_id(), 15);
/// assert_eq!(id.sequence(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SnowflakeId {
    id: u64,
}

impl SnowflakeId {
    /// Width of the reserved (sign) field.
    pub const RESERVED_BITS: u64 = 1;
    /// Width of the timestamp field.
    pub const TIMESTAMP_BITS: u64 = 41;
    /// Width of the datacenter ID field.
    pub const DATACENTER_ID_BITS: u64 = 5;
    /// Width of the machine ID field.
    pub const MACHINE_ID_BITS: u64 = 5;
    /// Width of the sequence field.
    pub const SEQUENCE_BITS: u64 = 12;

    /// Bitmask for extracting the 41-bit timestamp field. Occupies bits 22
    /// through 62.
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;

    /// Bitmask for extracting the 5-bit datacenter ID field. Occupies bits 17
    /// through 21.
    pub const DATACENTER_ID_MASK: u64 = (1 << Self::DATACENTER_ID_BITS) - 1;

    /// Bitmask for extracting the 5-bit machine ID field. Occupies bits 12
    /// through 16.
    pub const MACHINE_ID_MASK: u64 = (1 << Self::MACHINE_ID_BITS) - 1;

    /// Bitmask for extracting the 12-bit sequence field. Occupies bits 0
    /// through 11.
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: u64 = 0;

    /// Number of bits to shift the machine ID to its correct position (bit 12).
    pub const MACHINE_ID_SHIFT: u64 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;

    /// Number of bits to shift the datacenter ID to its correct position (bit
    /// 17).
    pub const DATACENTER_ID_SHIFT: u64 = Self::MACHINE_ID_SHIFT + Self::MACHINE_ID_BITS;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = Self::DATACENTER_ID_SHIFT + Self::DATACENTER_ID_BITS;

    /// Position of the reserved bit (bit 63).
    pub const RESERVED_SHIFT: u64 = Self::TIMESTAMP_SHIFT + Self::TIMESTAMP_BITS;

    /// Packs the four fields, masking each to its width.
    ///
    /// Out-of-range inputs are silently truncated. Use
    /// [`Self::from_components`] to catch them in debug builds, or go through
    /// the generator to have them rejected.
    pub const fn from(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let datacenter_id = (datacenter_id & Self::DATACENTER_ID_MASK) << Self::DATACENTER_ID_SHIFT;
        let machine_id = (machine_id & Self::MACHINE_ID_MASK) << Self::MACHINE_ID_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | datacenter_id | machine_id | sequence,
        }
    }

    /// Constructs a new ID from its components.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if any component exceeds its field width.
    pub fn from_components(
        timestamp: u64,
        datacenter_id: u64,
        machine_id: u64,
        sequence: u64,
    ) -> Self {
        debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
        debug_assert!(
            datacenter_id <= Self::DATACENTER_ID_MASK,
            "datacenter_id overflow"
        );
        debug_assert!(machine_id <= Self::MACHINE_ID_MASK, "machine_id overflow");
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
        Self::from(timestamp, datacenter_id, machine_id, sequence)
    }

    /// Wraps a raw value without checking the reserved bit.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Converts a signed integer into an ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedBitSet`] if `value` is negative.
    pub const fn try_from_i64(value: i64) -> Result<Self> {
        if value < 0 {
            Err(Error::ReservedBitSet { raw: value as u64 })
        } else {
            Ok(Self { id: value as u64 })
        }
    }

    /// Returns the raw `u64` representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Returns the ID as a signed 64-bit integer. For any ID produced by the
    /// generator this value is non-negative.
    pub const fn to_i64(&self) -> i64 {
        self.id as i64
    }

    /// Extracts the timestamp (ms since epoch) from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the datacenter ID from the packed ID.
    pub const fn datacenter_id(&self) -> u64 {
        (self.id >> Self::DATACENTER_ID_SHIFT) & Self::DATACENTER_ID_MASK
    }

    /// Extracts the machine ID from the packed ID.
    pub const fn machine_id(&self) -> u64 {
        (self.id >> Self::MACHINE_ID_SHIFT) & Self::MACHINE_ID_MASK
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> u64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Returns the maximum representable timestamp offset, `2^41 - 1`.
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    /// Returns the maximum representable datacenter ID, `31`.
    pub const fn max_datacenter_id() -> u64 {
        Self::DATACENTER_ID_MASK
    }

    /// Returns the maximum representable machine ID, `31`.
    pub const fn max_machine_id() -> u64 {
        Self::MACHINE_ID_MASK
    }

    /// Returns the maximum representable sequence number, `4095`.
    pub const fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    /// Returns `true` when the reserved bit is clear.
    pub const fn is_valid(&self) -> bool {
        self.id >> Self::RESERVED_SHIFT == 0
    }

    /// Returns the ID as a zero-padded 19-digit string, the width of
    /// `i64::MAX`, so that string order matches numeric order.
    pub fn to_padded_string(&self) -> String {
        format!("{:019}", self.id)
    }

    /// Returns the 64-character binary representation, MSB first.
    pub fn to_bit_string(&self) -> String {
        format!("{:064b}", self.id)
    }

    fn fields(&self) -> [FieldLayout; 5] {
        [
            FieldLayout {
                name: "reserved",
                bits: Self::RESERVED_BITS as u8,
                value: self.id >> Self::RESERVED_SHIFT,
            },
            FieldLayout {
                name: "timestamp",
                bits: Self::TIMESTAMP_BITS as u8,
                value: self.timestamp(),
            },
            FieldLayout {
                name: "datacenter ID",
                bits: Self::DATACENTER_ID_BITS as u8,
                value: self.datacenter_id(),
            },
            FieldLayout {
                name: "machine ID",
                bits: Self::MACHINE_ID_BITS as u8,
                value: self.machine_id(),
            },
            FieldLayout {
                name: "sequence",
                bits: Self::SEQUENCE_BITS as u8,
                value: self.sequence(),
            },
        ]
    }
}

const _: () = {
    // Compile-time check: the fields must cover the backing integer exactly.
    assert!(
        SnowflakeId::RESERVED_SHIFT + SnowflakeId::RESERVED_BITS == u64::BITS as u64,
        "Snowflake layout must cover exactly 64 bits"
    );
};

impl From<SnowflakeId> for u64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_i64()
    }
}

impl TryFrom<i64> for SnowflakeId {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from_i64(value)
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bit_layout_debug(
            f,
            "SnowflakeId",
            self.id,
            &self.to_padded_string(),
            &self.fields(),
        )
    }
}
