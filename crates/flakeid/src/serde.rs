//! Native-integer (de)serialization for [`SnowflakeId`].
//!
//! IDs serialize as their unsigned integer value. Deserialization rejects
//! values with the reserved bit set.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, SnowflakeId};

impl Serialize for SnowflakeId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(s)
    }
}

impl<'de> Deserialize<'de> for SnowflakeId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = Self::from_raw(u64::deserialize(d)?);
        if !id.is_valid() {
            return Err(de::Error::custom(Error::ReservedBitSet { raw: id.to_raw() }));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: SnowflakeId,
    }

    #[test]
    fn native_roundtrip() {
        let row = Row {
            id: SnowflakeId::from_components(2_678_400_000, 31, 15, 1),
        };
        let encoded = serde_json::to_value(&row).unwrap();
        assert_eq!(encoded, json!({ "id": 11_234_023_837_724_673u64 }));

        let decoded: Row = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, row);
    }

    #[test]
    fn reserved_bit_is_rejected() {
        let err = serde_json::from_value::<Row>(json!({ "id": u64::MAX })).unwrap_err();
        assert!(err.to_string().contains("reserved bit is set"));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(serde_json::from_value::<Row>(json!({ "id": -1 })).is_err());
    }
}
