//! JSON encoding and decoding at the HTTP boundary.
//!
//! Every request body sent by the clients goes through [`encode`] and every
//! response body through [`decode`], so serde failures surface as
//! [`Error::Encode`] and [`Error::Decode`] rather than transport errors.

use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serializes a record into its JSON wire form.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

/// Serializes a record into a [`serde_json::Value`].
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(Error::Encode)
}

/// Parses a record from its JSON wire form.
///
/// Any failure, including a wrong-typed designated integer field, rejects the
/// whole record.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Parses a record from an already-parsed [`serde_json::Value`].
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(Error::Decode)
}

/// Serde adapter for integer fields where zero doubles as "not provided".
///
/// On encode a zero value is omitted entirely (pair `with` with
/// `skip_serializing_if = "...::is_absent"`); a nonzero value is written as a
/// number. On decode a missing key or `null` leaves the field at zero, and a
/// non-integer value is an error. An explicit `0` therefore does not survive a
/// round trip.
pub(crate) mod zero_as_absent {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn is_absent(value: &i64) -> bool {
        *value == 0
    }

    pub(crate) fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Ranked {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(
            default,
            with = "zero_as_absent",
            skip_serializing_if = "zero_as_absent::is_absent"
        )]
        priority: i64,
        #[serde(
            default,
            with = "zero_as_absent",
            skip_serializing_if = "zero_as_absent::is_absent"
        )]
        max_clock_skew: i64,
    }

    fn round_trip(input: Value) -> Value {
        let record: Ranked = decode_value(input).expect("decode");
        encode_value(&record).expect("encode")
    }

    #[test]
    fn nonzero_values_survive_round_trip() {
        for v in [1_i64, 5, -3, i64::MAX, i64::MIN] {
            assert_eq!(round_trip(json!({ "priority": v })), json!({ "priority": v }));
        }
    }

    #[test]
    fn absent_field_stays_absent() {
        assert_eq!(round_trip(json!({})), json!({}));
    }

    #[test]
    fn explicit_zero_collapses_to_absent() {
        let record: Ranked = decode(br#"{"priority":0}"#).expect("decode");
        assert_eq!(record.priority, 0);
        assert_eq!(encode_value(&record).expect("encode"), json!({}));
    }

    #[test]
    fn null_is_treated_as_absent() {
        let record: Ranked = decode(br#"{"priority":null}"#).expect("decode");
        assert_eq!(record.priority, 0);
    }

    #[test]
    fn wrong_type_rejects_whole_record() {
        let mut record = Ranked::default();
        match decode::<Ranked>(br#"{"id":"p1","priority":"not-a-number"}"#) {
            Ok(decoded) => record = decoded,
            Err(Error::Decode(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(record, Ranked::default());
    }

    #[test]
    fn fractional_number_is_rejected() {
        let err = decode::<Ranked>(br#"{"priority":1.5}"#).expect_err("error");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let err = decode::<Ranked>(b"{\"priority\":").expect_err("error");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn designated_fields_encode_independently() {
        let record = Ranked {
            id: None,
            priority: 0,
            max_clock_skew: 3,
        };
        assert_eq!(
            encode_value(&record).expect("encode"),
            json!({ "maxClockSkew": 3 })
        );
    }

    #[test]
    fn encode_writes_compact_json() {
        let record = Ranked {
            id: Some("p1".to_string()),
            priority: 2,
            max_clock_skew: 0,
        };
        let bytes = encode(&record).expect("encode");
        assert_eq!(bytes, br#"{"id":"p1","priority":2}"#.to_vec());
    }
}
