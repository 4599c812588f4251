//! Tolerant field readers for upstream payloads
//!
//! Upstream encodes the same logical value in different ways depending on
//! the endpoint: counters may be integers or floats, one timestamp is a
//! decimal string, and any field may be `null`. These readers are used with
//! `#[serde(deserialize_with = "...")]` so a decode only fails on a type
//! that can't be coerced at all.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

/// Read `null` as the type's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a string, accepting integers (rendered in decimal) and `null`
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringVisitor)
}

/// Read an unsigned count from an integer or a float.
///
/// Negative values clamp to zero and floats truncate toward zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor)
}

/// Like [`count`] but narrowed to 32 bits, saturating
pub fn count_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    count(deserializer).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Read a timestamp sent as a decimal digit string.
///
/// A string that isn't a valid `u64` reads as zero rather than failing the
/// whole payload. Bare numbers are accepted as well.
pub fn decimal_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalStringVisitor)
}

fn clamp_i64(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}

fn truncate_f64(v: f64) -> u64 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        // `as` saturates at u64::MAX
        v as u64
    }
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, an integer or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(clamp_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        Ok(truncate_f64(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }
}

struct DecimalStringVisitor;

impl<'de> Visitor<'de> for DecimalStringVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal string, a number or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(0);
        }
        Ok(v.parse().unwrap_or(0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(clamp_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        Ok(truncate_f64(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }
}

#[cfg(test)]
mod lenient_tests {
    use super::*;
    use serde::Deserialize;
    use test_case::test_case;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string")]
        s: String,
        #[serde(default, deserialize_with = "count")]
        n: u64,
        #[serde(default, deserialize_with = "count_u32")]
        small: u32,
        #[serde(default, deserialize_with = "decimal_string")]
        ts: u64,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test_case(r#"{"n": 7}"#, 7 ; "integer")]
    #[test_case(r#"{"n": 7.9}"#, 7 ; "float truncates")]
    #[test_case(r#"{"n": -3}"#, 0 ; "negative clamps")]
    #[test_case(r#"{"n": -3.5}"#, 0 ; "negative float clamps")]
    #[test_case(r#"{"n": null}"#, 0 ; "null")]
    #[test_case(r#"{}"#, 0 ; "missing")]
    fn test_count(json: &str, expected: u64) {
        assert_eq!(probe(json).n, expected);
    }

    #[test]
    fn test_count_u32_saturates() {
        assert_eq!(probe(r#"{"small": 5000000000}"#).small, u32::MAX);
        assert_eq!(probe(r#"{"small": 1e12}"#).small, u32::MAX);
        assert_eq!(probe(r#"{"small": 12.0}"#).small, 12);
    }

    #[test_case(r#"{"ts": "1500000000"}"#, 1_500_000_000 ; "digits")]
    #[test_case(r#"{"ts": "not-a-number"}"#, 0 ; "garbage")]
    #[test_case(r#"{"ts": ""}"#, 0 ; "empty")]
    #[test_case(r#"{"ts": "-5"}"#, 0 ; "signed")]
    #[test_case(r#"{"ts": "99999999999999999999999"}"#, 0 ; "overflow")]
    #[test_case(r#"{"ts": 1500000000}"#, 1_500_000_000 ; "bare number")]
    #[test_case(r#"{"ts": null}"#, 0 ; "null")]
    fn test_decimal_string(json: &str, expected: u64) {
        assert_eq!(probe(json).ts, expected);
    }

    #[test_case(r#"{"s": "42"}"#, "42" ; "string")]
    #[test_case(r#"{"s": 42}"#, "42" ; "integer")]
    #[test_case(r#"{"s": null}"#, "" ; "null")]
    fn test_string(json: &str, expected: &str) {
        assert_eq!(probe(json).s, expected);
    }

    #[test]
    fn test_string_rejects_objects() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"s": {"a": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_count_rejects_strings() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"n": "7"}"#);
        assert!(result.is_err());
    }
}
