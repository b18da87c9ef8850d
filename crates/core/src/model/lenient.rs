//! Wire normalization shared by every model.
//!
//! Backend revisions disagree on how counts and optional text are encoded
//! (numbers, numeric strings, `null`, empty strings). These helpers resolve
//! that once, at decode time, so nothing downstream re-checks shapes.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Deserialize a non-negative count, coercing anything unusable to 0.
///
/// Accepts integers, floats (truncated), numeric strings (leading digits
/// only, like `"120 alumnos"`), `null` and booleans.
///
/// # Errors
///
/// Never fails for scalar input; only structurally invalid JSON errors.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(CountVisitor)
}

/// Like [`count`], but keeps `null` and absent fields apart from zero.
///
/// Used where a value may arrive under two names and the present one wins.
///
/// # Errors
///
/// Never fails for scalar input.
pub fn opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let raw: Option<LooseCount> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.map(|c| c.0))
}

/// Deserialize optional text, treating blank strings as absent.
///
/// # Errors
///
/// Fails only if the value is neither a string nor `null`.
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Deserialize an optional decimal from a number or numeric string.
///
/// SQL `NUMERIC` columns arrive as strings; unparseable values become `None`.
///
/// # Errors
///
/// Never fails for scalar input.
pub fn opt_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    deserializer.deserialize_any(DecimalVisitor)
}

/// Parse a count the way the form inputs do: leading digits, else 0.
#[must_use]
pub fn parse_count(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

struct LooseCount(u64);

impl<'de> serde::Deserialize<'de> for LooseCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        count(deserializer).map(LooseCount)
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a count")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(0))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.is_finite() && v > 0.0 {
            Ok(v.trunc() as u64)
        } else {
            Ok(0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        Ok(parse_count(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal")
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<f64>, E> {
        Ok(Some(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<f64>, E> {
        Ok(Some(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<f64>, E> {
        Ok(Some(v).filter(|v| v.is_finite()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<f64>, E> {
        Ok(v.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Option<f64>, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
