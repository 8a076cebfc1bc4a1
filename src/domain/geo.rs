//! Fixed-precision geographic coordinates.
//!
//! Coordinates are persisted as `NUMERIC(10, 7)`: at most three integer digits and
//! seven fractional digits. Values are kept as a scaled integer so they never pass
//! through a float and never lose a digit.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits kept by a [`Coordinate`].
pub const DECIMAL_PLACES: u32 = 7;

/// Total number of digits allowed by the column type.
pub const MAX_DIGITS: u32 = 10;

const SCALE: i64 = 10_i64.pow(DECIMAL_PLACES);
const MAX_ABS: i64 = 10_i64.pow(MAX_DIGITS) - 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("'{0}' is not a decimal number")]
    Malformed(String),
    #[error("'{0}' has more than 7 decimal places")]
    TooPrecise(String),
    #[error("'{0}' has more than 10 digits in total")]
    OutOfRange(String),
}

/// A decimal with exactly seven fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(i64);

impl Coordinate {
    /// Builds a coordinate from its value in units of 10^-7.
    pub fn from_scaled(scaled: i64) -> Result<Self, CoordinateError> {
        if scaled.abs() > MAX_ABS {
            return Err(CoordinateError::OutOfRange(scaled.to_string()));
        }
        Ok(Self(scaled))
    }

    pub fn scaled(&self) -> i64 {
        self.0
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        let malformed = || CoordinateError::Malformed(input.to_string());

        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        // Trailing zeros carry no precision.
        let frac_trimmed = frac_part.trim_end_matches('0');
        if frac_trimmed.len() > DECIMAL_PLACES as usize {
            return Err(CoordinateError::TooPrecise(input.to_string()));
        }

        let int_trimmed = int_part.trim_start_matches('0');
        if int_trimmed.len() > (MAX_DIGITS - DECIMAL_PLACES) as usize {
            return Err(CoordinateError::OutOfRange(input.to_string()));
        }

        let int_value: i64 = if int_trimmed.is_empty() {
            0
        } else {
            int_trimmed.parse().map_err(|_| malformed())?
        };
        let frac_value: i64 = if frac_trimmed.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac_trimmed, width = DECIMAL_PLACES as usize);
            padded.parse().map_err(|_| malformed())?
        };

        let magnitude = int_value * SCALE + frac_value;
        Coordinate::from_scaled(if negative { -magnitude } else { magnitude })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / scale,
            abs % scale,
            width = DECIMAL_PLACES as usize
        )
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct CoordinateVisitor;

impl Visitor<'_> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or number with at most 7 decimal places")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Coordinate, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Coordinate, E> {
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Coordinate, E> {
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Coordinate, E> {
        // Shortest round-trip representation of the float.
        v.to_string().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CoordinateVisitor)
    }
}

/// A point identified by latitude, longitude and optional altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    #[serde(default)]
    pub altitude: Option<Coordinate>,
}

impl GeoPoint {
    /// Checks latitude and longitude ranges.
    pub fn validate(&self) -> Result<(), String> {
        let lat = self.latitude.scaled();
        let lon = self.longitude.scaled();
        if lat.abs() > 90 * SCALE {
            return Err(format!("latitude {} is outside -90..90", self.latitude));
        }
        if lon.abs() > 180 * SCALE {
            return Err(format!("longitude {} is outside -180..180", self.longitude));
        }
        Ok(())
    }
}
