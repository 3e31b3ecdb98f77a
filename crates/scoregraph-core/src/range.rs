use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound used when a coefficient slider is seeded from a bare value.
pub const COEFFICIENT_SCALAR_MAX: f64 = 10.0;
/// Upper bound used when a measure slider is seeded from a bare value.
pub const MEASURE_SCALAR_MAX: f64 = 100.0;

/// A slider seed: current value plus its bounds.
///
/// `min <= value <= max` is expected but never checked; a malformed range
/// simply shows up as a malformed slider on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(value: f64, min: f64, max: f64) -> Self {
        Self { value, min, max }
    }

    /// Seed from a bare value, bounded below by zero.
    pub const fn from_scalar(value: f64, max: f64) -> Self {
        Self::new(value, 0.0, max)
    }

    pub const fn from_range(range: ValueRange) -> Self {
        range
    }

    /// `[value, min, max]`
    pub const fn from_triple(triple: [f64; 3]) -> Self {
        Self::new(triple[0], triple[1], triple[2])
    }

    /// Default coefficient slider: weight 1 on a 0..10 track.
    pub const fn default_coefficient() -> Self {
        Self::new(1.0, 0.0, 10.0)
    }

    /// Default measure slider when nothing is given.
    pub const fn default_measure() -> Self {
        Self::new(1.0, 0.0, 10.0)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}, {}]", self.value, self.min, self.max)
    }
}

/// The shapes a slider seed may be written in.
///
/// ```toml
/// coefficient = 2                                  # Scalar
/// coefficient = [2, 0, 5]                          # Triple
/// measure = { value = 7, min = 0, max = 20 }       # Range
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeSpec {
    Scalar(f64),
    Triple([f64; 3]),
    Range(ValueRange),
}

impl RangeSpec {
    /// Normalize to a `ValueRange`. `scalar_max` bounds the `Scalar` form.
    pub fn resolve(self, scalar_max: f64) -> ValueRange {
        match self {
            Self::Scalar(value) => ValueRange::from_scalar(value, scalar_max),
            Self::Triple(triple) => ValueRange::from_triple(triple),
            Self::Range(range) => ValueRange::from_range(range),
        }
    }
}

impl From<f64> for RangeSpec {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<[f64; 3]> for RangeSpec {
    fn from(triple: [f64; 3]) -> Self {
        Self::Triple(triple)
    }
}

impl From<ValueRange> for RangeSpec {
    fn from(range: ValueRange) -> Self {
        Self::Range(range)
    }
}
