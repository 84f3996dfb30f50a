//! Exact rational intervals occupied by nodes.

use std::fmt;

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

/// The half-open interval `[lower, upper)` spanned by a node and all its descendants.
///
/// Bounds are exact rationals. Adjacent intervals can differ by arbitrarily small
/// amounts as the tree deepens, so no floating point is involved in any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    lower: Ratio<i64>,
    upper: Ratio<i64>,
}

impl Interval {
    /// Creates an interval; `lower` must not exceed `upper`.
    pub(crate) fn new(lower: Ratio<i64>, upper: Ratio<i64>) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> Ratio<i64> {
        self.lower
    }

    /// Exclusive upper bound.
    pub fn upper(&self) -> Ratio<i64> {
        self.upper
    }

    /// Returns true if `point` lies in `[lower, upper)`.
    pub fn contains(&self, point: &Ratio<i64>) -> bool {
        self.lower <= *point && *point < self.upper
    }

    /// Returns true if `other` lies entirely within this interval.
    ///
    /// An interval encloses itself; use [`strictly_encloses`](Self::strictly_encloses)
    /// to exclude that case.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Returns true if `other` lies within this interval and is not equal to it.
    pub fn strictly_encloses(&self, other: &Interval) -> bool {
        self != other && self.encloses(other)
    }

    /// Returns true if the two intervals share at least one point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// Stored form of an interval before its bounds are checked.
#[derive(Deserialize)]
struct RawInterval {
    lower: (i64, i64),
    upper: (i64, i64),
}

/// Rebuilds a bound in lowest terms with a positive denominator.
fn bound(numer: i64, denom: i64) -> Result<Ratio<i64>, &'static str> {
    if denom == 0 {
        return Err("bound has a zero denominator");
    }
    // Reducing would need to negate these
    if numer == i64::MIN || denom == i64::MIN {
        return Err("bound component out of range");
    }
    Ok(Ratio::new(numer, denom))
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawInterval::deserialize(deserializer)?;
        let lower = bound(raw.lower.0, raw.lower.1).map_err(serde::de::Error::custom)?;
        let upper = bound(raw.upper.0, raw.upper.1).map_err(serde::de::Error::custom)?;
        if lower > upper {
            return Err(serde::de::Error::custom(format!(
                "interval lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Interval { lower, upper })
    }
}
