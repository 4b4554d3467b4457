// crates/shared-kernel/src/value_objects/estimates.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Whole minutes needed to get through a number of words at a fixed pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(usize);

impl Minutes {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// `ceil(words / words_per_minute)`; a pace of zero yields zero.
    pub const fn at_pace(words: usize, words_per_minute: usize) -> Self {
        if words_per_minute == 0 {
            return Self::ZERO;
        }
        Self(words.div_ceil(words_per_minute))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<Minutes> for usize {
    fn from(value: Minutes) -> Self {
        value.0
    }
}

impl PartialEq<usize> for Minutes {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ratio rounded to one decimal place, halves rounding away from zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneDecimal(f64);

impl OneDecimal {
    pub const ZERO: Self = Self(0.0);

    /// Rounds `value` by scaling by ten, rounding, and scaling back.
    pub fn round(value: f64) -> Self {
        Self((value * 10.0).round() / 10.0)
    }

    /// `numerator / denominator` rounded, or zero when the denominator is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self::round(numerator as f64 / denominator as f64)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<OneDecimal> for f64 {
    fn from(value: OneDecimal) -> Self {
        value.0
    }
}

impl PartialEq<f64> for OneDecimal {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
