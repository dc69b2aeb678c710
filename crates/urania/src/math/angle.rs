//! Circular scalar with wraparound-aware comparison.
//!
//! An [`Angle`] stores its value normalized into `[center - 180, center + 180)`.
//! Two angles compare through a shared frame centered on the right-hand side,
//! so ordering and distances never suffer from the 0°/360° seam.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An angle in degrees, normalized around `center`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle {
    value: f64,
    center: f64,
}

impl Angle {
    /// Angle normalized into `[-180, 180)`.
    pub fn new(value: f64) -> Self {
        Self::centered(value, 0.0)
    }

    /// Angle normalized into `[center - 180, center + 180)`.
    pub fn centered(value: f64, center: f64) -> Self {
        let offset = center - 180.0;
        Self {
            value: (value - offset).rem_euclid(360.0) + offset,
            center,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    /// Canonical value in `[-180, 180)`.
    pub fn standard_value(&self) -> f64 {
        Angle::new(self.value).value
    }

    /// Canonical value in `[0, 360)`.
    pub fn positive_value(&self) -> f64 {
        Angle::centered(self.value, 180.0).value
    }

    /// Signed offset of `self` from `other`, in `[-180, 180)`.
    ///
    /// Positive when `self` lies ahead of `other` (counter-clockwise, increasing
    /// longitude) within the half circle centered on `other`.
    pub fn compare(&self, other: &Angle) -> f64 {
        let local = Angle::centered(self.value, other.value);
        local.value - other.value
    }

    /// Unsigned angular distance, in `[0, 180]`.
    pub fn distance(&self, other: &Angle) -> f64 {
        self.compare(other).abs()
    }

    /// Angular midpoint, walking half the signed distance from `other` toward `self`.
    pub fn average(&self, other: &Angle) -> Angle {
        Angle::new(other.standard_value() + self.compare(other) / 2.0)
    }

    /// Orders two angles and re-expresses both in the frame of the first one.
    pub fn sort(a1: Angle, a2: Angle) -> (Angle, Angle) {
        let (first, second) = if a2 < a1 { (a2, a1) } else { (a1, a2) };
        (
            Angle::centered(first.value, first.value),
            Angle::centered(second.value, first.value),
        )
    }

    fn key(&self) -> u64 {
        // -0.0 and 0.0 must hash alike since they compare equal
        let standard = self.standard_value();
        if standard == 0.0 {
            0.0f64.to_bits()
        } else {
            standard.to_bits()
        }
    }
}

impl From<f64> for Angle {
    fn from(value: f64) -> Self {
        Angle::new(value)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.standard_value() == other.standard_value()
    }
}

impl Eq for Angle {}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).partial_cmp(&0.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.positive_value())
    }
}
