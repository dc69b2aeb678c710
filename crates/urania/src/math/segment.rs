use crate::math::angle::Angle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directed arc between two angles, stored sorted in a shared frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AngleSegment {
    pub a1: Angle,
    pub a2: Angle,
}

impl AngleSegment {
    /// Builds a segment from any two angle-likes; endpoints are sorted so
    /// that `a1 <= a2`.
    pub fn new(a1: impl Into<Angle>, a2: impl Into<Angle>) -> Self {
        let (a1, a2) = Angle::sort(a1.into(), a2.into());
        Self { a1, a2 }
    }

    pub fn length(&self) -> f64 {
        self.a1.distance(&self.a2)
    }

    pub fn middle(&self) -> Angle {
        self.a1.average(&self.a2)
    }

    /// Overlap test with a fuzz `limit` in degrees.
    ///
    /// `other` may be a single [`Angle`], treated as a zero-length segment.
    /// A positive `limit` also reports segments that are within `limit`
    /// degrees of each other; `limit = 0` requires a true overlap.
    pub fn check_collision(&self, other: impl Into<AngleSegment>, limit: f64) -> bool {
        let other = other.into();
        let cross = if self.a2 <= other.a2 {
            self.a2.compare(&other.a1) + limit
        } else {
            other.a2.compare(&self.a1) + limit
        };
        cross > 0.0
    }

    /// Point membership, start-inclusive and end-exclusive.
    pub fn contains(&self, point: &Angle) -> bool {
        if self.check_collision(*point, 0.0) {
            return true;
        }
        *point == self.a1 && self.length() > 0.0
    }

    pub fn endpoints(&self) -> [Angle; 2] {
        [self.a1, self.a2]
    }
}

impl From<Angle> for AngleSegment {
    fn from(angle: Angle) -> Self {
        AngleSegment::new(angle, angle)
    }
}

impl From<&AngleSegment> for AngleSegment {
    fn from(segment: &AngleSegment) -> Self {
        *segment
    }
}

impl IntoIterator for AngleSegment {
    type Item = Angle;
    type IntoIter = std::array::IntoIter<Angle, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints().into_iter()
    }
}

impl fmt::Display for AngleSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} → {}]", self.a1, self.a2)
    }
}
