//! Partition of the sky into labelled regions.
//!
//! A [`Splitter2D`] is an ordered ring of longitude segments, each labelled
//! with a value. A [`Splitter3D`] stacks several rings in declination bands.
//! Lookups scan in insertion order and the first containing segment wins, so
//! overlapping rings resolve to whichever segment was pushed first.

use crate::math::{Angle, AngleSegment};

/// Declination band used by splitters that ignore declination.
pub const FLAT_BAND: (f64, f64) = (-89.0, 89.0);

/// Common interface of the 2D and 3D splitters.
pub trait Splitter<T> {
    /// Region containing the position, or `None` when no segment matches
    /// and there is no default.
    fn split(&self, ra: f64, dec: f64) -> Option<T>;

    /// Longitude extent of `item` in the band for `dec`.
    fn get_ra_limits(&self, item: &T, dec: f64) -> Option<AngleSegment>;
}

/// Longitude-only splitter.
#[derive(Debug, Clone)]
pub struct Splitter2D<T> {
    ring: Vec<(AngleSegment, T)>,
    default: Option<T>,
}

impl<T: Clone + PartialEq> Splitter2D<T> {
    pub fn new() -> Self {
        Self {
            ring: Vec::new(),
            default: None,
        }
    }

    /// Value returned when no segment contains the query.
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    pub fn push(&mut self, segment: AngleSegment, item: T) {
        self.ring.push((segment, item));
    }

    pub fn ring(&self) -> &[(AngleSegment, T)] {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn split_angle(&self, angle: &Angle) -> Option<&T> {
        self.ring
            .iter()
            .find(|(segment, _)| segment.contains(angle))
            .map(|(_, item)| item)
            .or(self.default.as_ref())
    }

    /// First segment labelled `item`.
    pub fn limits_of(&self, item: &T) -> Option<AngleSegment> {
        self.ring
            .iter()
            .find(|(_, candidate)| candidate == item)
            .map(|(segment, _)| *segment)
    }
}

impl<T: Clone + PartialEq> Default for Splitter2D<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> FromIterator<(AngleSegment, T)> for Splitter2D<T> {
    fn from_iter<I: IntoIterator<Item = (AngleSegment, T)>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().collect(),
            default: None,
        }
    }
}

impl<T: Clone + PartialEq> Splitter<T> for Splitter2D<T> {
    fn split(&self, ra: f64, _dec: f64) -> Option<T> {
        self.split_angle(&Angle::new(ra)).cloned()
    }

    fn get_ra_limits(&self, item: &T, _dec: f64) -> Option<AngleSegment> {
        self.limits_of(item)
    }
}

/// Declination bands, each holding its own longitude ring.
#[derive(Debug, Clone)]
pub struct Splitter3D<T> {
    bands: Vec<(AngleSegment, Splitter2D<T>)>,
}

impl<T: Clone + PartialEq> Splitter3D<T> {
    pub fn new() -> Self {
        Self { bands: Vec::new() }
    }

    /// A single band covering the whole sky.
    pub fn flat(ring: Splitter2D<T>) -> Self {
        let mut splitter = Self::new();
        splitter.push_band(AngleSegment::new(FLAT_BAND.0, FLAT_BAND.1), ring);
        splitter
    }

    pub fn push_band(&mut self, band: AngleSegment, ring: Splitter2D<T>) {
        self.bands.push((band, ring));
    }

    pub fn bands(&self) -> &[(AngleSegment, Splitter2D<T>)] {
        &self.bands
    }

    /// Ring for declination `dec`.
    ///
    /// Falls back to the band whose middle is closest when no band contains
    /// `dec` (the poles, or gaps between bands).
    pub fn band(&self, dec: f64) -> Option<&Splitter2D<T>> {
        let dec = Angle::new(dec);
        if let Some((_, ring)) = self.bands.iter().find(|(band, _)| band.contains(&dec)) {
            return Some(ring);
        }
        self.bands
            .iter()
            .min_by(|(a, _), (b, _)| {
                a.middle()
                    .distance(&dec)
                    .total_cmp(&b.middle().distance(&dec))
            })
            .map(|(_, ring)| ring)
    }
}

impl<T: Clone + PartialEq> Default for Splitter3D<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> Splitter<T> for Splitter3D<T> {
    fn split(&self, ra: f64, dec: f64) -> Option<T> {
        self.band(dec)?.split(ra, dec)
    }

    fn get_ra_limits(&self, item: &T, dec: f64) -> Option<AngleSegment> {
        self.band(dec)?.limits_of(item)
    }
}
