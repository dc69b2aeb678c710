use crate::ephemeris::types::{House, Sign};
use crate::math::{Angle, AngleSegment};
use crate::splitter::Splitter;
use serde::{Deserialize, Serialize};

/// A point on the ecliptic resolved against sign and house splitters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    /// Ecliptic longitude in degrees
    pub abs_angle: f64,
    /// Sign containing the point, if any region does
    pub sign: Option<Sign>,
    /// Third of the sign (0, 1 or 2)
    pub face: Option<u8>,
    /// Ecliptic latitude in degrees
    pub declination: f64,
    /// Degrees per day
    pub speed: f64,
    pub house: Option<House>,
}

impl SignPosition {
    pub fn new(
        signs: &impl Splitter<Sign>,
        houses: &impl Splitter<House>,
        ra: f64,
        dec: f64,
        speed: f64,
    ) -> Self {
        let sign = signs.split(ra, dec);
        let face = sign
            .and_then(|sign| signs.get_ra_limits(&sign, dec))
            .and_then(|limits| face_of(&limits, ra));
        Self {
            abs_angle: ra,
            sign,
            face,
            declination: dec,
            speed,
            house: houses.split(ra, dec),
        }
    }

    pub fn angle(&self) -> Angle {
        Angle::new(self.abs_angle)
    }

    pub fn retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Which third of `limits` holds `ra`.
pub fn face_of(limits: &AngleSegment, ra: f64) -> Option<u8> {
    let point = Angle::new(ra);
    let face_length = limits.length() / 3.0;
    (0..3u8).find(|&index| {
        let start = limits.a1.value() + face_length * index as f64;
        AngleSegment::new(start, start + face_length).contains(&point)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::{Splitter2D, Splitter3D};

    fn signs() -> Splitter3D<Sign> {
        let ring: Splitter2D<Sign> = Sign::ZODIAC
            .iter()
            .enumerate()
            .map(|(i, &sign)| {
                let start = i as f64 * 30.0;
                (AngleSegment::new(start, start + 30.0), sign)
            })
            .collect();
        Splitter3D::flat(ring)
    }

    fn houses() -> Splitter2D<House> {
        House::ALL
            .iter()
            .enumerate()
            .map(|(i, &house)| {
                let start = 15.0 + i as f64 * 30.0;
                (AngleSegment::new(start, start + 30.0), house)
            })
            .collect()
    }

    #[test]
    fn test_position_resolves_sign_face_house() {
        let pos = SignPosition::new(&signs(), &houses(), 52.0, 1.0, -0.5);
        assert_eq!(pos.sign, Some(Sign::Taurus));
        assert_eq!(pos.face, Some(2));
        assert_eq!(pos.house, Some(House::Material2));
        assert!(pos.retrograde());
    }

    #[test]
    fn test_face_boundaries() {
        let limits = AngleSegment::new(350.0, 20.0);
        assert_eq!(face_of(&limits, 350.0), Some(0));
        assert_eq!(face_of(&limits, 359.0), Some(0));
        assert_eq!(face_of(&limits, 0.5), Some(1));
        assert_eq!(face_of(&limits, 19.0), Some(2));
        assert_eq!(face_of(&limits, 21.0), None);
    }

    #[test]
    fn test_unmatched_sign_has_no_face() {
        let empty: Splitter3D<Sign> = Splitter3D::new();
        let pos = SignPosition::new(&empty, &houses(), 100.0, 0.0, 1.0);
        assert_eq!(pos.sign, None);
        assert_eq!(pos.face, None);
    }
}
