use crate::ephemeris::types::EphemerisSettings;
use crate::horoscope::position::SignPosition;
use serde::{Deserialize, Serialize};

/// Named angular relationship between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aspect {
    None,
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl Aspect {
    /// Aspects in the order they are tested.
    pub const ORDERED: [Aspect; 5] = [
        Aspect::Conjunction,
        Aspect::Sextile,
        Aspect::Square,
        Aspect::Trine,
        Aspect::Opposition,
    ];

    /// Exact separation in degrees.
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Aspect::None => None,
            Aspect::Conjunction => Some(0.0),
            Aspect::Sextile => Some(60.0),
            Aspect::Square => Some(90.0),
            Aspect::Trine => Some(120.0),
            Aspect::Opposition => Some(180.0),
        }
    }
}

/// Aspect between two bodies with its orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHoroscope {
    pub aspect: Aspect,
    /// Deviation from the exact aspect angle, in degrees
    pub orb: f64,
    /// Whether the bodies are moving toward the exact angle
    pub applying: bool,
}

impl AspectHoroscope {
    /// First aspect (conjunction, sextile, square, trine, opposition) whose
    /// orb is under the limit. Conjunctions use `conjunction_limit`, the rest
    /// `orb_limit`.
    pub fn new(p1: &SignPosition, p2: &SignPosition, settings: &EphemerisSettings) -> Self {
        let separation = separation(p1.abs_angle, p2.abs_angle);
        for aspect in Aspect::ORDERED {
            let Some(target) = aspect.degrees() else {
                continue;
            };
            let orb = (separation - target).abs();
            let limit = if aspect == Aspect::Conjunction {
                settings.conjunction_limit
            } else {
                settings.orb_limit
            };
            if orb < limit {
                return Self {
                    aspect,
                    orb,
                    applying: is_applying(p1, p2, target, separation),
                };
            }
        }
        Self {
            aspect: Aspect::None,
            orb: 0.0,
            applying: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.aspect == Aspect::None
    }
}

/// Unsigned separation folded into `[0, 180]`.
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw = (lon1 - lon2).rem_euclid(360.0);
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Whether the aspect is applying (approaching exact) or separating
fn is_applying(p1: &SignPosition, p2: &SignPosition, target: f64, current: f64) -> bool {
    let relative_speed = p1.speed - p2.speed;

    // speeds too close to call, treat a near-exact aspect as applying
    if relative_speed.abs() < 0.01 {
        return current < target + 0.5;
    }

    let mut signed_diff = p1.abs_angle - p2.abs_angle;
    if signed_diff > 180.0 {
        signed_diff -= 360.0;
    } else if signed_diff < -180.0 {
        signed_diff += 360.0;
    }

    // project a tenth of a day forward
    let mut future_diff = signed_diff + relative_speed * 0.1;
    if future_diff > 180.0 {
        future_diff -= 360.0;
    } else if future_diff < -180.0 {
        future_diff += 360.0;
    }

    (future_diff.abs() - target).abs() < (current - target).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(abs_angle: f64, speed: f64) -> SignPosition {
        SignPosition {
            abs_angle,
            sign: None,
            face: None,
            declination: 0.0,
            speed,
            house: None,
        }
    }

    #[test]
    fn test_separation_folds() {
        assert_eq!(separation(10.0, 350.0), 20.0);
        assert_eq!(separation(0.0, 180.0), 180.0);
        assert_eq!(separation(100.0, 40.0), 60.0);
    }

    #[test]
    fn test_first_aspect_within_orb() {
        let settings = EphemerisSettings::default();
        let trine = AspectHoroscope::new(&at(0.0, 1.0), &at(121.0, 1.0), &settings);
        assert_eq!(trine.aspect, Aspect::Trine);
        assert!((trine.orb - 1.0).abs() < 1e-9);

        let conj = AspectHoroscope::new(&at(0.0, 1.0), &at(4.0, 1.0), &settings);
        assert_eq!(conj.aspect, Aspect::Conjunction);

        let none = AspectHoroscope::new(&at(0.0, 1.0), &at(45.0, 1.0), &settings);
        assert!(none.is_none());
        assert_eq!(none.orb, 0.0);
    }

    #[test]
    fn test_orb_limit_is_exclusive() {
        let settings = EphemerisSettings::default();
        let edge = AspectHoroscope::new(&at(0.0, 1.0), &at(62.0, 1.0), &settings);
        assert_eq!(edge.aspect, Aspect::None);
    }

    #[test]
    fn test_applying_vs_separating() {
        let settings = EphemerisSettings::default();
        // fast moon behind the sun closes the conjunction
        let applying = AspectHoroscope::new(&at(97.0, 13.0), &at(100.0, 1.0), &settings);
        assert_eq!(applying.aspect, Aspect::Conjunction);
        assert!(applying.applying);

        let separating = AspectHoroscope::new(&at(103.0, 13.0), &at(100.0, 1.0), &settings);
        assert!(!separating.applying);
    }
}
