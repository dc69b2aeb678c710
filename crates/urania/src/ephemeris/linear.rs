//! In-memory ephemeris with uniform motion.
//!
//! Every body advances from an epoch at a fixed daily speed. Houses are
//! derived from a rotating ascendant. Good enough for offline scans, layout
//! work and tests; not an astronomical model.

use crate::ephemeris::provider::{Ephemeris, EphemerisError};
use crate::ephemeris::types::{Body, BodyPosition, GeoLocation, HouseCusps, HouseSystem, Zodiac};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

/// 2000-01-01 12:00 UTC
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Mean obliquity at J2000
pub const J2000_OBLIQUITY: f64 = 23.4392911;

/// Lahiri ayanamsa at J2000, used for the sidereal frame
pub const J2000_AYANAMSA: f64 = 23.853;

/// Sidereal rotation of the sky, degrees per day
const SIDEREAL_DAY_RATE: f64 = 360.985_647;

/// Mean geocentric longitude at J2000 and mean daily motion.
const MEAN_MOTIONS: &[(Body, f64, f64)] = &[
    (Body::Sun, 280.460, 0.985_647),
    (Body::Moon, 218.316, 13.176_396),
    (Body::Mercury, 271.890, 1.383),
    (Body::Venus, 241.570, 1.2),
    (Body::Mars, 327.960, 0.524),
    (Body::Jupiter, 25.250, 0.0831),
    (Body::Saturn, 40.400, 0.0335),
    (Body::Uranus, 314.800, 0.0117),
    (Body::Neptune, 303.200, 0.0060),
    (Body::Pluto, 251.500, 0.0040),
    (Body::Pallas, 240.000, 0.2130),
    (Body::Eris, 20.000, 0.0018),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    longitude: f64,
    latitude: f64,
    speed: f64,
}

/// Uniform-motion ephemeris.
#[derive(Debug, Clone)]
pub struct LinearEphemeris {
    epoch: DateTime<Utc>,
    tracks: HashMap<Body, Track>,
    ascendant: f64,
    ascendant_rate: f64,
    obliquity: f64,
    ayanamsa: f64,
}

impl LinearEphemeris {
    /// Empty ephemeris; add bodies with [`LinearEphemeris::with_body`].
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            tracks: HashMap::new(),
            ascendant: 0.0,
            ascendant_rate: 0.0,
            obliquity: J2000_OBLIQUITY,
            ayanamsa: J2000_AYANAMSA,
        }
    }

    /// All bodies on their mean motions from J2000, with a sky that turns
    /// once per sidereal day.
    pub fn mean_motions() -> Self {
        let epoch = Utc.timestamp_nanos(J2000_UNIX_SECONDS * 1_000_000_000);
        let mut ephemeris = Self::new(epoch).with_ascendant(190.0, SIDEREAL_DAY_RATE);
        for &(body, longitude, speed) in MEAN_MOTIONS {
            ephemeris = ephemeris.with_body(body, longitude, 0.0, speed);
        }
        ephemeris
    }

    pub fn with_body(mut self, body: Body, longitude: f64, latitude: f64, speed: f64) -> Self {
        self.tracks.insert(
            body,
            Track {
                longitude,
                latitude,
                speed,
            },
        );
        self
    }

    /// Ascendant longitude at the epoch and its daily drift.
    pub fn with_ascendant(mut self, longitude: f64, rate: f64) -> Self {
        self.ascendant = longitude;
        self.ascendant_rate = rate;
        self
    }

    pub fn with_obliquity(mut self, obliquity: f64) -> Self {
        self.obliquity = obliquity;
        self
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    fn days_since_epoch(&self, when: DateTime<Utc>) -> f64 {
        (when - self.epoch).num_seconds() as f64 / 86_400.0
    }

    fn frame_offset(&self, zodiac: Zodiac) -> f64 {
        match zodiac {
            Zodiac::Sidereal => self.ayanamsa,
            Zodiac::Tropical | Zodiac::Iau | Zodiac::Planetarium => 0.0,
        }
    }
}

impl Ephemeris for LinearEphemeris {
    fn obliquity(&self, _when: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(self.obliquity)
    }

    fn body_position(
        &self,
        when: DateTime<Utc>,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<BodyPosition, EphemerisError> {
        let track = self
            .tracks
            .get(&body)
            .ok_or(EphemerisError::UnknownBody { body })?;
        let days = self.days_since_epoch(when);
        let ra = (track.longitude + track.speed * days - self.frame_offset(zodiac)).rem_euclid(360.0);
        Ok(BodyPosition {
            ra,
            dec: track.latitude,
            speed: track.speed,
        })
    }

    fn house_cusps(
        &self,
        when: DateTime<Utc>,
        _location: GeoLocation,
        system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<HouseCusps, EphemerisError> {
        let days = self.days_since_epoch(when);
        let ascendant =
            (self.ascendant + self.ascendant_rate * days - self.frame_offset(zodiac)).rem_euclid(360.0);
        let first = match system {
            HouseSystem::WholeSigns => (ascendant / 30.0).floor() * 30.0,
            HouseSystem::EqualAries => 0.0,
            _ => ascendant,
        };
        let cusps = (0..12)
            .map(|i| (first + 30.0 * i as f64).rem_euclid(360.0))
            .collect();
        Ok(HouseCusps {
            cusps,
            ascendant,
            midheaven: (ascendant + 270.0).rem_euclid(360.0),
        })
    }
}
