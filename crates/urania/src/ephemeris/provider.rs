use crate::ephemeris::types::{Body, BodyPosition, GeoLocation, HouseCusps, HouseSystem, Zodiac};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("No ephemeris data for {body:?}")]
    UnknownBody { body: Body },
    #[error("Failed to calculate position for {body:?} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Obliquity calculation failed at {datetime}: {message}")]
    ObliquityFailed {
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of astronomical positions.
///
/// Positions are ecliptic longitude/latitude in degrees. Tropical, IAU and
/// planetarium zodiacs all receive tropical longitudes; only the sidereal
/// zodiac shifts the frame.
pub trait Ephemeris {
    /// True obliquity of the ecliptic in degrees.
    fn obliquity(&self, when: DateTime<Utc>) -> Result<f64, EphemerisError>;

    fn body_position(
        &self,
        when: DateTime<Utc>,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<BodyPosition, EphemerisError>;

    fn house_cusps(
        &self,
        when: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<HouseCusps, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn obliquity(&self, when: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).obliquity(when)
    }

    fn body_position(
        &self,
        when: DateTime<Utc>,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<BodyPosition, EphemerisError> {
        (**self).body_position(when, body, zodiac)
    }

    fn house_cusps(
        &self,
        when: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).house_cusps(when, location, system, zodiac)
    }
}
