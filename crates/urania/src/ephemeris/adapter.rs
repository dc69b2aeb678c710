use crate::ephemeris::provider::{Ephemeris, EphemerisError};
use crate::ephemeris::types::{Body, BodyPosition, GeoLocation, HouseCusps, HouseSystem, Zodiac};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::{AscMc, Cusp};

/// FLG_SWIEPH: use Swiss Ephemeris files
const FLG_SWIEPH: i32 = 2;
const FLG_SPEED: i32 = 256;
const FLG_SIDEREAL: i32 = 64;
/// SE_ECL_NUT: pseudo-body yielding obliquity and nutation
const ECL_NUT: i32 = -1;
const GREG_CAL: i32 = 1;

/// Swiss Ephemeris backed provider
pub struct SwissEphemeris {
    ephemeris_path: PathBuf,
}

impl SwissEphemeris {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }
        log::debug!("Swiss Ephemeris data at {}", path.display());

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }

    fn flags(zodiac: Zodiac) -> i32 {
        match zodiac {
            Zodiac::Sidereal => FLG_SWIEPH | FLG_SIDEREAL,
            Zodiac::Tropical | Zodiac::Iau | Zodiac::Planetarium => FLG_SWIEPH,
        }
    }
}

impl Ephemeris for SwissEphemeris {
    fn obliquity(&self, when: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = datetime_to_julian_day(when);
        let result = calc_ut(jd, ECL_NUT as u32, 0).map_err(|e| EphemerisError::ObliquityFailed {
            datetime: when,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;
        Ok(result.out[0])
    }

    fn body_position(
        &self,
        when: DateTime<Utc>,
        body: Body,
        zodiac: Zodiac,
    ) -> Result<BodyPosition, EphemerisError> {
        let jd = datetime_to_julian_day(when);
        let flags = Self::flags(zodiac) | FLG_SPEED;
        let result = calc_ut(jd, body.swe_id() as u32, flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: when,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        Ok(BodyPosition {
            ra: result.out[0].rem_euclid(360.0),
            dec: result.out[1],
            speed: result.out[3],
        })
    }

    fn house_cusps(
        &self,
        when: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
        zodiac: Zodiac,
    ) -> Result<HouseCusps, EphemerisError> {
        let jd = datetime_to_julian_day(when);
        let (c, a) = houses_ex(
            jd,
            Self::flags(zodiac),
            location.lat,
            location.lon,
            system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusp_values.iter().any(|cusp| !cusp.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp for system {:?} at {}", system, when),
            });
        }

        Ok(HouseCusps {
            cusps: cusp_values.iter().map(|cusp| cusp.rem_euclid(360.0)).collect(),
            ascendant: ascmc.ascendant.rem_euclid(360.0),
            midheaven: ascmc.mc.rem_euclid(360.0),
        })
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL)
}
