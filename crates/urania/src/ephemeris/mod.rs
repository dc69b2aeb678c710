#[cfg(feature = "swisseph")]
pub mod adapter;
pub mod linear;
pub mod provider;
pub mod types;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemeris;
pub use linear::LinearEphemeris;
pub use provider::{Ephemeris, EphemerisError};
pub use types::{
    Body, BodyPosition, EphemerisSettings, GeoLocation, House, HouseCusps, HouseSystem,
    Sign, Zodiac,
};
