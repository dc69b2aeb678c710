//! Horoscope computation and wheel chart layout.
//!
//! Positions come from an [`Ephemeris`]; signs and houses are resolved with
//! region splitters over circular [`Angle`]s, and [`WheelChart`] or
//! [`StarChart`] lay the result out as shapes.

pub mod chart;
pub mod constellations;
pub mod ephemeris;
pub mod horoscope;
pub mod matching;
pub mod math;
pub mod search;
pub mod splitter;

pub use chart::{ChartSpec, ChartStyle, StarChart, WheelChart};
pub use constellations::StarCatalog;
pub use ephemeris::{Body, Ephemeris, EphemerisError, EphemerisSettings, LinearEphemeris, Sign};
pub use horoscope::{Aspect, AspectHoroscope, Horoscope, PlanetHoroscope};
pub use math::{Angle, AngleSegment, UnionFind};
pub use search::{HoroscopeSearch, MatchRange, SearchError};
pub use splitter::{Splitter, Splitter2D, Splitter3D};
