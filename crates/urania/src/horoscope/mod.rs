//! Horoscope data model: positions, dignities and aspects for one moment.

pub mod aspects;
pub mod dignities;
pub mod houses;
pub mod model;
pub mod planet;
pub mod position;

pub use aspects::{Aspect, AspectHoroscope};
pub use dignities::{Dignity, Element, Modality, Polarity};
pub use model::{BodyPair, Horoscope};
pub use planet::PlanetHoroscope;
pub use position::SignPosition;
