use crate::ephemeris::types::{Body, BodyPosition, House, Sign};
use crate::horoscope::dignities::{resolve_dignity, Dignity};
use crate::horoscope::position::SignPosition;
use crate::splitter::Splitter;
use serde::{Deserialize, Serialize};

/// Horoscope summary for a single body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetHoroscope {
    pub position: SignPosition,
    pub dignity: Dignity,
    pub retrograde: bool,
    /// Essential dignity score
    pub score: i32,
}

impl PlanetHoroscope {
    pub fn new(
        body: Body,
        raw: BodyPosition,
        signs: &impl Splitter<Sign>,
        houses: &impl Splitter<House>,
    ) -> Self {
        let position = SignPosition::new(signs, houses, raw.ra, raw.dec, raw.speed);
        let dignity = resolve_dignity(body, &position, signs);
        Self {
            retrograde: position.retrograde(),
            score: dignity.score(),
            position,
            dignity,
        }
    }
}
