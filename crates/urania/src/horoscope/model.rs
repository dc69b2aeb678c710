use crate::constellations::{SignSplitter, StarCatalog};
use crate::ephemeris::provider::{Ephemeris, EphemerisError};
use crate::ephemeris::types::{Body, EphemerisSettings, House, Sign};
use crate::horoscope::aspects::AspectHoroscope;
use crate::horoscope::houses::house_ring;
use crate::horoscope::planet::PlanetHoroscope;
use crate::horoscope::position::SignPosition;
use crate::math::AngleSegment;
use crate::splitter::{Splitter, Splitter2D, Splitter3D};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Unordered pair of distinct bodies, lower ordinal first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyPair {
    first: Body,
    second: Body,
}

impl BodyPair {
    pub fn new(a: Body, b: Body) -> Self {
        if b < a {
            Self { first: b, second: a }
        } else {
            Self { first: a, second: b }
        }
    }

    pub fn first(&self) -> Body {
        self.first
    }

    pub fn second(&self) -> Body {
        self.second
    }
}

impl fmt::Display for BodyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first.name(), self.second.name())
    }
}

impl Serialize for BodyPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Complete horoscope for one moment and place
#[derive(Debug, Clone, Serialize)]
pub struct Horoscope {
    pub when: DateTime<Utc>,
    pub planets: BTreeMap<Body, PlanetHoroscope>,
    /// Every pair with an aspect inside its orb
    pub aspects: BTreeMap<BodyPair, AspectHoroscope>,
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
    #[serde(skip)]
    pub settings: EphemerisSettings,
    /// Sign arcs on the ecliptic, in ring order
    #[serde(skip)]
    pub main_signs: Vec<(AngleSegment, Sign)>,
    /// Off-ecliptic sign arcs occupied by a body
    #[serde(skip)]
    pub extra_signs: Vec<(AngleSegment, Sign)>,
    #[serde(skip)]
    pub houses: Vec<(AngleSegment, House)>,
    /// Constellation outlines in the ecliptic frame
    #[serde(skip)]
    pub constellations: Vec<(Sign, Vec<(f64, f64)>)>,
    #[serde(skip)]
    sign_splitter: Splitter3D<Sign>,
    #[serde(skip)]
    house_splitter: Splitter2D<House>,
}

impl Horoscope {
    pub fn compute(
        ephemeris: &impl Ephemeris,
        when: DateTime<Utc>,
        settings: &EphemerisSettings,
        catalog: &StarCatalog,
    ) -> Result<Self, EphemerisError> {
        let obliquity = ephemeris.obliquity(when)?;
        let constellations = SignSplitter::ecliptic_polygons(catalog, obliquity);
        let sign_splitter = SignSplitter::from_polygons(&constellations, settings.zodiac);
        let cusps = ephemeris.house_cusps(
            when,
            settings.location,
            settings.house_system,
            settings.zodiac,
        )?;
        let house_splitter = house_ring(&cusps);

        let mut planets = BTreeMap::new();
        for body in Body::ALL {
            let raw = ephemeris.body_position(when, body, settings.zodiac)?;
            planets.insert(
                body,
                PlanetHoroscope::new(body, raw, &sign_splitter, &house_splitter),
            );
        }

        let mut aspects = BTreeMap::new();
        for (i, (&b1, p1)) in planets.iter().enumerate() {
            for (&b2, p2) in planets.iter().skip(i + 1) {
                let aspect = AspectHoroscope::new(&p1.position, &p2.position, settings);
                if !aspect.is_none() {
                    aspects.insert(BodyPair::new(b1, b2), aspect);
                }
            }
        }

        let ascendant = SignPosition::new(&sign_splitter, &house_splitter, cusps.ascendant, 0.0, 0.0);
        let midheaven = SignPosition::new(&sign_splitter, &house_splitter, cusps.midheaven, 0.0, 0.0);

        let main_signs = sign_splitter
            .band(0.0)
            .map(|ring| ring.ring().iter().map(|(segment, sign)| (*segment, *sign)).collect())
            .unwrap_or_default();

        let mut extra_signs: Vec<(AngleSegment, Sign)> = Vec::new();
        for planet in planets.values() {
            let position = &planet.position;
            let Some(sign) = position.sign else {
                continue;
            };
            if sign_splitter.split(position.abs_angle, 0.0) == Some(sign) {
                continue;
            }
            let Some(segment) = sign_splitter.get_ra_limits(&sign, position.declination) else {
                continue;
            };
            if !extra_signs.iter().any(|(existing, _)| *existing == segment) {
                extra_signs.push((segment, sign));
            }
        }

        let houses = house_splitter
            .ring()
            .iter()
            .map(|(segment, house)| (*segment, *house))
            .collect();

        log::debug!(
            "Horoscope at {}: {} aspects, {} extra signs",
            when,
            aspects.len(),
            extra_signs.len()
        );

        Ok(Self {
            when,
            planets,
            aspects,
            ascendant,
            midheaven,
            settings: settings.clone(),
            main_signs,
            extra_signs,
            houses,
            constellations,
            sign_splitter,
            house_splitter,
        })
    }

    pub fn sign_splitter(&self) -> &Splitter3D<Sign> {
        &self.sign_splitter
    }

    pub fn house_splitter(&self) -> &Splitter2D<House> {
        &self.house_splitter
    }

    pub fn planet(&self, body: Body) -> Option<&PlanetHoroscope> {
        self.planets.get(&body)
    }

    pub fn aspect(&self, a: Body, b: Body) -> Option<&AspectHoroscope> {
        self.aspects.get(&BodyPair::new(a, b))
    }
}
