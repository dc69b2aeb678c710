//! Essential dignities.
//!
//! A body's dignity depends on the sign it occupies, the sign opposite it,
//! the third of the sign (decan) and, for triplicity, the house.

use crate::ephemeris::types::{Body, House, Sign};
use crate::horoscope::position::SignPosition;
use crate::splitter::Splitter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    Negative,
    Positive,
}

/// Essential dignity, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dignity {
    Detriment,
    Fall,
    Normal,
    Decan,
    Triplicity,
    Exaltation,
    Rulership,
}

impl Dignity {
    pub fn score(&self) -> i32 {
        match self {
            Dignity::Detriment => -5,
            Dignity::Fall => -4,
            Dignity::Normal => 0,
            Dignity::Decan => 1,
            Dignity::Triplicity => 3,
            Dignity::Exaltation => 4,
            Dignity::Rulership => 5,
        }
    }
}

pub fn ruler(sign: Sign) -> Option<Body> {
    match sign {
        Sign::Aries => Some(Body::Mars),
        Sign::Taurus => Some(Body::Venus),
        Sign::Gemini => Some(Body::Mercury),
        Sign::Cancer => Some(Body::Moon),
        Sign::Leo => Some(Body::Sun),
        Sign::Virgo => Some(Body::Eris),
        Sign::Libra => Some(Body::Pallas),
        Sign::Scorpio => Some(Body::Pluto),
        Sign::Sagittarius => Some(Body::Jupiter),
        Sign::Capricorn => Some(Body::Saturn),
        Sign::Aquarius => Some(Body::Uranus),
        Sign::Pisces => Some(Body::Neptune),
        Sign::Ophiuchus => Some(Body::Pluto),
        _ => None,
    }
}

/// Sign of exaltation and the exact degree within it.
pub fn exaltation(body: Body) -> Option<(Sign, u8)> {
    match body {
        Body::Sun => Some((Sign::Aries, 19)),
        Body::Moon => Some((Sign::Taurus, 3)),
        Body::Mercury => Some((Sign::Virgo, 15)),
        Body::Venus => Some((Sign::Pisces, 24)),
        Body::Mars => Some((Sign::Capricorn, 28)),
        Body::Jupiter => Some((Sign::Cancer, 15)),
        Body::Saturn => Some((Sign::Libra, 21)),
        _ => None,
    }
}

pub fn element(sign: Sign) -> Option<Element> {
    match sign {
        Sign::Aries | Sign::Leo | Sign::Sagittarius => Some(Element::Fire),
        Sign::Taurus | Sign::Virgo | Sign::Capricorn => Some(Element::Earth),
        Sign::Gemini | Sign::Libra | Sign::Aquarius => Some(Element::Air),
        Sign::Cancer | Sign::Scorpio | Sign::Pisces | Sign::Ophiuchus => Some(Element::Water),
        _ => None,
    }
}

pub fn modality(sign: Sign) -> Option<Modality> {
    match sign {
        Sign::Aries | Sign::Cancer | Sign::Libra | Sign::Capricorn => Some(Modality::Cardinal),
        Sign::Taurus | Sign::Leo | Sign::Scorpio | Sign::Aquarius | Sign::Ophiuchus => {
            Some(Modality::Fixed)
        }
        Sign::Gemini | Sign::Virgo | Sign::Sagittarius | Sign::Pisces => Some(Modality::Mutable),
        _ => None,
    }
}

impl Element {
    pub fn polarity(&self) -> Polarity {
        match self {
            Element::Fire | Element::Air => Polarity::Positive,
            Element::Earth | Element::Water => Polarity::Negative,
        }
    }

    /// Day, night and participating triplicity rulers.
    pub fn triplicity_rulers(&self) -> [Body; 3] {
        match self {
            Element::Fire => [Body::Sun, Body::Jupiter, Body::Saturn],
            Element::Earth => [Body::Venus, Body::Moon, Body::Mars],
            Element::Air => [Body::Pallas, Body::Mercury, Body::Pluto],
            Element::Water => [Body::Uranus, Body::Neptune, Body::Eris],
        }
    }
}

/// Which triplicity ruler is active for a body in `house`.
pub fn triplicity_time(house: House) -> usize {
    match house {
        House::Identity1 | House::Health6 | House::Partners7 | House::Unconscious12 => 2,
        House::Material2 | House::Intellect3 | House::Origins4 | House::Pleasure5 => 1,
        House::Transformation8 | House::Spirituality9 | House::Ambition10 | House::Community11 => 0,
    }
}

lazy_static::lazy_static! {
    /// Zodiac signs grouped by element, in zodiac order
    static ref ELEMENT_GROUPS: HashMap<Element, Vec<Sign>> = {
        let mut groups: HashMap<Element, Vec<Sign>> = HashMap::new();
        for sign in Sign::ZODIAC {
            if let Some(element) = element(sign) {
                groups.entry(element).or_default().push(sign);
            }
        }
        groups
    };
}

/// Ruler of the given third of a zodiac sign.
///
/// Decans rotate through the rulers of the sign's element group, starting
/// with the sign itself.
pub fn decan_ruler(sign: Sign, face: u8) -> Option<Body> {
    if !sign.is_zodiac() || face > 2 {
        return None;
    }
    let group = ELEMENT_GROUPS.get(&element(sign)?)?;
    let index = group.iter().position(|&member| member == sign)?;
    ruler(group[(index + face as usize) % group.len()])
}

/// Dignity of `body` at `position`.
///
/// Checked in order: rulership, detriment, exaltation, fall, decan,
/// triplicity. A position with no sign is `Normal`.
pub fn resolve_dignity(body: Body, position: &SignPosition, signs: &impl Splitter<Sign>) -> Dignity {
    let Some(sign) = position.sign else {
        return Dignity::Normal;
    };
    let opposite = signs.split(position.abs_angle + 180.0, -position.declination);

    if ruler(sign) == Some(body) {
        return Dignity::Rulership;
    }
    if opposite.and_then(ruler) == Some(body) {
        return Dignity::Detriment;
    }
    if let Some((exalted, _)) = exaltation(body) {
        if exalted == sign {
            return Dignity::Exaltation;
        }
        if Some(exalted) == opposite {
            return Dignity::Fall;
        }
    }
    if position.face.and_then(|face| decan_ruler(sign, face)) == Some(body) {
        return Dignity::Decan;
    }
    let triplicity = element(sign)
        .zip(position.house)
        .map(|(element, house)| element.triplicity_rulers()[triplicity_time(house)]);
    if triplicity == Some(body) {
        return Dignity::Triplicity;
    }
    Dignity::Normal
}
