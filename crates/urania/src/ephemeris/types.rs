use serde::{Deserialize, Serialize};

/// Bodies tracked by a horoscope. Declaration order is the canonical order
/// used for body pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Pallas,
    Eris,
}

impl Body {
    pub const ALL: [Body; 12] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Pallas,
        Body::Eris,
    ];

    /// Swiss Ephemeris object number.
    pub fn swe_id(&self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
            Body::Pallas => 18,
            // SE_AST_OFFSET + minor planet number
            Body::Eris => 10000 + 136199,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "SUN",
            Body::Moon => "MOON",
            Body::Mercury => "MERCURY",
            Body::Venus => "VENUS",
            Body::Mars => "MARS",
            Body::Jupiter => "JUPITER",
            Body::Saturn => "SATURN",
            Body::Uranus => "URANUS",
            Body::Neptune => "NEPTUNE",
            Body::Pluto => "PLUTO",
            Body::Pallas => "PALLAS",
            Body::Eris => "ERIS",
        }
    }
}

/// Named sky region. The first twelve variants are the zodiac signs; the rest
/// are the remaining IAU constellations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    Ophiuchus,
    Andromeda,
    Antlia,
    Apus,
    Aquila,
    Ara,
    Auriga,
    Bootes,
    Caelum,
    Camelopardalis,
    CanesVenatici,
    CanisMajor,
    CanisMinor,
    Carina,
    Cassiopeia,
    Centaurus,
    Cepheus,
    Cetus,
    Chamaeleon,
    Circinus,
    Columba,
    ComaBerenices,
    CoronaAustralis,
    CoronaBorealis,
    Corvus,
    Crater,
    Crux,
    Cygnus,
    Delphinus,
    Dorado,
    Draco,
    Equuleus,
    Eridanus,
    Fornax,
    Grus,
    Hercules,
    Horologium,
    Hydra,
    Hydrus,
    Indus,
    Lacerta,
    LeoMinor,
    Lepus,
    Lupus,
    Lynx,
    Lyra,
    Mensa,
    Microscopium,
    Monoceros,
    Musca,
    Norma,
    Octans,
    Orion,
    Pavo,
    Pegasus,
    Perseus,
    Phoenix,
    Pictor,
    PiscisAustrinus,
    Puppis,
    Pyxis,
    Reticulum,
    Sagitta,
    Sculptor,
    Scutum,
    SerpensCaput,
    SerpensCauda,
    Sextans,
    Telescopium,
    TriangulumAustrale,
    Triangulum,
    Tucana,
    UrsaMajor,
    UrsaMinor,
    Vela,
    Volans,
    Vulpecula,
}

impl Sign {
    pub const ZODIAC: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zodiac sign by index (0 = Aries), wrapping past Pisces.
    pub fn from_zodiac_index(index: usize) -> Sign {
        Sign::ZODIAC[index % 12]
    }

    pub fn is_zodiac(&self) -> bool {
        (*self as usize) < 12
    }
}

/// The twelve houses, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum House {
    #[serde(rename = "IDENTITY_1")]
    Identity1,
    #[serde(rename = "MATERIAL_2")]
    Material2,
    #[serde(rename = "INTELLECT_3")]
    Intellect3,
    #[serde(rename = "ORIGINS_4")]
    Origins4,
    #[serde(rename = "PLEASURE_5")]
    Pleasure5,
    #[serde(rename = "HEALTH_6")]
    Health6,
    #[serde(rename = "PARTNERS_7")]
    Partners7,
    #[serde(rename = "TRANSFORMATION_8")]
    Transformation8,
    #[serde(rename = "SPIRITUALITY_9")]
    Spirituality9,
    #[serde(rename = "AMBITION_10")]
    Ambition10,
    #[serde(rename = "COMMUNITY_11")]
    Community11,
    #[serde(rename = "UNCONSCIOUS_12")]
    Unconscious12,
}

impl House {
    pub const ALL: [House; 12] = [
        House::Identity1,
        House::Material2,
        House::Intellect3,
        House::Origins4,
        House::Pleasure5,
        House::Health6,
        House::Partners7,
        House::Transformation8,
        House::Spirituality9,
        House::Ambition10,
        House::Community11,
        House::Unconscious12,
    ];

    /// House by number, 1 through 12.
    pub fn from_number(number: u8) -> Option<House> {
        if (1..=12).contains(&number) {
            Some(House::ALL[number as usize - 1])
        } else {
            None
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }
}

/// House division system, by Swiss Ephemeris letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseSystem {
    Placidus,
    Koch,
    Porphyrius,
    Regiomontanus,
    Campanus,
    EqualAscendant,
    WholeSigns,
    EqualAries,
}

impl HouseSystem {
    pub fn code(&self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::Koch => b'K',
            HouseSystem::Porphyrius => b'O',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
            HouseSystem::EqualAscendant => b'A',
            HouseSystem::WholeSigns => b'W',
            HouseSystem::EqualAries => b'N',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Divide houses proportional to time spent travelling across the sky",
            HouseSystem::Koch => "Divide houses based on the horizon at different times",
            HouseSystem::Porphyrius => "Every quadrant is equally divided into three",
            HouseSystem::Regiomontanus => "Space-oriented system invented by Regiomontanus",
            HouseSystem::Campanus => "Space-oriented system by Campanus",
            HouseSystem::EqualAscendant => "12 equal segments, starting with the ascendant",
            HouseSystem::WholeSigns => "Each sign is a house, starting with Aries",
            HouseSystem::EqualAries => "12 equal segments, starting with Aries",
        }
    }
}

/// How the ecliptic is partitioned into signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zodiac {
    /// 12 equal segments starting at the equinox
    Tropical,
    /// 12 equal segments corrected using fixed stars
    Sidereal,
    /// Constellation boundaries crossing the ecliptic
    Iau,
    /// Constellation boundaries at the body's own declination
    Planetarium,
}

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl Default for GeoLocation {
    fn default() -> Self {
        // Davis, CA
        Self {
            lat: 38.5616433,
            lon: -121.6265455,
        }
    }
}

/// Settings for a horoscope query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// Orb limit for every aspect except conjunction, in degrees
    pub orb_limit: f64,
    /// Orb limit for conjunctions, in degrees
    pub conjunction_limit: f64,
    pub location: GeoLocation,
    pub zodiac: Zodiac,
    pub house_system: HouseSystem,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            orb_limit: 2.0,
            conjunction_limit: 5.0,
            location: GeoLocation::default(),
            zodiac: Zodiac::Tropical,
            house_system: HouseSystem::Placidus,
        }
    }
}

/// Raw ecliptic position of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees
    pub ra: f64,
    /// Ecliptic latitude in degrees
    pub dec: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// House cusps and chart angles for a time and place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// Cusp longitudes, house 1 first
    pub cusps: Vec<f64>,
    pub ascendant: f64,
    pub midheaven: f64,
}

