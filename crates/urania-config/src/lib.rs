use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::chart::ChartStyle;
use urania::ephemeris::{EphemerisSettings, Zodiac};

/// Settings for computing and drawing horoscopes
#[derive(Debug, Clone)]
pub struct UraniaSettings {
    pub ephemeris: EphemerisSettings,
    pub chart_style: ChartStyle,
    /// Swiss Ephemeris data directory; the bundled search path when unset
    pub ephemeris_path: Option<PathBuf>,
    /// Constellation boundary table, required by the IAU and planetarium zodiacs
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct HoroscopeToml {
    #[serde(default)]
    ephemeris: EphemerisSettings,
    #[serde(default)]
    chart_style: ChartStyle,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    horoscope: Option<HoroscopeToml>,
}

/// Reads `path`, or the first of the common relative locations of
/// `configs/urania.toml` when no path is given.
pub fn read_config_toml_text(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()));
    }
    let paths = ["configs/urania.toml", "../../configs/urania.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", paths);
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let Some(HoroscopeToml {
        ephemeris,
        chart_style,
        ephemeris_path,
        catalog_path,
    }) = root.horoscope
    else {
        return Ok(UraniaSettings {
            ephemeris: EphemerisSettings::default(),
            chart_style: ChartStyle::default(),
            ephemeris_path: None,
            catalog_path: None,
        });
    };

    validate_ephemeris(&ephemeris)?;
    if matches!(ephemeris.zodiac, Zodiac::Iau | Zodiac::Planetarium) && catalog_path.is_none() {
        anyhow::bail!(
            "horoscope.ephemeris.zodiac {:?} needs horoscope.catalog_path (constellation boundaries)",
            ephemeris.zodiac
        );
    }
    if let Some(path) = &catalog_path {
        if !path.exists() {
            anyhow::bail!("horoscope.catalog_path does not exist: {}", path.display());
        }
    }
    if let Some(path) = &ephemeris_path {
        if !path.is_dir() {
            anyhow::bail!("horoscope.ephemeris_path is not a directory: {}", path.display());
        }
    }

    Ok(UraniaSettings {
        ephemeris,
        chart_style,
        ephemeris_path,
        catalog_path,
    })
}

pub fn validate_ephemeris(settings: &EphemerisSettings) -> anyhow::Result<()> {
    if !(settings.orb_limit > 0.0 && settings.orb_limit < 30.0) {
        anyhow::bail!("horoscope.ephemeris.orb_limit must be in (0, 30), got {}", settings.orb_limit);
    }
    if !(settings.conjunction_limit > 0.0 && settings.conjunction_limit < 30.0) {
        anyhow::bail!(
            "horoscope.ephemeris.conjunction_limit must be in (0, 30), got {}",
            settings.conjunction_limit
        );
    }
    let location = settings.location;
    if !(-90.0..=90.0).contains(&location.lat) || !(-180.0..=180.0).contains(&location.lon) {
        anyhow::bail!(
            "horoscope.ephemeris.location out of range: lat {}, lon {}",
            location.lat,
            location.lon
        );
    }
    Ok(())
}

pub fn load_settings(path: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    let text = read_config_toml_text(path)?;
    parse_settings(&text)
}
