use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart layout: a wheel with aspects inside the house ring, or the sky
/// projected house by house
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    /// Straight chords between merged body positions
    ClassicWheel,
    /// Layered arcs with bridges and per-aspect tips
    #[default]
    ModernWheel,
    /// Constellation outlines projected into one gore per house
    Star,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [
        ChartStyle::ClassicWheel,
        ChartStyle::ModernWheel,
        ChartStyle::Star,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ChartStyle::ClassicWheel => "A classic wheel chart. Popular for natal charts.",
            ChartStyle::ModernWheel => {
                "A wheel chart. Aspects are rendered as bridged segments with tooltips."
            }
            ChartStyle::Star => "A star map. Constellations are shown house by house.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartStyle::ClassicWheel => "classic_wheel",
            ChartStyle::ModernWheel => "modern_wheel",
            ChartStyle::Star => "star",
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
