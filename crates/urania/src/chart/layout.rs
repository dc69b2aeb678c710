//! Wheel geometry, in canvas pixels and degrees.

pub const MAX_RADIUS: f64 = 1500.0;
pub const IMAGE_PAD: f64 = 100.0;

pub const ZODIAC_OUT_RADIUS: f64 = MAX_RADIUS * 1.0;
pub const ZODIAC_IN_RADIUS: f64 = MAX_RADIUS * 0.8;

pub const HOUSE_OUT_RADIUS: f64 = MAX_RADIUS * 0.5;
pub const HOUSE_IN_RADIUS: f64 = MAX_RADIUS * 0.4;

pub const PLANET_1_RADIUS: f64 = MAX_RADIUS * 0.7;
pub const PLANET_2_RADIUS: f64 = MAX_RADIUS * 0.6;
pub const TIP_1_RADIUS: f64 = MAX_RADIUS * 0.77;
pub const TIP_2_RADIUS: f64 = MAX_RADIUS * 0.53;
pub const TIP_RADIUS: f64 = MAX_RADIUS * 0.015;
pub const BUBBLE_RADIUS: f64 = MAX_RADIUS * 0.005;
pub const BRIDGE_RADIUS: f64 = MAX_RADIUS * 0.02;
pub const ASPECT_TIP_RADIUS: f64 = MAX_RADIUS * 0.02;
/// Dot at the end of a square's tip
pub const ASPECT_DOT_RADIUS: f64 = 3.0;
/// Gap between the house ring and a conjunction's arc
pub const CONJUNCTION_ARC_OFFSET: f64 = 8.0;
/// Stroke of the four angular cusps
pub const CUSP_WIDTH: u32 = 15;

/// Minimum separation between body markers and house cusps
pub const NUDGE_ANGLE: f64 = 5.0;
/// Fuzz used when testing sign labels and aspect arcs for overlap
pub const COLLISION_ANGLE: f64 = 5.0;
/// Angular radius of the conjunction dot
pub const CONJUNCTION_ANGLE: f64 = 2.0;
/// Spokes closer than this to an arc end do not bridge it
pub const BRIDGE_TOLERANCE: f64 = 0.1;

/// Canvas side length
pub fn chart_width() -> f64 {
    (MAX_RADIUS + IMAGE_PAD) * 2.0 + 1.0
}
