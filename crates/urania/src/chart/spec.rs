use crate::chart::layout::{chart_width, IMAGE_PAD, MAX_RADIUS};
use crate::chart::shapes::{Shape, ShapeSet, WheelCoord};
use crate::chart::star::StarChart;
use crate::chart::style::ChartStyle;
use crate::chart::wheel::WheelChart;
use crate::horoscope::Horoscope;
use serde::{Deserialize, Serialize};

/// Canvas position, origin top-left, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Maps a wheel coordinate to the canvas.
///
/// Relative angle 0 (the ascendant) lands on the left, and angles grow
/// counter-clockwise.
pub fn to_xy(coord: &WheelCoord) -> Point {
    let offset = MAX_RADIUS + IMAGE_PAD;
    let angle = (coord.ra + 180.0).to_radians();
    Point {
        x: coord.rho * angle.cos() + offset,
        y: offset - coord.rho * angle.sin(),
    }
}

/// Chart specification handed to renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Side of the square canvas
    pub width: f64,
    pub shapes: Vec<Shape<Point>>,
}

impl ChartSpec {
    /// Wheel shapes mapped with [`to_xy`].
    pub fn new(shapes: &ShapeSet) -> Self {
        Self::project(shapes, to_xy)
    }

    pub fn project(shapes: &ShapeSet, projection: impl Fn(&WheelCoord) -> Point) -> Self {
        Self {
            width: chart_width(),
            shapes: shapes
                .iter()
                .map(|shape| shape.clone().map_coords(|c| projection(&c)))
                .collect(),
        }
    }

    /// Lays out `horoscope` in `style` and maps it onto the canvas.
    pub fn draw(horoscope: &Horoscope, style: ChartStyle) -> Self {
        match style {
            ChartStyle::ClassicWheel | ChartStyle::ModernWheel => {
                WheelChart::new(horoscope, style).to_spec()
            }
            ChartStyle::Star => StarChart::new(horoscope).to_spec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_to_xy_orientation() {
        let c = MAX_RADIUS + IMAGE_PAD;
        assert!(close(to_xy(&WheelCoord::origin()), c, c));
        // ascendant on the left
        assert!(close(to_xy(&WheelCoord::polar(100.0, 0.0)), c - 100.0, c));
        // ninety degrees later sits at the bottom
        assert!(close(to_xy(&WheelCoord::polar(100.0, 90.0)), c, c + 100.0));
    }

    #[test]
    fn test_draw_dispatches_on_style() {
        use crate::constellations::StarCatalog;
        use crate::ephemeris::{EphemerisSettings, LinearEphemeris};

        let ephemeris = LinearEphemeris::mean_motions();
        let horoscope = Horoscope::compute(
            &ephemeris,
            ephemeris.epoch(),
            &EphemerisSettings::default(),
            &StarCatalog::new(),
        )
        .unwrap();

        let star = ChartSpec::draw(&horoscope, ChartStyle::Star);
        assert!(star.shapes.iter().all(|shape| matches!(shape, Shape::Line { .. })));
        let wheel = ChartSpec::draw(&horoscope, ChartStyle::ModernWheel);
        assert!(wheel.shapes.iter().any(|shape| matches!(shape, Shape::Label { .. })));
        assert_eq!(star.width, wheel.width);
    }

    #[test]
    fn test_spec_serializes_tagged_shapes() {
        let mut set = ShapeSet::new();
        set.add(Shape::line(WheelCoord::origin(), WheelCoord::polar(10.0, 0.0)));
        let spec = ChartSpec::new(&set);
        assert_eq!(spec.width, 3201.0);
        let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
        assert_eq!(json["shapes"][0]["type"], "Line");
        assert_eq!(json["shapes"][0]["width"], 8);
    }
}
