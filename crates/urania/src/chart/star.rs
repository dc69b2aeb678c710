//! Star chart: the sky around the ecliptic, cut into one gore per house.
//!
//! Every gore is a sinusoidal projection centered on its house's middle
//! longitude. The radius grows with declination, from the south ecliptic pole
//! at the center to the north pole on the rim. Coordinates are absolute
//! ecliptic positions, not relative to the ascendant.

use crate::chart::layout::{IMAGE_PAD, MAX_RADIUS};
use crate::chart::shapes::{Shape, ShapeSet, WheelCoord};
use crate::chart::spec::{ChartSpec, Point};
use crate::ephemeris::types::{House, Sign};
use crate::horoscope::Horoscope;
use crate::math::{Angle, AngleSegment};
use crate::splitter::{Splitter, Splitter2D};

/// Declination covered by one meridian stroke
const MERIDIAN_STEP: usize = 5;
/// Cusps are drawn as two meridians this far either side
const MERIDIAN_OFFSET: f64 = 0.1;

/// Laid-out star chart for one horoscope
#[derive(Debug, Clone)]
pub struct StarChart {
    shapes: ShapeSet,
    houses: Splitter2D<House>,
}

impl StarChart {
    pub fn new(horoscope: &Horoscope) -> Self {
        let mut chart = Self {
            shapes: ShapeSet::new(),
            houses: horoscope.house_splitter().clone(),
        };
        chart.draw_meridians(&horoscope.houses);
        chart.draw_constellations(&horoscope.constellations);

        log::debug!(
            "Laid out star chart: {} shapes, {} constellations",
            chart.shapes.len(),
            horoscope.constellations.len()
        );
        chart
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    /// Projects an ecliptic coordinate onto the canvas through the gore of
    /// the house containing it.
    pub fn to_xy(&self, coord: &WheelCoord) -> Point {
        let ra = Angle::new(coord.ra);
        let center = self
            .houses
            .split(coord.ra, coord.dec)
            .and_then(|house| self.houses.limits_of(&house))
            .map(|segment| segment.middle())
            .unwrap_or(ra);

        let rho = (coord.dec + 90.0) * MAX_RADIUS / 180.0;
        let phi = center.value() + ra.compare(&center) * coord.dec.to_radians().cos();
        let phi = phi.to_radians();

        let offset = MAX_RADIUS + IMAGE_PAD;
        Point {
            x: rho * phi.cos() + offset,
            y: offset - rho * phi.sin(),
        }
    }

    pub fn to_spec(&self) -> ChartSpec {
        ChartSpec::project(&self.shapes, |coord| self.to_xy(coord))
    }

    fn draw_meridians(&mut self, houses: &[(AngleSegment, House)]) {
        for (segment, _) in houses {
            for delta in [-MERIDIAN_OFFSET, MERIDIAN_OFFSET] {
                let ra = segment.a1.value() + delta;
                for dec in (-90..90).step_by(MERIDIAN_STEP) {
                    let dec = dec as f64;
                    self.shapes.add(Shape::line(
                        WheelCoord::sky(ra, dec),
                        WheelCoord::sky(ra, dec + MERIDIAN_STEP as f64),
                    ));
                }
            }
        }
    }

    fn draw_constellations(&mut self, constellations: &[(Sign, Vec<(f64, f64)>)]) {
        for (_, vertices) in constellations {
            let next_vertices = vertices.iter().cycle().skip(1);
            for (&(ra1, dec1), &(ra2, dec2)) in vertices.iter().zip(next_vertices) {
                // keep each edge on the short side of the 0/360 seam
                let ra2 = Angle::centered(ra2, ra1).value();
                self.shapes.add(Shape::line(
                    WheelCoord::sky(ra1, dec1),
                    WheelCoord::sky(ra2, dec2),
                ));
            }
        }
    }
}
