use crate::constellations::catalog::StarCatalog;
use crate::constellations::rotation::celestial_to_ecliptic;
use crate::ephemeris::types::{Sign, Zodiac};
use crate::math::{Angle, AngleSegment};
use crate::splitter::{Splitter2D, Splitter3D};

/// Width of one planetarium declination band, in degrees
pub const BAND_WIDTH: i32 = 2;
/// Lowest planetarium band start
pub const LOWEST_BAND: i32 = -88;
/// Highest planetarium band start
pub const HIGHEST_BAND: i32 = 88;

/// Builds sign splitters for each zodiac.
pub struct SignSplitter;

impl SignSplitter {
    /// Sign splitter for `zodiac`, with constellation polygons rotated into
    /// the ecliptic frame for `obliquity`.
    pub fn build(catalog: &StarCatalog, obliquity: f64, zodiac: Zodiac) -> Splitter3D<Sign> {
        Self::from_polygons(&Self::ecliptic_polygons(catalog, obliquity), zodiac)
    }

    /// Sign splitter for `zodiac` over polygons already in the ecliptic frame.
    pub fn from_polygons(polygons: &[(Sign, Vec<(f64, f64)>)], zodiac: Zodiac) -> Splitter3D<Sign> {
        match zodiac {
            Zodiac::Tropical | Zodiac::Sidereal => Splitter3D::flat(Self::equal_ring()),
            Zodiac::Iau => Splitter3D::flat(Self::crossing_ring(polygons, 0.0)),
            Zodiac::Planetarium => {
                let mut splitter = Splitter3D::new();
                for start in (LOWEST_BAND..=HIGHEST_BAND).step_by(BAND_WIDTH as usize) {
                    let start = start as f64;
                    let band = AngleSegment::new(start, start + BAND_WIDTH as f64);
                    splitter.push_band(band, Self::crossing_ring(polygons, start));
                }
                log::debug!(
                    "Built planetarium splitter with {} bands",
                    splitter.bands().len()
                );
                splitter
            }
        }
    }

    /// Twelve 30° signs starting at 0° Aries.
    pub fn equal_ring() -> Splitter2D<Sign> {
        Sign::ZODIAC
            .iter()
            .enumerate()
            .map(|(i, &sign)| {
                let start = i as f64 * 30.0;
                (AngleSegment::new(start, start + 30.0), sign)
            })
            .collect()
    }

    /// Catalog boundaries as `(longitude, latitude)` vertices.
    pub fn ecliptic_polygons(catalog: &StarCatalog, obliquity: f64) -> Vec<(Sign, Vec<(f64, f64)>)> {
        catalog
            .iter()
            .map(|(sign, vertices)| {
                let rotated = vertices
                    .iter()
                    .map(|&(ra, dec)| celestial_to_ecliptic(ra, dec, obliquity))
                    .collect();
                (sign, rotated)
            })
            .collect()
    }

    /// Ring of every constellation that crosses `declination`.
    pub fn crossing_ring(polygons: &[(Sign, Vec<(f64, f64)>)], declination: f64) -> Splitter2D<Sign> {
        let mut ring = Splitter2D::new();
        for (sign, vertices) in polygons {
            if let Some(arc) = crossing_arc(vertices, declination) {
                ring.push(arc, *sign);
            }
        }
        ring
    }
}

/// Widest arc where a closed polygon crosses the `declination` line.
///
/// Every edge whose endpoints straddle the line contributes one crossing,
/// interpolated along the edge with wraparound-aware longitude difference.
/// Returns `None` if the polygon never crosses.
pub fn crossing_arc(vertices: &[(f64, f64)], declination: f64) -> Option<AngleSegment> {
    let mut bounds: Option<(Angle, Angle)> = None;
    let next_vertices = vertices.iter().cycle().skip(1);
    for (&(ra1, dec1), &(ra2, dec2)) in vertices.iter().zip(next_vertices) {
        if (dec1 > declination) == (dec2 > declination) {
            continue;
        }
        let dra = Angle::new(ra2).compare(&Angle::new(ra1));
        let crossing = Angle::new(ra1 + (declination - dec1) * dra / (dec2 - dec1));
        bounds = Some(match bounds {
            None => (crossing, crossing),
            Some((low, high)) => (
                if crossing < low { crossing } else { low },
                if crossing > high { crossing } else { high },
            ),
        });
    }
    bounds.map(|(low, high)| AngleSegment::new(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::Splitter;

    fn rectangle(ra1: f64, ra2: f64, dec1: f64, dec2: f64) -> Vec<(f64, f64)> {
        vec![(ra1, dec1), (ra2, dec1), (ra2, dec2), (ra1, dec2)]
    }

    #[test]
    fn test_equal_ring() {
        let splitter = SignSplitter::build(&StarCatalog::new(), 23.44, Zodiac::Tropical);
        assert_eq!(splitter.split(0.0, 0.0), Some(Sign::Aries));
        assert_eq!(splitter.split(29.999, 0.0), Some(Sign::Aries));
        assert_eq!(splitter.split(30.0, 0.0), Some(Sign::Taurus));
        assert_eq!(splitter.split(359.9, 45.0), Some(Sign::Pisces));
        assert_eq!(splitter.split(185.0, -80.0), Some(Sign::Libra));
    }

    #[test]
    fn test_crossing_arc_of_rectangle() {
        let arc = crossing_arc(&rectangle(20.0, 50.0, -10.0, 10.0), 0.0).unwrap();
        assert_eq!(arc, AngleSegment::new(20.0, 50.0));
        assert!(crossing_arc(&rectangle(20.0, 50.0, 5.0, 10.0), 0.0).is_none());
    }

    #[test]
    fn test_crossing_arc_interpolates_slanted_edges() {
        // a diamond centered on (100, 0) with half-width 10
        let diamond = vec![(90.0, 0.0), (100.0, -10.0), (110.0, 0.0), (100.0, 10.0)];
        let arc = crossing_arc(&diamond, 5.0).unwrap();
        assert!(arc.a1.distance(&Angle::new(95.0)) < 1e-9);
        assert!(arc.a2.distance(&Angle::new(105.0)) < 1e-9);
    }

    #[test]
    fn test_crossing_arc_across_seam() {
        let arc = crossing_arc(&rectangle(350.0, 15.0, -5.0, 5.0), 0.0).unwrap();
        assert!((arc.length() - 25.0).abs() < 1e-9);
        assert!(arc.contains(&Angle::new(0.0)));
    }

    #[test]
    fn test_crossing_arc_keeps_widest_span() {
        // U shape: two prongs rising above the line at 0
        let u_shape = vec![
            (0.0, -10.0),
            (30.0, -10.0),
            (30.0, 10.0),
            (20.0, 10.0),
            (20.0, -5.0),
            (10.0, -5.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ];
        let arc = crossing_arc(&u_shape, 0.0).unwrap();
        assert_eq!(arc, AngleSegment::new(0.0, 30.0));
    }

    #[test]
    fn test_iau_ring_without_obliquity() {
        let catalog = StarCatalog::new()
            .with_boundary(Sign::Aries, rectangle(28.0, 53.0, -10.0, 10.0))
            .with_boundary(Sign::Taurus, rectangle(53.0, 90.0, -10.0, 10.0))
            .with_boundary(Sign::Orion, rectangle(70.0, 95.0, -20.0, -5.0));
        let splitter = SignSplitter::build(&catalog, 0.0, Zodiac::Iau);
        assert_eq!(splitter.split(40.0, 0.0), Some(Sign::Aries));
        assert_eq!(splitter.split(52.5, 0.0), Some(Sign::Aries));
        assert_eq!(splitter.split(53.5, 0.0), Some(Sign::Taurus));
        assert_eq!(splitter.split(80.0, -12.0), Some(Sign::Taurus));
        assert_eq!(splitter.split(120.0, 0.0), None);
    }

    #[test]
    fn test_planetarium_bands() {
        let catalog = StarCatalog::new()
            .with_boundary(Sign::Taurus, rectangle(53.0, 90.0, -10.0, 10.0))
            .with_boundary(Sign::Orion, rectangle(70.0, 95.0, -20.0, -5.0));
        let splitter = SignSplitter::build(&catalog, 0.0, Zodiac::Planetarium);
        assert_eq!(splitter.bands().len(), 89);
        assert_eq!(splitter.split(80.0, -12.0), Some(Sign::Orion));
        assert_eq!(splitter.split(80.0, 3.0), Some(Sign::Taurus));
        assert_eq!(splitter.split(80.0, 40.0), None);

        let limits = splitter.get_ra_limits(&Sign::Orion, -12.0).unwrap();
        assert!(limits.a1.distance(&Angle::new(70.0)) < 1e-9);
        assert!(limits.a2.distance(&Angle::new(95.0)) < 1e-9);
    }
}
