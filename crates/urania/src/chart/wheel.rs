//! Wheel chart layout.
//!
//! Every angle placed on the wheel is relative to the ascendant, so the
//! ascendant sits at angle 0 and [`to_xy`] puts it on the left of the canvas.

use crate::chart::arcs::{bridge_points, bridge_spans, collision_matrix, layer_arcs};
use crate::chart::collision::{
    find_collision, merge_conjunctions, nudge, sign_collisions, zodiac_radius, Collision,
    CollisionState,
};
use crate::chart::layout::*;
use crate::chart::shapes::{LabelText, Shape, ShapeSet, WheelCoord};
use crate::chart::spec::{to_xy, ChartSpec, Point};
use crate::chart::style::ChartStyle;
use crate::ephemeris::types::{Body, Sign};
use crate::horoscope::{Aspect, Dignity, Horoscope, PlanetHoroscope};
use crate::math::{Angle, AngleSegment};
use crate::splitter::Splitter;
use std::collections::HashMap;

/// Labels of the angular cusps: ascendant, imum coeli, descendant, midheaven
const ANGLE_LABELS: [&str; 4] = ["A", "I", "D", "M"];

fn polar(rho: f64, ra: f64) -> WheelCoord {
    WheelCoord::polar(rho, ra)
}

fn relative(abs: f64, ascendant: f64) -> f64 {
    Angle::new(abs - ascendant).value()
}

/// Laid-out wheel for one horoscope
#[derive(Debug, Clone)]
pub struct WheelChart {
    style: ChartStyle,
    shapes: ShapeSet,
    layers: usize,
}

impl WheelChart {
    pub fn new(horoscope: &Horoscope, style: ChartStyle) -> Self {
        let mut chart = Self {
            style,
            shapes: ShapeSet::new(),
            layers: 0,
        };
        let ascendant = horoscope.ascendant.abs_angle;

        let signs: Vec<(AngleSegment, Sign)> = horoscope
            .main_signs
            .iter()
            .chain(&horoscope.extra_signs)
            .copied()
            .collect();
        let arcs: Vec<AngleSegment> = signs.iter().map(|(segment, _)| *segment).collect();
        let states = sign_collisions(&arcs, horoscope.main_signs.len());

        chart.draw_structure(&signs, &states, ascendant);
        chart.draw_houses(horoscope, ascendant);
        chart.draw_planets(horoscope, &signs, &states, ascendant);

        let merged = merged_positions(horoscope, ascendant);
        chart.draw_conjunctions(horoscope, &merged, ascendant);
        match style {
            ChartStyle::ClassicWheel => chart.draw_lines(horoscope, &merged),
            ChartStyle::ModernWheel => chart.draw_arcs(horoscope, &merged),
            ChartStyle::Star => log::warn!("{} is not a wheel style, aspects left out", style),
        }

        log::debug!(
            "Laid out {} wheel: {} shapes, {} aspect layers",
            style,
            chart.shapes.len(),
            chart.layers
        );
        chart
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    /// Number of aspect arc rings; always 0 for the classic style
    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn to_xy(coord: &WheelCoord) -> Point {
        to_xy(coord)
    }

    pub fn to_spec(&self) -> ChartSpec {
        ChartSpec::new(&self.shapes)
    }

    fn add_label(&mut self, c1: WheelCoord, c2: WheelCoord, label: impl Into<LabelText>, small: bool) {
        let ra = Angle::new(c1.ra).average(&Angle::new(c2.ra)).value();
        let center = polar((c1.rho + c2.rho) / 2.0, ra);
        self.shapes.add(Shape::label(center, label, small));
    }

    fn add_tip(&mut self, at: WheelCoord, direction: f64) {
        let end = polar(at.rho + direction * TIP_RADIUS, at.ra);
        self.shapes.add(Shape::line(at, end));
    }

    fn draw_structure(&mut self, signs: &[(AngleSegment, Sign)], states: &[CollisionState], ascendant: f64) {
        let origin = WheelCoord::origin();
        for radius in [ZODIAC_OUT_RADIUS, ZODIAC_IN_RADIUS, HOUSE_OUT_RADIUS, HOUSE_IN_RADIUS] {
            self.shapes.add(Shape::circle(origin, polar(radius, 0.0)));
        }

        for ((segment, sign), state) in signs.iter().zip(states) {
            let phi = relative(segment.a1.value(), ascendant);
            let phi2 = relative(segment.a2.value(), ascendant);
            let (in_begin, out_begin) = zodiac_radius(state.begin);
            let (in_middle, out_middle) = zodiac_radius(state.middle);
            let (in_end, out_end) = zodiac_radius(state.end);

            if state.middle == Collision::Outer {
                self.shapes.add(Shape::arc(polar(in_begin, phi), polar(in_end, phi2), origin));
            }
            self.add_label(
                polar(in_middle, phi),
                polar(out_middle, phi2),
                *sign,
                state.middle != Collision::None,
            );
            self.shapes.add(Shape::line(polar(in_begin, phi), polar(out_begin, phi)));
            self.shapes.add(Shape::line(polar(in_end, phi2), polar(out_end, phi2)));
        }
    }

    fn draw_houses(&mut self, horoscope: &Horoscope, ascendant: f64) {
        for (segment, house) in &horoscope.houses {
            let number = house.number();
            let phi = relative(segment.a1.value(), ascendant);
            let phi2 = relative(segment.a2.value(), ascendant);
            let c1 = polar(HOUSE_IN_RADIUS, phi);
            let c2 = polar(HOUSE_OUT_RADIUS, phi2);
            let c3 = polar(HOUSE_OUT_RADIUS, phi);
            let c4 = polar(ZODIAC_IN_RADIUS, phi);

            let index = usize::from(number.saturating_sub(1));
            if index % 3 == 0 {
                let label_width = (HOUSE_OUT_RADIUS - HOUSE_IN_RADIUS) / 3.0;
                self.add_label(c1, c3, ANGLE_LABELS[index / 3 % 4], true);
                let c5 = polar(HOUSE_IN_RADIUS + label_width, phi);
                let c6 = polar(HOUSE_OUT_RADIUS - label_width, phi);
                self.shapes.add(Shape::wide_line(c1, c5, CUSP_WIDTH));
                self.shapes.add(Shape::wide_line(c4, c6, CUSP_WIDTH));
            } else {
                self.shapes.add(Shape::line(c1, c4));
            }
            self.add_label(c1, c2, number.to_string(), false);
        }
    }

    fn draw_planets(
        &mut self,
        horoscope: &Horoscope,
        signs: &[(AngleSegment, Sign)],
        states: &[CollisionState],
        ascendant: f64,
    ) {
        let cusps: Vec<Angle> = horoscope.houses.iter().map(|(segment, _)| segment.a1).collect();
        let mut placed: Vec<Angle> = Vec::new();

        for (&body, planet) in &horoscope.planets {
            let position = &planet.position;
            let phi = relative(position.abs_angle, ascendant);

            let avoid: Vec<Angle> = cusps.iter().chain(&placed).copied().collect();
            let nudged = nudge(position.angle(), &avoid);
            let (planet_radius, tip_radius) = if find_collision(&nudged, &placed).is_some() {
                (PLANET_2_RADIUS, TIP_2_RADIUS)
            } else {
                (PLANET_1_RADIUS, TIP_1_RADIUS)
            };

            let sign_state = sign_index(horoscope, signs, planet).map(|i| states[i].middle);
            let in_radius = zodiac_radius(sign_state.unwrap_or_default()).0;

            let marker = relative(nudged.value(), ascendant);
            self.shapes.add(Shape::label(polar(planet_radius, marker), body, false));
            let annotation = annotation(planet);
            if !annotation.is_empty() {
                self.shapes.add(Shape::label(polar(tip_radius, marker), annotation, true));
            }

            self.add_tip(polar(HOUSE_IN_RADIUS, phi), 1.0);
            self.add_tip(polar(HOUSE_OUT_RADIUS, phi), -1.0);
            self.add_tip(polar(in_radius, phi), 1.0);

            placed.push(nudged);
        }
    }

    fn draw_conjunctions(&mut self, horoscope: &Horoscope, merged: &HashMap<Body, Angle>, ascendant: f64) {
        let origin = WheelCoord::origin();
        for (pair, aspect) in &horoscope.aspects {
            if aspect.aspect != Aspect::Conjunction {
                continue;
            }
            let (Some(first), Some(second)) = (
                horoscope.planet(pair.first()),
                horoscope.planet(pair.second()),
            ) else {
                continue;
            };
            if let Some(center) = merged.get(&pair.first()) {
                self.shapes.add(Shape::filled_circle(
                    polar(HOUSE_IN_RADIUS, center.value()),
                    polar(HOUSE_IN_RADIUS, center.value() + CONJUNCTION_ANGLE),
                ));
            }

            let segment = AngleSegment::new(
                relative(first.position.abs_angle, ascendant),
                relative(second.position.abs_angle, ascendant),
            );
            let rho = HOUSE_IN_RADIUS + CONJUNCTION_ARC_OFFSET;
            self.shapes.add(Shape::arc(
                polar(rho, segment.a1.value()),
                polar(rho, segment.a2.value()),
                origin,
            ));
        }
    }

    fn draw_lines(&mut self, horoscope: &Horoscope, merged: &HashMap<Body, Angle>) {
        for (pair, aspect) in &horoscope.aspects {
            if aspect.aspect == Aspect::Conjunction {
                continue;
            }
            let (Some(a), Some(b)) = (merged.get(&pair.first()), merged.get(&pair.second())) else {
                continue;
            };
            self.shapes.add(Shape::line(
                polar(HOUSE_IN_RADIUS, a.value()),
                polar(HOUSE_IN_RADIUS, b.value()),
            ));
        }
    }

    fn draw_arcs(&mut self, horoscope: &Horoscope, merged: &HashMap<Body, Angle>) {
        let mut arcs: Vec<(AngleSegment, Aspect)> = Vec::new();
        for (pair, aspect) in &horoscope.aspects {
            if aspect.aspect == Aspect::Conjunction {
                continue;
            }
            let (Some(a), Some(b)) = (merged.get(&pair.first()), merged.get(&pair.second())) else {
                continue;
            };
            let segment = AngleSegment::new(*a, *b);
            if !arcs.iter().any(|(existing, _)| *existing == segment) {
                arcs.push((segment, aspect.aspect));
            }
        }

        let segments: Vec<AngleSegment> = arcs.iter().map(|(segment, _)| *segment).collect();
        let matrix = collision_matrix(&segments);
        let layers = layer_arcs(&segments, &matrix);
        let bridges = bridge_points(&segments, &matrix, &layers);
        self.layers = layers.len();

        let origin = WheelCoord::origin();
        let step = HOUSE_IN_RADIUS / (layers.len() + 1) as f64;
        let margin = BRIDGE_RADIUS.min(step / 4.0);
        let mut radius = HOUSE_IN_RADIUS;
        let mut radii = vec![HOUSE_IN_RADIUS];

        for group in &layers {
            radius -= step;
            radii.push(radius);
            let current = radii.len() - 1;

            for &i in group {
                let (segment, aspect) = arcs[i];
                let c1 = polar(radius, segment.a2.value());
                let c2 = polar(radius, segment.a1.value());
                let c3 = polar(radius + BUBBLE_RADIUS, segment.a2.value());
                let c4 = polar(radius + BUBBLE_RADIUS, segment.a1.value());

                self.shapes.add(Shape::arc(c1, c2, origin));
                self.shapes.add(Shape::circle(c1, c3));
                self.shapes.add(Shape::circle(c2, c4));
                self.add_aspect_tip(c1, -1.0, aspect);
                self.add_aspect_tip(c2, 1.0, aspect);

                for spoke in segment {
                    let levels = bridges.get(&spoke).map(Vec::as_slice).unwrap_or_default();
                    for (l1, l2) in bridge_spans(levels, current) {
                        let r1 = if l1 != 0 { radii[l1] - margin } else { radii[l1] };
                        let r2 = if l2 != current { radii[l2] + margin } else { radii[l2] };
                        self.shapes.add(Shape::line(polar(r1, spoke.value()), polar(r2, spoke.value())));
                    }
                }
            }
        }
    }

    /// Marker at one end of an aspect arc, pointing along the arc.
    fn add_aspect_tip(&mut self, at: WheelCoord, direction: f64, aspect: Aspect) {
        let tip = if aspect == Aspect::Trine {
            ASPECT_TIP_RADIUS * 1.3
        } else {
            ASPECT_TIP_RADIUS
        };
        let angle_diff = direction * (tip / at.rho).to_degrees();
        let b = polar(at.rho + tip, at.ra);
        let c = polar(at.rho, at.ra + angle_diff);
        let d = polar(at.rho + tip, at.ra + angle_diff);

        match aspect {
            Aspect::Square => {
                self.shapes.add(Shape::line(b, d));
                self.shapes.add(Shape::line(c, d));
                self.shapes.add(Shape::circle(d, polar(d.rho + ASPECT_DOT_RADIUS, d.ra)));
            }
            Aspect::Trine => {
                self.shapes.add(Shape::line(b, c));
            }
            Aspect::Opposition => {
                self.shapes.add(Shape::arc(b, c, at));
            }
            Aspect::Sextile | Aspect::Conjunction | Aspect::None => {}
        }
    }
}

/// Marker positions relative to the ascendant, conjunct bodies merged.
fn merged_positions(horoscope: &Horoscope, ascendant: f64) -> HashMap<Body, Angle> {
    let positions: Vec<(Body, Angle)> = horoscope
        .planets
        .iter()
        .map(|(&body, planet)| (body, Angle::new(relative(planet.position.abs_angle, ascendant))))
        .collect();
    let pairs: Vec<(Body, Body)> = horoscope
        .aspects
        .iter()
        .filter(|(_, aspect)| aspect.aspect == Aspect::Conjunction)
        .map(|(pair, _)| (pair.first(), pair.second()))
        .collect();
    merge_conjunctions(&positions, &pairs)
}

/// Index into the sign list of the region holding `planet`.
///
/// A body sitting in an off-ecliptic region uses that region's extra entry.
fn sign_index(horoscope: &Horoscope, signs: &[(AngleSegment, Sign)], planet: &PlanetHoroscope) -> Option<usize> {
    let sign = planet.position.sign?;
    let mut matches = signs
        .iter()
        .enumerate()
        .filter(|(_, (_, s))| *s == sign)
        .map(|(i, _)| i);
    if horoscope
        .sign_splitter()
        .split(planet.position.abs_angle, 0.0)
        == Some(sign)
    {
        matches.next()
    } else {
        matches.last()
    }
}

/// Dignity score and retrograde flag, e.g. `"-4R"`.
fn annotation(planet: &PlanetHoroscope) -> String {
    let mut text = String::new();
    if planet.dignity != Dignity::Normal {
        text.push_str(&planet.score.to_string());
    }
    if planet.retrograde {
        text.push('R');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellations::StarCatalog;
    use crate::ephemeris::{EphemerisSettings, LinearEphemeris};

    fn natal() -> Horoscope {
        let ephemeris = LinearEphemeris::mean_motions();
        Horoscope::compute(
            &ephemeris,
            ephemeris.epoch(),
            &EphemerisSettings::default(),
            &StarCatalog::new(),
        )
        .unwrap()
    }

    /// Ascendant and first cusp at 0°, so wheel angles equal longitudes.
    /// Bodies not listed sit in a conjunct cluster near 320° that aspects
    /// none of the listed positions used below.
    fn placed(bodies: &[(Body, f64)]) -> Horoscope {
        let mut ephemeris = LinearEphemeris::mean_motions().with_ascendant(0.0, 0.0);
        for (i, body) in Body::ALL.iter().enumerate() {
            ephemeris = ephemeris.with_body(*body, 320.0 + 0.5 * i as f64, 0.0, 0.0);
        }
        for &(body, longitude) in bodies {
            ephemeris = ephemeris.with_body(body, longitude, 0.0, 0.0);
        }
        Horoscope::compute(
            &ephemeris,
            ephemeris.epoch(),
            &EphemerisSettings::default(),
            &StarCatalog::new(),
        )
        .unwrap()
    }

    fn labels(chart: &WheelChart) -> Vec<&LabelText> {
        chart
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Label { label, .. } => Some(label),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_wheel_has_rings_signs_houses_and_bodies() {
        let chart = WheelChart::new(&natal(), ChartStyle::ClassicWheel);
        let origin = WheelCoord::origin();
        for radius in [ZODIAC_OUT_RADIUS, ZODIAC_IN_RADIUS, HOUSE_OUT_RADIUS, HOUSE_IN_RADIUS] {
            assert!(chart
                .shapes()
                .contains(&Shape::circle(origin, polar(radius, 0.0))));
        }

        let labels = labels(&chart);
        for sign in Sign::ZODIAC {
            assert!(labels.contains(&&LabelText::Sign(sign)));
        }
        for body in Body::ALL {
            assert!(labels.contains(&&LabelText::Body(body)));
        }
        for name in ["A", "I", "D", "M", "1", "12"] {
            assert!(labels.contains(&&LabelText::from(name)));
        }
    }

    #[test]
    fn test_classic_draws_chords_for_aspects() {
        let horoscope = natal();
        let chart = WheelChart::new(&horoscope, ChartStyle::ClassicWheel);
        assert_eq!(chart.layers(), 0);

        // sun and saturn are in trine at the J2000 epoch
        assert_eq!(
            horoscope.aspect(Body::Sun, Body::Saturn).map(|a| a.aspect),
            Some(Aspect::Trine)
        );
        let chords = chart
            .shapes()
            .iter()
            .filter(|shape| {
                matches!(shape, Shape::Line { a, b, .. } if a.rho == HOUSE_IN_RADIUS && b.rho == HOUSE_IN_RADIUS)
            })
            .count();
        assert!(chords >= 1);
        assert!(!chart.shapes().iter().any(|shape| matches!(shape, Shape::Arc { a, .. } if a.rho < HOUSE_IN_RADIUS)));
    }

    #[test]
    fn test_modern_layers_arcs_inside_house_ring() {
        let chart = WheelChart::new(&natal(), ChartStyle::ModernWheel);
        assert!(chart.layers() >= 1);
        let inner_arcs = chart
            .shapes()
            .iter()
            .filter(|shape| matches!(shape, Shape::Arc { a, b, .. } if a.rho < HOUSE_IN_RADIUS && b.rho < HOUSE_IN_RADIUS))
            .count();
        assert!(inner_arcs >= 1);
    }

    #[test]
    fn test_conjunction_is_marked_on_house_ring() {
        let horoscope = natal();
        // venus and pallas start 1.57 degrees apart
        assert_eq!(
            horoscope.aspect(Body::Venus, Body::Pallas).map(|a| a.aspect),
            Some(Aspect::Conjunction)
        );
        let chart = WheelChart::new(&horoscope, ChartStyle::ModernWheel);
        assert!(chart.shapes().iter().any(|shape| matches!(
            shape,
            Shape::Circle { center, fill: true, .. } if center.rho == HOUSE_IN_RADIUS
        )));
    }

    #[test]
    fn test_crowded_marker_drops_to_second_ring() {
        let horoscope = placed(&[
            (Body::Sun, 100.0),
            (Body::Moon, 100.0),
            (Body::Mercury, 103.0),
        ]);
        let chart = WheelChart::new(&horoscope, ChartStyle::ModernWheel);
        let shapes = chart.shapes();

        // the moon is nudged clear of the sun, mercury lands on the moon
        assert!(shapes.contains(&Shape::label(polar(PLANET_1_RADIUS, 100.0), Body::Sun, false)));
        assert!(shapes.contains(&Shape::label(polar(PLANET_1_RADIUS, 105.0), Body::Moon, false)));
        assert!(shapes.contains(&Shape::label(polar(PLANET_2_RADIUS, 105.0), Body::Mercury, false)));
        assert!(!shapes.contains(&Shape::label(polar(PLANET_1_RADIUS, 105.0), Body::Mercury, false)));

        // tips stay on the true longitude
        assert!(shapes.contains(&Shape::line(
            polar(HOUSE_IN_RADIUS, 103.0),
            polar(HOUSE_IN_RADIUS + TIP_RADIUS, 103.0),
        )));
    }

    #[test]
    fn test_spoke_through_lower_arc_is_bridged() {
        // sextile 40-100 takes the first ring, trine 60-180 the second and
        // its spoke at 60 crosses the sextile
        let horoscope = placed(&[
            (Body::Sun, 40.0),
            (Body::Moon, 100.0),
            (Body::Mercury, 60.0),
            (Body::Venus, 180.0),
        ]);
        assert_eq!(horoscope.aspect(Body::Sun, Body::Moon).map(|a| a.aspect), Some(Aspect::Sextile));
        assert_eq!(horoscope.aspect(Body::Mercury, Body::Venus).map(|a| a.aspect), Some(Aspect::Trine));

        let chart = WheelChart::new(&horoscope, ChartStyle::ModernWheel);
        assert_eq!(chart.layers(), 2);

        let step = HOUSE_IN_RADIUS / 3.0;
        let first = HOUSE_IN_RADIUS - step;
        let second = first - step;
        let margin = BRIDGE_RADIUS.min(step / 4.0);
        let shapes = chart.shapes();

        assert!(shapes.contains(&Shape::line(polar(HOUSE_IN_RADIUS, 60.0), polar(first + margin, 60.0))));
        assert!(shapes.contains(&Shape::line(polar(first - margin, 60.0), polar(second, 60.0))));
        assert!(!shapes.contains(&Shape::line(polar(HOUSE_IN_RADIUS, 60.0), polar(second, 60.0))));

        // the far end crosses nothing
        assert!(shapes.contains(&Shape::line(polar(HOUSE_IN_RADIUS, 180.0), polar(second, 180.0))));
        // first-ring spokes run straight to their ring
        assert!(shapes.contains(&Shape::line(polar(HOUSE_IN_RADIUS, 40.0), polar(first, 40.0))));
    }

    #[test]
    fn test_spec_matches_shapes() {
        let chart = WheelChart::new(&natal(), ChartStyle::ModernWheel);
        let spec = chart.to_spec();
        assert_eq!(spec.shapes.len(), chart.shapes().len());
        assert_eq!(spec.width, chart_width());
    }
}
