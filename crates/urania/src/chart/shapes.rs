use crate::ephemeris::types::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Default stroke width
pub const DEFAULT_WIDTH: u32 = 8;

/// Chart position: `ra` in degrees, `rho` in pixels from the center.
///
/// Wheel charts use `ra` and `rho`. Star charts use ecliptic `ra` and `dec`
/// and derive the radius from the declination.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WheelCoord {
    pub ra: f64,
    pub dec: f64,
    pub rho: f64,
}

impl WheelCoord {
    pub fn polar(rho: f64, ra: f64) -> Self {
        Self { ra, dec: 0.0, rho }
    }

    /// Ecliptic position for star charts.
    pub fn sky(ra: f64, dec: f64) -> Self {
        Self { ra, dec, rho: 0.0 }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    fn bits(&self) -> [u64; 3] {
        // fold -0.0 into 0.0 so equal coordinates hash alike
        [self.ra + 0.0, self.dec + 0.0, self.rho + 0.0].map(f64::to_bits)
    }
}

impl PartialEq for WheelCoord {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for WheelCoord {}

impl Hash for WheelCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Content of a label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelText {
    Sign(Sign),
    Body(Body),
    Text(String),
}

impl From<&str> for LabelText {
    fn from(text: &str) -> Self {
        LabelText::Text(text.to_string())
    }
}

impl From<String> for LabelText {
    fn from(text: String) -> Self {
        LabelText::Text(text)
    }
}

/// Drawing primitive, generic over its coordinate type so the same shapes
/// can be laid out in polar space and handed to renderers in canvas space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape<C = WheelCoord> {
    Circle {
        center: C,
        edge: C,
        width: u32,
        fill: bool,
    },
    Line {
        a: C,
        b: C,
        width: u32,
    },
    /// Short arc from `a` to `b` around `center`
    Arc {
        a: C,
        b: C,
        center: C,
        width: u32,
    },
    Label {
        center: C,
        label: LabelText,
        small: bool,
    },
}

impl<C> Shape<C> {
    pub fn circle(center: C, edge: C) -> Self {
        Shape::Circle {
            center,
            edge,
            width: DEFAULT_WIDTH,
            fill: false,
        }
    }

    pub fn filled_circle(center: C, edge: C) -> Self {
        Shape::Circle {
            center,
            edge,
            width: DEFAULT_WIDTH,
            fill: true,
        }
    }

    pub fn line(a: C, b: C) -> Self {
        Self::wide_line(a, b, DEFAULT_WIDTH)
    }

    pub fn wide_line(a: C, b: C, width: u32) -> Self {
        Shape::Line { a, b, width }
    }

    pub fn arc(a: C, b: C, center: C) -> Self {
        Shape::Arc {
            a,
            b,
            center,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn label(center: C, label: impl Into<LabelText>, small: bool) -> Self {
        Shape::Label {
            center,
            label: label.into(),
            small,
        }
    }

    /// Same shape with every coordinate converted by `f`.
    pub fn map_coords<D>(self, f: impl Fn(C) -> D) -> Shape<D> {
        match self {
            Shape::Circle {
                center,
                edge,
                width,
                fill,
            } => Shape::Circle {
                center: f(center),
                edge: f(edge),
                width,
                fill,
            },
            Shape::Line { a, b, width } => Shape::Line {
                a: f(a),
                b: f(b),
                width,
            },
            Shape::Arc {
                a,
                b,
                center,
                width,
            } => Shape::Arc {
                a: f(a),
                b: f(b),
                center: f(center),
                width,
            },
            Shape::Label {
                center,
                label,
                small,
            } => Shape::Label {
                center: f(center),
                label,
                small,
            },
        }
    }
}

impl From<Sign> for LabelText {
    fn from(sign: Sign) -> Self {
        LabelText::Sign(sign)
    }
}

impl From<Body> for LabelText {
    fn from(body: Body) -> Self {
        LabelText::Body(body)
    }
}

/// Insertion-ordered set of shapes; adding a duplicate is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
    seen: HashSet<Shape>,
}

impl ShapeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an identical shape was already present.
    pub fn add(&mut self, shape: Shape) -> bool {
        if !self.seen.insert(shape.clone()) {
            return false;
        }
        self.shapes.push(shape);
        true
    }

    pub fn contains(&self, shape: &Shape) -> bool {
        self.seen.contains(shape)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShapeSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_set_dedups_in_order() {
        let mut set = ShapeSet::new();
        let a = Shape::line(WheelCoord::polar(10.0, 0.0), WheelCoord::polar(20.0, 0.0));
        let b = Shape::label(WheelCoord::polar(5.0, 90.0), Sign::Leo, false);
        assert!(set.add(a.clone()));
        assert!(set.add(b.clone()));
        assert!(!set.add(a.clone()));
        assert_eq!(set.len(), 2);
        let order: Vec<&Shape> = set.iter().collect();
        assert_eq!(order, vec![&a, &b]);
    }

    #[test]
    fn test_negative_zero_coords_are_equal() {
        let a = Shape::line(WheelCoord::polar(1.0, 0.0), WheelCoord::origin());
        let b = Shape::line(WheelCoord::polar(1.0, -0.0), WheelCoord::origin());
        let mut set = ShapeSet::new();
        set.add(a);
        assert!(!set.add(b));
    }

    #[test]
    fn test_map_coords_keeps_attributes() {
        let shape = Shape::filled_circle(WheelCoord::polar(1.0, 0.0), WheelCoord::polar(2.0, 0.0));
        let mapped = shape.map_coords(|c| c.rho);
        assert_eq!(
            mapped,
            Shape::Circle {
                center: 1.0,
                edge: 2.0,
                width: DEFAULT_WIDTH,
                fill: true,
            }
        );
    }
}
