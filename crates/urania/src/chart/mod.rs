//! Chart layout: wheel charts (sign ring, houses, body markers and aspect
//! rings as polar shapes) and star charts, ready to map onto a canvas.

pub mod arcs;
pub mod collision;
pub mod layout;
pub mod shapes;
pub mod spec;
pub mod star;
pub mod style;
pub mod wheel;

pub use collision::{Collision, CollisionState};
pub use shapes::{LabelText, Shape, ShapeSet, WheelCoord};
pub use spec::{to_xy, ChartSpec, Point};
pub use star::StarChart;
pub use style::ChartStyle;
pub use wheel::WheelChart;
