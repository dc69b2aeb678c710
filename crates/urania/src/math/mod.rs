pub mod angle;
pub mod segment;
pub mod union_find;

pub use angle::Angle;
pub use segment::AngleSegment;
pub use union_find::UnionFind;
