//! Constellation boundaries and the sign splitters built from them.

pub mod catalog;
pub mod rotation;
pub mod sign_splitter;

pub use catalog::{CatalogError, StarCatalog};
pub use rotation::celestial_to_ecliptic;
pub use sign_splitter::{crossing_arc, SignSplitter};
