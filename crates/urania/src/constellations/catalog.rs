use crate::ephemeris::types::Sign;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading constellation boundaries
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read star catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed star catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Boundary of {sign:?} has {count} vertices, need at least 3")]
    TooFewVertices { sign: Sign, count: usize },
    #[error("Boundary of {sign:?} has invalid vertex ({ra}, {dec})")]
    InvalidVertex { sign: Sign, ra: f64, dec: f64 },
}

/// Constellation boundary polygons in celestial (equatorial) coordinates.
///
/// Vertices are `(right ascension, declination)` in degrees. Built once and
/// shared by reference with every sign splitter; never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarCatalog {
    boundaries: BTreeMap<Sign, Vec<(f64, f64)>>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a boundary polygon.
    pub fn with_boundary(mut self, sign: Sign, vertices: Vec<(f64, f64)>) -> Self {
        self.boundaries.insert(sign, vertices);
        self
    }

    /// Parses a JSON object mapping sign names to vertex lists, e.g.
    /// `{"ARIES": [[25.0, 10.0], [50.0, 10.0], ...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let boundaries: BTreeMap<Sign, Vec<(f64, f64)>> = serde_json::from_str(json)?;
        let catalog = Self { boundaries };
        catalog.validate()?;
        log::debug!("Loaded {} constellation boundaries", catalog.len());
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (&sign, vertices) in &self.boundaries {
            if vertices.len() < 3 {
                return Err(CatalogError::TooFewVertices {
                    sign,
                    count: vertices.len(),
                });
            }
            if let Some(&(ra, dec)) = vertices
                .iter()
                .find(|(ra, dec)| !ra.is_finite() || !dec.is_finite() || dec.abs() > 90.0)
            {
                return Err(CatalogError::InvalidVertex { sign, ra, dec });
            }
        }
        Ok(())
    }

    pub fn boundary(&self, sign: Sign) -> Option<&[(f64, f64)]> {
        self.boundaries.get(&sign).map(Vec::as_slice)
    }

    /// Boundaries in sign declaration order (zodiac signs first).
    pub fn iter(&self) -> impl Iterator<Item = (Sign, &[(f64, f64)])> {
        self.boundaries
            .iter()
            .map(|(sign, vertices)| (*sign, vertices.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "ARIES": [[25.0, -10.0], [50.0, -10.0], [50.0, 20.0], [25.0, 20.0]],
            "CANIS_MAJOR": [[95.0, -33.0], [110.0, -33.0], [110.0, -11.0]]
        }"#;
        let catalog = StarCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.boundary(Sign::Aries).unwrap().len(), 4);
        let order: Vec<Sign> = catalog.iter().map(|(sign, _)| sign).collect();
        assert_eq!(order, vec![Sign::Aries, Sign::CanisMajor]);
    }

    #[test]
    fn test_unknown_sign_is_parse_error() {
        let err = StarCatalog::from_json(r#"{"NIBIRU": [[0, 0], [1, 0], [1, 1]]}"#);
        assert!(matches!(err, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let err = StarCatalog::from_json(r#"{"LEO": [[0, 0], [1, 0]]}"#);
        assert!(matches!(
            err,
            Err(CatalogError::TooFewVertices {
                sign: Sign::Leo,
                count: 2
            })
        ));

        let err = StarCatalog::from_json(r#"{"LEO": [[0, 0], [1, 0], [1, 95]]}"#);
        assert!(matches!(err, Err(CatalogError::InvalidVertex { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = StarCatalog::load("/nonexistent/stars.json");
        assert!(matches!(err, Err(CatalogError::Io { .. })));
    }
}
