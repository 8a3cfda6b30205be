//! Catalog error types
//!
//! Lookup misses are recoverable (the session keeps its previous object);
//! everything else in this taxonomy is a data-authoring or build failure
//! surfaced before the render loop starts.

use std::fmt;

use hyperwire_math::RotationError;

use crate::object::Family;

/// Error type for catalog construction and lookup
#[derive(Debug)]
pub enum CatalogError {
    /// No object registered under (family, dimensions)
    NotFound { family: Family, dimensions: usize },
    /// A rotation schedule references an axis outside the object's
    /// dimension range
    InvalidRotationPlane {
        object: String,
        source: RotationError,
    },
    /// Vertex data is not a whole number of N-dimensional point pairs
    InvalidGeometry {
        object: String,
        floats: usize,
        dimensions: usize,
    },
    /// Dimension outside the supported range
    UnsupportedDimension { dimensions: usize, max: usize },
    /// The embedded catalog table failed to parse
    Table(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { family, dimensions } => {
                write!(f, "no object found for {}D {}", dimensions, family)
            }
            CatalogError::InvalidRotationPlane { object, source } => {
                write!(f, "{}: {}", object, source)
            }
            CatalogError::InvalidGeometry {
                object,
                floats,
                dimensions,
            } => write!(
                f,
                "{}: {} floats is not a whole number of {}D point pairs",
                object, floats, dimensions
            ),
            CatalogError::UnsupportedDimension { dimensions, max } => {
                write!(f, "dimension {} outside supported range 2..={}", dimensions, max)
            }
            CatalogError::Table(msg) => write!(f, "catalog table error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::InvalidRotationPlane { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ron::error::SpannedError> for CatalogError {
    fn from(err: ron::error::SpannedError) -> Self {
        CatalogError::Table(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_pair() {
        let err = CatalogError::NotFound {
            family: Family::Simplex,
            dimensions: 9,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("9D"));
        assert!(msg.contains("Simplex"));
    }

    #[test]
    fn invalid_plane_carries_source() {
        use std::error::Error;

        let err = CatalogError::InvalidRotationPlane {
            object: "4D Hypercube".to_string(),
            source: RotationError::InvalidPlane {
                axis1: 1,
                axis2: 5,
                dimensions: 4,
            },
        };
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("4D Hypercube"));
    }

    #[test]
    fn geometry_display_includes_counts() {
        let err = CatalogError::InvalidGeometry {
            object: "3D Simplex".to_string(),
            floats: 10,
            dimensions: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("10"));
        assert!(msg.contains("3D"));
    }
}
