//! The built-in polytope catalog
//!
//! One RON table of (family, dimension, schedule, scale) rows drives a
//! single generic constructor; vertex data comes from the combinatorial
//! generators in `hyperwire_math::wireframe`. The catalog is built once at
//! startup, validated fail-fast, and owns its objects for the process
//! lifetime. Lookup is a plain map access, never a synthesis.

use std::collections::BTreeMap;

use serde::Deserialize;

use hyperwire_math::{wireframe, RotationPlane};

use crate::error::CatalogError;
use crate::object::{Family, PolytopeObject};

/// The embedded object table.
const CATALOG_TABLE: &str = include_str!("../assets/catalog.ron");

/// One row of the RON table.
#[derive(Debug, Deserialize)]
struct ObjectSpec {
    family: Family,
    dimensions: usize,
    scale: f32,
    schedule: Vec<RotationPlane>,
    #[serde(default = "default_render_edges")]
    render_edges: bool,
}

fn default_render_edges() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct CatalogTable {
    objects: Vec<ObjectSpec>,
}

/// Registry of all built-in N-dimensional objects, keyed by
/// (family, dimension).
#[derive(Debug)]
pub struct Catalog {
    objects: BTreeMap<(Family, usize), PolytopeObject>,
}

impl Catalog {
    /// Build the full built-in catalog from the embedded table.
    ///
    /// Every schedule and every generated line-list is validated here;
    /// a bad table row fails the whole build before any rendering starts.
    pub fn built_in() -> Result<Self, CatalogError> {
        Self::from_table(CATALOG_TABLE)
    }

    fn from_table(table: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = ron::from_str(table)?;

        let mut objects = BTreeMap::new();
        for spec in table.objects {
            let vertices = generate_vertices(spec.family, spec.dimensions)?;
            let object = PolytopeObject::new(
                spec.family,
                spec.dimensions,
                vertices,
                spec.schedule,
                spec.scale,
                spec.render_edges,
            )?;
            log::debug!(
                "catalog: {} ({} edges, {} attribute groups)",
                object.name(),
                object.edge_count(),
                object.num_attribute_groups()
            );
            objects.insert((spec.family, spec.dimensions), object);
        }

        Ok(Self { objects })
    }

    /// Look up the object registered under (family, dimensions).
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if the pair was never registered. No
    /// partial matches, no dimension synthesis.
    pub fn get(&self, family: Family, dimensions: usize) -> Result<&PolytopeObject, CatalogError> {
        self.objects
            .get(&(family, dimensions))
            .ok_or(CatalogError::NotFound { family, dimensions })
    }

    /// Whether (family, dimensions) is registered.
    pub fn contains(&self, family: Family, dimensions: usize) -> bool {
        self.objects.contains_key(&(family, dimensions))
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all registered objects in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PolytopeObject> {
        self.objects.values()
    }

    /// The largest dimension registered in the catalog.
    pub fn max_dimensions(&self) -> usize {
        self.objects
            .keys()
            .map(|(_, dims)| *dims)
            .max()
            .unwrap_or(0)
    }
}

fn generate_vertices(family: Family, dimensions: usize) -> Result<Vec<f32>, CatalogError> {
    if dimensions < 2 {
        return Err(CatalogError::UnsupportedDimension {
            dimensions,
            max: crate::object::MAX_DIMENSIONS,
        });
    }
    Ok(match family {
        Family::Hypercube => wireframe::hypercube(dimensions),
        Family::Simplex => wireframe::simplex(dimensions),
        Family::CrossPolytope => wireframe::cross_polytope(dimensions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_has_all_twenty_one_objects() {
        let catalog = Catalog::built_in().unwrap();
        assert_eq!(catalog.len(), 21);
        for family in Family::ALL {
            for dims in 2..=8 {
                assert!(catalog.contains(family, dims), "{} {}D missing", family, dims);
            }
        }
        assert_eq!(catalog.max_dimensions(), 8);
    }

    #[test]
    fn lookup_returns_the_same_instance_every_call() {
        let catalog = Catalog::built_in().unwrap();
        let a = catalog.get(Family::Hypercube, 4).unwrap();
        let b = catalog.get(Family::Hypercube, 4).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn unregistered_pair_is_not_found() {
        let catalog = Catalog::built_in().unwrap();
        let err = catalog.get(Family::Simplex, 9).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                family: Family::Simplex,
                dimensions: 9
            }
        ));
    }

    #[test]
    fn vertex_data_matches_edge_counts() {
        let catalog = Catalog::built_in().unwrap();
        let tesseract = catalog.get(Family::Hypercube, 4).unwrap();
        assert_eq!(tesseract.edge_count(), 32);
        assert_eq!(tesseract.vertex_count(), 64);

        let octahedron = catalog.get(Family::CrossPolytope, 3).unwrap();
        assert_eq!(octahedron.edge_count(), 12);

        let pentachoron = catalog.get(Family::Simplex, 4).unwrap();
        assert_eq!(pentachoron.edge_count(), 10);
    }

    #[test]
    fn every_object_passes_the_line_list_invariant() {
        let catalog = Catalog::built_in().unwrap();
        for obj in catalog.iter() {
            assert_eq!(obj.vertices().len() % (2 * obj.dimensions()), 0);
            assert!(!obj.schedule().is_empty());
            assert!(obj.scale() > 0.0);
        }
    }

    #[test]
    fn schedules_use_pairwise_disjoint_axes() {
        // The overwrite semantics of the composer rely on curated
        // schedules keeping their planes disjoint.
        let catalog = Catalog::built_in().unwrap();
        for obj in catalog.iter() {
            let mut seen = std::collections::HashSet::new();
            for plane in obj.schedule() {
                assert!(seen.insert(plane.axis1), "{} reuses axis", obj.name());
                assert!(seen.insert(plane.axis2), "{} reuses axis", obj.name());
            }
        }
    }

    #[test]
    fn bad_table_row_fails_the_whole_build() {
        let table = r#"(
            objects: [
                (family: Hypercube, dimensions: 3, scale: 1.0,
                    schedule: [(axis1: 0, axis2: 7, speed: 0.4)]),
            ],
        )"#;
        let err = Catalog::from_table(table).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRotationPlane { .. }));
    }

    #[test]
    fn malformed_table_is_a_table_error() {
        let err = Catalog::from_table("(objects: [").unwrap_err();
        assert!(matches!(err, CatalogError::Table(_)));
    }
}
