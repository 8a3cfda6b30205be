//! N-dimensional polytope objects
//!
//! A [`PolytopeObject`] bundles everything the pipeline needs to draw one
//! object: its flat line-list vertex data, the rotation schedule that
//! animates it, and the display scale that keeps different families at a
//! comparable on-screen size.

use serde::{Deserialize, Serialize};

use hyperwire_math::RotationPlane;

use crate::error::CatalogError;

/// Smallest supported ambient dimension.
pub const MIN_DIMENSIONS: usize = 2;

/// Largest ambient dimension the uniform slot is sized for.
///
/// The shader reserves MAX_DIMENSIONS² floats for the rotation matrix, so
/// catalog construction rejects anything larger rather than truncating.
pub const MAX_DIMENSIONS: usize = 8;

/// Components per vertex-attribute slot in the graphics interface.
pub const COMPONENTS_PER_GROUP: usize = 4;

/// The three built-in polytope families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    /// N-hypercube: 2^N corners at ±1
    Hypercube,
    /// Regular N-simplex: N+1 corners, complete edge graph
    Simplex,
    /// N-cross-polytope: 2N corners at ±eᵢ
    CrossPolytope,
}

impl Family {
    /// All families in display order.
    pub const ALL: [Family; 3] = [Family::Hypercube, Family::Simplex, Family::CrossPolytope];

    /// Human-readable family name.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Hypercube => "Hypercube",
            Family::Simplex => "Simplex",
            Family::CrossPolytope => "Cross-Polytope",
        }
    }

    /// The next family in display order, wrapping around.
    pub fn next(&self) -> Family {
        match self {
            Family::Hypercube => Family::Simplex,
            Family::Simplex => Family::CrossPolytope,
            Family::CrossPolytope => Family::Hypercube,
        }
    }

    /// The previous family in display order, wrapping around.
    pub fn prev(&self) -> Family {
        match self {
            Family::Hypercube => Family::CrossPolytope,
            Family::Simplex => Family::Hypercube,
            Family::CrossPolytope => Family::Simplex,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable N-dimensional wireframe object.
///
/// Vertex data is a flat line-list: consecutive pairs of N-component
/// points, one pair per drawn edge. The invariant
/// `vertices.len() % (2 * dimensions) == 0` is checked at construction.
#[derive(Clone, Debug)]
pub struct PolytopeObject {
    family: Family,
    dimensions: usize,
    vertices: Vec<f32>,
    schedule: Vec<RotationPlane>,
    scale: f32,
    render_edges: bool,
    name: String,
}

impl PolytopeObject {
    /// Build an object, validating dimension range, the line-list
    /// invariant, and every rotation plane in the schedule.
    pub fn new(
        family: Family,
        dimensions: usize,
        vertices: Vec<f32>,
        schedule: Vec<RotationPlane>,
        scale: f32,
        render_edges: bool,
    ) -> Result<Self, CatalogError> {
        if !(MIN_DIMENSIONS..=MAX_DIMENSIONS).contains(&dimensions) {
            return Err(CatalogError::UnsupportedDimension {
                dimensions,
                max: MAX_DIMENSIONS,
            });
        }

        let name = format!("{}D {}", dimensions, family.label());

        if vertices.is_empty() || vertices.len() % (2 * dimensions) != 0 {
            return Err(CatalogError::InvalidGeometry {
                object: name,
                floats: vertices.len(),
                dimensions,
            });
        }

        for plane in &schedule {
            plane
                .validate(dimensions)
                .map_err(|source| CatalogError::InvalidRotationPlane {
                    object: name.clone(),
                    source,
                })?;
        }

        Ok(Self {
            family,
            dimensions,
            vertices,
            schedule,
            scale,
            render_edges,
            name,
        })
    }

    /// The polytope family this object belongs to.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Ambient dimension N of the vertex coordinates.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Flat line-list vertex data (pairs of N-component points).
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Rotation schedule, applied left-to-right each frame.
    #[inline]
    pub fn schedule(&self) -> &[RotationPlane] {
        &self.schedule
    }

    /// Uniform display scale applied before projection.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether edges are drawn in addition to vertex points.
    #[inline]
    pub fn render_edges(&self) -> bool {
        self.render_edges
    }

    /// Display name, e.g. "4D Hypercube".
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of N-dimensional points in the line-list.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.dimensions
    }

    /// Number of drawn edges (half the vertex count).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertex_count() / 2
    }

    /// How many 4-component attribute groups the vertex stream needs:
    /// ceil(N / 4).
    #[inline]
    pub fn num_attribute_groups(&self) -> usize {
        self.dimensions.div_ceil(COMPONENTS_PER_GROUP)
    }

    /// Byte stride of one vertex: N floats.
    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.dimensions * std::mem::size_of::<f32>()
    }
}
