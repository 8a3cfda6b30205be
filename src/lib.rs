//! Hyperwire - N-dimensional polytope wireframe renderer
//!
//! Library surface for the application crate: configuration loading plus
//! re-exports of the commonly used workspace types.

pub mod config;

pub use hyperwire_core::{Catalog, CatalogError, Family, PolytopeObject, RenderSession, Selection};
pub use hyperwire_math::{compose_rotation, MatN, RotationPlane};
