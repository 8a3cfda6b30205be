//! Core types for the Hyperwire renderer
//!
//! This crate owns the data model and per-frame orchestration state:
//!
//! - [`PolytopeObject`] - An immutable N-dimensional wireframe object
//! - [`Catalog`] - The registry of built-in objects, keyed by
//!   (family, dimension)
//! - [`RenderSession`] - Current selection, elapsed time, and time scale
//! - [`CatalogError`] - The error taxonomy for lookup and validation
//!
//! GPU resources are not managed here; the render crate builds its buffers
//! from the catalog once at startup.

mod catalog;
mod error;
mod object;
mod session;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use object::{Family, PolytopeObject, COMPONENTS_PER_GROUP, MAX_DIMENSIONS, MIN_DIMENSIONS};
pub use session::{RenderSession, Selection, MAX_TIME_SCALE};

// Re-export the math types that appear in this crate's public API.
pub use hyperwire_math::{compose_rotation, MatN, RotationPlane};
