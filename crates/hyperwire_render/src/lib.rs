//! Wireframe rendering for N-dimensional polytopes
//!
//! This crate provides the wgpu-based pipeline that projects rotated
//! N-dimensional vertex streams down to the screen.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`layout::AttributeLayout`] - Splits N components across 4-wide
//!   vertex-attribute groups
//! - [`store::WireframeStore`] - One GPU vertex buffer per catalog object,
//!   created once at startup
//! - [`pipeline::WirePipeline`] - Line-list and point-list pipelines driven
//!   by the per-frame rotation uniform
//! - [`camera::OrbitCamera`] - Fixed look-at-origin 3D camera
//!
//! Geometry and rotation math live in `hyperwire_math`; the catalog and
//! session state live in `hyperwire_core`. Both are re-exported for
//! convenience.

pub mod camera;
pub mod context;
pub mod layout;
pub mod pipeline;
pub mod store;

// Re-export core types for convenience
pub use hyperwire_core::{Catalog, CatalogError, Family, PolytopeObject, RenderSession, Selection};
pub use hyperwire_math::{compose_rotation, MatN, RotationPlane};

pub use layout::AttributeLayout;
pub use store::{BoundPolytope, InitError, WireframeStore};
