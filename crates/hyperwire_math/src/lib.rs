//! N-Dimensional Mathematics Library
//!
//! This crate provides the dimension-generic math underpinning Hyperwire:
//! N×N rotation matrices, plane-rotation composition, and combinatorial
//! wireframe generation for the regular polytope families.
//!
//! ## Core Types
//!
//! - [`MatN`] - Heap-backed row-major N×N matrix
//! - [`RotationPlane`] - An axis pair plus angular speed
//! - [`compose_rotation`] - Schedule of plane rotations → N×N transform
//!
//! ## Geometry
//!
//! - [`wireframe`] - Line-list generators for hypercubes, simplices, and
//!   cross-polytopes in any dimension ≥ 2
//!
//! The fixed-size [`mat4`] module holds the 4×4 camera helpers (view and
//! projection matrices) used by the render pipeline.

mod matn;
mod rotation;
pub mod mat4;
pub mod wireframe;

pub use matn::MatN;
pub use rotation::{compose_rotation, RotationError, RotationPlane};
