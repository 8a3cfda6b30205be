//! Rendering pipeline components
//!
//! This module contains the uniform types and render pipelines for
//! N-dimensional wireframe drawing.

pub mod types;
pub mod wire_pipeline;

pub use types::{WireUniforms, ROTATION_SLOT_FLOATS};
pub use wire_pipeline::WirePipeline;
