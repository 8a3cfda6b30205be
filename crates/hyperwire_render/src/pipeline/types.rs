//! GPU-compatible uniform types for the wireframe pipeline
//!
//! These types match the shader layouts exactly and derive Pod/Zeroable
//! for safe buffer writes.

use bytemuck::{Pod, Zeroable};

use hyperwire_core::MAX_DIMENSIONS;
use hyperwire_math::{mat4::Mat4, MatN};

/// Floats reserved for the rotation matrix uniform: MAX_DIMENSIONS².
///
/// The slot is sized once for the largest registered dimension; smaller
/// matrices occupy a prefix and the shader never reads past N².
pub const ROTATION_SLOT_FLOATS: usize = MAX_DIMENSIONS * MAX_DIMENSIONS;

/// Per-frame uniforms for one wireframe draw.
///
/// Layout: 416 bytes, matching `WireUniforms` in `wire.wgsl`
/// (two mat4x4, an array<vec4, 16> rotation slot, a color, and four
/// scalars).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct WireUniforms {
    /// Camera view matrix (column-major)
    pub view_matrix: Mat4,
    /// Camera projection matrix (column-major)
    pub projection_matrix: Mat4,
    /// N×N rotation matrix, row-major, packed flat into the slot prefix
    pub rotation: [f32; ROTATION_SLOT_FLOATS],
    /// Draw color (RGBA)
    pub color: [f32; 4],
    /// Ambient dimension N of the bound object
    pub dimensions: u32,
    /// Uniform display scale applied before projection
    pub scale: f32,
    /// Eye distance for the successive N→3 perspective collapse
    pub projection_depth: f32,
    pub _padding: f32,
}

impl Default for WireUniforms {
    fn default() -> Self {
        let mut rotation = [0.0; ROTATION_SLOT_FLOATS];
        for i in 0..MAX_DIMENSIONS {
            rotation[i * MAX_DIMENSIONS + i] = 1.0;
        }
        Self {
            view_matrix: hyperwire_math::mat4::IDENTITY,
            projection_matrix: hyperwire_math::mat4::IDENTITY,
            rotation,
            color: [1.0; 4],
            dimensions: 4,
            scale: 1.0,
            projection_depth: 2.5,
            _padding: 0.0,
        }
    }
}

impl WireUniforms {
    /// Pack an N×N rotation matrix into the slot prefix, zeroing the rest.
    ///
    /// The shader indexes the slot flat as `rotation[row * N + col]`, so
    /// the matrix's row-major storage is copied through unchanged.
    pub fn set_rotation(&mut self, matrix: &MatN) {
        let cells = matrix.as_slice();
        debug_assert!(cells.len() <= ROTATION_SLOT_FLOATS);
        self.rotation = [0.0; ROTATION_SLOT_FLOATS];
        self.rotation[..cells.len()].copy_from_slice(cells);
        self.dimensions = matrix.dim() as u32;
    }
}
