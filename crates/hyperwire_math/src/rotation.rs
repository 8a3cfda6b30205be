//! Plane rotations in N-dimensional space
//!
//! In N dimensions, rotations happen in coordinate planes rather than
//! around axes. A [`RotationPlane`] names a plane by its two axis indices
//! and carries the angular speed of the animation in that plane.
//!
//! [`compose_rotation`] folds a whole schedule of planes into a single
//! N×N matrix for the current timestamp. Each plane writes its four cells
//! directly into the identity matrix; a later plane sharing an axis with
//! an earlier one overwrites those cells instead of composing with them.
//! Catalog schedules keep their axis pairs pairwise disjoint, which makes
//! the overwrite equivalent to a true composition for every built-in
//! object. The overwrite behavior itself is load-bearing and must not be
//! replaced with matrix multiplication.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MatN;

/// A 2D rotation plane inside N-dimensional space.
///
/// `axis1` and `axis2` index coordinate axes (0 = X, 1 = Y, 2 = Z, 3 = W,
/// 4 = V, ...). `speed` is the angular velocity in radians per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationPlane {
    /// First axis of the plane
    pub axis1: usize,
    /// Second axis of the plane
    pub axis2: usize,
    /// Angular speed in radians per second
    pub speed: f32,
}

impl RotationPlane {
    /// Create a rotation plane from its two axes and speed.
    pub fn new(axis1: usize, axis2: usize, speed: f32) -> Self {
        Self { axis1, axis2, speed }
    }

    /// Check that both axes are distinct and inside `[0, dimensions)`.
    pub fn validate(&self, dimensions: usize) -> Result<(), RotationError> {
        if self.axis1 == self.axis2
            || self.axis1 >= dimensions
            || self.axis2 >= dimensions
        {
            return Err(RotationError::InvalidPlane {
                axis1: self.axis1,
                axis2: self.axis2,
                dimensions,
            });
        }
        Ok(())
    }
}

/// Error type for rotation-schedule validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// An axis index is out of range for the ambient dimension, or the
    /// two axes coincide.
    InvalidPlane {
        axis1: usize,
        axis2: usize,
        dimensions: usize,
    },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::InvalidPlane {
                axis1,
                axis2,
                dimensions,
            } => write!(
                f,
                "invalid rotation plane ({}, {}) for dimension {}",
                axis1, axis2, dimensions
            ),
        }
    }
}

impl std::error::Error for RotationError {}

/// Compose a rotation schedule into an N×N matrix at a given timestamp.
///
/// Starts from the identity and, for each plane `(i, j, speed)` in schedule
/// order, computes `angle = time_seconds * time_scale * speed` and writes
///
/// ```text
/// m[i][i] =  cos(angle)    m[i][j] = -sin(angle)
/// m[j][i] =  sin(angle)    m[j][j] =  cos(angle)
/// ```
///
/// Angles are not wrapped; `cos`/`sin` handle periodicity. The result is a
/// pure function of the inputs: identical arguments produce bit-identical
/// matrices.
///
/// # Errors
/// [`RotationError::InvalidPlane`] if any plane's axes fall outside
/// `[0, dimensions)` or coincide.
pub fn compose_rotation(
    dimensions: usize,
    schedule: &[RotationPlane],
    time_seconds: f32,
    time_scale: f32,
) -> Result<MatN, RotationError> {
    let mut m = MatN::identity(dimensions);
    for plane in schedule {
        plane.validate(dimensions)?;
        let angle = time_seconds * time_scale * plane.speed;
        let (i, j) = (plane.axis1, plane.axis2);
        m.set(i, i, angle.cos());
        m.set(i, j, -angle.sin());
        m.set(j, i, angle.sin());
        m.set(j, j, angle.cos());
    }
    Ok(m)
}
