//! Orbiting look-at camera
//!
//! The projected wireframes sit at the origin; the camera orbits them on
//! a fixed-radius ring with an adjustable height and zoom. View and
//! projection matrices come from the fixed 4×4 helpers in
//! `hyperwire_math::mat4`.

use hyperwire_input::ViewControl;
use hyperwire_math::mat4::{self, Mat4};

/// 3D camera orbiting the origin.
pub struct OrbitCamera {
    /// Distance from the origin in the XZ plane
    pub radius: f32,
    /// Eye height above the XZ plane
    pub height: f32,
    /// Vertical field of view in degrees, clamped to [1, 90]
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    yaw: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera at the reference viewing position: radius 5, height 1,
    /// looking at the origin.
    pub fn new() -> Self {
        Self {
            radius: 5.0,
            height: 1.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            yaw: 0.0,
        }
    }

    /// Set the orbit radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the eye height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees.clamp(1.0, 90.0);
        self
    }

    /// Current eye position.
    pub fn eye(&self) -> [f32; 3] {
        [
            self.radius * self.yaw.sin(),
            self.height,
            -self.radius * self.yaw.cos(),
        ]
    }

    /// View matrix looking at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    /// Projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

impl ViewControl for OrbitCamera {
    fn orbit(&mut self, delta_yaw: f32, delta_height: f32) {
        self.yaw += delta_yaw;
        self.height = (self.height + delta_height).clamp(-10.0, 10.0);
    }

    fn zoom(&mut self, delta: f32) {
        self.fov_degrees = (self.fov_degrees - delta).clamp(1.0, 90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_matches_reference_position() {
        let camera = OrbitCamera::new();
        let eye = camera.eye();
        assert_eq!(eye[1], 1.0);
        assert!((eye[2] - (-5.0)).abs() < 1e-6);
        assert!(eye[0].abs() < 1e-6);
    }

    #[test]
    fn orbit_moves_the_eye_around_the_ring() {
        let mut camera = OrbitCamera::new();
        camera.orbit(std::f32::consts::FRAC_PI_2, 0.0);
        let eye = camera.eye();
        assert!((eye[0] - 5.0).abs() < 1e-5);
        assert!(eye[2].abs() < 1e-5);
        // Distance from origin in XZ is preserved.
        let r = (eye[0] * eye[0] + eye[2] * eye[2]).sqrt();
        assert!((r - 5.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_clamps_fov() {
        let mut camera = OrbitCamera::new();
        camera.zoom(100.0);
        assert_eq!(camera.fov_degrees, 1.0);
        camera.zoom(-200.0);
        assert_eq!(camera.fov_degrees, 90.0);
    }
}
