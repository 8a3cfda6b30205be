//! Orbit-view controller
//!
//! Accumulates mouse input between frames and applies it to whatever
//! implements [`ViewControl`] (the render crate's orbit camera). Motion
//! only counts while the left button is held, matching drag-to-orbit.

use winit::event::{ElementState, MouseButton};

/// The view-control surface the controller drives.
pub trait ViewControl {
    /// Rotate the viewpoint around the target: yaw in radians, height in
    /// world units.
    fn orbit(&mut self, delta_yaw: f32, delta_height: f32);
    /// Zoom by a signed step (positive = closer).
    fn zoom(&mut self, delta: f32);
}

/// Accumulates mouse state and drains it into a [`ViewControl`] once per
/// frame.
pub struct ViewController {
    dragging: bool,
    pending_yaw: f32,
    pending_height: f32,
    pending_zoom: f32,

    pub orbit_sensitivity: f32,
    pub height_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_yaw: 0.0,
            pending_height: 0.0,
            pending_zoom: 0.0,
            orbit_sensitivity: 0.005,
            height_sensitivity: 0.01,
            zoom_step: 2.0,
        }
    }

    /// Set the yaw sensitivity in radians per pixel.
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Set the zoom step per scroll line.
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.dragging {
            self.pending_yaw += dx as f32 * self.orbit_sensitivity;
            self.pending_height += dy as f32 * self.height_sensitivity;
        }
    }

    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_zoom += lines * self.zoom_step;
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drain the accumulated input into the view control.
    pub fn apply(&mut self, control: &mut impl ViewControl) {
        if self.pending_yaw != 0.0 || self.pending_height != 0.0 {
            control.orbit(self.pending_yaw, self.pending_height);
            self.pending_yaw = 0.0;
            self.pending_height = 0.0;
        }
        if self.pending_zoom != 0.0 {
            control.zoom(self.pending_zoom);
            self.pending_zoom = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        yaw: f32,
        height: f32,
        zoom: f32,
    }

    impl ViewControl for Recorder {
        fn orbit(&mut self, delta_yaw: f32, delta_height: f32) {
            self.yaw += delta_yaw;
            self.height += delta_height;
        }
        fn zoom(&mut self, delta: f32) {
            self.zoom += delta;
        }
    }

    fn recorder() -> Recorder {
        Recorder {
            yaw: 0.0,
            height: 0.0,
            zoom: 0.0,
        }
    }

    #[test]
    fn motion_without_drag_is_ignored() {
        let mut controller = ViewController::new();
        let mut rec = recorder();

        controller.process_mouse_motion(100.0, 50.0);
        controller.apply(&mut rec);
        assert_eq!(rec.yaw, 0.0);
        assert_eq!(rec.height, 0.0);
    }

    #[test]
    fn drag_accumulates_and_drains_once() {
        let mut controller = ViewController::new().with_orbit_sensitivity(0.01);
        let mut rec = recorder();

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_motion(10.0, 0.0);
        controller.process_mouse_motion(10.0, 0.0);
        controller.apply(&mut rec);
        assert!((rec.yaw - 0.2).abs() < 1e-6);

        // Second apply with no new motion is a no-op.
        controller.apply(&mut rec);
        assert!((rec.yaw - 0.2).abs() < 1e-6);
    }

    #[test]
    fn release_stops_the_drag() {
        let mut controller = ViewController::new();
        let mut rec = recorder();

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        controller.process_mouse_motion(10.0, 10.0);
        controller.apply(&mut rec);
        assert_eq!(rec.yaw, 0.0);
    }

    #[test]
    fn scroll_zooms_by_step() {
        let mut controller = ViewController::new().with_zoom_step(3.0);
        let mut rec = recorder();

        controller.process_scroll(2.0);
        controller.apply(&mut rec);
        assert!((rec.zoom - 6.0).abs() < 1e-6);
    }
}
