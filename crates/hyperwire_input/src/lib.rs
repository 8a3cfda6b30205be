//! Input handling for Hyperwire
//!
//! This crate maps winit events onto the two input surfaces of the
//! application: polytope selection (family, dimension, animation speed)
//! and orbit-camera view control.

mod selection;
mod view_controller;

pub use selection::{SelectionCommand, SelectionInput};
pub use view_controller::{ViewControl, ViewController};
