//! Per-frame render session state
//!
//! The session owns the catalog, the current selection, and the animation
//! clock. Everything the frame step mutates lives here and is passed
//! explicitly; there are no process-level globals.
//!
//! Selection changes re-resolve against the catalog synchronously. A miss
//! keeps the previous selection bound and is logged, never fatal.

use hyperwire_math::{compose_rotation, MatN};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::object::{Family, PolytopeObject};

/// Upper clamp for the user-adjustable time scale.
pub const MAX_TIME_SCALE: f32 = 2.0;

/// The (family, dimension) pair naming the active object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub family: Family,
    pub dimensions: usize,
}

impl Selection {
    pub fn new(family: Family, dimensions: usize) -> Self {
        Self { family, dimensions }
    }
}

/// Mutable per-frame state: active selection, elapsed time, time scale.
///
/// The rotation matrix is never stored here; it is recomputed from the
/// clock every frame as pure function output.
pub struct RenderSession {
    catalog: Catalog,
    selection: Selection,
    elapsed: f32,
    time_scale: f32,
    paused: bool,
}

impl RenderSession {
    /// Create a session over a catalog with a validated initial selection.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if the initial selection is unregistered.
    pub fn new(catalog: Catalog, initial: Selection) -> Result<Self, CatalogError> {
        catalog.get(initial.family, initial.dimensions)?;
        Ok(Self {
            catalog,
            selection: initial,
            elapsed: 0.0,
            time_scale: 1.0,
            paused: false,
        })
    }

    /// Advance the animation clock by the frame's delta time.
    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.elapsed += dt;
        }
    }

    /// Seconds of animation time since session start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Rewind the animation clock to zero.
    pub fn reset_clock(&mut self) {
        self.elapsed = 0.0;
    }

    /// Current time-scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale, clamped to [0, MAX_TIME_SCALE].
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
    }

    /// Nudge the time scale by a delta, clamped to [0, MAX_TIME_SCALE].
    pub fn adjust_time_scale(&mut self, delta: f32) {
        self.set_time_scale(self.time_scale + delta);
    }

    /// Toggle the pause state, returning the new value.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The active (family, dimension) pair.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The catalog this session draws from.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The object bound for the next frame's draw.
    pub fn current(&self) -> &PolytopeObject {
        self.catalog
            .get(self.selection.family, self.selection.dimensions)
            .expect("session selection is validated at every change")
    }

    /// Switch to a different dimension of the current family.
    ///
    /// On a catalog miss the previous selection stays bound; the miss is
    /// logged and returned.
    pub fn set_dimension(&mut self, dimensions: usize) -> Result<(), CatalogError> {
        self.switch(Selection::new(self.selection.family, dimensions))
    }

    /// Switch to a different family at the current dimension.
    pub fn set_family(&mut self, family: Family) -> Result<(), CatalogError> {
        self.switch(Selection::new(family, self.selection.dimensions))
    }

    /// Cycle to the next (or previous) family at the current dimension.
    pub fn cycle_family(&mut self, forward: bool) -> Result<(), CatalogError> {
        let family = if forward {
            self.selection.family.next()
        } else {
            self.selection.family.prev()
        };
        self.set_family(family)
    }

    fn switch(&mut self, target: Selection) -> Result<(), CatalogError> {
        match self.catalog.get(target.family, target.dimensions) {
            Ok(obj) => {
                log::info!("selected {}", obj.name());
                self.selection = target;
                Ok(())
            }
            Err(err) => {
                log::warn!("selection ignored: {}", err);
                Err(err)
            }
        }
    }

    /// The current rotation matrix for the active object.
    ///
    /// Recomputed fresh from the clock; identical clock state yields a
    /// bit-identical matrix.
    pub fn rotation_matrix(&self) -> MatN {
        let obj = self.current();
        compose_rotation(obj.dimensions(), obj.schedule(), self.elapsed, self.time_scale)
            .expect("schedules are validated at catalog build")
    }
}
