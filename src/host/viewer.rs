//! Viewer facade aggregating the host state this crate drives.

use cgmath::Vector3;

use super::controls::{ControlScheme, OrbitControls};
use super::input::{PointerState, RenderSurface};
use super::view::View;
use crate::math::{screen_to_ray, Ray};

/// The host viewer as seen by the annotation and panorama layers.
///
/// The embedding engine owns the real renderer; it mirrors pointer and
/// surface state into this struct and calls [`Viewer::update`] once per
/// rendered frame, before the decoration layers run their own updates.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub view: View,
    pub surface: RenderSurface,
    pub pointer: PointerState,
    pub orbit_controls: OrbitControls,
    active_controls: ControlScheme,
}

impl Viewer {
    pub fn new(surface: RenderSurface) -> Self {
        Self {
            view: View::new(Vector3::new(0.0, -10.0, 5.0), Vector3::new(0.0, 0.0, 0.0)),
            surface,
            pointer: PointerState::default(),
            orbit_controls: OrbitControls::default(),
            active_controls: ControlScheme::Earth,
        }
    }

    pub fn active_controls(&self) -> ControlScheme {
        self.active_controls
    }

    pub fn set_controls(&mut self, scheme: ControlScheme) {
        if self.active_controls != scheme {
            log::debug!("switching controls to {scheme:?}");
            self.active_controls = scheme;
        }
    }

    /// World-space ray through the current pointer position.
    pub fn pointer_ray(&self) -> Ray {
        screen_to_ray(
            (self.pointer.x, self.pointer.y),
            self.surface.size_px(),
            self.view.position,
            self.view.get_pivot(),
            self.view.up,
            self.view.fovy,
            self.view.znear,
            self.view.zfar,
        )
    }

    /// Per-frame tick: advances the camera transition, if any.
    pub fn update(&mut self, dt_ms: f64) {
        self.view.update(dt_ms);
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(RenderSurface::default())
    }
}
