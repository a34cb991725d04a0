//! Camera control-scheme state.

/// The navigation scheme currently driving the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    /// Orbit around a pivot point. Required while a panorama is focused.
    Orbit,
    /// Globe-style navigation.
    Earth,
    /// Free-flight navigation.
    FirstPerson,
}

/// Settings of the host's orbit controller that this crate toggles.
#[derive(Debug, Clone, Copy)]
pub struct OrbitControls {
    /// Double-click-to-zoom is disabled while a panorama is focused so the
    /// gesture cannot yank the camera out of the sphere.
    pub double_click_zoom_enabled: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            double_click_zoom_enabled: true,
        }
    }
}
