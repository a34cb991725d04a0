//! # Scene-graph state
//!
//! The marker meshes and viewing sphere the decoration layers mutate, plus
//! the texture-loading seam. Only logical state lives here; the host engine
//! owns the actual geometry and GPU resources and renders from these fields.

pub mod marker;
pub mod sphere;
pub mod texture;

pub use marker::{MarkerMaterial, MarkerMesh};
pub use sphere::{SphereMaterial, ViewingSphere};
pub use texture::{
    HttpTextureSource, QueuedTextureSource, RequestId, Texture, TextureCompletion, TextureSource,
};

use cgmath::{Deg, Rad};

/// Euler angles applied in intrinsic Z-Y-X order, the rotation convention of
/// the host's panorama spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerZyx {
    pub x: Rad<f64>,
    pub y: Rad<f64>,
    pub z: Rad<f64>,
}

impl Default for EulerZyx {
    fn default() -> Self {
        Self {
            x: Rad(0.0),
            y: Rad(0.0),
            z: Rad(0.0),
        }
    }
}

impl EulerZyx {
    pub fn new(x: Rad<f64>, y: Rad<f64>, z: Rad<f64>) -> Self {
        Self { x, y, z }
    }

    /// Maps a panorama's course/pitch/roll (degrees) to sphere orientation.
    ///
    /// The offsets and sign flips line the photo sphere's seam up with the
    /// capture heading: x = roll + 90°, y = −pitch, z = −course + 90°.
    pub fn from_course_pitch_roll(course: f64, pitch: f64, roll: f64) -> Self {
        Self {
            x: Deg(roll + 90.0).into(),
            y: Deg(-pitch).into(),
            z: Deg(-course + 90.0).into(),
        }
    }
}
