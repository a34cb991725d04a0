//! The shared viewing sphere shown while a panorama is focused.

use cgmath::{Vector3, Zero};

use super::texture::Texture;
use super::EulerZyx;

/// Material on the viewing sphere.
#[derive(Debug, Clone, PartialEq)]
pub enum SphereMaterial {
    /// Neutral gray shown before the first texture arrives.
    Placeholder,
    /// A single pinned panorama texture.
    Textured(Texture),
    /// Blend between the outgoing and incoming textures during a
    /// cross-fade; `progress` runs linearly from 0 to 1.
    CrossFade {
        old: Texture,
        new: Texture,
        progress: f64,
    },
}

/// Logical state of the photo sphere rendered around the camera.
#[derive(Debug, Clone)]
pub struct ViewingSphere {
    pub position: Vector3<f64>,
    /// Orientation applied in intrinsic Z-Y-X order.
    pub rotation: EulerZyx,
    pub scale: f64,
    pub visible: bool,
    pub material: SphereMaterial,
}

impl ViewingSphere {
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: EulerZyx::default(),
            scale: 1000.0,
            visible: false,
            material: SphereMaterial::Placeholder,
        }
    }

    /// Drops the texture and hides the sphere.
    pub fn clear(&mut self) {
        self.material = SphereMaterial::Placeholder;
        self.visible = false;
    }

    /// The texture currently pinned to the sphere, if any.
    pub fn texture(&self) -> Option<&Texture> {
        match &self.material {
            SphereMaterial::Textured(texture) => Some(texture),
            _ => None,
        }
    }
}

impl Default for ViewingSphere {
    fn default() -> Self {
        Self::new()
    }
}
