//! Per-location panorama marker meshes.

use cgmath::Vector3;

use super::EulerZyx;

/// Material applied to a marker mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMaterial {
    /// Semi-transparent base look.
    Base,
    /// Solid highlight applied while the pointer hovers the marker.
    Hovered,
}

/// One marker sphere standing at a panorama's capture location.
#[derive(Debug, Clone)]
pub struct MarkerMesh {
    pub position: Vector3<f64>,
    /// Orientation applied in intrinsic Z-Y-X order.
    pub rotation: EulerZyx,
    /// Uniform scale; the unit sphere geometry makes this the pick radius.
    pub scale: f64,
    pub visible: bool,
    pub material: MarkerMaterial,
    /// Base-material opacity.
    pub opacity: f64,
}

impl MarkerMesh {
    pub fn new(position: Vector3<f64>, rotation: EulerZyx) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
            visible: true,
            material: MarkerMaterial::Base,
            opacity: 0.75,
        }
    }

    /// World-space radius used for hover picking.
    pub fn pick_radius(&self) -> f64 {
        self.scale
    }
}
