//! One panorama capture: file, geodetic pose, and derived local position.

use cgmath::Vector3;

use crate::scene::Texture;

/// A spherical photograph anchored at a geodetic position.
///
/// The local position is derived from longitude/latitude through the
/// loader's forward projection; the marker mesh standing at that position
/// lives at the same index in the owning set's marker list.
#[derive(Debug, Clone)]
pub struct PanoramaImage {
    pub file: String,
    /// Capture timestamp from the manifest, seconds.
    pub time: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    /// Heading in degrees.
    pub course: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Roll in degrees.
    pub roll: f64,
    /// Projected local position: (x, y, altitude).
    pub position: Vector3<f64>,
    /// Lazily loaded texture; populated after the first focus.
    pub texture: Option<Texture>,
}

impl PanoramaImage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file: impl Into<String>,
        time: f64,
        longitude: f64,
        latitude: f64,
        altitude: f64,
        course: f64,
        pitch: f64,
        roll: f64,
        position: Vector3<f64>,
    ) -> Self {
        Self {
            file: file.into(),
            time,
            longitude,
            latitude,
            altitude,
            course,
            pitch,
            roll,
            position,
            texture: None,
        }
    }
}
