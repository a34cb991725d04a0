//! # Panorama focus controller
//!
//! Manages entering and leaving the immersive 360° photo-sphere mode:
//! marker hover/pick selection, the camera hand-off into the sphere, the
//! asynchronous texture load and the cross-fade between consecutive
//! panoramas. One [`PanoramaSet`] owns all of its transition state, so
//! multiple independent sets can coexist on one host.

pub mod image;
pub mod loader;
pub mod set;

pub use image::PanoramaImage;
pub use loader::PanoramaLoader;
pub use set::{FocusState, PanoramaEvent, PanoramaSet};
