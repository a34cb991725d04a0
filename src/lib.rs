// src/lib.rs
//! Waypost
//!
//! Scene-graph decorations for 3D point-cloud viewers: a hierarchical
//! annotation tree with camera fly-to behavior, and an immersive 360°
//! panorama mode with cross-fade transitions. Both components are thin
//! behavioral layers driven by the host engine's per-frame update tick.

pub mod animation;
pub mod annotation;
pub mod error;
pub mod host;
pub mod math;
pub mod panorama;
pub mod scene;

// Re-export main types for convenience
pub use annotation::{Annotation, AnnotationEvent, AnnotationId, AnnotationParams, AnnotationTree};
pub use error::{ManifestError, TextureError};
pub use host::Viewer;
pub use panorama::{FocusState, PanoramaImage, PanoramaLoader, PanoramaSet};
