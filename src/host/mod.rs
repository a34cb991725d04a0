//! # Host viewer surface
//!
//! The slice of the host rendering engine these components consume: the
//! orbit-style camera view with animated transitions, the active
//! control-scheme switch, pointer state, and the render surface dimensions.
//! The engine's mesh/material/GPU internals stay outside this crate.

pub mod controls;
pub mod input;
pub mod view;
pub mod viewer;

pub use controls::{ControlScheme, OrbitControls};
pub use input::{PointerState, RenderSurface};
pub use view::{Channel, View};
pub use viewer::Viewer;
