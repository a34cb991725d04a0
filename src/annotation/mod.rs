//! # Annotation tree
//!
//! Hierarchical, labeled 3D markers with visibility/expand/highlight state
//! and camera fly-to behavior. Nodes are owned by an [`AnnotationTree`]
//! arena and addressed by [`AnnotationId`]; all state transitions go through
//! explicit mutators on the tree so their side effects (label re-render,
//! event emission) stay visible at call sites.

pub mod events;
pub mod label;
pub mod node;
pub mod tree;

pub use events::AnnotationEvent;
pub use label::Label;
pub use node::{Action, Annotation, AnnotationParams};
pub use tree::AnnotationTree;

/// Handle to a node inside an [`AnnotationTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub(crate) u32);

impl AnnotationId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// Visitor verdict for [`AnnotationTree::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into this node's children.
    Continue,
    /// Skip this node's children, continue with its siblings.
    SkipChildren,
}
