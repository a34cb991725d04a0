//! Typed notifications emitted by the annotation tree.
//!
//! Events are queued on the tree and drained by the embedder once per frame;
//! each variant carries the ids a listener needs instead of an untyped
//! string-keyed payload.

use super::AnnotationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationEvent {
    /// A node's logical `visible` flag changed.
    VisibilityChanged { annotation: AnnotationId },
    /// A node's title or description changed.
    AnnotationChanged { annotation: AnnotationId },
    /// `annotation` joined the subtree; emitted once per ancestor level,
    /// with `at` naming the ancestor observing the addition.
    AnnotationAdded {
        at: AnnotationId,
        annotation: AnnotationId,
    },
    /// The node's title was activated.
    Click { annotation: AnnotationId },
}
