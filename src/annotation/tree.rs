//! The annotation tree arena and its state-transition operations.

use super::events::AnnotationEvent;
use super::node::{Annotation, AnnotationParams};
use super::{AnnotationId, Visit};
use crate::host::view::{Channel, View, VIEW_TRANSITION_MS};
use crate::math::Aabb;

/// Arena-owned annotation hierarchy.
///
/// The tree always has a root node; further nodes are created detached with
/// [`AnnotationTree::create`] and wired in with [`AnnotationTree::add`].
/// Notifications queue up on the tree and are drained once per frame.
pub struct AnnotationTree {
    nodes: Vec<Annotation>,
    root: AnnotationId,
    events: Vec<AnnotationEvent>,
}

impl AnnotationTree {
    pub fn new() -> Self {
        let root = Annotation::from_params(AnnotationParams::default());
        Self {
            nodes: vec![root],
            root: AnnotationId(0),
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> AnnotationId {
        self.root
    }

    /// Creates a detached node and returns its id.
    pub fn create(&mut self, params: AnnotationParams) -> AnnotationId {
        let id = AnnotationId(self.nodes.len() as u32);
        self.nodes.push(Annotation::from_params(params));
        id
    }

    pub fn get(&self, id: AnnotationId) -> &Annotation {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: AnnotationId) -> &mut Annotation {
        &mut self.nodes[id.0 as usize]
    }

    /// Queued notifications since the last drain.
    pub fn drain_events(&mut self) -> Vec<AnnotationEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- hierarchy ----------------------------------------------------

    pub fn has_child(&self, parent: AnnotationId, child: AnnotationId) -> bool {
        self.get(parent).children.contains(&child)
    }

    /// Depth from the root: 0 for a node with no parent.
    pub fn level(&self, id: AnnotationId) -> usize {
        match self.get(id).parent {
            None => 0,
            Some(parent) => self.level(parent) + 1,
        }
    }

    /// Inserts `child` as the last child of `parent`.
    ///
    /// No-op when `child` is already a child of `parent`, is attached
    /// elsewhere, or the edge would close a cycle. For every node of the
    /// added subtree, an `AnnotationAdded` event is emitted once per
    /// ancestor level starting at `parent`.
    pub fn add(&mut self, parent: AnnotationId, child: AnnotationId) {
        if self.has_child(parent, child) {
            return;
        }
        if self.get(child).parent.is_some() {
            log::warn!("annotation {child:?} is already attached; detach it before re-adding");
            return;
        }
        if child == parent || self.is_ancestor(child, parent) {
            log::warn!("refusing to add annotation {child:?}: edge would form a cycle");
            return;
        }

        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);

        let added = self.flatten(child);
        for descendant in added {
            let mut cursor = Some(parent);
            while let Some(at) = cursor {
                self.events.push(AnnotationEvent::AnnotationAdded {
                    at,
                    annotation: descendant,
                });
                cursor = self.get(at).parent;
            }
        }
    }

    /// Removes `child` from `parent`, disposing the removed subtree
    /// post-order. No-op when `child` is not a direct child of `parent`.
    pub fn remove(&mut self, parent: AnnotationId, child: AnnotationId) {
        if !self.has_child(parent, child) {
            return;
        }
        self.remove_all_children(child);
        self.dispose(child);
        self.node_mut(parent).children.retain(|&c| c != child);
        self.node_mut(child).parent = None;
    }

    /// Removes and disposes every descendant of `id`, leaving `id` itself
    /// in place.
    pub fn remove_all_children(&mut self, id: AnnotationId) {
        let children = self.get(id).children.clone();
        for child in children {
            self.remove(id, child);
        }
    }

    fn dispose(&mut self, id: AnnotationId) {
        let node = self.node_mut(id);
        node.dispose_count += 1;
        if node.disposed {
            log::warn!("annotation {id:?} disposed more than once");
            return;
        }
        node.disposed = true;
        node.label.detach();
    }

    fn is_ancestor(&self, candidate: AnnotationId, of: AnnotationId) -> bool {
        let mut cursor = self.get(of).parent;
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.get(id).parent;
        }
        false
    }

    // ---- traversal ----------------------------------------------------

    /// Pre-order depth-first walk from `id` (inclusive). The visitor prunes
    /// a node's children by returning [`Visit::SkipChildren`].
    pub fn traverse<F>(&self, id: AnnotationId, visitor: &mut F)
    where
        F: FnMut(AnnotationId, &Annotation) -> Visit,
    {
        match visitor(id, self.get(id)) {
            Visit::SkipChildren => {}
            Visit::Continue => {
                for &child in &self.get(id).children {
                    self.traverse(child, visitor);
                }
            }
        }
    }

    /// Applies [`AnnotationTree::traverse`] to each child of `id`,
    /// excluding `id` itself.
    pub fn traverse_descendants<F>(&self, id: AnnotationId, visitor: &mut F)
    where
        F: FnMut(AnnotationId, &Annotation) -> Visit,
    {
        for &child in &self.get(id).children {
            self.traverse(child, visitor);
        }
    }

    /// All nodes of the subtree rooted at `id`, in visit order, inclusive.
    pub fn flatten(&self, id: AnnotationId) -> Vec<AnnotationId> {
        let mut out = Vec::new();
        self.traverse(id, &mut |node, _| {
            out.push(node);
            Visit::Continue
        });
        out
    }

    /// All nodes of the subtree rooted at `id`, excluding `id`.
    pub fn descendants(&self, id: AnnotationId) -> Vec<AnnotationId> {
        let mut out = Vec::new();
        self.traverse_descendants(id, &mut |node, _| {
            out.push(node);
            Visit::Continue
        });
        out
    }

    // ---- derived state ------------------------------------------------

    /// Recomputes the bounding volume of `id` as the union of its own
    /// anchor point and its children's freshly recomputed bounds.
    pub fn update_bounds(&mut self, id: AnnotationId) {
        let children = self.get(id).children.clone();
        for &child in &children {
            self.update_bounds(child);
        }

        let mut bounds = Aabb::empty();
        if let Some(position) = self.get(id).position {
            bounds.expand_by_point(position);
        }
        for &child in &children {
            let child_bounds = *self.get(child).bounds();
            bounds.union(&child_bounds);
        }
        self.node_mut(id).bounds = bounds;
    }

    // ---- state transitions --------------------------------------------

    /// Sets the logical inclusion flag. Emits `VisibilityChanged` unless the
    /// value is unchanged.
    pub fn set_visible(&mut self, id: AnnotationId, visible: bool) {
        if self.get(id).visible == visible {
            return;
        }
        self.node_mut(id).visible = visible;
        self.events
            .push(AnnotationEvent::VisibilityChanged { annotation: id });
    }

    /// Sets the actual on/off state and mirrors it to the label.
    pub fn set_display(&mut self, id: AnnotationId, display: bool) {
        if self.get(id).display == display {
            return;
        }
        let node = self.node_mut(id);
        node.display = display;
        node.label.set_shown(display);
    }

    /// Expands or collapses the node.
    ///
    /// Expanding hides the node itself and leaves descendants untouched;
    /// collapsing shows the node and forces every descendant's display off.
    pub fn set_expanded(&mut self, id: AnnotationId, expanded: bool) {
        if self.get(id).expanded == expanded {
            return;
        }
        if expanded {
            self.set_display(id, false);
        } else {
            self.set_display(id, true);
            for descendant in self.descendants(id) {
                self.set_display(descendant, false);
            }
        }
        self.node_mut(id).expanded = expanded;
    }

    /// Replaces the title, re-rendering the label. Emits
    /// `AnnotationChanged` unless the value is unchanged.
    pub fn set_title(&mut self, id: AnnotationId, title: &str) {
        if self.get(id).title == title {
            return;
        }
        let node = self.node_mut(id);
        node.title = title.to_string();
        node.label.render_title(title);
        self.events
            .push(AnnotationEvent::AnnotationChanged { annotation: id });
    }

    /// Replaces the description, re-rendering the label. Emits
    /// `AnnotationChanged` unless the value is unchanged.
    pub fn set_description(&mut self, id: AnnotationId, description: &str) {
        if self.get(id).description == description {
            return;
        }
        let node = self.node_mut(id);
        node.description = description.to_string();
        node.label.render_description(description);
        self.events
            .push(AnnotationEvent::AnnotationChanged { annotation: id });
    }

    /// Toggles the transient mouse-driven emphasis state. Entering the
    /// highlighted state with a non-empty description opens the description
    /// panel.
    pub fn set_highlighted(&mut self, id: AnnotationId, highlighted: bool) {
        let node = self.node_mut(id);
        let has_description = !node.description.is_empty();
        node.label.set_highlighted(highlighted, has_description);
        node.highlighted = highlighted;
    }

    // ---- camera -------------------------------------------------------

    /// Flies the camera to this annotation's configured view over 500 ms.
    /// No-op when the node has no view.
    pub fn move_here(&mut self, id: AnnotationId, view: &mut View) {
        let node = self.get(id);
        if !node.has_view() {
            return;
        }

        let end_target = node
            .camera_target
            .or(node.position)
            .unwrap_or_else(|| node.bounds.center());

        if let Some(end_position) = node.camera_position {
            view.set_view(end_position, end_target, VIEW_TRANSITION_MS);
        } else if let Some(radius) = node.radius {
            let direction = view.direction();
            let end_position = end_target - direction * radius;
            view.animate(
                vec![
                    Channel::Position {
                        from: view.position,
                        to: end_position,
                    },
                    Channel::Pivot {
                        from: view.get_pivot(),
                        to: end_target,
                    },
                    Channel::Radius {
                        from: view.radius(),
                        to: radius,
                    },
                ],
                VIEW_TRANSITION_MS,
            );
        }
    }

    /// Title activation: flies to the node's view when one exists, then
    /// emits a `Click` event.
    pub fn click_title(&mut self, id: AnnotationId, view: &mut View) {
        if self.get(id).has_view() {
            self.move_here(id, view);
        }
        self.events.push(AnnotationEvent::Click { annotation: id });
    }

    /// Invokes one of the node's bound actions.
    pub fn trigger_action(&self, id: AnnotationId, action_index: usize) {
        if let Some(action) = self.get(id).actions.get(action_index) {
            (action.on_click)(id);
        }
    }
}

impl Default for AnnotationTree {
    fn default() -> Self {
        Self::new()
    }
}
