//! Annotation node storage and construction parameters.

use cgmath::{Vector3, Zero};

use super::label::Label;
use super::AnnotationId;
use crate::math::Aabb;

/// Default distance threshold for distance-based auto-collapse.
pub const DEFAULT_COLLAPSE_THRESHOLD: f64 = 100.0;

/// An icon + click-handler pair bound to an annotation at construction.
pub struct Action {
    pub icon: String,
    pub on_click: Box<dyn Fn(AnnotationId)>,
}

impl Action {
    pub fn new(icon: impl Into<String>, on_click: impl Fn(AnnotationId) + 'static) -> Self {
        Self {
            icon: icon.into(),
            on_click: Box::new(on_click),
        }
    }
}

/// Construction options for an annotation.
#[derive(Default)]
pub struct AnnotationParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<Vector3<f64>>,
    pub camera_position: Option<Vector3<f64>>,
    pub camera_target: Option<Vector3<f64>>,
    pub radius: Option<f64>,
    pub collapse_threshold: Option<f64>,
    pub actions: Vec<Action>,
}

impl AnnotationParams {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// One node of the annotation tree.
///
/// Fields are read freely through [`super::AnnotationTree::get`]; state that
/// carries side effects (visible/display/expand/title/description/highlight)
/// is mutated through the tree's explicit setters only.
pub struct Annotation {
    pub(crate) title: String,
    pub(crate) description: String,
    pub position: Option<Vector3<f64>>,
    /// Screen-space drag adjustment applied on top of the anchor.
    pub offset: Vector3<f64>,
    pub camera_position: Option<Vector3<f64>>,
    pub camera_target: Option<Vector3<f64>>,
    pub radius: Option<f64>,
    pub collapse_threshold: f64,
    pub(crate) visible: bool,
    pub(crate) display: bool,
    pub(crate) expanded: bool,
    pub(crate) highlighted: bool,
    pub(crate) children: Vec<AnnotationId>,
    pub(crate) parent: Option<AnnotationId>,
    pub(crate) bounds: Aabb,
    pub label: Label,
    pub actions: Vec<Action>,
    pub(crate) disposed: bool,
    pub(crate) dispose_count: u32,
}

impl Annotation {
    pub(crate) fn from_params(params: AnnotationParams) -> Self {
        let title = params.title.unwrap_or_else(|| "No Title".to_string());
        let description = params.description.unwrap_or_default();
        let label = Label::new(&title, &description);
        Self {
            title,
            description,
            position: params.position,
            offset: Vector3::zero(),
            camera_position: params.camera_position,
            camera_target: params.camera_target,
            radius: params.radius,
            collapse_threshold: params
                .collapse_threshold
                .unwrap_or(DEFAULT_COLLAPSE_THRESHOLD),
            visible: true,
            // New annotations stay hidden until the layout pass shows them.
            display: false,
            expanded: false,
            highlighted: false,
            children: Vec::new(),
            parent: None,
            bounds: Aabb::empty(),
            label,
            actions: params.actions,
            disposed: false,
            dispose_count: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn display(&self) -> bool {
        self.display
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn children(&self) -> &[AnnotationId] {
        &self.children
    }

    pub fn parent(&self) -> Option<AnnotationId> {
        self.parent
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// True when the node carries enough hints to frame a camera view:
    /// either an explicit position + target pair, or an orbit radius.
    pub fn has_view(&self) -> bool {
        let has_pos_target = self.camera_position.is_some() && self.camera_target.is_some();
        has_pos_target || self.radius.is_some()
    }
}

impl std::fmt::Debug for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Annotation")
            .field("title", &self.title)
            .field("visible", &self.visible)
            .field("display", &self.display)
            .field("expanded", &self.expanded)
            .field("children", &self.children.len())
            .field("parent", &self.parent)
            .finish()
    }
}
