//! Render state of an annotation's on-screen label.
//!
//! The host UI layer owns the actual markup; it renders titlebar and
//! description panel from these fields after each frame.

/// Logical state of one annotation label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub title_text: String,
    pub description_text: String,
    /// Whether the label element is shown at all (the `display` flag).
    pub shown: bool,
    /// 0.8 while highlighted, 0.5 otherwise.
    pub opacity: f64,
    /// Raised z-order while highlighted.
    pub raised: bool,
    /// Titlebar glow while highlighted.
    pub title_shadow: bool,
    /// Whether the description panel is expanded.
    pub description_visible: bool,
    /// Set once the label's element has been removed from the host UI.
    pub detached: bool,
}

impl Label {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title_text: title.to_string(),
            description_text: description.to_string(),
            shown: false,
            opacity: 0.5,
            raised: false,
            title_shadow: false,
            description_visible: false,
            detached: false,
        }
    }

    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn render_title(&mut self, title: &str) {
        self.title_text = title.to_string();
    }

    pub fn render_description(&mut self, description: &str) {
        self.description_text = description.to_string();
    }

    /// Applies the highlight emphasis. `has_description` controls whether
    /// entering the highlighted state opens the description panel.
    pub fn set_highlighted(&mut self, highlighted: bool, has_description: bool) {
        if highlighted {
            self.opacity = 0.8;
            self.raised = true;
            self.title_shadow = true;
            if has_description {
                self.description_visible = true;
            }
        } else {
            self.opacity = 0.5;
            self.raised = false;
            self.title_shadow = false;
            self.description_visible = false;
        }
    }

    /// Removes the label from the host UI.
    pub fn detach(&mut self) {
        self.detached = true;
        self.shown = false;
    }
}
