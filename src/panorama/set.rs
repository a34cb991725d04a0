//! The panorama set and its focus state machine.

use cgmath::{InnerSpace, Vector3};

use super::image::PanoramaImage;
use crate::host::view::VIEW_TRANSITION_MS;
use crate::host::{ControlScheme, Viewer};
use crate::scene::{
    EulerZyx, MarkerMaterial, MarkerMesh, RequestId, SphereMaterial, Texture, TextureCompletion,
    TextureSource, ViewingSphere,
};

/// Duration of the cross-fade between two panorama textures, milliseconds.
pub const CROSSFADE_MS: f64 = 1000.0;

/// Offset of the focus camera from the panorama center. Essentially "look
/// from the same spot": large enough to define a view direction, small
/// enough to be invisible.
const FOCUS_EYE_OFFSET: f64 = 1e-6;

/// Externally observable phase of the focus state machine.
///
/// Unfocusing is instantaneous and has no phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// Nothing focused; markers follow the set's visibility flag.
    Idle,
    /// Camera already redirected, texture load or cross-fade still running.
    TransitioningIn,
    /// Sphere fully showing the focused panorama.
    Focused,
}

/// Notifications emitted by a [`PanoramaSet`], drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanoramaEvent {
    /// The set's visibility flag changed.
    VisibilityChanged,
    /// Pointer-down landed on a hovered marker; `image` is about to be
    /// focused.
    MouseDown { image: usize },
}

/// Camera state saved on focus-enter and restored on focus-exit.
#[derive(Debug, Clone, Copy)]
struct ViewSnapshot {
    controls: ControlScheme,
    position: Vector3<f64>,
    target: Vector3<f64>,
}

#[derive(Debug, Clone)]
struct PendingLoad {
    request: RequestId,
    image: usize,
    rotation: EulerZyx,
}

#[derive(Debug, Clone)]
struct Crossfade {
    old: Texture,
    new: Texture,
    elapsed_ms: f64,
    duration_ms: f64,
}

/// An ordered collection of panoramas sharing one viewing sphere.
///
/// All transition state (focused image, hovered marker, last-good texture,
/// previous-view snapshot) is owned by the instance.
pub struct PanoramaSet {
    images: Vec<PanoramaImage>,
    markers: Vec<MarkerMesh>,
    sphere: ViewingSphere,
    visible: bool,
    selecting_enabled: bool,
    focused: Option<usize>,
    hovered: Option<usize>,
    previous_view: Option<ViewSnapshot>,
    /// Last texture known to have fully displayed; fallback on load failure.
    current_texture: Option<Texture>,
    crossfade: Option<Crossfade>,
    pending_load: Option<PendingLoad>,
    exit_control_visible: bool,
    events: Vec<PanoramaEvent>,
}

impl PanoramaSet {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            markers: Vec::new(),
            sphere: ViewingSphere::new(),
            visible: true,
            selecting_enabled: true,
            focused: None,
            hovered: None,
            previous_view: None,
            current_texture: None,
            crossfade: None,
            pending_load: None,
            exit_control_visible: false,
            events: Vec::new(),
        }
    }

    /// Adds an image and its marker mesh at the image's local position.
    pub fn push_image(&mut self, image: PanoramaImage) {
        let rotation = EulerZyx::from_course_pitch_roll(image.course, image.pitch, image.roll);
        let mut marker = MarkerMesh::new(image.position, rotation);
        marker.visible = self.visible && self.focused.is_none();
        self.markers.push(marker);
        self.images.push(image);
    }

    pub fn images(&self) -> &[PanoramaImage] {
        &self.images
    }

    pub fn markers(&self) -> &[MarkerMesh] {
        &self.markers
    }

    pub fn sphere(&self) -> &ViewingSphere {
        &self.sphere
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn selecting_enabled(&self) -> bool {
        self.selecting_enabled
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn exit_control_visible(&self) -> bool {
        self.exit_control_visible
    }

    pub fn state(&self) -> FocusState {
        if self.focused.is_none() {
            FocusState::Idle
        } else if self.pending_load.is_some() || self.crossfade.is_some() {
            FocusState::TransitioningIn
        } else {
            FocusState::Focused
        }
    }

    pub fn drain_events(&mut self) -> Vec<PanoramaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Sets the global visibility flag. Markers show only while nothing is
    /// focused; the sphere shows only while something is.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        for marker in &mut self.markers {
            marker.visible = visible && self.focused.is_none();
        }
        self.sphere.visible = visible && self.focused.is_some();
        self.visible = visible;
        self.events.push(PanoramaEvent::VisibilityChanged);
    }

    /// Enters immersive mode on `index`.
    ///
    /// A running focus is exited first (focus is exit-then-enter, never
    /// composed); a cross-fade in flight is cancelled outright. Focusing the
    /// already-focused image is a no-op. The camera is redirected
    /// immediately; the texture arrives later via
    /// [`PanoramaSet::update`].
    pub fn focus(
        &mut self,
        index: usize,
        viewer: &mut Viewer,
        textures: &mut dyn TextureSource,
    ) {
        if index >= self.images.len() {
            log::warn!("focus: no panorama at index {index}");
            return;
        }
        if self.focused == Some(index) {
            return;
        }

        // The sphere keeps its rotation until the new texture fades in.
        let prior_rotation = self.sphere.rotation;

        if self.focused.is_some() {
            self.unfocus(viewer);
        }

        self.previous_view = Some(ViewSnapshot {
            controls: viewer.active_controls(),
            position: viewer.view.position,
            target: viewer.view.get_pivot(),
        });

        viewer.set_controls(ControlScheme::Orbit);
        viewer.orbit_controls.double_click_zoom_enabled = false;

        for marker in &mut self.markers {
            marker.visible = false;
        }
        self.selecting_enabled = false;
        self.sphere.visible = true;

        let image = &self.images[index];
        let target_rotation =
            EulerZyx::from_course_pitch_roll(image.course, image.pitch, image.roll);

        if let Some(current) = &self.current_texture {
            self.sphere.material = SphereMaterial::Textured(current.clone());
            self.sphere.rotation = prior_rotation;
        } else {
            self.sphere.material = SphereMaterial::Placeholder;
            self.sphere.rotation = target_rotation;
        }
        self.sphere.position = image.position;

        let target = image.position;
        let to_target = target - viewer.view.position;
        let dir = if to_target.magnitude2() < 1e-24 {
            Vector3::unit_x()
        } else {
            to_target.normalize()
        };
        let new_cam_pos = target - dir * FOCUS_EYE_OFFSET;
        viewer
            .view
            .set_view(new_cam_pos, target, VIEW_TRANSITION_MS);

        let request = textures.request(&image.file);
        self.pending_load = Some(PendingLoad {
            request,
            image: index,
            rotation: target_rotation,
        });

        self.focused = Some(index);
        self.exit_control_visible = true;
        log::debug!("focused panorama {}", self.images[index].file);
    }

    /// Leaves immersive mode and restores the snapshotted camera view.
    ///
    /// Marker visibility and selection are re-enabled even when nothing is
    /// focused; everything else is a no-op in that case.
    pub fn unfocus(&mut self, viewer: &mut Viewer) {
        self.selecting_enabled = true;
        for marker in &mut self.markers {
            marker.visible = self.visible;
        }

        if self.focused.is_none() {
            return;
        }

        self.crossfade = None;
        self.pending_load = None;
        self.sphere.clear();

        viewer.orbit_controls.double_click_zoom_enabled = true;
        if let Some(previous) = self.previous_view.take() {
            viewer.set_controls(previous.controls);
            viewer
                .view
                .set_view(previous.position, previous.target, VIEW_TRANSITION_MS);
        }

        self.focused = None;
        self.exit_control_visible = false;
        log::debug!("unfocused panorama");
    }

    /// Per-frame tick: drains texture completions, advances a running
    /// cross-fade, and refreshes the hover highlight from the pointer.
    pub fn update(&mut self, viewer: &Viewer, textures: &mut dyn TextureSource, dt_ms: f64) {
        for completion in textures.poll() {
            self.handle_completion(completion);
        }
        self.advance_crossfade(dt_ms);

        if let Some(hovered) = self.hovered.take() {
            self.markers[hovered].material = MarkerMaterial::Base;
        }
        if self.selecting_enabled {
            self.handle_hovering(viewer);
        }
    }

    /// Pointer-down: focuses the hovered marker's image, if any.
    pub fn handle_pointer_down(
        &mut self,
        viewer: &mut Viewer,
        textures: &mut dyn TextureSource,
    ) {
        let Some(hovered) = self.hovered else {
            return;
        };
        self.events.push(PanoramaEvent::MouseDown { image: hovered });
        self.focus(hovered, viewer, textures);
    }

    fn handle_completion(&mut self, completion: TextureCompletion) {
        let Some(pending) = self.pending_load.take() else {
            return;
        };
        if completion.request != pending.request {
            self.pending_load = Some(pending);
            return;
        }

        if self.focused != Some(pending.image) {
            log::debug!("discarding texture for no-longer-focused panorama");
            return;
        }

        match completion.result {
            Ok(texture) => {
                self.images[pending.image].texture = Some(texture.clone());
                if let Some(old) = self.current_texture.clone() {
                    self.sphere.rotation = pending.rotation;
                    self.sphere.material = SphereMaterial::CrossFade {
                        old: old.clone(),
                        new: texture.clone(),
                        progress: 0.0,
                    };
                    self.crossfade = Some(Crossfade {
                        old,
                        new: texture,
                        elapsed_ms: 0.0,
                        duration_ms: CROSSFADE_MS,
                    });
                } else {
                    // First-ever focus: no fade, apply directly.
                    self.sphere.material = SphereMaterial::Textured(texture.clone());
                    self.sphere.rotation = pending.rotation;
                    self.current_texture = Some(texture);
                }
            }
            Err(err) => {
                log::warn!("texture load failed, keeping last good texture: {err}");
                if let Some(last) = &self.current_texture {
                    self.sphere.material = SphereMaterial::Textured(last.clone());
                }
            }
        }
    }

    fn advance_crossfade(&mut self, dt_ms: f64) {
        let Some(mut fade) = self.crossfade.take() else {
            return;
        };
        // The focused reference is the only guard the fade checks.
        if self.focused.is_none() {
            return;
        }

        fade.elapsed_ms += dt_ms.max(0.0);
        let progress = (fade.elapsed_ms / fade.duration_ms).min(1.0);

        if progress >= 1.0 {
            // Pin the new texture; the old one's resources are released.
            self.sphere.material = SphereMaterial::Textured(fade.new.clone());
            self.current_texture = Some(fade.new);
        } else {
            self.sphere.material = SphereMaterial::CrossFade {
                old: fade.old.clone(),
                new: fade.new.clone(),
                progress,
            };
            self.crossfade = Some(fade);
        }
    }

    fn handle_hovering(&mut self, viewer: &Viewer) {
        let ray = viewer.pointer_ray();
        let mut best: Option<(f64, usize)> = None;
        for (index, marker) in self.markers.iter().enumerate() {
            if !marker.visible {
                continue;
            }
            if let Some(t) = ray.intersect_sphere(marker.position, marker.pick_radius()) {
                if best.is_none_or(|(best_t, _)| t < best_t) {
                    best = Some((t, index));
                }
            }
        }
        if let Some((_, index)) = best {
            self.markers[index].material = MarkerMaterial::Hovered;
            self.hovered = Some(index);
        }
    }
}

impl Default for PanoramaSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RenderSurface;
    use crate::scene::QueuedTextureSource;

    fn set_with_images(positions: &[Vector3<f64>]) -> PanoramaSet {
        let mut set = PanoramaSet::new();
        for (i, &position) in positions.iter().enumerate() {
            set.push_image(PanoramaImage::new(
                format!("http://host/pano/{i}.jpg"),
                0.0,
                position.x,
                position.y,
                position.z,
                0.0,
                0.0,
                0.0,
                position,
            ));
        }
        set
    }

    fn viewer() -> Viewer {
        Viewer::new(RenderSurface::new(800, 600))
    }

    fn settle_camera(viewer: &mut Viewer) {
        for _ in 0..60 {
            viewer.update(16.0);
        }
    }

    #[test]
    fn focus_then_unfocus_restores_camera_and_markers() {
        let mut set = set_with_images(&[Vector3::new(10.0, 0.0, 2.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        let start_controls = viewer.active_controls();
        let start_pos = viewer.view.position;
        let start_target = viewer.view.get_pivot();

        set.focus(0, &mut viewer, &mut textures);
        assert_eq!(set.state(), FocusState::TransitioningIn);
        assert_eq!(viewer.active_controls(), ControlScheme::Orbit);
        assert!(!viewer.orbit_controls.double_click_zoom_enabled);
        assert!(set.markers()[0].visible == false);
        assert!(set.sphere().visible);
        assert!(set.exit_control_visible());
        settle_camera(&mut viewer);
        assert!((viewer.view.get_pivot() - Vector3::new(10.0, 0.0, 2.0)).magnitude() < 1e-9);

        set.unfocus(&mut viewer);
        assert_eq!(set.state(), FocusState::Idle);
        assert_eq!(viewer.active_controls(), start_controls);
        assert!(viewer.orbit_controls.double_click_zoom_enabled);
        assert!(set.markers()[0].visible);
        assert!(!set.sphere().visible);
        assert!(!set.exit_control_visible());
        settle_camera(&mut viewer);
        assert!((viewer.view.position - start_pos).magnitude() < 1e-9);
        assert!((viewer.view.get_pivot() - start_target).magnitude() < 1e-9);
    }

    #[test]
    fn unfocus_when_idle_only_re_enables_selection() {
        let mut set = set_with_images(&[Vector3::new(1.0, 0.0, 0.0)]);
        let mut viewer = viewer();
        set.unfocus(&mut viewer);
        assert!(set.selecting_enabled());
        assert!(set.markers()[0].visible);
        assert_eq!(set.state(), FocusState::Idle);
    }

    #[test]
    fn focusing_same_image_twice_is_noop() {
        let mut set = set_with_images(&[Vector3::new(1.0, 0.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();
        set.focus(0, &mut viewer, &mut textures);
        let pending_before = textures.pending_files().len();
        set.focus(0, &mut viewer, &mut textures);
        assert_eq!(textures.pending_files().len(), pending_before);
    }

    #[test]
    fn first_focus_applies_texture_directly() {
        let mut set = set_with_images(&[Vector3::new(1.0, 0.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.focus(0, &mut viewer, &mut textures);
        assert_eq!(set.sphere().material, SphereMaterial::Placeholder);

        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);

        assert_eq!(set.state(), FocusState::Focused);
        let texture = set.sphere().texture().expect("texture pinned");
        assert!(texture.file.ends_with("0.jpg"));
        assert!(set.images()[0].texture.is_some());
    }

    #[test]
    fn second_focus_cross_fades_then_pins_new_texture() {
        let mut set = set_with_images(&[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(5.0, 0.0, 0.0),
        ]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.focus(0, &mut viewer, &mut textures);
        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);

        set.focus(1, &mut viewer, &mut textures);
        // Old texture stays up until the new one arrives.
        assert!(set.sphere().texture().unwrap().file.ends_with("0.jpg"));

        textures.complete_next();
        set.update(&viewer, &mut textures, 0.0);
        match &set.sphere().material {
            SphereMaterial::CrossFade { old, new, progress } => {
                assert!(old.file.ends_with("0.jpg"));
                assert!(new.file.ends_with("1.jpg"));
                assert_eq!(*progress, 0.0);
            }
            other => panic!("expected cross-fade, got {other:?}"),
        }
        assert_eq!(set.state(), FocusState::TransitioningIn);

        // Halfway: linear blend over real frame time.
        set.update(&viewer, &mut textures, 500.0);
        match &set.sphere().material {
            SphereMaterial::CrossFade { progress, .. } => {
                assert!((progress - 0.5).abs() < 1e-9)
            }
            other => panic!("expected cross-fade, got {other:?}"),
        }

        set.update(&viewer, &mut textures, 600.0);
        assert!(set.sphere().texture().unwrap().file.ends_with("1.jpg"));
        assert_eq!(set.state(), FocusState::Focused);
    }

    #[test]
    fn refocus_is_equivalent_to_unfocus_then_focus() {
        let positions = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(5.0, 0.0, 0.0)];

        // Path 1: focus(0) then focus(1).
        let mut direct = set_with_images(&positions);
        let mut viewer_a = viewer();
        let mut textures_a = QueuedTextureSource::new();
        direct.focus(0, &mut viewer_a, &mut textures_a);
        direct.focus(1, &mut viewer_a, &mut textures_a);

        // Path 2: focus(0), unfocus, focus(1).
        let mut stepped = set_with_images(&positions);
        let mut viewer_b = viewer();
        let mut textures_b = QueuedTextureSource::new();
        stepped.focus(0, &mut viewer_b, &mut textures_b);
        stepped.unfocus(&mut viewer_b);
        stepped.focus(1, &mut viewer_b, &mut textures_b);

        assert_eq!(direct.focused(), stepped.focused());
        assert_eq!(direct.state(), stepped.state());
        assert_eq!(
            direct.markers().iter().map(|m| m.visible).collect::<Vec<_>>(),
            stepped.markers().iter().map(|m| m.visible).collect::<Vec<_>>()
        );
        assert_eq!(viewer_a.active_controls(), viewer_b.active_controls());
        assert_eq!(
            viewer_a.orbit_controls.double_click_zoom_enabled,
            viewer_b.orbit_controls.double_click_zoom_enabled
        );
    }

    #[test]
    fn new_focus_cancels_running_fade() {
        let mut set = set_with_images(&[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(9.0, 0.0, 0.0),
        ]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.focus(0, &mut viewer, &mut textures);
        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);

        set.focus(1, &mut viewer, &mut textures);
        textures.complete_next();
        set.update(&viewer, &mut textures, 200.0); // fade running

        set.focus(2, &mut viewer, &mut textures);
        assert!(
            matches!(set.sphere().material, SphereMaterial::Textured(_)),
            "cancelled fade must not leave a blend on the sphere"
        );
        // Only the newest request may resolve onto the sphere.
        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);
        assert!(set.sphere().texture().is_none() || set.crossfade.is_some());
    }

    #[test]
    fn load_failure_restores_last_good_texture() {
        let mut set = set_with_images(&[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(5.0, 0.0, 0.0),
        ]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.focus(0, &mut viewer, &mut textures);
        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);

        set.focus(1, &mut viewer, &mut textures);
        textures.fail_next("404");
        set.update(&viewer, &mut textures, 16.0);

        let texture = set.sphere().texture().expect("fallback texture");
        assert!(texture.file.ends_with("0.jpg"));
        assert_eq!(set.state(), FocusState::Focused);
    }

    #[test]
    fn stale_completion_after_unfocus_is_discarded() {
        let mut set = set_with_images(&[Vector3::new(1.0, 0.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.focus(0, &mut viewer, &mut textures);
        set.unfocus(&mut viewer);
        textures.complete_next();
        set.update(&viewer, &mut textures, 16.0);

        assert!(set.sphere().texture().is_none());
        assert_eq!(set.state(), FocusState::Idle);
    }

    #[test]
    fn hover_highlights_nearest_marker_and_clears_next_frame() {
        let mut set = set_with_images(&[
            Vector3::new(0.0, 10.0, 0.0),
            Vector3::new(0.0, 20.0, 0.0),
        ]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();
        // Look straight down +Y through both markers from the default-ish
        // camera spot.
        viewer.view.set_view(
            Vector3::new(0.0, -5.0, 0.0),
            Vector3::new(0.0, 10.0, 0.0),
            0.0,
        );
        viewer.pointer.x = 400.0;
        viewer.pointer.y = 300.0;

        set.update(&viewer, &mut textures, 16.0);
        assert_eq!(set.hovered(), Some(0), "nearest marker wins");
        assert_eq!(set.markers()[0].material, MarkerMaterial::Hovered);

        // Pointer moves away: highlight is cleared on the next tick.
        viewer.pointer.x = 0.0;
        viewer.pointer.y = 0.0;
        set.update(&viewer, &mut textures, 16.0);
        assert_eq!(set.hovered(), None);
        assert_eq!(set.markers()[0].material, MarkerMaterial::Base);
    }

    #[test]
    fn pointer_down_on_hovered_marker_focuses_it() {
        let mut set = set_with_images(&[Vector3::new(0.0, 10.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();
        viewer.view.set_view(
            Vector3::new(0.0, -5.0, 0.0),
            Vector3::new(0.0, 10.0, 0.0),
            0.0,
        );
        viewer.pointer.x = 400.0;
        viewer.pointer.y = 300.0;
        set.update(&viewer, &mut textures, 16.0);
        assert_eq!(set.hovered(), Some(0));

        set.handle_pointer_down(&mut viewer, &mut textures);
        assert_eq!(set.focused(), Some(0));
        assert_eq!(
            set.drain_events(),
            vec![PanoramaEvent::MouseDown { image: 0 }]
        );
    }

    #[test]
    fn pointer_down_without_hover_does_nothing() {
        let mut set = set_with_images(&[Vector3::new(0.0, 10.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();
        set.handle_pointer_down(&mut viewer, &mut textures);
        assert_eq!(set.focused(), None);
        assert!(set.drain_events().is_empty());
    }

    #[test]
    fn set_visible_follows_focus_invariants() {
        let mut set = set_with_images(&[Vector3::new(1.0, 0.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();

        set.set_visible(true); // unchanged
        assert!(set.drain_events().is_empty());

        set.set_visible(false);
        assert!(!set.markers()[0].visible);
        assert!(!set.sphere().visible);
        assert_eq!(set.drain_events(), vec![PanoramaEvent::VisibilityChanged]);

        set.set_visible(true);
        set.focus(0, &mut viewer, &mut textures);
        set.drain_events();

        // While focused, markers stay hidden regardless of the flag.
        set.set_visible(false);
        set.set_visible(true);
        assert!(!set.markers()[0].visible);
        assert!(set.sphere().visible);

        // After unfocus, markers follow the flag again.
        set.unfocus(&mut viewer);
        assert!(set.markers()[0].visible);
    }

    #[test]
    fn selection_is_disabled_while_focused() {
        let mut set = set_with_images(&[Vector3::new(0.0, 10.0, 0.0)]);
        let mut viewer = viewer();
        let mut textures = QueuedTextureSource::new();
        viewer.view.set_view(
            Vector3::new(0.0, -5.0, 0.0),
            Vector3::new(0.0, 10.0, 0.0),
            0.0,
        );
        viewer.pointer.x = 400.0;
        viewer.pointer.y = 300.0;

        set.focus(0, &mut viewer, &mut textures);
        set.update(&viewer, &mut textures, 16.0);
        assert_eq!(set.hovered(), None);
    }
}
