//! Camera view state with animated transitions.

use cgmath::{InnerSpace, Rad, Vector3};

use crate::animation::{lerp, Easing, Tween};

/// Duration of camera fly-to transitions, in milliseconds.
pub const VIEW_TRANSITION_MS: f64 = 500.0;

/// One interpolated quantity inside a view transition.
///
/// Channels are applied in declaration order each frame; a `Radius` channel
/// re-derives the camera position along the current view direction, so it
/// always comes last when combined with a `Position` channel.
#[derive(Debug, Clone, Copy)]
pub enum Channel {
    Position {
        from: Vector3<f64>,
        to: Vector3<f64>,
    },
    Pivot {
        from: Vector3<f64>,
        to: Vector3<f64>,
    },
    Radius {
        from: f64,
        to: f64,
    },
}

#[derive(Debug, Clone)]
struct ViewTransition {
    tween: Tween,
    channels: Vec<Channel>,
}

/// Orbit-style camera view: an eye position looking at a pivot point.
///
/// The projection parameters are carried here so screen-space picking can
/// reconstruct the same frustum the host renders with.
#[derive(Debug, Clone)]
pub struct View {
    pub position: Vector3<f64>,
    pivot: Vector3<f64>,
    pub up: Vector3<f64>,
    pub fovy: Rad<f64>,
    pub znear: f64,
    pub zfar: f64,
    transition: Option<ViewTransition>,
}

impl View {
    pub fn new(position: Vector3<f64>, pivot: Vector3<f64>) -> Self {
        Self {
            position,
            pivot,
            up: Vector3::unit_z(),
            fovy: Rad(std::f64::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1_000_000.0,
            transition: None,
        }
    }

    /// The point the camera orbits around.
    pub fn get_pivot(&self) -> Vector3<f64> {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vector3<f64>) {
        self.pivot = pivot;
    }

    /// Normalized direction from the eye toward the pivot.
    ///
    /// Falls back to +X when eye and pivot coincide.
    pub fn direction(&self) -> Vector3<f64> {
        let dir = self.pivot - self.position;
        if dir.magnitude2() < 1e-24 {
            return Vector3::unit_x();
        }
        dir.normalize()
    }

    /// Orbit radius: distance between eye and pivot.
    pub fn radius(&self) -> f64 {
        (self.pivot - self.position).magnitude()
    }

    /// Moves the eye along the current view direction so the orbit radius
    /// becomes `radius`, keeping the pivot fixed.
    pub fn set_radius(&mut self, radius: f64) {
        let dir = self.direction();
        self.position = self.pivot - dir * radius;
    }

    /// Animates eye and pivot to the given values over `duration_ms` with a
    /// quartic-out ease. A non-positive duration snaps immediately.
    pub fn set_view(&mut self, position: Vector3<f64>, target: Vector3<f64>, duration_ms: f64) {
        if duration_ms <= 0.0 {
            self.position = position;
            self.pivot = target;
            self.transition = None;
            return;
        }
        self.animate(
            vec![
                Channel::Position {
                    from: self.position,
                    to: position,
                },
                Channel::Pivot {
                    from: self.pivot,
                    to: target,
                },
            ],
            duration_ms,
        );
    }

    /// Starts a transition over arbitrary channels, replacing any transition
    /// already in flight.
    pub fn animate(&mut self, channels: Vec<Channel>, duration_ms: f64) {
        self.transition = Some(ViewTransition {
            tween: Tween::new(duration_ms, Easing::QuarticOut),
            channels,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Advances the active transition by one frame delta.
    pub fn update(&mut self, dt_ms: f64) {
        let Some(mut transition) = self.transition.take() else {
            return;
        };
        let progress = transition.tween.advance(dt_ms);
        for channel in &transition.channels {
            self.apply_channel(channel, progress);
        }
        if !transition.tween.finished() {
            self.transition = Some(transition);
        }
    }

    fn apply_channel(&mut self, channel: &Channel, progress: f64) {
        match *channel {
            Channel::Position { from, to } => {
                self.position = lerp_vec(from, to, progress);
            }
            Channel::Pivot { from, to } => {
                self.pivot = lerp_vec(from, to, progress);
            }
            Channel::Radius { from, to } => {
                self.set_radius(lerp(from, to, progress));
            }
        }
    }
}

fn lerp_vec(from: Vector3<f64>, to: Vector3<f64>, t: f64) -> Vector3<f64> {
    Vector3::new(
        lerp(from.x, to.x, t),
        lerp(from.y, to.y, t),
        lerp(from.z, to.z, t),
    )
}
