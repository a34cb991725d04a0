//! # Animation primitives
//!
//! Easing curves and fixed-duration tweens used for camera fly-to
//! transitions and the panorama cross-fade. Tweens are advanced explicitly
//! with frame deltas rather than wall-clock reads, so every transition is
//! deterministic under test.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quartic ease-out. Default for camera transitions.
    #[default]
    QuarticOut,
}

impl Easing {
    /// Evaluates the easing curve at time `t`, with `t` clamped to [0, 1].
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::QuarticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt * omt
            }
        }
    }
}

/// A fixed-duration progress tween.
///
/// Tracks elapsed time against a duration and reports eased progress in
/// [0, 1]. A zero-duration tween finishes on its first advance.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    elapsed_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// Advances by `dt_ms` and returns the eased progress in [0, 1].
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.elapsed_ms += dt_ms.max(0.0);
        self.progress()
    }

    /// Eased progress at the current elapsed time.
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.evaluate(self.elapsed_ms / self.duration_ms)
    }

    /// Raw (uneased) fraction of the duration consumed, clamped to [0, 1].
    pub fn raw_progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Linear interpolation helper shared by the tween channels.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
