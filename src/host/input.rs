//! Pointer and render-surface state mirrored from the host.

/// Current pointer position in surface pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of the host's render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSurface {
    pub width: u32,
    pub height: u32,
}

impl RenderSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size_px(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}
