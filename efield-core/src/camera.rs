use glam::Vec2;

/// Allowed zoom range. Anything the input layer produces is clamped into
/// this before the core ever sees it.
pub const MIN_SCALE: f32 = 0.2;
pub const MAX_SCALE: f32 = 1.1;

/// Zoom step applied per wheel notch by the driving layer.
pub const ZOOM_STEP: f32 = 1.05;

/// Pan/zoom state defining the world-to-screen transform.
///
/// Owned by the input layer; the sampler only reads it. The helpers here
/// keep the transform math in one place so pan and zoom stay consistent
/// with how the sampler computes its world-space bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-to-screen translation, in screen pixels.
    pub offset: Vec2,
    /// Zoom factor, always within [`MIN_SCALE`, `MAX_SCALE`].
    pub scale: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CameraState {
    pub fn new(offset: Vec2, scale: f32) -> Self {
        Self {
            offset,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }

    pub fn world_to_screen(&self, w: Vec2) -> Vec2 {
        w * self.scale + self.offset
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom by `factor` while keeping the world point under `anchor`
    /// (a screen position) fixed on screen.
    pub fn zoom_at(&mut self, anchor: Vec2, factor: f32) {
        let world_before = (anchor - self.offset) / self.scale;
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.offset = anchor - world_before * self.scale;
    }

    /// Reset to the origin view.
    pub fn home(&mut self) {
        *self = Self::default();
    }
}
