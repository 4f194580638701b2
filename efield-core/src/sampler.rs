use glam::Vec2;

use crate::camera::CameraState;
use crate::engine::{field_at, Charge};
use crate::math::limit;

/// Distance between adjacent samples in *screen* pixels. World-space
/// spacing is this divided by the zoom scale, which is what keeps the
/// on-screen sample density constant while zooming.
pub const SCREEN_SPACING: f32 = 30.0;

/// Hard cap on samples per pass. A viewport that would need more gets a
/// truncated grid (bottom/right rows missing) instead of a stall.
pub const MAX_SAMPLES: usize = 12_000;

/// Maximum displayed vector length; longer field vectors are clamped so
/// arrows near a charge do not cover the whole screen.
pub const DISPLAY_CAP: f32 = 200.0;

/// Visible drawing area in screen pixels. `ui_reserved_height` is the strip
/// at the bottom taken up by controls, excluded from sampling.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub ui_reserved_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, ui_reserved_height: f32) -> Self {
        Self {
            width,
            height,
            ui_reserved_height,
        }
    }
}

/// One evaluated lattice point: where it is (world space) and the
/// display-adjusted field vector there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub pos: Vec2,
    pub vec: Vec2,
}

/// Evaluates the field on a world-aligned lattice covering the viewport.
///
/// Owns the sample buffer; every call to [`GridSampler::sample`] discards
/// the previous pass and rebuilds from empty. There is no caching between
/// frames and no sample identity carried across calls.
#[derive(Debug, Default)]
pub struct GridSampler {
    samples: Vec<FieldSample>,
}

impl GridSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    /// One sampling pass. Returns the rebuilt sample list in row-major
    /// order (ascending y, then ascending x).
    ///
    /// Lattice positions are integer multiples of the world-space spacing,
    /// not the viewport edge: the start index is `floor(left / spacing)`,
    /// so the grid stays pinned to absolute world coordinates and does not
    /// swim while panning. Each vector is scaled by `1/scale` (arrow length
    /// stays stable under zoom) and clamped to [`DISPLAY_CAP`].
    pub fn sample(
        &mut self,
        camera: &CameraState,
        viewport: Viewport,
        charges: &[Charge],
    ) -> &[FieldSample] {
        self.samples.clear();

        let scale = camera.scale;
        let left = -camera.offset.x / scale;
        let top = -camera.offset.y / scale;
        let right = (viewport.width - camera.offset.x) / scale;
        let bottom = (viewport.height - viewport.ui_reserved_height - camera.offset.y) / scale;

        let spacing = SCREEN_SPACING / scale;

        // Positions are computed as index * spacing rather than by repeated
        // addition, so two passes at the same zoom produce bit-identical
        // lattice points regardless of pan.
        let ix0 = (left / spacing).floor() as i64;
        let iy0 = (top / spacing).floor() as i64;

        let mut iy = iy0;
        loop {
            let y = iy as f32 * spacing;
            if y > bottom {
                break;
            }

            let mut ix = ix0;
            loop {
                let x = ix as f32 * spacing;
                if x > right {
                    break;
                }
                if self.samples.len() >= MAX_SAMPLES {
                    return &self.samples;
                }

                let pos = Vec2::new(x, y);
                let vec = limit(field_at(pos, charges, None) / scale, DISPLAY_CAP);
                self.samples.push(FieldSample { pos, vec });

                ix += 1;
            }

            iy += 1;
        }

        &self.samples
    }
}
