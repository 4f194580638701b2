use crate::camera::CameraState;
use crate::engine::World;
use crate::integrator::step;
use crate::sampler::{FieldSample, GridSampler, Viewport};

/// Everything one running visualization owns: the charge set, the camera,
/// the play/pause flag, and the sampler's reusable buffer.
///
/// The driving layer mutates `world` (add/remove/edit charges) and `camera`
/// (pan/zoom) freely between calls; the core makes no assumptions about the
/// set staying the same size or contents from one frame to the next.
#[derive(Debug, Default)]
pub struct SimulationContext {
    pub world: World,
    pub camera: CameraState,
    pub running: bool,
    sampler: GridSampler,
}

impl SimulationContext {
    pub fn new(world: World) -> Self {
        Self {
            world,
            ..Self::default()
        }
    }

    /// Advance particle motion by one tick. Does nothing while paused.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        step(&mut self.world);
    }

    /// Rebuild the field samples for the current camera and viewport.
    pub fn sample_field(&mut self, viewport: Viewport) -> &[FieldSample] {
        self.sampler.sample(&self.camera, viewport, &self.world.charges)
    }

    /// Clear all charges, pause, and return the camera to the origin view.
    pub fn reset(&mut self) {
        self.world.charges.clear();
        self.running = false;
        self.camera.home();
    }
}
