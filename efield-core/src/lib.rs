pub mod camera;
pub mod engine;
pub mod integrator;
pub mod math;
pub mod runtime;
pub mod sampler;
pub mod scene;

pub use camera::CameraState;
pub use engine::{field_at, Charge, World};
pub use runtime::SimulationContext;
pub use sampler::{FieldSample, GridSampler, Viewport};
pub use scene::{default_world, parse_charge_spec, parse_scene, SceneError};
