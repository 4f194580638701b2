use glam::Vec2;

use crate::engine::{field_at, World};

/// Damping/time-scale constant folded into the force application.
pub const FORCE_DAMPING: f32 = 100.0;

/// Advance every particle by one tick.
///
/// Particles are processed sequentially in storage order: each one's field
/// is evaluated against the set as it currently stands, so a particle late
/// in the list sees earlier particles' already-updated positions within the
/// same tick.
///
/// The per-particle update order is deliberately unusual and must stay this
/// way: position moves by the *previous* tick's velocity first, then
/// velocity absorbs this tick's acceleration, then the accumulator resets.
pub fn step(world: &mut World) {
    for i in 0..world.charges.len() {
        let field = field_at(world.charges[i].pos, &world.charges, Some(i));

        let p = &mut world.charges[i];
        let force = field * p.charge;
        p.acc += force * (1.0 / p.mass / FORCE_DAMPING);

        p.pos += p.vel;
        p.vel += p.acc;
        p.acc = Vec2::ZERO;
    }
}
