use glam::Vec2;

use crate::math::with_magnitude;

/// Overall field strength constant, shared by the particle force path and
/// the visualization sampling path.
pub const FIELD_CONSTANT: f32 = 2e2;

/// Exponent of the inverse-power distance falloff. Tuned for looks, not
/// physics (true Coulomb would be 2.0).
pub const FIELD_EXPONENT: f32 = 0.86;

/// Minimum distance used in the denominator so a query point sitting on a
/// charge cannot blow up to infinity/NaN.
pub const EPSILON_R: f32 = 1e-4;

/// Mass assigned to positive charges at construction (the proton/electron
/// mass ratio).
pub const POSITIVE_MASS: f32 = 1836.0;

/// Mass assigned to negative charges at construction.
pub const NEGATIVE_MASS: f32 = 1.0;

/// A point charge in the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Charge {
    /// Signed charge value. Zero is rejected at the scene boundary, not here.
    pub charge: f32,
    /// Derived from the sign of `charge` at construction and never revisited,
    /// even if the charge is later flipped or edited. See `World::flip_charge`.
    pub mass: f32,
    /// Position in world coordinates.
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scratch accumulator, reset to zero every tick.
    pub acc: Vec2,
}

impl Charge {
    pub fn new(charge: f32, pos: Vec2) -> Self {
        let mass = if charge > 0.0 {
            POSITIVE_MASS
        } else {
            NEGATIVE_MASS
        };
        Self {
            charge,
            mass,
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
        }
    }
}

/// The set of charges making up the simulated world.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub charges: Vec<Charge>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charges(charges: Vec<Charge>) -> Self {
        Self { charges }
    }

    /// Flip the sign of charge `i`. Mass is intentionally NOT recomputed:
    /// it is derived once at construction, so an edited charge keeps its
    /// stale mass. Known quirk, kept deliberately.
    pub fn flip_charge(&mut self, i: usize) {
        if let Some(c) = self.charges.get_mut(i) {
            c.charge = -c.charge;
        }
    }

    /// Replace the charge value of charge `i`. Zero is rejected (validation
    /// lives at the editing boundary). Mass keeps its construction-time
    /// value, same quirk as `flip_charge`.
    pub fn set_charge(&mut self, i: usize, q: f32) -> bool {
        if q == 0.0 {
            return false;
        }
        match self.charges.get_mut(i) {
            Some(c) => {
                c.charge = q;
                true
            }
            None => false,
        }
    }
}

/// Net field vector at `point` from every charge except `exclude`.
///
/// Each charge contributes a vector aimed along `(charge.pos - point)` with
/// signed magnitude `-q / safe_r^0.86 * K`: a positive charge yields a
/// negative magnitude, flipping the contribution to point away from it
/// (repulsion); a negative charge pulls toward itself. The result is not
/// capped here; display capping is the sampler's policy.
pub fn field_at(point: Vec2, charges: &[Charge], exclude: Option<usize>) -> Vec2 {
    let mut sum = Vec2::ZERO;

    for (i, c) in charges.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }

        let r = point.distance(c.pos);
        let safe_r = r.max(EPSILON_R);
        let magnitude = -c.charge / safe_r.powf(FIELD_EXPONENT) * FIELD_CONSTANT;

        sum += with_magnitude(c.pos - point, magnitude);
    }

    sum
}
