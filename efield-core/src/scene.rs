//! Building initial charge layouts.
//!
//! Charge specs are a compact `q@x,y` form used by the CLI, e.g.
//! `5@500,300` or `-5@400,200`. Zero charge is rejected here; the numeric
//! core itself never validates charge values.

use glam::Vec2;
use thiserror::Error;

use crate::engine::{Charge, World};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("malformed charge spec '{0}', expected q@x,y")]
    Malformed(String),
    #[error("invalid number in charge spec '{0}'")]
    InvalidNumber(String),
    #[error("charge must be nonzero in '{0}'")]
    ZeroCharge(String),
}

/// The four-charge starting layout.
pub fn default_world() -> World {
    World::with_charges(vec![
        Charge::new(5.0, Vec2::new(500.0, 300.0)),
        Charge::new(-5.0, Vec2::new(400.0, 200.0)),
        Charge::new(-5.0, Vec2::new(600.0, 200.0)),
        Charge::new(5.0, Vec2::new(500.0, 100.0)),
    ])
}

/// Parse a single `q@x,y` spec.
pub fn parse_charge_spec(spec: &str) -> Result<Charge, SceneError> {
    let (q_str, pos_str) = spec
        .split_once('@')
        .ok_or_else(|| SceneError::Malformed(spec.to_string()))?;
    let (x_str, y_str) = pos_str
        .split_once(',')
        .ok_or_else(|| SceneError::Malformed(spec.to_string()))?;

    let parse = |s: &str| -> Result<f32, SceneError> {
        let v: f32 = s
            .trim()
            .parse()
            .map_err(|_| SceneError::InvalidNumber(spec.to_string()))?;
        if !v.is_finite() {
            return Err(SceneError::InvalidNumber(spec.to_string()));
        }
        Ok(v)
    };

    let q = parse(q_str)?;
    if q == 0.0 {
        return Err(SceneError::ZeroCharge(spec.to_string()));
    }

    Ok(Charge::new(q, Vec2::new(parse(x_str)?, parse(y_str)?)))
}

/// Parse a whitespace-separated list of charge specs into a world.
pub fn parse_scene(input: &str) -> Result<World, SceneError> {
    let charges = input
        .split_whitespace()
        .map(parse_charge_spec)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(World::with_charges(charges))
}
