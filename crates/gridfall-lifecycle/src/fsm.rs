//! Lifecycle finite state machine.
//!
//! The lifecycle is monotonic forward — Flying, FallingDebris,
//! GroundedDebris — with exactly one backward edge: grounded hostile-shot
//! debris can be repurposed, which re-enters Flying with the origin side
//! reversed. Everything here is a pure function; the driving system in
//! the sim crate owns the ECS side effects.

use gridfall_core::constants::{DEFENDER_SHOT_MISS_Z, HOSTILE_SHOT_MISS_Z};
use gridfall_core::enums::{DebrisSource, LifecycleState, OriginSide};
use gridfall_core::errors::InvalidTransition;

use crate::profiles::DebrisProfile;

/// Whether `from -> to` is a legal lifecycle edge.
pub fn is_legal(from: LifecycleState, to: LifecycleState) -> bool {
    use LifecycleState::*;
    matches!(
        (from, to),
        (Flying, FallingDebris)
            | (FallingDebris, GroundedDebris)
            | (GroundedDebris, Repurposed)
            | (Repurposed, Flying)
    )
}

/// Attempt a transition, returning the new state or the rejected edge.
pub fn try_transition(
    from: LifecycleState,
    to: LifecycleState,
) -> Result<LifecycleState, InvalidTransition> {
    if is_legal(from, to) {
        Ok(to)
    } else {
        Err(InvalidTransition { from, to })
    }
}

/// Whether a flying projectile has crossed its miss boundary.
/// Defender shots travel toward +z and miss past the formation; hostile
/// shots travel toward -z and miss past the defender.
pub fn missed(origin: OriginSide, z: f64) -> bool {
    match origin {
        OriginSide::Defender => z > DEFENDER_SHOT_MISS_Z,
        OriginSide::Hostile => z < HOSTILE_SHOT_MISS_Z,
    }
}

/// One falling step: gravity pulls the depth velocity toward the ground
/// (-z), clamped to the profile's maximum fall speed.
pub fn fall_step(vz: f64, profile: &DebrisProfile, dt: f64) -> f64 {
    (vz - profile.gravity * dt).max(-profile.max_fall_speed)
}

/// Whether falling debris has reached its ground plane.
pub fn reached_ground(z: f64, profile: &DebrisProfile) -> bool {
    z <= profile.ground_z
}

/// One grounded step: drag decays a velocity component toward rest.
pub fn drag_decay(v: f64, drag: f64, dt: f64) -> f64 {
    v / (1.0 + drag * dt)
}

/// Whether this debris is eligible for repurposing: grounded, and
/// originally a hostile shot.
pub fn can_repurpose(state: LifecycleState, source: DebrisSource) -> bool {
    state == LifecycleState::GroundedDebris && source == DebrisSource::HostileShot
}

/// Execute the repurpose cycle: GroundedDebris -> Repurposed -> Flying.
/// The caller is responsible for relocating the entity, flipping its
/// origin side, and reversing its velocity.
pub fn repurpose(state: LifecycleState) -> Result<LifecycleState, InvalidTransition> {
    let mid = try_transition(state, LifecycleState::Repurposed)?;
    try_transition(mid, LifecycleState::Flying)
}
