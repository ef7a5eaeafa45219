//! Lifecycle advancement system.
//!
//! Drives the per-entity rules from gridfall-lifecycle: shots past their
//! miss boundary become falling debris, falling debris accelerates
//! toward its ground plane and settles, grounded debris bleeds lateral
//! speed through drag, and anything past its expiry second is queued
//! for despawn. Illegal transitions are logged and dropped.

use hecs::{Entity, World};

use gridfall_core::components::{Kind, Lifecycle, Projectile};
use gridfall_core::constants::DEBRIS_LIFETIME_SECS;
use gridfall_core::enums::{DebrisSource, EntityKind, LifecycleState};
use gridfall_core::types::{Position, Velocity};
use gridfall_lifecycle::fsm;
use gridfall_lifecycle::profiles::profile;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, now: f64, dt: f64) {
    // Flying shots past their miss boundary turn into debris.
    for (_entity, (pos, lc, kind, proj)) in
        world.query_mut::<(&Position, &mut Lifecycle, &mut Kind, &Projectile)>()
    {
        if lc.state == LifecycleState::Flying && fsm::missed(proj.origin, pos.z) {
            enter_falling(lc, kind, now);
        }
    }

    // Falling and grounded kinematics.
    for (_entity, (pos, vel, lc)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Lifecycle)>()
    {
        match lc.state {
            LifecycleState::FallingDebris => {
                let p = profile(lc.source);
                vel.z = fsm::fall_step(vel.z, &p, dt);
                if fsm::reached_ground(pos.z, &p) {
                    pos.z = p.ground_z;
                    vel.z = 0.0;
                    match fsm::try_transition(lc.state, LifecycleState::GroundedDebris) {
                        Ok(state) => lc.state = state,
                        Err(e) => log::warn!("dropped lifecycle transition: {e}"),
                    }
                }
            }
            LifecycleState::GroundedDebris => {
                vel.x = fsm::drag_decay(vel.x, profile(lc.source).drag, dt);
            }
            LifecycleState::Flying | LifecycleState::Repurposed => {}
        }
    }

    // Expiry.
    for (entity, lc) in world.query_mut::<&Lifecycle>() {
        if lc.expires_at_secs.is_some_and(|at| now >= at) {
            despawn_buffer.push(entity);
        }
    }
}

/// Move a spent flying entity into FallingDebris: damage off, expiry
/// armed, kind retagged. Logs and drops an illegal edge.
pub fn enter_falling(lc: &mut Lifecycle, kind: &mut Kind, now: f64) {
    match fsm::try_transition(lc.state, LifecycleState::FallingDebris) {
        Ok(state) => {
            lc.state = state;
            lc.can_damage = false;
            lc.expires_at_secs = Some(now + DEBRIS_LIFETIME_SECS);
            kind.0 = EntityKind::Debris;
        }
        Err(e) => log::warn!("dropped lifecycle transition: {e}"),
    }
}

/// Lifecycle component for an entity born as debris (a destroyed unit
/// has no Flying state to leave).
pub fn debris(source: DebrisSource, now: f64) -> Lifecycle {
    Lifecycle {
        state: LifecycleState::FallingDebris,
        source,
        can_damage: false,
        expires_at_secs: Some(now + DEBRIS_LIFETIME_SECS),
    }
}
