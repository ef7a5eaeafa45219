//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! `dt` is the scaled tick duration, so a paused clock (dt = 0) freezes
//! everything here for free. Formation units carry no Velocity; the
//! engine repositions them rigidly from the controller.

use hecs::World;

use gridfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
    }
}
