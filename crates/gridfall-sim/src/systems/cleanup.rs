//! Cleanup system: removes entities queued for despawn, debris shoved
//! off the field, and the flyer once it has crossed the playfield.

use hecs::{Entity, World};

use gridfall_core::components::{BonusFlyer, Lifecycle};
use gridfall_core::constants::RIGHT_BOUND;
use gridfall_core::enums::LifecycleState;
use gridfall_core::types::Position;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    // A flyer past the far edge leaves without a bonus.
    for (entity, (flyer, pos)) in world.query_mut::<(&BonusFlyer, &Position)>() {
        if pos.x * flyer.direction > RIGHT_BOUND + 1.0 {
            despawn_buffer.push(entity);
        }
    }

    // Grounded debris pushed past the lateral bounds is swept early.
    for (entity, (lc, pos)) in world.query_mut::<(&Lifecycle, &Position)>() {
        if lc.state == LifecycleState::GroundedDebris && pos.x.abs() > RIGHT_BOUND + 1.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
