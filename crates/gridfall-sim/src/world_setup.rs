//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use gridfall_core::components::*;
use gridfall_core::constants::*;
use gridfall_core::enums::*;
use gridfall_core::types::{Position, Velocity};

use crate::formation::FormationController;

/// Set up a fresh match world: defender, shield clusters, and the
/// formation grid.
pub fn setup_match(world: &mut World, formation: &FormationController, next_shield_id: &mut u32) {
    spawn_defender(world);
    spawn_shields(world, next_shield_id);
    spawn_units(world, formation);
}

/// Spawn the defender at the center of its line.
pub fn spawn_defender(world: &mut World) -> hecs::Entity {
    world.spawn((
        Kind(EntityKind::Defender),
        Defender::default(),
        Position::new(0.0, 0.0, DEFENDER_START_Z),
    ))
}

/// Spawn all shield clusters, spread evenly across the lateral axis.
pub fn spawn_shields(world: &mut World, next_shield_id: &mut u32) {
    for i in 0..SHIELD_CLUSTER_COUNT {
        let center_x =
            (i as f64 - (SHIELD_CLUSTER_COUNT as f64 - 1.0) / 2.0) * SHIELD_CLUSTER_SPACING;
        spawn_shield_cluster(world, center_x, next_shield_id);
    }
}

/// One cluster: a block grid with the entry arch carved out of the face
/// toward the defender.
fn spawn_shield_cluster(world: &mut World, center_x: f64, next_shield_id: &mut u32) {
    for d in 0..SHIELD_BLOCKS_DEEP {
        for w in 0..SHIELD_BLOCKS_WIDE {
            let arch = (d == 0 && (1..=3).contains(&w)) || (d == 1 && w == 2);
            if arch {
                continue;
            }
            let id = *next_shield_id;
            *next_shield_id += 1;
            let x = center_x + (w as f64 - (SHIELD_BLOCKS_WIDE as f64 - 1.0) / 2.0)
                * SHIELD_BLOCK_SIZE;
            let z = SHIELD_Z + (d as f64 - (SHIELD_BLOCKS_DEEP as f64 - 1.0) / 2.0)
                * SHIELD_BLOCK_SIZE;
            world.spawn((
                Kind(EntityKind::ShieldSegment),
                ShieldSegment {
                    id,
                    health: SHIELD_MAX_HEALTH,
                    max_health: SHIELD_MAX_HEALTH,
                },
                Position::new(x, 0.0, z),
            ));
        }
    }
}

/// Spawn the full formation grid at the controller's slot positions.
pub fn spawn_units(world: &mut World, formation: &FormationController) {
    for row in 0..formation.rows() {
        for col in 0..formation.cols() {
            let class = FormationController::class_for_row(row);
            world.spawn((
                Kind(EntityKind::HostileUnit),
                HostileUnit {
                    class,
                    point_value: class.point_value(),
                    alive: true,
                    row,
                    col,
                    template: formation.template_for(class).clone(),
                },
                formation.slot_position(row, col),
            ));
        }
    }
}

/// Spawn a flying projectile for either side. Speed and heading follow
/// the origin: defender shots travel toward +z, hostile shots toward -z.
pub fn spawn_projectile(world: &mut World, origin: OriginSide, position: Position) -> hecs::Entity {
    let (speed, vz, source) = match origin {
        OriginSide::Defender => (DEFENDER_SHOT_SPEED, DEFENDER_SHOT_SPEED, DebrisSource::DefenderShot),
        OriginSide::Hostile => (HOSTILE_SHOT_SPEED, -HOSTILE_SHOT_SPEED, DebrisSource::HostileShot),
    };
    world.spawn((
        Kind(EntityKind::Projectile),
        Projectile { origin, speed },
        Lifecycle {
            state: LifecycleState::Flying,
            source,
            can_damage: true,
            expires_at_secs: None,
        },
        position,
        Velocity::new(0.0, 0.0, vz),
    ))
}

/// Spawn the bonus flyer just outside the playfield, crossing behind the
/// formation.
pub fn spawn_flyer(world: &mut World, direction: f64) -> hecs::Entity {
    let x = if direction > 0.0 {
        LEFT_BOUND - 1.0
    } else {
        RIGHT_BOUND + 1.0
    };
    world.spawn((
        Kind(EntityKind::BonusFlyer),
        BonusFlyer { direction },
        Position::new(x, 0.0, FLYER_Z),
        Velocity::new(direction * FLYER_SPEED, 0.0, 0.0),
    ))
}
