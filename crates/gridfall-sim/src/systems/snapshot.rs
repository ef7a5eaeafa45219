//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. Read-only — it never modifies the world.

use hecs::World;

use gridfall_core::components::*;
use gridfall_core::enums::{EntityKind, OriginSide};
use gridfall_core::events::GameEvent;
use gridfall_core::state::*;
use gridfall_core::types::{Position, SimClock, SimTime, Velocity};

use crate::director::MatchDirector;
use crate::formation::FormationController;

pub fn build(
    world: &World,
    time: &SimTime,
    clock: &SimClock,
    director: &MatchDirector,
    formation: &FormationController,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        clock: *clock,
        phase: director.phase,
        score: ScoreView {
            score: director.score,
            high_score: director.high_score,
            lives: director.lives,
            wave: director.wave,
        },
        formation: FormationView {
            root: formation.root(),
            direction: formation.direction(),
            current_step_time: formation.current_step_time(),
            current_fire_interval: formation.current_fire_interval(),
            units_remaining: formation.units_remaining(),
            units_total: formation.units_total(),
        },
        defender: build_defender(world),
        units: build_units(world),
        projectiles: build_projectiles(world),
        shields: build_shields(world),
        bonus_flyer: build_flyer(world),
        events,
    }
}

fn build_defender(world: &World) -> Option<DefenderView> {
    world
        .query::<(&Defender, &Position)>()
        .iter()
        .next()
        .map(|(_, (defender, pos))| DefenderView {
            position: *pos,
            inert: defender.inert,
        })
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&HostileUnit, &Position, &Kind)>()
        .iter()
        .filter(|(_, (unit, _, kind))| unit.alive && kind.0 == EntityKind::HostileUnit)
        .map(|(_, (unit, pos, _))| UnitView {
            position: *pos,
            class: unit.class,
            point_value: unit.point_value,
            row: unit.row,
            col: unit.col,
            template: unit.template.clone(),
        })
        .collect();
    units.sort_by_key(|u| (u.row, u.col));
    units
}

/// Everything with a lifecycle: flying shots and every flavor of debris.
/// Destroyed-unit debris carries no Projectile component; its origin
/// reads as Hostile.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Velocity, &Lifecycle, &Kind, Option<&Projectile>)>()
        .iter()
        .map(|(_, (pos, vel, lc, kind, proj))| ProjectileView {
            position: *pos,
            velocity: *vel,
            kind: kind.0,
            origin: proj.map_or(OriginSide::Hostile, |p| p.origin),
            state: lc.state,
            source: lc.source,
        })
        .collect()
}

fn build_shields(world: &World) -> Vec<ShieldView> {
    let mut shields: Vec<ShieldView> = world
        .query::<(&ShieldSegment, &Position)>()
        .iter()
        .map(|(_, (segment, pos))| ShieldView {
            segment_id: segment.id,
            position: *pos,
            health_fraction: segment.health.max(0) as f64 / segment.max_health as f64,
        })
        .collect();
    shields.sort_by_key(|s| s.segment_id);
    shields
}

fn build_flyer(world: &World) -> Option<FlyerView> {
    world
        .query::<(&BonusFlyer, &Position)>()
        .iter()
        .next()
        .map(|(_, (flyer, pos))| FlyerView {
            position: *pos,
            direction: flyer.direction,
        })
}
