//! Collision resolver: a read-only scan producing contacts for the
//! engine to apply.
//!
//! Only flying, damage-capable projectiles are shooters. Each projectile
//! claims at most one target per tick (its nearest overlap), and each
//! target is claimed at most once per tick, so two simultaneous shots
//! into the same unit cost exactly one unit. The scan never mutates the
//! world; ordering by entity bits keeps it deterministic.

use std::collections::HashSet;

use hecs::{Entity, World};

use gridfall_core::components::{Defender, HostileUnit, Kind, Lifecycle, Projectile};
use gridfall_core::constants::*;
use gridfall_core::enums::{EntityKind, LifecycleState, OriginSide};
use gridfall_core::types::Position;
use gridfall_lifecycle::dispatch::{damage_rule, DamageAction};

/// A resolved projectile-target contact.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub projectile: Entity,
    pub origin: OriginSide,
    pub target: Entity,
    pub target_kind: EntityKind,
    pub action: DamageAction,
    /// Target position at scan time, for impact events.
    pub position: Position,
}

struct Candidate {
    entity: Entity,
    position: Position,
    kind: EntityKind,
}

pub fn scan(world: &World) -> Vec<Contact> {
    let mut shooters: Vec<(Entity, Position, OriginSide)> = world
        .query::<(&Position, &Lifecycle, &Projectile)>()
        .iter()
        .filter(|(_, (_, lc, _))| lc.state == LifecycleState::Flying && lc.can_damage)
        .map(|(entity, (pos, _, proj))| (entity, *pos, proj.origin))
        .collect();
    shooters.sort_by_key(|(entity, _, _)| entity.to_bits());

    let targets = collect_targets(world);

    let mut contacts = Vec::new();
    let mut claimed: HashSet<Entity> = HashSet::new();

    for (projectile, pos, origin) in shooters {
        let best = targets
            .iter()
            .filter(|t| !claimed.contains(&t.entity))
            .filter_map(|t| {
                let action = damage_rule(origin, t.kind)?;
                let range = pos.range_to(&t.position);
                (range <= radius_for(t.kind) + PROJECTILE_RADIUS).then_some((range, t, action))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        if let Some((_, target, action)) = best {
            claimed.insert(target.entity);
            contacts.push(Contact {
                projectile,
                origin,
                target: target.entity,
                target_kind: target.kind,
                action,
                position: target.position,
            });
        }
    }

    contacts
}

/// Collect everything a projectile could hit. Inert defenders and dead
/// units are out of collision consideration; projectiles and debris are
/// never targets.
fn collect_targets(world: &World) -> Vec<Candidate> {
    let mut targets: Vec<Candidate> = world
        .query::<(&Position, &Kind, Option<&Defender>, Option<&HostileUnit>)>()
        .iter()
        .filter(|(_, (_, kind, defender, unit))| match kind.0 {
            EntityKind::Projectile | EntityKind::Debris => false,
            EntityKind::Defender => defender.map_or(false, |d| !d.inert),
            EntityKind::HostileUnit => unit.map_or(false, |u| u.alive),
            EntityKind::BonusFlyer | EntityKind::ShieldSegment => true,
        })
        .map(|(entity, (pos, kind, _, _))| Candidate {
            entity,
            position: *pos,
            kind: kind.0,
        })
        .collect();
    targets.sort_by_key(|t| t.entity.to_bits());
    targets
}

fn radius_for(kind: EntityKind) -> f64 {
    match kind {
        EntityKind::Defender => DEFENDER_RADIUS,
        EntityKind::HostileUnit => UNIT_RADIUS,
        EntityKind::BonusFlyer => FLYER_RADIUS,
        EntityKind::ShieldSegment => SHIELD_RADIUS,
        EntityKind::Projectile => PROJECTILE_RADIUS,
        EntityKind::Debris => DEBRIS_RADIUS,
    }
}
