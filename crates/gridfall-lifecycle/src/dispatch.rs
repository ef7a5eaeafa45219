//! Kind-keyed damage dispatch.
//!
//! The collision resolver asks this table what a flying projectile does
//! to a target of a given kind. Debris is never consulted: an entity
//! whose `can_damage` flag is down never reaches dispatch.

use gridfall_core::enums::{EntityKind, OriginSide};

/// Action resolved for a projectile/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageAction {
    /// Kill the formation unit and award its point value.
    KillUnit,
    /// Cost the defender a life (or the match).
    HitDefender,
    /// Decrement the shield segment's health.
    DamageShield,
    /// Destroy the bonus flyer and award a random bonus.
    DestroyFlyer,
}

/// Resolve what a flying projectile from `origin` does to `target`.
/// `None` means the pair does not interact: friendly fire passes
/// through, and non-damageable kinds are ignored.
pub fn damage_rule(origin: OriginSide, target: EntityKind) -> Option<DamageAction> {
    use EntityKind::*;
    match (origin, target) {
        (OriginSide::Defender, HostileUnit) => Some(DamageAction::KillUnit),
        (OriginSide::Defender, BonusFlyer) => Some(DamageAction::DestroyFlyer),
        (OriginSide::Hostile, Defender) => Some(DamageAction::HitDefender),
        // Shields block shots from both sides.
        (_, ShieldSegment) => Some(DamageAction::DamageShield),
        _ => None,
    }
}
