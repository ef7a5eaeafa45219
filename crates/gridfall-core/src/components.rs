//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::TemplateId;

/// Kind tag carried by every live entity. The collision resolver and the
/// snapshot builder dispatch on this; it is mutated (never re-spawned)
/// when a projectile or unit becomes debris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind(pub EntityKind);

/// A hostile formation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileUnit {
    pub class: UnitClass,
    /// Fixed at spawn from `class`; never changes after.
    pub point_value: u32,
    pub alive: bool,
    /// Grid slot within the formation.
    pub row: usize,
    pub col: usize,
    /// Opaque asset template for the presentation collaborator.
    pub template: TemplateId,
}

/// Flight parameters of a projectile. Paired with `Lifecycle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: OriginSide,
    pub speed: f64,
}

/// Lifecycle state shared by projectiles and debris. Attached to a
/// projectile at spawn and to a hostile unit when it dies into debris.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifecycle {
    pub state: LifecycleState,
    pub source: DebrisSource,
    /// False from the moment the entity leaves Flying; a debris-state
    /// entity can never deal damage, even mid-transition.
    pub can_damage: bool,
    /// Simulation second at which this entity is removed. Set once on
    /// entering FallingDebris, cleared by repurpose.
    pub expires_at_secs: Option<f64>,
}

/// One block of a defensive shield cluster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShieldSegment {
    pub id: u32,
    pub health: i32,
    pub max_health: i32,
}

/// The bonus flyer crossing behind the formation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BonusFlyer {
    /// Lateral travel direction, +1.0 or -1.0.
    pub direction: f64,
}

/// The player's cannon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Defender {
    /// True while a respawn continuation is pending; an inert defender
    /// is removed from collision consideration and cannot fire.
    pub inert: bool,
}
