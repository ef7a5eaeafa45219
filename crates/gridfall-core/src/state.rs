//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimClock, SimTime, TemplateId, Velocity};

/// Complete game state handed to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub clock: SimClock,
    pub phase: MatchPhase,
    pub score: ScoreView,
    pub formation: FormationView,
    pub defender: Option<DefenderView>,
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub shields: Vec<ShieldView>,
    pub bonus_flyer: Option<FlyerView>,
    pub events: Vec<GameEvent>,
}

/// Score, lives, and wave counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub wave: u32,
}

/// Formation aggregate state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationView {
    pub root: Position,
    /// +1.0 moving right, -1.0 moving left.
    pub direction: f64,
    pub current_step_time: f64,
    pub current_fire_interval: f64,
    pub units_remaining: u32,
    pub units_total: u32,
}

/// Defender position and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefenderView {
    pub position: Position,
    pub inert: bool,
}

/// A live hostile unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub position: Position,
    pub class: UnitClass,
    pub point_value: u32,
    pub row: usize,
    pub col: usize,
    pub template: TemplateId,
}

/// A projectile or debris entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub kind: EntityKind,
    pub origin: OriginSide,
    pub state: LifecycleState,
    pub source: DebrisSource,
}

/// A shield segment with remaining health, for damage-scaled rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldView {
    pub segment_id: u32,
    pub position: Position,
    pub health_fraction: f64,
}

/// The bonus flyer, when one is crossing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlyerView {
    pub position: Position,
    pub direction: f64,
}
