//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity kind tag. Every live entity carries exactly one kind at a time;
/// kind changes (Projectile -> Debris, HostileUnit -> Debris,
/// Debris -> Projectile on repurpose) are transitions on the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Defender,
    HostileUnit,
    BonusFlyer,
    ShieldSegment,
    Projectile,
    Debris,
}

/// Hostile unit class, derived from formation row at spawn.
/// Determines the fixed point value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Front rows, 10 points.
    #[default]
    Light,
    /// Middle rows, 20 points.
    Medium,
    /// Back row, 30 points.
    Heavy,
}

impl UnitClass {
    /// Fixed point value for this class. Never changes after spawn.
    pub fn point_value(&self) -> u32 {
        match self {
            UnitClass::Light => 10,
            UnitClass::Medium => 20,
            UnitClass::Heavy => 30,
        }
    }
}

/// Which side launched a projectile. Flips on repurpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginSide {
    Defender,
    Hostile,
}

impl OriginSide {
    pub fn opposite(&self) -> Self {
        match self {
            OriginSide::Defender => OriginSide::Hostile,
            OriginSide::Hostile => OriginSide::Defender,
        }
    }
}

/// Projectile/debris lifecycle state. Monotonic forward except for the
/// explicit Repurposed -> Flying cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Constant-velocity flight along the depth axis.
    #[default]
    Flying,
    /// Spent; pulled toward the ground plane by per-source gravity.
    FallingDebris,
    /// At rest on the ground plane; moved only by explicit pushes.
    GroundedDebris,
    /// Relaunch in progress: relocated to the defender fire point,
    /// re-enters Flying with reversed origin and velocity.
    Repurposed,
}

/// What a debris entity used to be. Selects its fall/drag profile and
/// gates repurpose eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebrisSource {
    DefenderShot,
    HostileShot,
    DestroyedUnit,
}

/// High-level match state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    MainMenu,
    Playing,
    /// Defender was hit non-fatally; inert until the respawn continuation
    /// fires.
    RespawnWait,
    /// Formation cleared; next wave spawns after the transition delay.
    WaveTransition,
    /// Terminal until an explicit restart.
    GameOver,
}

/// Fire-interval scaling model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireScaling {
    /// Fire rate accelerates with descent progress only.
    DescentOnly,
    /// Fire rate accelerates with both attrition and descent.
    #[default]
    Combined,
}
