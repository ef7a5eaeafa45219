//! Per-source debris behavior profiles.
//!
//! Hostile shots fall harder and faster than defender shots; destroyed
//! units drift down slowly and settle further back.

use gridfall_core::constants::*;
use gridfall_core::enums::DebrisSource;

/// Kinematic parameters for a debris entity.
#[derive(Debug, Clone, Copy)]
pub struct DebrisProfile {
    /// Acceleration toward the ground plane.
    pub gravity: f64,
    /// Downward speed clamp while falling.
    pub max_fall_speed: f64,
    /// Lateral drag while grounded.
    pub drag: f64,
    /// Depth coordinate of the ground plane for this source.
    pub ground_z: f64,
}

/// Look up the profile for a debris source.
pub fn profile(source: DebrisSource) -> DebrisProfile {
    match source {
        DebrisSource::DefenderShot => DebrisProfile {
            gravity: DEFENDER_DEBRIS_GRAVITY,
            max_fall_speed: DEFENDER_DEBRIS_MAX_FALL,
            drag: SHOT_DEBRIS_DRAG,
            ground_z: SHOT_GROUND_Z,
        },
        DebrisSource::HostileShot => DebrisProfile {
            gravity: HOSTILE_DEBRIS_GRAVITY,
            max_fall_speed: HOSTILE_DEBRIS_MAX_FALL,
            drag: SHOT_DEBRIS_DRAG,
            ground_z: SHOT_GROUND_Z,
        },
        DebrisSource::DestroyedUnit => DebrisProfile {
            gravity: UNIT_DEBRIS_GRAVITY,
            max_fall_speed: UNIT_DEBRIS_MAX_FALL,
            drag: UNIT_DEBRIS_DRAG,
            ground_z: UNIT_GROUND_Z,
        },
    }
}
