//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary; the
//! simulation never polls devices itself.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Sampled lateral axis value, clamped to [-1, 1]. Persists until the
    /// next sample.
    SetAxis { value: f64 },
    /// Fire button edge.
    Fire,

    // --- Simulation control ---
    /// Pause the match clock.
    Pause,
    /// Resume the match clock.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen). Clamped to 0.0..=4.0.
    SetTimeScale { scale: f64 },

    // --- Match flow ---
    /// Start a match from the main menu.
    StartMatch,
    /// Restart after game over. Re-initializes everything except the
    /// persisted high score.
    Restart,
}
