//! Events emitted by the simulation for the presentation/audio
//! collaborator. The core never depends on their consumption.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Discrete events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A hostile unit was destroyed.
    UnitDestroyed { position: Position, point_value: u32 },
    /// The formation performed one step (sound cue hook).
    StepOccurred,
    /// A shield segment absorbed a hit.
    ShieldDamaged {
        segment_id: u32,
        health_fraction: f64,
    },
    /// Score changed.
    ScoreChanged { new_score: u32 },
    /// The defender was hit (fatally or not).
    DefenderHit { lives_remaining: u32 },
    /// The one-per-match extra life was awarded.
    ExtraLifeAwarded { lives: u32 },
    /// The bonus flyer was shot down.
    BonusFlyerDestroyed { position: Position, point_value: u32 },
    /// Grounded debris was relaunched as a defender projectile.
    DebrisRepurposed { position: Position },
    /// The formation was cleared. Carries the completed wave number.
    WaveCompleted { wave_number: u32 },
    /// A new high score was recorded.
    HighScoreChanged { high_score: u32 },
    /// The match ended.
    GameOver { final_score: u32 },
}
