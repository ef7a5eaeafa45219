//! Match director: score, lives, waves, and the match phase machine.

use gridfall_core::constants::{EXTRA_LIFE_THRESHOLD, STARTING_LIVES};
use gridfall_core::enums::MatchPhase;
use gridfall_core::events::GameEvent;

use crate::persistence::HighScoreStore;

/// Outcome of a defender hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenderFate {
    /// A life was spent; a respawn should be scheduled.
    Respawning,
    /// That was the last life.
    MatchOver,
}

/// Tracks everything about the match that is not an entity: phase,
/// score, lives, wave number, and the persisted high score.
pub struct MatchDirector {
    pub phase: MatchPhase,
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub wave: u32,
    extra_life_awarded: bool,
    store: Box<dyn HighScoreStore>,
}

impl MatchDirector {
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            phase: MatchPhase::MainMenu,
            score: 0,
            high_score,
            lives: 0,
            wave: 0,
            extra_life_awarded: false,
            store,
        }
    }

    /// Fresh match: score and lives reset, wave 1. The high score
    /// persists across matches.
    pub fn start_match(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.wave = 1;
        self.extra_life_awarded = false;
        self.phase = MatchPhase::Playing;
    }

    /// Award points, with the extra-life latch and high score tracking.
    pub fn add_score(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score = self.score.saturating_add(points);
        events.push(GameEvent::ScoreChanged {
            new_score: self.score,
        });

        // One extra life per match, at the threshold crossing.
        if !self.extra_life_awarded && self.score >= EXTRA_LIFE_THRESHOLD {
            self.extra_life_awarded = true;
            self.lives += 1;
            events.push(GameEvent::ExtraLifeAwarded { lives: self.lives });
        }

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
            events.push(GameEvent::HighScoreChanged {
                high_score: self.high_score,
            });
        }
    }

    /// Spend a life. Fatal when it was the last one.
    pub fn on_defender_hit(&mut self, events: &mut Vec<GameEvent>) -> DefenderFate {
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::DefenderHit {
            lives_remaining: self.lives,
        });
        if self.lives == 0 {
            self.phase = MatchPhase::GameOver;
            events.push(GameEvent::GameOver {
                final_score: self.score,
            });
            DefenderFate::MatchOver
        } else {
            self.phase = MatchPhase::RespawnWait;
            DefenderFate::Respawning
        }
    }

    /// The formation was emptied. The event carries the wave that was
    /// just completed; the counter advances when the next wave spawns.
    pub fn on_wave_cleared(&mut self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::WaveCompleted {
            wave_number: self.wave,
        });
        self.phase = MatchPhase::WaveTransition;
    }

    pub fn begin_next_wave(&mut self) {
        self.wave += 1;
        self.phase = MatchPhase::Playing;
    }

    /// A formation unit reached the defender's line: instant loss,
    /// regardless of remaining lives.
    pub fn on_defender_line_breached(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = MatchPhase::GameOver;
        events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    pub fn respawn_defender(&mut self) {
        if self.phase == MatchPhase::RespawnWait {
            self.phase = MatchPhase::Playing;
        }
    }
}
