//! Delayed continuations on simulation time.
//!
//! Respawns and wave transitions are scheduled here instead of being
//! counted down in ad hoc fields. Because deadlines are in scaled
//! simulation seconds, pausing or slowing the clock stretches them
//! automatically.

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Bring the inert defender back at the start position.
    RespawnDefender,
    /// Spawn the next wave after the transition delay.
    BeginNextWave,
}

/// Pending continuations, drained each tick.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<(f64, Continuation)>,
}

impl TimerQueue {
    pub fn schedule(&mut self, at_secs: f64, continuation: Continuation) {
        self.entries.push((at_secs, continuation));
    }

    /// Remove and return every continuation due at or before `now`,
    /// in deadline order.
    pub fn drain_due(&mut self, now: f64) -> Vec<Continuation> {
        let mut due: Vec<(f64, Continuation)> = Vec::new();
        self.entries.retain(|&(at, continuation)| {
            if at <= now {
                due.push((at, continuation));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, c)| c).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
