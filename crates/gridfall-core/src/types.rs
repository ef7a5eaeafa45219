//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in playfield space.
/// x = lateral, y = vertical (unused, held at 0), z = depth toward/away
/// from the defender. The defender sits at negative z, the formation
/// starts at positive z and descends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in playfield units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position (3D).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each running tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds (scaled).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` scaled seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// The global match clock: an explicit value, not a hidden toggle.
/// Pausing (or scale 0) freezes formation movement, projectile motion,
/// and every timer uniformly because the engine derives all advancement
/// from `effective_dt`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimClock {
    /// Time scale factor (1.0 = normal). Clamped to 0.0..=4.0.
    pub time_scale: f64,
    pub paused: bool,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            paused: false,
        }
    }
}

impl SimClock {
    /// Scaled seconds for one tick of `base_dt`; zero while paused.
    pub fn effective_dt(&self, base_dt: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            base_dt * self.time_scale
        }
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.clamp(0.0, 4.0);
    }
}

/// Opaque asset template identifier, resolved by the presentation
/// collaborator. The simulation never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
