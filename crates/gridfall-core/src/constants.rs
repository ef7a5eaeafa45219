//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at scale 1.0.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Left edge of the playfield (lateral axis).
pub const LEFT_BOUND: f64 = -10.0;

/// Right edge of the playfield (lateral axis).
pub const RIGHT_BOUND: f64 = 10.0;

/// Depth coordinate of the defender's line. A formation unit crossing
/// this is an instant loss.
pub const DEFENDER_LINE_Z: f64 = -5.0;

// --- Formation ---

pub const FORMATION_ROWS: usize = 5;
pub const FORMATION_COLS: usize = 11;

/// Lateral spacing between columns.
pub const FORMATION_H_SPACING: f64 = 0.8;

/// Depth spacing between rows.
pub const FORMATION_DEPTH_SPACING: f64 = 0.6;

/// Depth coordinate of the formation root at wave start.
pub const FORMATION_START_Z: f64 = 5.0;

/// Seconds between formation steps with a full, undescended swarm.
pub const BASE_STEP_TIME: f64 = 1.0;

/// Floor for the step interval at any difficulty.
pub const MIN_STEP_TIME: f64 = 0.1;

/// Lateral distance moved per step.
pub const STEP_DISTANCE: f64 = 0.3;

/// Depth advanced toward the defender on a bounce.
pub const DROP_DISTANCE: f64 = 0.4;

/// Attrition difficulty gain: scaling factor reaches 1 + this when the
/// formation is down to zero units.
pub const ATTRITION_GAIN: f64 = 3.0;

/// Descent difficulty gain: scaling factor reaches 1 + this when the
/// formation has descended the full range to the defender line.
pub const DESCENT_GAIN: f64 = 1.5;

/// Full descent range used to normalize descent progress.
pub const TOTAL_DESCENT_RANGE: f64 = FORMATION_START_Z - DEFENDER_LINE_Z;

// --- Hostile firing ---

/// Seconds between hostile shots with a full, undescended swarm.
pub const BASE_FIRE_INTERVAL: f64 = 2.0;

/// Floor for the fire interval at any difficulty.
pub const MIN_FIRE_INTERVAL: f64 = 0.5;

/// Depth offset in front of the firing unit where its shot spawns.
pub const HOSTILE_FIRE_OFFSET: f64 = 0.3;

// --- Projectiles ---

/// Defender shot speed (toward +z).
pub const DEFENDER_SHOT_SPEED: f64 = 10.0;

/// Hostile shot speed (toward -z).
pub const HOSTILE_SHOT_SPEED: f64 = 5.0;

/// A defender shot past this depth has missed everything.
pub const DEFENDER_SHOT_MISS_Z: f64 = 8.0;

/// A hostile shot past this depth has missed the defender.
pub const HOSTILE_SHOT_MISS_Z: f64 = -5.5;

// --- Debris ---

/// Ground plane for spent shots (behind the defender).
pub const SHOT_GROUND_Z: f64 = -6.0;

/// Ground plane for destroyed-unit debris.
pub const UNIT_GROUND_Z: f64 = -7.0;

/// Gravity-like pull toward the ground, per debris source.
pub const DEFENDER_DEBRIS_GRAVITY: f64 = 5.0;
pub const HOSTILE_DEBRIS_GRAVITY: f64 = 8.0;
pub const UNIT_DEBRIS_GRAVITY: f64 = 2.0;

/// Downward speed clamp while falling, per debris source.
pub const DEFENDER_DEBRIS_MAX_FALL: f64 = 10.0;
pub const HOSTILE_DEBRIS_MAX_FALL: f64 = 15.0;
pub const UNIT_DEBRIS_MAX_FALL: f64 = 10.0;

/// Lateral drag while grounded, per debris source.
pub const SHOT_DEBRIS_DRAG: f64 = 5.0;
pub const UNIT_DEBRIS_DRAG: f64 = 3.0;

/// Seconds from entering FallingDebris to removal.
pub const DEBRIS_LIFETIME_SECS: f64 = 30.0;

/// Lateral speed imparted by a defender push on grounded debris.
pub const DEBRIS_PUSH_SPEED: f64 = 2.0;

/// Initial depth shove applied to a unit when it dies into debris.
pub const UNIT_DEATH_FORCE: f64 = 3.0;

// --- Defender ---

pub const DEFENDER_SPEED: f64 = 5.0;
pub const DEFENDER_START_Z: f64 = -5.0;

/// Depth offset in front of the defender where its shot spawns.
pub const DEFENDER_FIRE_OFFSET: f64 = 0.5;

// --- Shields ---

pub const SHIELD_BLOCKS_WIDE: usize = 5;
pub const SHIELD_BLOCKS_DEEP: usize = 4;
pub const SHIELD_BLOCK_SIZE: f64 = 0.3;
pub const SHIELD_MAX_HEALTH: i32 = 4;

/// Number of shield clusters spread across the lateral axis.
pub const SHIELD_CLUSTER_COUNT: usize = 4;

/// Lateral spacing between shield cluster centers.
pub const SHIELD_CLUSTER_SPACING: f64 = 5.0;

/// Depth coordinate of shield cluster centers.
pub const SHIELD_Z: f64 = -3.5;

// --- Bonus flyer ---

pub const FLYER_SPEED: f64 = 3.0;
pub const FLYER_SPAWN_INTERVAL: f64 = 15.0;
pub const FLYER_SPAWN_CHANCE: f64 = 0.5;

/// Depth at which the flyer crosses, behind the formation.
pub const FLYER_Z: f64 = 6.0;

/// Bonus score table; one entry chosen at random on a kill.
pub const FLYER_POINT_VALUES: [u32; 4] = [50, 100, 150, 300];

// --- Collision radii ---

pub const DEFENDER_RADIUS: f64 = 0.4;
pub const UNIT_RADIUS: f64 = 0.3;
pub const FLYER_RADIUS: f64 = 0.4;
pub const SHIELD_RADIUS: f64 = 0.15;
pub const PROJECTILE_RADIUS: f64 = 0.1;
pub const DEBRIS_RADIUS: f64 = 0.15;

// --- Match ---

pub const STARTING_LIVES: u32 = 3;

/// Score at which the one-per-match extra life is awarded.
pub const EXTRA_LIFE_THRESHOLD: u32 = 1500;

/// Delay before the defender respawns after a non-fatal hit.
pub const RESPAWN_DELAY_SECS: f64 = 2.0;

/// Delay before the next wave spawns after a clear.
pub const WAVE_DELAY_SECS: f64 = 2.0;
