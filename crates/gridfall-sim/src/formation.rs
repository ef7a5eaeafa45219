//! Formation controller: rigid grid movement and difficulty scaling.
//!
//! The controller owns the formation's aggregate state (root position,
//! travel direction, step/fire timers, alive grid) and is ticked by the
//! engine. Unit entities in the ECS world are repositioned by the engine
//! from `slot_position` after each step, so the grid always moves as one
//! rigid body.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfall_core::constants::*;
use gridfall_core::enums::{FireScaling, UnitClass};
use gridfall_core::errors::ConfigError;
use gridfall_core::types::{Position, TemplateId};

/// Formation shape and unit appearance configuration.
#[derive(Debug, Clone)]
pub struct FormationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Lateral spacing between columns.
    pub h_spacing: f64,
    /// Depth spacing between rows.
    pub depth_spacing: f64,
    pub templates: UnitTemplates,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            rows: FORMATION_ROWS,
            cols: FORMATION_COLS,
            h_spacing: FORMATION_H_SPACING,
            depth_spacing: FORMATION_DEPTH_SPACING,
            templates: UnitTemplates::default(),
        }
    }
}

/// Asset templates per unit class. Light is mandatory; medium and heavy
/// fall back to the light template when unset.
#[derive(Debug, Clone)]
pub struct UnitTemplates {
    pub light: Option<TemplateId>,
    pub medium: Option<TemplateId>,
    pub heavy: Option<TemplateId>,
}

impl Default for UnitTemplates {
    fn default() -> Self {
        Self {
            light: Some(TemplateId::new("unit-light")),
            medium: Some(TemplateId::new("unit-medium")),
            heavy: Some(TemplateId::new("unit-heavy")),
        }
    }
}

/// Templates with fallbacks already applied, so lookups never fail.
#[derive(Debug, Clone)]
struct ResolvedTemplates {
    light: TemplateId,
    medium: TemplateId,
    heavy: TemplateId,
}

impl ResolvedTemplates {
    fn resolve(templates: &UnitTemplates) -> Result<Self, ConfigError> {
        let light = templates.light.clone().ok_or(ConfigError::MissingTemplate {
            class: UnitClass::Light,
        })?;
        Ok(Self {
            medium: templates.medium.clone().unwrap_or_else(|| light.clone()),
            heavy: templates.heavy.clone().unwrap_or_else(|| light.clone()),
            light,
        })
    }
}

/// Result of one formation tick, applied by the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormationUpdate {
    /// The grid moved this tick; unit positions need a re-sync.
    pub stepped: bool,
    /// The step was a bounce: direction reversed and the grid descended.
    pub bounced: bool,
    /// Grid slot of the unit ordered to fire this tick.
    pub fire_from: Option<(usize, usize)>,
}

/// The formation movement and firing controller.
pub struct FormationController {
    config: FormationConfig,
    templates: ResolvedTemplates,
    fire_scaling: FireScaling,

    root: Position,
    /// +1.0 moving right, -1.0 moving left.
    direction: f64,
    step_timer: f64,
    fire_timer: f64,
    /// Total depth descended this wave, for the descent factor.
    descended: f64,

    /// Alive flags indexed `row * cols + col`. Row 0 is the back row,
    /// farthest from the defender.
    alive: Vec<bool>,
    units_total: u32,
    units_remaining: u32,

    current_step_time: f64,
    current_fire_interval: f64,
}

impl FormationController {
    pub fn new(config: FormationConfig, fire_scaling: FireScaling) -> Result<Self, ConfigError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(ConfigError::EmptyFormation);
        }
        if config.h_spacing <= 0.0 {
            return Err(ConfigError::DegenerateSpacing {
                spacing: config.h_spacing,
            });
        }
        if config.depth_spacing <= 0.0 {
            return Err(ConfigError::DegenerateSpacing {
                spacing: config.depth_spacing,
            });
        }
        let templates = ResolvedTemplates::resolve(&config.templates)?;
        let total = (config.rows * config.cols) as u32;

        let mut controller = Self {
            alive: vec![true; config.rows * config.cols],
            units_total: total,
            units_remaining: total,
            config,
            templates,
            fire_scaling,
            root: Position::new(0.0, 0.0, FORMATION_START_Z),
            direction: 1.0,
            step_timer: 0.0,
            fire_timer: 0.0,
            descended: 0.0,
            current_step_time: BASE_STEP_TIME,
            current_fire_interval: BASE_FIRE_INTERVAL,
        };
        controller.recompute_scaling();
        Ok(controller)
    }

    /// Reset for a fresh wave: full grid back at the start position,
    /// timers and scaling back to base.
    pub fn reset(&mut self) {
        self.root = Position::new(0.0, 0.0, FORMATION_START_Z);
        self.direction = 1.0;
        self.step_timer = 0.0;
        self.fire_timer = 0.0;
        self.descended = 0.0;
        self.alive.fill(true);
        self.units_remaining = self.units_total;
        self.recompute_scaling();
    }

    /// Advance timers and emit step/fire orders.
    pub fn tick(&mut self, dt: f64, rng: &mut ChaCha8Rng) -> FormationUpdate {
        let mut update = FormationUpdate::default();
        if dt <= 0.0 || self.is_cleared() {
            return update;
        }

        self.step_timer += dt;
        if self.step_timer >= self.current_step_time {
            self.step_timer -= self.current_step_time;
            self.apply_step(&mut update);
        }

        self.fire_timer += dt;
        if self.fire_timer >= self.current_fire_interval {
            self.fire_timer -= self.current_fire_interval;
            update.fire_from = self.pick_shooter(rng);
        }

        update
    }

    /// Mark a grid slot dead and rescale.
    pub fn note_unit_killed(&mut self, row: usize, col: usize) {
        let idx = row * self.config.cols + col;
        if let Some(flag) = self.alive.get_mut(idx) {
            if *flag {
                *flag = false;
                self.units_remaining = self.units_remaining.saturating_sub(1);
                self.recompute_scaling();
            }
        }
    }

    /// Playfield position of a grid slot at the current root. The root
    /// tracks the front row; higher rows sit farther back.
    pub fn slot_position(&self, row: usize, col: usize) -> Position {
        Position::new(
            self.root.x + self.col_offset(col),
            0.0,
            self.root.z + (self.config.rows - 1 - row) as f64 * self.config.depth_spacing,
        )
    }

    /// Unit class by row: the back row is the most valuable.
    pub fn class_for_row(row: usize) -> UnitClass {
        match row {
            0 => UnitClass::Heavy,
            1 | 2 => UnitClass::Medium,
            _ => UnitClass::Light,
        }
    }

    pub fn template_for(&self, class: UnitClass) -> &TemplateId {
        match class {
            UnitClass::Light => &self.templates.light,
            UnitClass::Medium => &self.templates.medium,
            UnitClass::Heavy => &self.templates.heavy,
        }
    }

    /// Depth of the foremost alive unit, None once the wave is cleared.
    pub fn front_z(&self) -> Option<f64> {
        let front_row = (0..self.config.rows)
            .rev()
            .find(|&row| (0..self.config.cols).any(|col| self.alive[row * self.config.cols + col]))?;
        Some(self.root.z + (self.config.rows - 1 - front_row) as f64 * self.config.depth_spacing)
    }

    pub fn is_cleared(&self) -> bool {
        self.units_remaining == 0
    }

    pub fn root(&self) -> Position {
        self.root
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn current_step_time(&self) -> f64 {
        self.current_step_time
    }

    pub fn current_fire_interval(&self) -> f64 {
        self.current_fire_interval
    }

    pub fn units_remaining(&self) -> u32 {
        self.units_remaining
    }

    pub fn units_total(&self) -> u32 {
        self.units_total
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Force the formation depth (for tests exercising the defender line).
    #[cfg(test)]
    pub fn set_root_z(&mut self, z: f64) {
        self.root.z = z;
    }

    /// Force the lateral root (for tests exercising the bounce rule).
    #[cfg(test)]
    pub fn set_root_x(&mut self, x: f64) {
        self.root.x = x;
    }

    fn col_offset(&self, col: usize) -> f64 {
        (col as f64 - (self.config.cols as f64 - 1.0) / 2.0) * self.config.h_spacing
    }

    /// Move one step laterally, or bounce: reverse direction and descend.
    /// The bounce step spends its movement on the drop, not the slide.
    fn apply_step(&mut self, update: &mut FormationUpdate) {
        let Some((min_col, max_col)) = self.alive_col_extents() else {
            return;
        };

        let next_x = self.root.x + self.direction * STEP_DISTANCE;
        let left_edge = next_x + self.col_offset(min_col) - UNIT_RADIUS;
        let right_edge = next_x + self.col_offset(max_col) + UNIT_RADIUS;

        if left_edge < LEFT_BOUND || right_edge > RIGHT_BOUND {
            self.direction = -self.direction;
            self.root.z -= DROP_DISTANCE;
            self.descended += DROP_DISTANCE;
            self.recompute_scaling();
            update.bounced = true;
        } else {
            self.root.x = next_x;
        }
        update.stepped = true;
    }

    /// Pick the shooter: a random alive column, firing from its frontmost
    /// alive unit.
    fn pick_shooter(&self, rng: &mut ChaCha8Rng) -> Option<(usize, usize)> {
        let cols: Vec<usize> = (0..self.config.cols)
            .filter(|&col| self.column_has_alive(col))
            .collect();
        if cols.is_empty() {
            return None;
        }
        let col = cols[rng.gen_range(0..cols.len())];
        let row = (0..self.config.rows)
            .rev()
            .find(|&row| self.alive[row * self.config.cols + col])?;
        Some((row, col))
    }

    fn column_has_alive(&self, col: usize) -> bool {
        (0..self.config.rows).any(|row| self.alive[row * self.config.cols + col])
    }

    fn alive_col_extents(&self) -> Option<(usize, usize)> {
        let min = (0..self.config.cols).find(|&c| self.column_has_alive(c))?;
        let max = (0..self.config.cols).rfind(|&c| self.column_has_alive(c))?;
        Some((min, max))
    }

    /// Saturating attrition factor: 1.0 with a full grid, up to
    /// 1.0 + ATTRITION_GAIN with an empty one.
    fn attrition_factor(&self) -> f64 {
        if self.units_total == 0 {
            return 1.0;
        }
        let lost = 1.0 - self.units_remaining as f64 / self.units_total as f64;
        1.0 + lost.clamp(0.0, 1.0) * ATTRITION_GAIN
    }

    /// Descent factor: 1.0 at the start depth, up to 1.0 + DESCENT_GAIN
    /// at the defender line.
    fn descent_factor(&self) -> f64 {
        1.0 + (self.descended / TOTAL_DESCENT_RANGE).clamp(0.0, 1.0) * DESCENT_GAIN
    }

    fn recompute_scaling(&mut self) {
        let attrition = self.attrition_factor();
        let descent = self.descent_factor();
        self.current_step_time = (BASE_STEP_TIME / (attrition * descent)).max(MIN_STEP_TIME);

        let fire_divisor = match self.fire_scaling {
            FireScaling::DescentOnly => descent,
            FireScaling::Combined => attrition * descent,
        };
        self.current_fire_interval =
            (BASE_FIRE_INTERVAL / fire_divisor).max(MIN_FIRE_INTERVAL);
    }
}
