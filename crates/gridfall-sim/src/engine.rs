//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gridfall_core::commands::PlayerCommand;
use gridfall_core::components::*;
use gridfall_core::constants::*;
use gridfall_core::enums::*;
use gridfall_core::errors::ConfigError;
use gridfall_core::events::GameEvent;
use gridfall_core::state::GameSnapshot;
use gridfall_core::types::{Position, SimClock, SimTime, Velocity};
use gridfall_lifecycle::dispatch::DamageAction;
use gridfall_lifecycle::fsm;

use crate::director::{DefenderFate, MatchDirector};
use crate::formation::{FormationConfig, FormationController};
use crate::persistence::{HighScoreStore, MemoryStore};
use crate::scheduler::{Continuation, TimerQueue};
use crate::systems;
use crate::systems::flyer::FlyerSpawner;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// How the hostile fire interval tightens over a wave.
    pub fire_scaling: FireScaling,
    /// Allow relaunching grounded hostile-shot debris with the fire key.
    pub repurpose_enabled: bool,
    pub formation: FormationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            fire_scaling: FireScaling::default(),
            repurpose_enabled: false,
            formation: FormationConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    clock: SimClock,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    formation: FormationController,
    director: MatchDirector,
    timers: TimerQueue,
    flyer: FlyerSpawner,

    /// Last sampled lateral axis, clamped to [-1, 1].
    axis: f64,
    /// Fire edge for this tick; consumed whether or not a shot spawns.
    fire_requested: bool,
    repurpose_enabled: bool,
    next_shield_id: u32,
}

impl SimulationEngine {
    /// Create an engine with an in-memory high score store.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, Box::new(MemoryStore::default()))
    }

    /// Create an engine with the given high score store.
    pub fn with_store(
        config: SimConfig,
        store: Box<dyn HighScoreStore>,
    ) -> Result<Self, ConfigError> {
        let formation = FormationController::new(config.formation, config.fire_scaling)?;
        let mut clock = SimClock::default();
        clock.set_time_scale(config.time_scale);

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            clock,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            formation,
            director: MatchDirector::new(store),
            timers: TimerQueue::default(),
            flyer: FlyerSpawner::default(),
            axis: 0.0,
            fire_requested: false,
            repurpose_enabled: config.repurpose_enabled,
            next_shield_id: 0,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        let dt = self.clock.effective_dt(DT);
        let active = matches!(
            self.director.phase,
            MatchPhase::Playing | MatchPhase::RespawnWait | MatchPhase::WaveTransition
        );

        if active && dt > 0.0 {
            self.time.advance(dt);
            self.run_continuations();
            self.run_defender_control(dt);
            self.run_formation(dt);
            systems::movement::run(&mut self.world, dt);
            if self.director.phase == MatchPhase::Playing {
                systems::flyer::run(&mut self.world, &mut self.flyer, &mut self.rng, dt);
            }
            let contacts = systems::collision::scan(&self.world);
            self.apply_contacts(contacts);
            systems::lifecycle::run(
                &mut self.world,
                &mut self.despawn_buffer,
                self.time.elapsed_secs,
                dt,
            );
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            self.check_match_flow();
        }

        // A fire edge is per tick; it never latches across pauses.
        self.fire_requested = false;

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.clock,
            &self.director,
            &self.formation,
            events,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.director.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn formation_mut(&mut self) -> &mut FormationController {
        &mut self.formation
    }

    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut MatchDirector {
        &mut self.director
    }

    #[cfg(test)]
    pub fn pending_continuations(&self) -> usize {
        self.timers.len()
    }

    /// Kill the first `count` alive units through the normal kill path
    /// (for tests exercising wave flow and scaling).
    #[cfg(test)]
    pub fn force_kill_units(&mut self, count: usize) {
        let mut targets: Vec<(usize, usize, Entity)> = self
            .world
            .query::<&HostileUnit>()
            .iter()
            .filter(|(_, unit)| unit.alive)
            .map(|(entity, unit)| (unit.row, unit.col, entity))
            .collect();
        targets.sort_by_key(|t| (t.0, t.1));
        let victims: Vec<Entity> = targets.into_iter().take(count).map(|t| t.2).collect();
        for entity in victims {
            self.kill_unit(entity);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetAxis { value } => {
                self.axis = value.clamp(-1.0, 1.0);
            }
            PlayerCommand::Fire => {
                self.fire_requested = true;
            }
            PlayerCommand::Pause => {
                self.clock.paused = true;
            }
            PlayerCommand::Resume => {
                self.clock.paused = false;
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.clock.set_time_scale(scale);
            }
            PlayerCommand::StartMatch => {
                if self.director.phase == MatchPhase::MainMenu {
                    self.start_match_world();
                }
            }
            PlayerCommand::Restart => {
                if self.director.phase == MatchPhase::GameOver {
                    self.start_match_world();
                }
            }
        }
    }

    /// Rebuild the world for a fresh match. The high score survives in
    /// the director; everything else resets.
    fn start_match_world(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.timers.clear();
        self.flyer.reset();
        self.axis = 0.0;
        self.fire_requested = false;
        self.next_shield_id = 0;
        self.time = SimTime::default();
        self.formation.reset();
        self.director.start_match();
        world_setup::setup_match(&mut self.world, &self.formation, &mut self.next_shield_id);
    }

    fn run_continuations(&mut self) {
        for continuation in self.timers.drain_due(self.time.elapsed_secs) {
            match continuation {
                Continuation::RespawnDefender => {
                    for (_entity, (pos, defender)) in
                        self.world.query_mut::<(&mut Position, &mut Defender)>()
                    {
                        defender.inert = false;
                        pos.x = 0.0;
                    }
                    self.director.respawn_defender();
                }
                Continuation::BeginNextWave => self.begin_next_wave(),
            }
        }
    }

    /// Sweep the field and spawn the next wave: fresh shields, fresh
    /// grid, no leftover shots or debris.
    fn begin_next_wave(&mut self) {
        let stale: Vec<Entity> = self
            .world
            .query_mut::<&Lifecycle>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in stale {
            let _ = self.world.despawn(entity);
        }
        let spent: Vec<Entity> = self
            .world
            .query_mut::<&ShieldSegment>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in spent {
            let _ = self.world.despawn(entity);
        }

        self.formation.reset();
        world_setup::spawn_shields(&mut self.world, &mut self.next_shield_id);
        world_setup::spawn_units(&mut self.world, &self.formation);
        self.director.begin_next_wave();
    }

    /// Defender movement, debris pushing, and firing.
    fn run_defender_control(&mut self, dt: f64) {
        if self.director.phase != MatchPhase::Playing {
            return;
        }

        let mut defender_pos: Option<Position> = None;
        for (_entity, (pos, defender)) in self.world.query_mut::<(&mut Position, &Defender)>() {
            if defender.inert {
                continue;
            }
            pos.x = (pos.x + self.axis * DEFENDER_SPEED * dt)
                .clamp(LEFT_BOUND + DEFENDER_RADIUS, RIGHT_BOUND - DEFENDER_RADIUS);
            defender_pos = Some(*pos);
        }
        let Some(dpos) = defender_pos else {
            return;
        };

        // Every ground plane sits just behind the defender's line, so
        // lateral overlap is the whole contact test for a push.
        for (_entity, (pos, vel, lc)) in
            self.world.query_mut::<(&Position, &mut Velocity, &Lifecycle)>()
        {
            if lc.state == LifecycleState::GroundedDebris
                && (pos.x - dpos.x).abs() <= DEFENDER_RADIUS + DEBRIS_RADIUS
            {
                vel.x = DEBRIS_PUSH_SPEED * (pos.x - dpos.x).signum();
            }
        }

        if self.fire_requested {
            self.defender_fire(dpos);
        }
    }

    /// Fire, gated to one friendly shot in flight at a time.
    fn defender_fire(&mut self, dpos: Position) {
        let busy = self
            .world
            .query::<(&Projectile, &Lifecycle)>()
            .iter()
            .any(|(_, (proj, lc))| {
                proj.origin == OriginSide::Defender && lc.state == LifecycleState::Flying
            });
        if busy {
            return;
        }

        let muzzle = Position::new(dpos.x, 0.0, dpos.z + DEFENDER_FIRE_OFFSET);
        if self.repurpose_enabled && self.try_repurpose(dpos, muzzle) {
            return;
        }
        world_setup::spawn_projectile(&mut self.world, OriginSide::Defender, muzzle);
    }

    /// Relaunch the nearest grounded hostile-shot debris within reach of
    /// the defender, instead of spawning a fresh shot.
    fn try_repurpose(&mut self, dpos: Position, muzzle: Position) -> bool {
        let candidate = self
            .world
            .query::<(&Position, &Lifecycle)>()
            .iter()
            .filter_map(|(entity, (pos, lc))| {
                let dx = (pos.x - dpos.x).abs();
                (fsm::can_repurpose(lc.state, lc.source)
                    && dx <= DEFENDER_RADIUS + DEBRIS_RADIUS)
                    .then_some((dx, entity))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, entity)| entity);
        let Some(entity) = candidate else {
            return false;
        };

        match self
            .world
            .query_one_mut::<(&mut Position, &mut Velocity, &mut Lifecycle, &mut Kind, &mut Projectile)>(
                entity,
            ) {
            Ok((pos, vel, lc, kind, proj)) => match fsm::repurpose(lc.state) {
                Ok(state) => {
                    lc.state = state;
                    lc.can_damage = true;
                    lc.expires_at_secs = None;
                    lc.source = DebrisSource::DefenderShot;
                    kind.0 = EntityKind::Projectile;
                    proj.origin = proj.origin.opposite();
                    proj.speed = DEFENDER_SHOT_SPEED;
                    *pos = muzzle;
                    *vel = Velocity::new(0.0, 0.0, DEFENDER_SHOT_SPEED);
                    self.events
                        .push(GameEvent::DebrisRepurposed { position: muzzle });
                    true
                }
                Err(e) => {
                    log::warn!("dropped lifecycle transition: {e}");
                    false
                }
            },
            Err(_) => false,
        }
    }

    /// Step/fire the formation and apply its orders to the world.
    fn run_formation(&mut self, dt: f64) {
        if !matches!(
            self.director.phase,
            MatchPhase::Playing | MatchPhase::RespawnWait
        ) {
            return;
        }

        let update = self.formation.tick(dt, &mut self.rng);

        if update.stepped {
            for (_entity, (pos, unit)) in self.world.query_mut::<(&mut Position, &HostileUnit)>() {
                if unit.alive {
                    *pos = self.formation.slot_position(unit.row, unit.col);
                }
            }
            self.events.push(GameEvent::StepOccurred);
        }

        if let Some((row, col)) = update.fire_from {
            let mut muzzle = self.formation.slot_position(row, col);
            muzzle.z -= HOSTILE_FIRE_OFFSET;
            world_setup::spawn_projectile(&mut self.world, OriginSide::Hostile, muzzle);
        }
    }

    fn apply_contacts(&mut self, contacts: Vec<systems::collision::Contact>) {
        for contact in contacts {
            match contact.action {
                DamageAction::KillUnit => self.kill_unit(contact.target),
                DamageAction::HitDefender => self.hit_defender(contact.target),
                DamageAction::DamageShield => self.damage_shield(contact.target),
                DamageAction::DestroyFlyer => self.destroy_flyer(contact.target),
            }
            self.spend_projectile(contact.projectile);
        }
    }

    /// Kill a formation unit: score it, rescale the formation, and let
    /// the carcass tumble down as debris on the same entity.
    fn kill_unit(&mut self, entity: Entity) {
        let now = self.time.elapsed_secs;
        let (points, row, col, pos) =
            match self.world.query_one_mut::<(&mut HostileUnit, &Position)>(entity) {
                Ok((unit, pos)) if unit.alive => {
                    unit.alive = false;
                    (unit.point_value, unit.row, unit.col, *pos)
                }
                _ => return,
            };

        self.formation.note_unit_killed(row, col);
        self.director.add_score(points, &mut self.events);
        self.events.push(GameEvent::UnitDestroyed {
            position: pos,
            point_value: points,
        });

        let lateral: f64 = self.rng.gen_range(-1.0..1.0);
        let _ = self.world.insert(
            entity,
            (
                Velocity::new(lateral, 0.0, -UNIT_DEATH_FORCE),
                systems::lifecycle::debris(DebrisSource::DestroyedUnit, now),
            ),
        );
        if let Ok(kind) = self.world.query_one_mut::<&mut Kind>(entity) {
            kind.0 = EntityKind::Debris;
        }
    }

    fn hit_defender(&mut self, entity: Entity) {
        if let Ok(defender) = self.world.query_one_mut::<&mut Defender>(entity) {
            defender.inert = true;
        }
        let fate = self.director.on_defender_hit(&mut self.events);
        if fate == DefenderFate::Respawning {
            self.timers.schedule(
                self.time.elapsed_secs + RESPAWN_DELAY_SECS,
                Continuation::RespawnDefender,
            );
        }
    }

    fn damage_shield(&mut self, entity: Entity) {
        if let Ok(segment) = self.world.query_one_mut::<&mut ShieldSegment>(entity) {
            segment.health -= 1;
            self.events.push(GameEvent::ShieldDamaged {
                segment_id: segment.id,
                health_fraction: segment.health.max(0) as f64 / segment.max_health as f64,
            });
            if segment.health <= 0 {
                self.despawn_buffer.push(entity);
            }
        }
    }

    fn destroy_flyer(&mut self, entity: Entity) {
        let pos = match self.world.query_one_mut::<(&BonusFlyer, &Position)>(entity) {
            Ok((_, pos)) => *pos,
            Err(_) => return,
        };
        let points = FLYER_POINT_VALUES[self.rng.gen_range(0..FLYER_POINT_VALUES.len())];
        self.director.add_score(points, &mut self.events);
        self.events.push(GameEvent::BonusFlyerDestroyed {
            position: pos,
            point_value: points,
        });
        self.despawn_buffer.push(entity);
    }

    /// A projectile that hit something is spent: it starts falling.
    fn spend_projectile(&mut self, entity: Entity) {
        let now = self.time.elapsed_secs;
        if let Ok((lc, kind)) = self.world.query_one_mut::<(&mut Lifecycle, &mut Kind)>(entity) {
            systems::lifecycle::enter_falling(lc, kind, now);
        }
    }

    /// End-of-tick wave and loss checks.
    fn check_match_flow(&mut self) {
        if !matches!(
            self.director.phase,
            MatchPhase::Playing | MatchPhase::RespawnWait
        ) {
            return;
        }
        if self.formation.is_cleared() {
            self.director.on_wave_cleared(&mut self.events);
            self.timers.schedule(
                self.time.elapsed_secs + WAVE_DELAY_SECS,
                Continuation::BeginNextWave,
            );
        } else if self
            .formation
            .front_z()
            .is_some_and(|z| z <= DEFENDER_LINE_Z)
        {
            self.director.on_defender_line_breached(&mut self.events);
        }
    }
}
