//! Bonus flyer spawner.
//!
//! Every spawn interval, roll once: on success a flyer crosses behind
//! the formation from a random side. At most one flyer at a time.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfall_core::components::BonusFlyer;
use gridfall_core::constants::{FLYER_SPAWN_CHANCE, FLYER_SPAWN_INTERVAL};

use crate::world_setup;

#[derive(Debug, Default)]
pub struct FlyerSpawner {
    timer: f64,
}

impl FlyerSpawner {
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }
}

pub fn run(world: &mut World, spawner: &mut FlyerSpawner, rng: &mut ChaCha8Rng, dt: f64) {
    let flyer_active = world.query_mut::<&BonusFlyer>().into_iter().next().is_some();
    if flyer_active {
        return;
    }

    spawner.timer += dt;
    if spawner.timer < FLYER_SPAWN_INTERVAL {
        return;
    }
    spawner.timer = 0.0;

    if rng.gen_bool(FLYER_SPAWN_CHANCE) {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        world_setup::spawn_flyer(world, direction);
    }
}
