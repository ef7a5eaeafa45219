//! Simulation engine for GRIDFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod director;
pub mod engine;
pub mod formation;
pub mod persistence;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use gridfall_core as core;
