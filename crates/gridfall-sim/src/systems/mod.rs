//! Simulation systems, run by the engine in a fixed order each tick.

pub mod cleanup;
pub mod collision;
pub mod flyer;
pub mod lifecycle;
pub mod movement;
pub mod snapshot;
