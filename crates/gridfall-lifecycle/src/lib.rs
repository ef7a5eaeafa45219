//! Projectile/debris lifecycle rules for GRIDFALL.
//!
//! Pure functions over plain data: transition legality, per-source debris
//! kinematics, and the kind-keyed damage dispatch table. No ECS
//! dependency, so every rule is exhaustively testable in isolation.

pub mod dispatch;
pub mod fsm;
pub mod profiles;

mod tests;
