//! Error taxonomy.
//!
//! Setup failures are fatal and surfaced to the caller; everything else
//! in the running core is either a silent no-op (a stale entity lookup)
//! or logged and dropped (an illegal lifecycle transition). No retries,
//! no blocking I/O.

use std::fmt;

use crate::enums::{LifecycleState, UnitClass};

/// Fatal configuration problem detected during formation setup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A unit class has no template and no fallback is configured.
    MissingTemplate { class: UnitClass },
    /// Spacing would produce a degenerate (overlapping) grid.
    DegenerateSpacing { spacing: f64 },
    /// Zero rows or columns.
    EmptyFormation,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTemplate { class } => {
                write!(f, "no template configured for unit class {class:?} and no fallback set")
            }
            ConfigError::DegenerateSpacing { spacing } => {
                write!(f, "formation spacing {spacing} would produce a degenerate grid")
            }
            ConfigError::EmptyFormation => write!(f, "formation has zero rows or columns"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// An attempt to move a projectile/debris entity into a state unreachable
/// from its current state. Should never occur in correct operation; the
/// driver logs it and drops the transition rather than crashing the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal lifecycle transition {:?} -> {:?}", self.from, self.to)
    }
}

impl std::error::Error for InvalidTransition {}
