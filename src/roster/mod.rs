//! Roster data model and assignment diff.
//!
//! Caller-owned snapshots of players and league structure, plus the
//! final stage of the pipeline: diffing a solved matching against each
//! player's current slot into an ordered move list.

mod diff;
mod types;

pub use diff::diff;
pub use types::{
    HealthStatus, Player, PlayingContext, RosterChange, Slot, BENCH_LABEL, WORST_RANK,
};
