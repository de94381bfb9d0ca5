//! Assignment graph construction.
//!
//! Expands a league's position layout into uniquely addressed slots,
//! then builds the weighted player-to-slot graph using the weight
//! policy, including sticky-retention edges for injured-reserve
//! occupants. Complexity is O(players x slots x rules); typical rosters
//! stay around 20 players and 25 slots.

mod builder;
mod types;

pub use builder::{GraphBuilder, DEFAULT_BENCH_SLOTS};
pub use types::AssignmentGraph;
