//! Edge weight policy.
//!
//! Combines the rank-derived base weight with the fixed injury /
//! activity / slot-class override chain and an optional rule-set
//! adjustment, producing the final weight of one (player, slot) edge.
//! Also decides sticky retention of injured-reserve placements.

mod policy;

pub use policy::{
    WeightPolicy, BENCH_WEIGHT, INJURED_WEIGHT, IR_WEIGHT, MAX_BASE_WEIGHT, NOT_PLAYING_WEIGHT,
    STICKY_WEIGHT,
};
