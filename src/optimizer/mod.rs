//! One-call optimization pipeline.
//!
//! Wires the weight policy, graph builder, matching solver, and diff
//! into a single pass over a fully materialized roster snapshot.

mod config;
mod pipeline;

pub use config::OptimizerConfig;
pub use pipeline::{optimize, OptimizeError};
