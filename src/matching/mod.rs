//! Maximum-weight matching solver.
//!
//! Self-contained solver behind a narrow interface: it knows nothing
//! about lineups beyond the graph abstraction it is handed, and nothing
//! outside this module depends on the algorithm choice. Computes a
//! matching of maximum total weight (not merely maximum cardinality)
//! with deterministic, documented tie-breaks.

mod solver;
mod types;

pub use solver::MatchingSolver;
pub use types::{Assignment, Matching, MatchingError};
