//! Fantasy roster lineup optimization engine.
//!
//! Given a roster snapshot (players with eligibility, health, team
//! activity, and draft rank), a league's positional slot layout, and the
//! set of teams active today, computes the assignment of players to
//! slots that maximizes a rule-adjusted desirability score and emits the
//! minimal set of moves from the current assignment to the optimal one.
//!
//! Pipeline, leaves first:
//!
//! - **[`rules`]**: Declarative condition/effect DSL that adjusts
//!   per-edge weights; validated up front, evaluated in declaration
//!   order.
//! - **[`weights`]**: The weight policy — rank-derived base weight, the
//!   fixed injury/activity/slot-class override chain, rule adjustment,
//!   and sticky retention of injured-reserve placements.
//! - **[`graph`]**: Expands the position layout into uniquely addressed
//!   slots and builds the weighted player-to-slot assignment graph.
//! - **[`matching`]**: Self-contained maximum-weight matching solver
//!   (Hungarian algorithm), deterministic tie-breaks, no domain
//!   knowledge.
//! - **[`roster`]**: Caller-owned snapshot types and the assignment
//!   diff that turns a matching into an ordered move list.
//! - **[`optimizer`]**: One-call pipeline over the above.
//!
//! # Scope
//!
//! The pass is a pure, synchronous function of fully materialized
//! inputs: no network, no disk, no locking, no retries. Fetching roster
//! data and persisting the resulting changes belong to surrounding
//! client layers.

pub mod graph;
pub mod matching;
pub mod optimizer;
pub mod roster;
pub mod rules;
pub mod weights;
