//! Declarative weight-adjustment rule DSL.
//!
//! Rules compute per-edge weight adjustments from conditional logic over
//! a (player, slot, context) triple. A rule is a conjunction of
//! [`Condition`]s plus a [`WeightEffect`]; every rule whose conditions
//! hold is applied in declaration order, each seeing the weight produced
//! by the rules before it.
//!
//! # Design
//!
//! Condition and attribute kinds are closed enums rather than open
//! string-keyed lookups: an unrecognized condition type or a mismatched
//! attribute shape cannot be expressed, and the remaining degenerate
//! configurations are rejected when the [`RuleSet`] is constructed —
//! never silently coerced at evaluation time.

mod engine;
mod types;

pub use engine::RuleSet;
pub use types::{
    Condition, ConditionKind, PlayerAttr, Rule, RuleError, WeightEffect, MAX_EFFECT_VALUE,
};
