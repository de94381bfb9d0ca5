//! End-to-end optimization pass.

use thiserror::Error;

use super::config::OptimizerConfig;
use crate::graph::GraphBuilder;
use crate::matching::{MatchingError, MatchingSolver};
use crate::roster::{diff, Player, PlayingContext, RosterChange};
use crate::rules::RuleError;
use crate::weights::WeightPolicy;

/// Failure of an optimization pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The supplied rule configuration is degenerate.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The solver detected a structural invariant violation.
    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// Runs build, solve, and diff in one synchronous pass.
///
/// Pure function of its inputs: no I/O, no retries, no shared state.
/// All snapshots must be fully materialized before the call; the
/// returned change list is for the caller's persistence layer to apply.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::optimizer::{optimize, OptimizerConfig};
/// use lineup_optimizer::roster::{Player, PlayingContext};
///
/// let players = vec![
///     Player::new("a", "A", "TOR")
///         .with_eligible_positions(["C"])
///         .with_selected_position("BN")
///         .with_rank(10),
/// ];
/// let layout = vec!["C".to_string()];
/// let ctx = PlayingContext::new(["TOR"]);
///
/// let changes = optimize(&players, &layout, &ctx, &OptimizerConfig::default()).unwrap();
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].to, "C");
/// ```
pub fn optimize(
    players: &[Player],
    layout: &[String],
    ctx: &PlayingContext,
    config: &OptimizerConfig,
) -> Result<Vec<RosterChange>, OptimizeError> {
    let rules = config.rule_set()?;
    let policy = WeightPolicy::new()
        .with_rules(rules)
        .with_ir_labels(config.ir_labels.iter().cloned());
    let builder = GraphBuilder::new(policy).with_bench_slots(config.bench_slots);

    let graph = builder.build(players, layout, ctx);
    let matching = MatchingSolver::solve(&graph)?;
    let changes = diff(&matching, players);

    tracing::debug!(
        total_weight = matching.total_weight(),
        changes = changes.len(),
        "optimization pass complete"
    );
    Ok(changes)
}
