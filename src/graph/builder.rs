//! Slot expansion and graph construction.

use std::collections::HashMap;

use super::types::AssignmentGraph;
use crate::roster::{Player, PlayingContext, Slot, BENCH_LABEL};
use crate::weights::WeightPolicy;

/// Number of bench slots appended to every expanded layout.
pub const DEFAULT_BENCH_SLOTS: u32 = 4;

/// Expands a position layout into slots and builds the weighted
/// assignment graph.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::graph::GraphBuilder;
/// use lineup_optimizer::roster::{Player, PlayingContext};
/// use lineup_optimizer::weights::WeightPolicy;
///
/// let players = vec![Player::new("p1", "A", "TOR")
///     .with_eligible_positions(["C"])
///     .with_rank(10)];
/// let layout = ["C".to_string(), "C".to_string(), "LW".to_string()];
/// let ctx = PlayingContext::new(["TOR"]);
///
/// let graph = GraphBuilder::new(WeightPolicy::new()).build(&players, &layout, &ctx);
/// // Two center edges plus four bench edges.
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    policy: WeightPolicy,
    bench_slots: u32,
}

impl GraphBuilder {
    pub fn new(policy: WeightPolicy) -> Self {
        Self {
            policy,
            bench_slots: DEFAULT_BENCH_SLOTS,
        }
    }

    /// Overrides the number of appended bench slots.
    pub fn with_bench_slots(mut self, n: u32) -> Self {
        self.bench_slots = n;
        self
    }

    pub fn policy(&self) -> &WeightPolicy {
        &self.policy
    }

    /// Expands an ordered position layout (labels with repetition) into
    /// uniquely keyed slots, then appends the bench slots.
    ///
    /// Occurrences of each label are counted in layout order, so the
    /// second `"C"` in the layout becomes `C 2`. League layouts may
    /// already list `"BN"` entries; the appended bench slots continue
    /// that count so their identities stay unique.
    pub fn expand_slots(&self, layout: &[String]) -> Vec<Slot> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut slots = Vec::with_capacity(layout.len() + self.bench_slots as usize);
        for label in layout {
            let seen = counts.entry(label.as_str()).or_insert(0);
            *seen += 1;
            slots.push(Slot::new(label.clone(), *seen));
        }
        let benched = counts.get(BENCH_LABEL).copied().unwrap_or(0);
        for ordinal in benched + 1..=benched + self.bench_slots {
            slots.push(Slot::new(BENCH_LABEL, ordinal));
        }
        slots
    }

    /// Builds the weighted graph over all eligible (player, slot) pairs.
    ///
    /// An edge exists where the player is eligible for the slot's label
    /// (bench universally). Sticky-retention edges for injured-reserve
    /// occupants are applied last and overwrite the policy weight; they
    /// are added even when the reserve label is missing from the
    /// player's eligibility list, so a recovered player stays parked.
    pub fn build<'a>(
        &self,
        players: &'a [Player],
        layout: &[String],
        ctx: &PlayingContext,
    ) -> AssignmentGraph<'a> {
        let slots = self.expand_slots(layout);
        let mut edges = Vec::new();
        for (pi, player) in players.iter().enumerate() {
            for (si, slot) in slots.iter().enumerate() {
                if player.is_eligible_for(&slot.label) {
                    edges.push((pi, si, self.policy.weight(player, slot, ctx)));
                }
                if let Some(sticky) = self.policy.sticky_weight(player, slot) {
                    edges.push((pi, si, sticky));
                }
            }
        }

        let mut graph = AssignmentGraph::new(players, slots);
        for (pi, si, weight) in edges {
            graph.set_weight(pi, si, weight);
        }

        tracing::debug!(
            players = players.len(),
            slots = graph.slots().len(),
            edges = graph.edge_count(),
            "assignment graph built"
        );
        graph
    }
}
