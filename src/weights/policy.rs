//! Edge weight computation.

use crate::roster::{Player, PlayingContext, Slot, BENCH_LABEL};
use crate::rules::RuleSet;

/// Ceiling of the rank-derived base weight (rank 0).
pub const MAX_BASE_WEIGHT: i64 = 1000;

/// Weight for any edge into a scoring slot when the player is injured.
pub const INJURED_WEIGHT: i64 = 4;

/// Weight for any edge into a scoring slot when the player's team is
/// not active.
pub const NOT_PLAYING_WEIGHT: i64 = 3;

/// Weight for any edge into a bench slot.
pub const BENCH_WEIGHT: i64 = 2;

/// Weight for any edge into an injured-reserve slot.
pub const IR_WEIGHT: i64 = 1;

/// Weight of a sticky-retention edge.
///
/// Strictly greater than [`MAX_BASE_WEIGHT`] so it dominates every
/// normally derived weight.
pub const STICKY_WEIGHT: i64 = 1001;

/// Computes the weight of one (player, slot) edge.
///
/// The default policy is a fixed chain of unconditional overwrites, so
/// the net precedence (highest wins) is: injured-reserve slot > bench
/// slot > not-playing-today > injured player > rank. An injured-reserve
/// slot always scores [`IR_WEIGHT`] no matter how good the player is;
/// this is the intended bias, not "most restrictive wins".
///
/// A configured [`RuleSet`] adjusts the chain's result afterwards.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::roster::{Player, PlayingContext, Slot};
/// use lineup_optimizer::weights::WeightPolicy;
///
/// let policy = WeightPolicy::new();
/// let player = Player::new("p1", "A", "TOR")
///     .with_eligible_positions(["C"])
///     .with_rank(10);
/// let ctx = PlayingContext::new(["TOR"]);
///
/// assert_eq!(policy.weight(&player, &Slot::new("C", 1), &ctx), 990);
/// assert_eq!(policy.weight(&player, &Slot::new("BN", 1), &ctx), 2);
/// ```
#[derive(Debug, Clone)]
pub struct WeightPolicy {
    rules: RuleSet,
    ir_labels: Vec<String>,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightPolicy {
    /// Rule-free policy with the standard `["IR", "IR+"]` reserve labels.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::empty(),
            ir_labels: vec!["IR".to_string(), "IR+".to_string()],
        }
    }

    /// Attaches a validated rule set, applied after the default chain.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Overrides the set of labels treated as injured-reserve variants.
    pub fn with_ir_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ir_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the label is an injured-reserve variant.
    pub fn is_ir_label(&self, label: &str) -> bool {
        self.ir_labels.iter().any(|l| l == label)
    }

    /// Computes the edge weight for one (player, slot) pair.
    pub fn weight(&self, player: &Player, slot: &Slot, ctx: &PlayingContext) -> i64 {
        // Each step unconditionally overwrites the previous one.
        let mut weight = MAX_BASE_WEIGHT - i64::from(player.effective_rank());
        if !player.health.is_healthy() {
            weight = INJURED_WEIGHT;
        }
        if !ctx.is_active(&player.team) {
            weight = NOT_PLAYING_WEIGHT;
        }
        if slot.label == BENCH_LABEL {
            weight = BENCH_WEIGHT;
        }
        if self.is_ir_label(&slot.label) {
            weight = IR_WEIGHT;
        }
        self.rules.apply(weight, player, slot, ctx)
    }

    /// Sticky-retention weight for one (player, slot) pair.
    ///
    /// Returns [`STICKY_WEIGHT`] when the player currently occupies an
    /// injured-reserve slot and the candidate slot carries that same
    /// label, keeping already-placed reserve players in place even if no
    /// longer flagged injured. `None` otherwise.
    pub fn sticky_weight(&self, player: &Player, slot: &Slot) -> Option<i64> {
        if self.is_ir_label(&player.selected_position) && player.selected_position == slot.label {
            Some(STICKY_WEIGHT)
        } else {
            None
        }
    }
}
