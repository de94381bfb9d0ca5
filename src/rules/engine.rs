//! Rule set validation and evaluation.

use super::types::{Condition, ConditionKind, PlayerAttr, Rule, RuleError, MAX_EFFECT_VALUE};
use crate::roster::{Player, PlayingContext, Slot};

/// A player attribute value as seen by the rule engine.
enum AttrValue<'a> {
    Scalar(&'a str),
    Many(&'a [String]),
}

fn attr_value<'a>(attr: PlayerAttr, player: &'a Player) -> AttrValue<'a> {
    match attr {
        PlayerAttr::Status => AttrValue::Scalar(player.health.code()),
        PlayerAttr::Team => AttrValue::Scalar(&player.team),
        PlayerAttr::SelectedPosition => AttrValue::Scalar(&player.selected_position),
        PlayerAttr::Name => AttrValue::Scalar(&player.name),
        PlayerAttr::EligiblePositions => AttrValue::Many(&player.eligible_positions),
    }
}

fn holds(cond: &Condition, player: &Player, slot: &Slot, ctx: &PlayingContext) -> bool {
    let raw = match &cond.kind {
        ConditionKind::Position { any_of } => any_of.iter().any(|label| *label == slot.label),
        ConditionKind::Player { attr, value } => match attr_value(*attr, player) {
            AttrValue::Scalar(actual) => actual == value,
            AttrValue::Many(actual) => actual.iter().any(|v| v == value),
        },
        ConditionKind::NotPlaying => !ctx.is_active(&player.team),
    };
    raw != cond.invert
}

/// A validated, ordered collection of rules.
///
/// Declaration order is significant: every rule whose conditions hold is
/// applied in sequence, each seeing the weight produced by the rules
/// before it. Rules are not mutually exclusive — a later `Absolute` can
/// overwrite an earlier adjustment, and several `Relative` effects stack.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::roster::{Player, PlayingContext, Slot};
/// use lineup_optimizer::rules::{
///     Condition, ConditionKind, PlayerAttr, Rule, RuleSet, WeightEffect,
/// };
///
/// let rules = RuleSet::new(vec![Rule::new(
///     [Condition::new(ConditionKind::Player {
///         attr: PlayerAttr::Status,
///         value: "OK".into(),
///     })],
///     WeightEffect::Relative(500),
/// )])
/// .unwrap();
///
/// let player = Player::new("p1", "A", "TOR");
/// let slot = Slot::new("C", 1);
/// let ctx = PlayingContext::new(["TOR"]);
/// assert_eq!(rules.apply(990, &player, &slot, &ctx), 1490);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Validates the rules and builds the set.
    ///
    /// Rejects degenerate configurations (empty position sets, empty
    /// match values, out-of-range effect values) up front, reporting
    /// rule and condition indices, so that evaluation is total.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        for (r, rule) in rules.iter().enumerate() {
            let value = rule.effect.value();
            if !(-MAX_EFFECT_VALUE..=MAX_EFFECT_VALUE).contains(&value) {
                return Err(RuleError::EffectOutOfRange { rule: r, value });
            }
            for (c, cond) in rule.conditions.iter().enumerate() {
                match &cond.kind {
                    ConditionKind::Position { any_of } => {
                        if any_of.is_empty() {
                            return Err(RuleError::EmptyPositionSet {
                                rule: r,
                                condition: c,
                            });
                        }
                    }
                    ConditionKind::Player { attr, value } => {
                        if value.is_empty() {
                            return Err(RuleError::EmptyAttrValue {
                                rule: r,
                                condition: c,
                                attr: *attr,
                            });
                        }
                    }
                    ConditionKind::NotPlaying => {}
                }
            }
        }
        Ok(Self { rules })
    }

    /// An empty set; `apply` returns its input unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every matching rule against the starting weight, in
    /// declaration order, and returns the final weight.
    pub fn apply(&self, weight: i64, player: &Player, slot: &Slot, ctx: &PlayingContext) -> i64 {
        let mut weight = weight;
        for rule in &self.rules {
            if rule
                .conditions
                .iter()
                .all(|cond| holds(cond, player, slot, ctx))
            {
                weight = rule.effect.apply(weight);
            }
        }
        weight
    }
}
