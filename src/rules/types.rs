//! Declarative rule types.

use thiserror::Error;

/// Closed set of player attribute selectors usable in conditions.
///
/// Replaces open-ended attribute lookup: unknown selectors are
/// unrepresentable, and each selector has a known shape (scalar or
/// collection) so matching semantics are decided at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlayerAttr {
    /// Raw health status code (`"OK"` when healthy). Scalar.
    Status,

    /// Real-world team identifier. Scalar.
    Team,

    /// Label of the currently occupied slot. Scalar.
    SelectedPosition,

    /// Display name. Scalar.
    Name,

    /// Eligible position labels. Collection; conditions test membership.
    EligiblePositions,
}

/// The predicate part of a [`Condition`], before inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConditionKind {
    /// The candidate slot's label is one of `any_of`.
    ///
    /// A single-label match is a one-element set.
    Position { any_of: Vec<String> },

    /// The selected player attribute matches `value`: equality for scalar
    /// attributes, membership for collection attributes.
    Player { attr: PlayerAttr, value: String },

    /// The player's team is not active in the playing context.
    NotPlaying,
}

/// A predicate over (player, slot, context), optionally inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub kind: ConditionKind,

    /// When true, the condition holds when the predicate does NOT.
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert: bool,
}

impl Condition {
    /// Creates a non-inverted condition.
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            invert: false,
        }
    }

    /// Flips the condition's polarity.
    pub fn inverted(mut self) -> Self {
        self.invert = !self.invert;
        self
    }
}

/// Largest effect magnitude accepted by rule validation.
///
/// Caller-supplied configuration, so the bound keeps every derived edge
/// weight far inside `i64` no matter how many rules stack — the solver's
/// potential arithmetic must never wrap.
pub const MAX_EFFECT_VALUE: i64 = 1_000_000;

/// How a triggered rule changes the running weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightEffect {
    /// Replaces the running weight.
    Absolute(i64),

    /// Adds to the running weight (may be negative).
    Relative(i64),
}

impl WeightEffect {
    /// Applies this effect to the running weight.
    ///
    /// Relative effects saturate at the `i64` bounds rather than wrap.
    pub fn apply(self, weight: i64) -> i64 {
        match self {
            WeightEffect::Absolute(value) => value,
            WeightEffect::Relative(delta) => weight.saturating_add(delta),
        }
    }

    /// The effect's configured value.
    pub fn value(self) -> i64 {
        match self {
            WeightEffect::Absolute(value) | WeightEffect::Relative(value) => value,
        }
    }
}

/// A conjunction of conditions paired with a weight effect.
///
/// All conditions must hold for the effect to apply. A rule with no
/// conditions always triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub conditions: Vec<Condition>,
    pub effect: WeightEffect,
}

impl Rule {
    pub fn new<I>(conditions: I, effect: WeightEffect) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        Self {
            conditions: conditions.into_iter().collect(),
            effect,
        }
    }
}

/// A degenerate rule configuration.
///
/// Carries the rule and condition indices so the offending entry can be
/// located in the caller's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A position condition with an empty label set can never hold
    /// (or, inverted, always holds) and is almost certainly a typo.
    #[error("rule {rule}, condition {condition}: position condition has an empty label set")]
    EmptyPositionSet { rule: usize, condition: usize },

    /// A player condition matching against the empty string.
    #[error("rule {rule}, condition {condition}: empty match value for attribute {attr:?}")]
    EmptyAttrValue {
        rule: usize,
        condition: usize,
        attr: PlayerAttr,
    },

    /// An effect value outside `±`[`MAX_EFFECT_VALUE`].
    #[error("rule {rule}: effect value {value} exceeds the ±{MAX_EFFECT_VALUE} bound")]
    EffectOutOfRange { rule: usize, value: i64 },
}
