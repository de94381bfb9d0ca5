//! Optimizer configuration.

use crate::graph::DEFAULT_BENCH_SLOTS;
use crate::rules::{Rule, RuleError, RuleSet};

/// Parameters of one optimization pass.
///
/// Rules arrive as an in-memory structured value; with the `serde`
/// feature enabled, callers can deserialize them from whatever format
/// their configuration lives in. The core never parses files.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_bench_slots(4)
///     .with_ir_labels(["IR", "IR+"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Bench slots appended to the expanded layout.
    pub bench_slots: u32,

    /// Labels treated as injured-reserve variants.
    pub ir_labels: Vec<String>,

    /// Weight-adjustment rules, applied after the default policy chain.
    pub rules: Vec<Rule>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            bench_slots: DEFAULT_BENCH_SLOTS,
            ir_labels: vec!["IR".to_string(), "IR+".to_string()],
            rules: Vec::new(),
        }
    }
}

impl OptimizerConfig {
    pub fn with_bench_slots(mut self, n: u32) -> Self {
        self.bench_slots = n;
        self
    }

    pub fn with_ir_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ir_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Validates the configuration (currently: the rule set).
    pub fn validate(&self) -> Result<(), RuleError> {
        self.rule_set().map(|_| ())
    }

    pub(crate) fn rule_set(&self) -> Result<RuleSet, RuleError> {
        RuleSet::new(self.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Condition, ConditionKind, WeightEffect};

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.bench_slots, 4);
        assert_eq!(config.ir_labels, vec!["IR".to_string(), "IR+".to_string()]);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_rule() {
        let config = OptimizerConfig::default().with_rules([Rule::new(
            [Condition::new(ConditionKind::Position { any_of: vec![] })],
            WeightEffect::Relative(1),
        )]);
        assert!(config.validate().is_err());
    }
}
