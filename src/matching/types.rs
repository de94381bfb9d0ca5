//! Matching result types.

use thiserror::Error;

use crate::roster::Slot;

/// One selected edge of a matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Id of the matched player.
    pub player_id: String,

    /// The slot assigned to the player.
    pub slot: Slot,

    /// Weight of the selected edge.
    pub weight: i64,
}

/// A valid matching: each player and each slot appears at most once.
///
/// Assignments are ordered by player input position, so iteration and
/// the downstream diff are reproducible. Players with no assignment are
/// simply absent — callers must treat that as "keep the current slot",
/// never as a removal.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matching {
    assignments: Vec<Assignment>,
    total_weight: i64,
}

impl Matching {
    pub(crate) fn new(assignments: Vec<Assignment>) -> Self {
        let total_weight = assignments.iter().map(|a| a.weight).sum();
        Self {
            assignments,
            total_weight,
        }
    }

    /// Assignments in player input order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The slot matched to the given player, if any.
    pub fn slot_of(&self, player_id: &str) -> Option<&Slot> {
        self.assignments
            .iter()
            .find(|a| a.player_id == player_id)
            .map(|a| &a.slot)
    }

    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Fatal solver failure.
///
/// The solver refuses to produce a matching from a graph it cannot
/// trust; a partial or inconsistent result would silently bench the
/// wrong players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// The graph violates a structural invariant (duplicate player or
    /// slot identity).
    #[error("malformed assignment graph: {detail}")]
    MalformedGraph { detail: String },
}
