//! Weighted assignment graph.

use std::collections::BTreeMap;

use crate::roster::{Player, Slot};

/// A weighted bipartite graph between players and slots.
///
/// Players are borrowed from the caller (they outlive the pass); slots
/// are derived per run and owned by the graph. Edges live in a map keyed
/// by `(player index, slot index)`, so iteration order is fully
/// determined by input order and tie-breaks downstream are reproducible.
#[derive(Debug, Clone)]
pub struct AssignmentGraph<'a> {
    players: &'a [Player],
    slots: Vec<Slot>,
    weights: BTreeMap<(usize, usize), i64>,
}

impl<'a> AssignmentGraph<'a> {
    pub(crate) fn new(players: &'a [Player], slots: Vec<Slot>) -> Self {
        Self {
            players,
            slots,
            weights: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites the edge between a player and a slot.
    pub(crate) fn set_weight(&mut self, player: usize, slot: usize, weight: i64) {
        debug_assert!(player < self.players.len() && slot < self.slots.len());
        self.weights.insert((player, slot), weight);
    }

    /// The caller's players, in input order.
    pub fn players(&self) -> &[Player] {
        self.players
    }

    /// The expanded slots, in layout order (bench last).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Weight of the edge between a player and a slot, if one exists.
    pub fn weight(&self, player: usize, slot: usize) -> Option<i64> {
        self.weights.get(&(player, slot)).copied()
    }

    /// Edges as `(player index, slot index, weight)`, ordered by player
    /// then slot input position.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.weights.iter().map(|(&(p, s), &w)| (p, s, w))
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }
}
