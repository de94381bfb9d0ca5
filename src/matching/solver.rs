//! Maximum-weight matching via the Hungarian algorithm.

use std::collections::HashSet;

use super::types::{Assignment, Matching, MatchingError};
use crate::graph::AssignmentGraph;

/// Computes a maximum-weight matching of an assignment graph.
///
/// The graph is structurally bipartite (players x slots), so a
/// bipartite-specialized algorithm suffices: the Hungarian algorithm
/// with row/column potentials, run as minimization over negated
/// weights on an `n x n` matrix with `n = players + slots`. Real edges
/// occupy the top-left block; everything else is zero padding, which
/// acts as an always-available "stay unmatched" alternative. A
/// maximum-weight perfect matching of the padded matrix, restricted to
/// its positive real edges, is a maximum-weight matching of the graph —
/// in particular, zero- or negative-weight edges are never forced.
///
/// # Determinism
///
/// No randomness anywhere. Ties between equal-weight alternatives are
/// broken by scan order: rows are processed in player input order and
/// column scans prefer the lowest slot index, so the earlier-listed
/// player keeps the earlier-listed slot. Assignments whose edge weight
/// is not positive are reported as unmatched (same total weight).
///
/// # References
///
/// Kuhn (1955), "The Hungarian method for the assignment problem";
/// potentials formulation per Jonker & Volgenant (1987).
pub struct MatchingSolver;

impl MatchingSolver {
    /// Solves the graph, validating structural invariants first.
    ///
    /// A player with no eligible slot is left unmatched; that is not an
    /// error. Duplicate player or slot identities are.
    pub fn solve(graph: &AssignmentGraph<'_>) -> Result<Matching, MatchingError> {
        validate(graph)?;

        let p = graph.players().len();
        let s = graph.slots().len();
        let n = p + s;
        if n == 0 {
            return Ok(Matching::default());
        }

        // cost[i][j] = -weight for real edges, 0 for padding.
        let mut cost = vec![vec![0i64; n]; n];
        for (pi, si, w) in graph.edges() {
            cost[pi][si] = -w;
        }

        let assigned_col = hungarian_min(&cost);

        let mut assignments = Vec::new();
        for (pi, player) in graph.players().iter().enumerate() {
            let si = assigned_col[pi];
            if si < s {
                if let Some(weight) = graph.weight(pi, si) {
                    if weight > 0 {
                        assignments.push(Assignment {
                            player_id: player.id.clone(),
                            slot: graph.slots()[si].clone(),
                            weight,
                        });
                    }
                }
            }
        }

        let matching = Matching::new(assignments);
        tracing::debug!(
            players = p,
            slots = s,
            matched = matching.len(),
            total_weight = matching.total_weight(),
            "matching solved"
        );
        Ok(matching)
    }
}

fn validate(graph: &AssignmentGraph<'_>) -> Result<(), MatchingError> {
    let mut ids = HashSet::new();
    for player in graph.players() {
        if !ids.insert(player.id.as_str()) {
            return Err(MatchingError::MalformedGraph {
                detail: format!("duplicate player id: {}", player.id),
            });
        }
    }
    let mut slots = HashSet::new();
    for slot in graph.slots() {
        if !slots.insert((slot.label.as_str(), slot.ordinal)) {
            return Err(MatchingError::MalformedGraph {
                detail: format!("duplicate slot identity: {slot}"),
            });
        }
    }
    Ok(())
}

/// Minimum-cost perfect assignment on a square matrix.
///
/// Classic O(n^3) Hungarian algorithm with potentials. Returns, for
/// each row, the column it is assigned to. Fully deterministic: rows
/// are inserted in index order and the tightest column with the lowest
/// index is chosen at every step.
fn hungarian_min(cost: &[Vec<i64>]) -> Vec<usize> {
    let n = cost.len();

    // 1-based internally; index 0 is the virtual unmatched column.
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    let mut row_of_col = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        row_of_col[0] = i;
        let mut j0 = 0usize;
        let mut min_slack = vec![i64::MAX; n + 1];
        let mut used = vec![false; n + 1];

        // Grow an alternating tree until a free column is reached.
        loop {
            used[j0] = true;
            let i0 = row_of_col[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;
            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost[i0 - 1][j - 1] - u[i0] - v[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }
            for j in 0..=n {
                if used[j] {
                    u[row_of_col[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }
            j0 = j1;
            if row_of_col[j0] == 0 {
                break;
            }
        }

        // Augment along the alternating path back to the root.
        loop {
            let j1 = way[j0];
            row_of_col[j0] = row_of_col[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assigned = vec![0usize; n];
    for j in 1..=n {
        assigned[row_of_col[j] - 1] = j - 1;
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::roster::{HealthStatus, Player, PlayingContext, Slot};
    use crate::weights::WeightPolicy;
    use proptest::prelude::*;

    /// Builds a graph directly from an optional-weight matrix; players
    /// and slots are synthetic.
    fn matrix_players(rows: usize) -> Vec<Player> {
        (0..rows)
            .map(|i| Player::new(format!("p{i}"), format!("P{i}"), "TOR"))
            .collect()
    }

    fn matrix_slots(cols: usize) -> Vec<Slot> {
        (0..cols).map(|j| Slot::new("X", j as u32 + 1)).collect()
    }

    fn graph_from<'a>(
        players: &'a [Player],
        cols: usize,
        weights: &[Vec<Option<i64>>],
    ) -> AssignmentGraph<'a> {
        let mut graph = AssignmentGraph::new(players, matrix_slots(cols));
        for (pi, row) in weights.iter().enumerate() {
            for (si, w) in row.iter().enumerate() {
                if let Some(w) = *w {
                    graph.set_weight(pi, si, w);
                }
            }
        }
        graph
    }

    /// Exhaustive maximum over all matchings, for cross-checking.
    fn brute_force(weights: &[Vec<Option<i64>>], cols: usize) -> i64 {
        fn go(weights: &[Vec<Option<i64>>], pi: usize, used: &mut [bool]) -> i64 {
            if pi == weights.len() {
                return 0;
            }
            let mut best = go(weights, pi + 1, used);
            for (si, w) in weights[pi].iter().enumerate() {
                if let Some(w) = *w {
                    if !used[si] {
                        used[si] = true;
                        best = best.max(w + go(weights, pi + 1, used));
                        used[si] = false;
                    }
                }
            }
            best
        }
        go(weights, 0, &mut vec![false; cols])
    }

    #[test]
    fn test_simple_assignment() {
        let players = matrix_players(2);
        let weights = vec![
            vec![Some(990), Some(2)],
            vec![Some(4), Some(2)],
        ];
        let graph = graph_from(&players, 2, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.total_weight(), 992);
        assert_eq!(matching.slot_of("p0"), Some(&Slot::new("X", 1)));
        assert_eq!(matching.slot_of("p1"), Some(&Slot::new("X", 2)));
    }

    #[test]
    fn test_prefers_total_weight_over_greedy() {
        // Greedy gives p0 the 10-slot and strands p1; optimum is 9 + 8.
        let players = matrix_players(2);
        let weights = vec![
            vec![Some(10), Some(9)],
            vec![Some(8), None],
        ];
        let graph = graph_from(&players, 2, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();
        assert_eq!(matching.total_weight(), 17);
    }

    #[test]
    fn test_more_players_than_slots_leaves_worst_unmatched() {
        let players = matrix_players(3);
        let weights = vec![vec![Some(5)], vec![Some(7)], vec![Some(6)]];
        let graph = graph_from(&players, 1, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.total_weight(), 7);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching.slot_of("p1"), Some(&Slot::new("X", 1)));
        assert_eq!(matching.slot_of("p0"), None);
        assert_eq!(matching.slot_of("p2"), None);
    }

    #[test]
    fn test_negative_edges_never_forced() {
        let players = matrix_players(2);
        let weights = vec![vec![Some(-5), None], vec![Some(3), Some(-1)]];
        let graph = graph_from(&players, 2, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.total_weight(), 3);
        assert_eq!(matching.slot_of("p0"), None);
        assert_eq!(matching.slot_of("p1"), Some(&Slot::new("X", 1)));
    }

    #[test]
    fn test_player_with_no_edges_is_unmatched() {
        let players = matrix_players(2);
        let weights = vec![vec![None], vec![Some(3)]];
        let graph = graph_from(&players, 1, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.slot_of("p0"), None);
        assert_eq!(matching.total_weight(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let players: Vec<Player> = vec![];
        let graph = AssignmentGraph::new(&players, vec![]);
        let matching = MatchingSolver::solve(&graph).unwrap();
        assert!(matching.is_empty());
    }

    #[test]
    fn test_duplicate_player_id_rejected() {
        let players = vec![
            Player::new("dup", "A", "TOR"),
            Player::new("dup", "B", "MTL"),
        ];
        let graph = AssignmentGraph::new(&players, matrix_slots(2));
        let err = MatchingSolver::solve(&graph).unwrap_err();
        assert!(matches!(err, MatchingError::MalformedGraph { .. }));
        assert!(err.to_string().contains("duplicate player id"));
    }

    #[test]
    fn test_duplicate_slot_identity_rejected() {
        let players = matrix_players(1);
        let slots = vec![Slot::new("C", 1), Slot::new("C", 1)];
        let graph = AssignmentGraph::new(&players, slots);
        let err = MatchingSolver::solve(&graph).unwrap_err();
        assert!(err.to_string().contains("duplicate slot identity"));
    }

    #[test]
    fn test_tie_break_is_earlier_player_earlier_slot() {
        // Both players tie on both slots; p0 must keep slot 1.
        let players = matrix_players(2);
        let weights = vec![vec![Some(5), Some(5)], vec![Some(5), Some(5)]];
        let graph = graph_from(&players, 2, &weights);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.slot_of("p0"), Some(&Slot::new("X", 1)));
        assert_eq!(matching.slot_of("p1"), Some(&Slot::new("X", 2)));
    }

    #[test]
    fn test_sticky_edge_dominates() {
        // A high-rank rival wants the IR slot's player elsewhere, but the
        // sticky 1001 edge keeps the occupant parked.
        let players = vec![
            Player::new("parked", "Parked", "TOR")
                .with_eligible_positions(["C"])
                .with_selected_position("IR")
                .with_rank(10),
            Player::new("rival", "Rival", "TOR")
                .with_eligible_positions(["C"])
                .with_rank(1),
        ];
        let ctx = PlayingContext::new(["TOR"]);
        let builder = GraphBuilder::new(WeightPolicy::new()).with_bench_slots(1);
        let layout = vec!["C".to_string(), "IR".to_string()];
        let graph = builder.build(&players, &layout, &ctx);
        let matching = MatchingSolver::solve(&graph).unwrap();

        assert_eq!(matching.slot_of("parked"), Some(&Slot::new("IR", 1)));
        assert_eq!(matching.slot_of("rival"), Some(&Slot::new("C", 1)));
    }

    #[test]
    fn test_full_roster_scenario() {
        let players = vec![
            Player::new("a", "A", "TOR")
                .with_eligible_positions(["C"])
                .with_rank(10),
            Player::new("b", "B", "TOR")
                .with_eligible_positions(["C"])
                .with_rank(20)
                .with_health(HealthStatus::Designated("O".into())),
        ];
        let ctx = PlayingContext::new(["TOR"]);
        let builder = GraphBuilder::new(WeightPolicy::new()).with_bench_slots(1);
        let graph = builder.build(&players, &["C".to_string()], &ctx);
        let matching = MatchingSolver::solve(&graph).unwrap();

        // A->C (990), B->BN (2).
        assert_eq!(matching.total_weight(), 992);
        assert_eq!(matching.slot_of("a"), Some(&Slot::new("C", 1)));
        assert_eq!(matching.slot_of("b"), Some(&Slot::new("BN", 1)));
    }

    #[test]
    fn test_total_at_least_all_on_bench() {
        // With bench slots available for everyone, the optimum can never
        // be worse than benching the whole roster.
        let players: Vec<Player> = (0u32..3)
            .map(|i| {
                Player::new(format!("p{i}"), format!("P{i}"), "TOR")
                    .with_eligible_positions(["C"])
                    .with_rank(10 * (i + 1))
            })
            .collect();
        let ctx = PlayingContext::new(["TOR"]);
        let builder = GraphBuilder::new(WeightPolicy::new());
        let graph = builder.build(&players, &["C".to_string()], &ctx);
        let matching = MatchingSolver::solve(&graph).unwrap();

        let all_on_bench = players.len() as i64 * crate::weights::BENCH_WEIGHT;
        assert!(matching.total_weight() >= all_on_bench);
    }

    fn weight_matrix() -> impl Strategy<Value = Vec<Vec<Option<i64>>>> {
        (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(
                proptest::collection::vec(
                    proptest::option::of(-20i64..=1001), cols),
                rows,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_matching_is_valid(weights in weight_matrix()) {
            let players = matrix_players(weights.len());
            let cols = weights[0].len();
            let graph = graph_from(&players, cols, &weights);
            let matching = MatchingSolver::solve(&graph).unwrap();

            let mut seen_players = HashSet::new();
            let mut seen_slots = HashSet::new();
            for a in matching.assignments() {
                prop_assert!(seen_players.insert(a.player_id.clone()));
                prop_assert!(seen_slots.insert(a.slot.clone()));
                prop_assert!(a.weight > 0);
            }
        }

        #[test]
        fn prop_matching_is_optimal(weights in weight_matrix()) {
            let players = matrix_players(weights.len());
            let cols = weights[0].len();
            let graph = graph_from(&players, cols, &weights);
            let matching = MatchingSolver::solve(&graph).unwrap();

            prop_assert_eq!(matching.total_weight(), brute_force(&weights, cols));
        }

        #[test]
        fn prop_solver_is_deterministic(weights in weight_matrix()) {
            let players = matrix_players(weights.len());
            let cols = weights[0].len();
            let graph = graph_from(&players, cols, &weights);
            let first = MatchingSolver::solve(&graph).unwrap();
            let second = MatchingSolver::solve(&graph).unwrap();

            prop_assert_eq!(first.assignments(), second.assignments());
            prop_assert_eq!(first.total_weight(), second.total_weight());
        }
    }
}
