//! Assignment diff.

use super::types::{Player, RosterChange};
use crate::matching::Matching;

/// Computes the minimal move list from the players' current slots to
/// the matched assignment.
///
/// Changes are emitted in player input order for reproducible output.
/// A player absent from the matching keeps its current slot and emits
/// nothing; so does a player matched to the slot label it already
/// occupies.
///
/// # Examples
///
/// ```no_run
/// use lineup_optimizer::matching::Matching;
/// use lineup_optimizer::roster::{diff, Player};
///
/// # let matching = Matching::default();
/// # let players: Vec<Player> = vec![];
/// let changes = diff(&matching, &players);
/// for change in &changes {
///     println!("{}: {} -> {}", change.player_name, change.from, change.to);
/// }
/// ```
pub fn diff(matching: &Matching, players: &[Player]) -> Vec<RosterChange> {
    let mut changes = Vec::new();
    for player in players {
        if let Some(slot) = matching.slot_of(&player.id) {
            if slot.label != player.selected_position {
                changes.push(RosterChange {
                    player_id: player.id.clone(),
                    player_name: player.name.clone(),
                    from: player.selected_position.clone(),
                    to: slot.label.clone(),
                });
            }
        }
    }
    changes
}
