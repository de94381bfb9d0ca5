//! Roster snapshot types.

use std::collections::HashSet;
use std::fmt;

/// Position label used for bench slots. Every player is bench-eligible.
pub const BENCH_LABEL: &str = "BN";

/// Rank substituted when a player's draft rank is unknown.
///
/// Deliberately worse than any realistic draft position so that unranked
/// players lose ties against every ranked player.
pub const WORST_RANK: u32 = 700;

/// Health designation of a player.
///
/// Anything other than `Healthy` carries the raw status code reported by
/// the league (e.g. `"IR"`, `"DTD"`, `"O"`). The policy layer only cares
/// about healthy-vs-not; the raw code stays available to the rule DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    /// No injury designation.
    Healthy,

    /// Carries the league's status code.
    Designated(String),
}

impl HealthStatus {
    /// Returns the raw status code, `"OK"` for a healthy player.
    pub fn code(&self) -> &str {
        match self {
            HealthStatus::Healthy => "OK",
            HealthStatus::Designated(code) => code,
        }
    }

    /// Whether the player carries no injury designation.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Immutable snapshot of one rostered player.
///
/// Constructed fresh per optimization pass from externally fetched data;
/// the core never mutates it.
///
/// # Examples
///
/// ```
/// use lineup_optimizer::roster::{HealthStatus, Player};
///
/// let player = Player::new("p.123", "J. Example", "TOR")
///     .with_eligible_positions(["C", "LW"])
///     .with_selected_position("BN")
///     .with_rank(42);
/// assert!(player.health.is_healthy());
/// assert_eq!(player.effective_rank(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Opaque unique key (e.g. the remote service's player key).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Position labels this player may fill, bench excluded (bench
    /// eligibility is universal).
    pub eligible_positions: Vec<String>,

    /// Label of the slot the player currently occupies.
    pub selected_position: String,

    /// Injury designation.
    pub health: HealthStatus,

    /// Real-world team identifier.
    pub team: String,

    /// Draft rank; lower is better. `None` when the rank lookup failed.
    pub rank: Option<u32>,
}

impl Player {
    /// Creates a healthy, unranked player currently on the bench.
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            eligible_positions: Vec::new(),
            selected_position: BENCH_LABEL.to_string(),
            health: HealthStatus::Healthy,
            team: team.into(),
            rank: None,
        }
    }

    pub fn with_eligible_positions<I, S>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_positions = positions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_selected_position(mut self, label: impl Into<String>) -> Self {
        self.selected_position = label.into();
        self
    }

    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = health;
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Draft rank with the [`WORST_RANK`] sentinel substituted when unknown.
    pub fn effective_rank(&self) -> u32 {
        self.rank.unwrap_or(WORST_RANK)
    }

    /// Whether this player may fill a slot with the given label.
    ///
    /// Bench is universally eligible.
    pub fn is_eligible_for(&self, label: &str) -> bool {
        label == BENCH_LABEL || self.eligible_positions.iter().any(|p| p == label)
    }
}

/// A uniquely identified roster position instance.
///
/// Slots are derived from the league's position layout each run; two slots
/// with the same label are distinguished by `ordinal` (1-based occurrence
/// index), e.g. "C 2" for the second center slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Position label (scoring position, bench, or an injured-reserve
    /// variant).
    pub label: String,

    /// 1-based occurrence index among slots sharing this label.
    pub ordinal: u32,
}

impl Slot {
    pub fn new(label: impl Into<String>, ordinal: u32) -> Self {
        Self {
            label: label.into(),
            ordinal,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.ordinal)
    }
}

/// The set of teams active for the scoring period being optimized.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayingContext {
    teams: HashSet<String>,
}

impl PlayingContext {
    /// Creates a context from the identifiers of teams playing today.
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given team plays in this scoring period.
    pub fn is_active(&self, team: &str) -> bool {
        self.teams.contains(team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// One move required to reach the optimal assignment.
///
/// Emitted only when `from != to`; the external persistence layer turns
/// these into whatever update protocol the remote service requires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterChange {
    /// Id of the player being moved.
    pub player_id: String,

    /// Display name, for human-readable change reports.
    pub player_name: String,

    /// Label of the slot the player currently occupies.
    pub from: String,

    /// Label of the slot the player should move to.
    pub to: String,
}
