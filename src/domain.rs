#![cfg(feature = "std")]

use serde::{Deserialize, Serialize};

use crate::{common::ShotOutcome, game::MatchStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "match-{}", self.0)
    }
}

/// Wire form of a shot result: the legacy `(hit, sunk)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    pub hit: bool,
    pub sunk: bool,
}

impl From<ShotOutcome> for ShotReport {
    fn from(outcome: ShotOutcome) -> Self {
        let (hit, sunk) = outcome.as_flags();
        ShotReport { hit, sunk }
    }
}

/// Public view of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub players: [PlayerId; 2],
    pub status: MatchStatus,
    pub winner: Option<PlayerId>,
    pub current_turn: PlayerId,
    pub shots_fired: usize,
}

/// Win/loss record over finished matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
}
