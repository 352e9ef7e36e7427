//! Commonly used types for ease of import.

pub use crate::{
    BoardState, FleetLayoutGenerator, HuntPlayer, MatchSession, MatchStatus, Player, RandomPlayer,
    ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::{
    domain::{MatchId, PlayerId},
    BoardStore, InMemoryBoardStore, MatchService,
};
