//! Common types: shot outcomes and the error types of the game core.

use thiserror::Error;

use crate::grid::ShipId;

/// Result of applying one shot to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on a ship; `sunk` is set when it was the ship's last cell.
    Hit { sunk: bool },
    /// Shot landed on water and was recorded.
    Miss,
    /// Cell had been shot before; nothing changed.
    AlreadyShot,
    /// Coordinate outside the grid; nothing changed.
    OutOfBounds,
}

impl ShotOutcome {
    /// Returns `true` when the shot was recorded on the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. } | ShotOutcome::Miss)
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Hit { sunk: true })
    }

    /// Legacy `(hit, sunk)` pair. Rejected shots collapse into `(false, false)`,
    /// the same as a miss.
    pub fn as_flags(&self) -> (bool, bool) {
        match self {
            ShotOutcome::Hit { sunk } => (true, *sunk),
            _ => (false, false),
        }
    }
}

/// Errors returned by grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
}

/// Errors returned when building or placing a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("ship size must be at least 1")]
    EmptyShip,
    #[error("ship does not fit inside the grid")]
    OutOfBounds,
    #[error("ship touches or overlaps another ship")]
    Blocked,
}

/// Fleet generation gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no valid fleet layout found after {restarts} board restarts")]
    Exhausted { restarts: usize },
}

/// Ways an ownership grid can break the fleet rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cell ({x}, {y}) holds unknown ship id {id}")]
    UnknownShip { id: ShipId, x: usize, y: usize },
    #[error("ship {id} is missing from the grid")]
    MissingShip { id: ShipId },
    #[error("ship {id} covers {found} cells, expected {expected}")]
    WrongSize {
        id: ShipId,
        expected: usize,
        found: usize,
    },
    #[error("ship {id} is not a straight contiguous run")]
    NotStraight { id: ShipId },
    #[error("ships {a} and {b} touch")]
    Touching { a: ShipId, b: ShipId },
}

/// Errors raised by match orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("board not found for the requested player")]
    BoardNotFound,
    #[error("fleet generation exhausted: {0}")]
    GenerationExhausted(#[from] GenerationError),
    #[error("match not found")]
    MatchNotFound,
    #[error("player is not part of this match")]
    UnknownPlayer,
    #[error("a player cannot be matched against itself")]
    SamePlayer,
    #[error("match has not started")]
    NotStarted,
    #[error("match has already started")]
    AlreadyStarted,
    #[error("match is already finished")]
    Finished,
    #[error("player attempted to shoot out of turn")]
    NotYourTurn,
    #[error("both fleets are destroyed")]
    BothFleetsDestroyed,
}
