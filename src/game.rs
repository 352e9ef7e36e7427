use rand::Rng;

use crate::{
    board::BoardState,
    common::{MatchError, ShotOutcome},
    fleet::FleetLayoutGenerator,
};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    /// Boards not yet both available.
    Waiting,
    InProgress,
    /// Terminal.
    Finished,
}

/// Decide the winner from both boards of a match.
///
/// Returns the owner of the board that still has ships when the other one has
/// none left, `None` while both fleets are afloat. Both fleets destroyed at once
/// cannot happen under turn order and is reported as an error.
pub fn evaluate_winner<P: Copy>(
    board_a: &BoardState,
    owner_a: P,
    board_b: &BoardState,
    owner_b: P,
) -> Result<Option<P>, MatchError> {
    match (board_a.is_exhausted(), board_b.is_exhausted()) {
        (false, false) => Ok(None),
        (true, false) => Ok(Some(owner_b)),
        (false, true) => Ok(Some(owner_a)),
        (true, true) => Err(MatchError::BothFleetsDestroyed),
    }
}

/// Match bookkeeping without the boards: players, status, winner and turn.
///
/// Player A shoots first. A miss hands the turn to the opponent; a hit keeps
/// it. Rejected shots change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState<P> {
    players: [P; 2],
    status: MatchStatus,
    winner: Option<P>,
    turn: usize,
}

impl<P: Copy + PartialEq> MatchState<P> {
    pub fn new(player_a: P, player_b: P) -> Result<Self, MatchError> {
        if player_a == player_b {
            return Err(MatchError::SamePlayer);
        }
        Ok(Self {
            players: [player_a, player_b],
            status: MatchStatus::Waiting,
            winner: None,
            turn: 0,
        })
    }

    pub fn players(&self) -> [P; 2] {
        self.players
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<P> {
        self.winner
    }

    /// Player whose shot is expected next.
    pub fn current_turn(&self) -> P {
        self.players[self.turn]
    }

    pub fn involves(&self, player: P) -> bool {
        self.players.contains(&player)
    }

    /// Index of `player` within the match.
    pub fn seat(&self, player: P) -> Result<usize, MatchError> {
        self.players
            .iter()
            .position(|&p| p == player)
            .ok_or(MatchError::UnknownPlayer)
    }

    pub fn opponent_of(&self, player: P) -> Result<P, MatchError> {
        Ok(self.players[1 - self.seat(player)?])
    }

    /// Waiting → InProgress, once both boards exist.
    pub fn begin(&mut self) -> Result<(), MatchError> {
        if self.status != MatchStatus::Waiting {
            return Err(MatchError::AlreadyStarted);
        }
        self.status = MatchStatus::InProgress;
        Ok(())
    }

    /// Check that `shooter` may shoot now and return the player being shot at.
    pub fn target_of(&self, shooter: P) -> Result<P, MatchError> {
        match self.status {
            MatchStatus::Waiting => return Err(MatchError::NotStarted),
            MatchStatus::Finished => return Err(MatchError::Finished),
            MatchStatus::InProgress => {}
        }
        let seat = self.seat(shooter)?;
        if seat != self.turn {
            return Err(MatchError::NotYourTurn);
        }
        Ok(self.players[1 - seat])
    }

    /// Record the effect of a shot already applied to the opponent's board.
    pub fn record_shot(&mut self, outcome: ShotOutcome, winner: Option<P>) {
        if !outcome.is_accepted() {
            return;
        }
        if outcome == ShotOutcome::Miss {
            self.turn = 1 - self.turn;
        }
        if let Some(w) = winner {
            self.winner = Some(w);
            self.status = MatchStatus::Finished;
        }
    }
}

/// A whole match held in memory: bookkeeping plus both boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSession<P> {
    state: MatchState<P>,
    boards: [Option<BoardState>; 2],
}

impl<P: Copy + PartialEq> MatchSession<P> {
    /// New match waiting for both boards.
    pub fn new(player_a: P, player_b: P) -> Result<Self, MatchError> {
        Ok(Self {
            state: MatchState::new(player_a, player_b)?,
            boards: [None, None],
        })
    }

    /// Create a match and generate both boards; the match starts in progress.
    pub fn generate<R: Rng + ?Sized>(
        player_a: P,
        player_b: P,
        generator: &FleetLayoutGenerator,
        rng: &mut R,
    ) -> Result<Self, MatchError> {
        let mut session = Self::new(player_a, player_b)?;
        for player in [player_a, player_b] {
            let layout = generator.generate(rng)?;
            session.attach_board(player, BoardState::new(layout))?;
        }
        Ok(session)
    }

    /// Hand a board to `player`. The match starts once both boards are in.
    pub fn attach_board(&mut self, player: P, board: BoardState) -> Result<(), MatchError> {
        if self.state.status() != MatchStatus::Waiting {
            return Err(MatchError::AlreadyStarted);
        }
        let seat = self.state.seat(player)?;
        self.boards[seat] = Some(board);
        if self.boards.iter().all(Option::is_some) {
            self.state.begin()?;
        }
        Ok(())
    }

    pub fn state(&self) -> &MatchState<P> {
        &self.state
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }

    pub fn winner(&self) -> Option<P> {
        self.state.winner()
    }

    pub fn board(&self, player: P) -> Result<&BoardState, MatchError> {
        let seat = self.state.seat(player)?;
        self.boards[seat].as_ref().ok_or(MatchError::BoardNotFound)
    }

    /// `shooter` fires at `(x, y)` on the opponent's board. The winner check
    /// runs after every accepted shot.
    pub fn fire(&mut self, shooter: P, x: i32, y: i32) -> Result<ShotOutcome, MatchError> {
        let target = self.state.target_of(shooter)?;
        let target_seat = self.state.seat(target)?;
        let outcome = self.boards[target_seat]
            .as_mut()
            .ok_or(MatchError::BoardNotFound)?
            .apply_shot(x, y);
        if !outcome.is_accepted() {
            return Ok(outcome);
        }

        let [a, b] = self.state.players();
        let winner = evaluate_winner(self.board(a)?, a, self.board(b)?, b)?;
        self.state.record_shot(outcome, winner);
        Ok(outcome)
    }
}
