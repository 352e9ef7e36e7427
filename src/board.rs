//! Per-player board: ship ownership, shots taken against it, ships afloat.

use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::grid::{OwnershipGrid, ShipId, ShotGrid};

/// One player's board for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    ownership: OwnershipGrid,
    shots: ShotGrid,
    ships_remaining: usize,
}

impl BoardState {
    /// Fresh board over `ownership` with no shots taken. Every distinct ship id
    /// on the grid counts as one ship afloat.
    pub fn new(ownership: OwnershipGrid) -> Self {
        let mut seen = [false; u8::MAX as usize + 1];
        let mut ships = 0;
        for (_, id) in ownership.iter() {
            if id != 0 && !seen[id as usize] {
                seen[id as usize] = true;
                ships += 1;
            }
        }
        BoardState {
            ownership,
            shots: ShotGrid::default(),
            ships_remaining: ships,
        }
    }

    /// Restore a board from previously saved parts.
    pub fn from_parts(ownership: OwnershipGrid, shots: ShotGrid, ships_remaining: usize) -> Self {
        BoardState {
            ownership,
            shots,
            ships_remaining,
        }
    }

    pub fn ownership(&self) -> &OwnershipGrid {
        &self.ownership
    }

    pub fn shots(&self) -> &ShotGrid {
        &self.shots
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Returns `true` when every ship on the board is sunk.
    pub fn is_exhausted(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Cells occupied by ship `id`, in row-major order.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ownership.positions(move |v| id != 0 && v == id)
    }

    /// Returns `true` when ship `id` exists and all its cells are shot.
    pub fn is_sunk(&self, id: ShipId) -> bool {
        let mut cells = self.ship_cells(id).peekable();
        cells.peek().is_some() && cells.all(|(x, y)| self.shots.get(x, y) == Ok(true))
    }

    /// Apply a shot at `(x, y)`.
    ///
    /// Out-of-bounds and repeated shots leave the board untouched. Otherwise
    /// the cell is marked shot, and a hit that completes a ship decrements
    /// `ships_remaining`.
    pub fn apply_shot(&mut self, x: i32, y: i32) -> ShotOutcome {
        let (Some(x), Some(y)) = (to_index(x), to_index(y)) else {
            return ShotOutcome::OutOfBounds;
        };
        match self.shots.get(x, y) {
            Ok(false) => {}
            Ok(true) => return ShotOutcome::AlreadyShot,
            Err(_) => return ShotOutcome::OutOfBounds,
        }
        if self.shots.set(x, y, true).is_err() {
            return ShotOutcome::OutOfBounds;
        }

        let id = self.ownership.get(x, y).unwrap_or(0);
        if id == 0 {
            return ShotOutcome::Miss;
        }
        let sunk = self.is_sunk(id);
        if sunk {
            self.ships_remaining = self.ships_remaining.saturating_sub(1);
        }
        ShotOutcome::Hit { sunk }
    }
}

fn to_index(v: i32) -> Option<usize> {
    usize::try_from(v).ok().filter(|&i| i < BOARD_SIZE)
}
