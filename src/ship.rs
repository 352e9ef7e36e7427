//! Ship placements: a straight run of cells anchored at its top-left end.

use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship of `size` cells starting at `(x, y)` and extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    x: usize,
    y: usize,
    size: usize,
    orientation: Orientation,
}

impl Placement {
    /// Place a ship of `size` at `(x, y)` with `orientation`.
    /// Fails if the run would leave the grid.
    pub fn new(
        size: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<Self, PlacementError> {
        if size == 0 {
            return Err(PlacementError::EmptyShip);
        }
        let end = match orientation {
            Orientation::Horizontal => x.checked_add(size - 1).map(|end_x| (end_x, y)),
            Orientation::Vertical => y.checked_add(size - 1).map(|end_y| (x, end_y)),
        };
        match end {
            Some((end_x, end_y)) if end_x < BOARD_SIZE && end_y < BOARD_SIZE => {}
            _ => return Err(PlacementError::OutOfBounds),
        }
        Ok(Placement {
            x,
            y,
            size,
            orientation,
        })
    }

    /// Largest anchor `(x, y)` for which a ship of `size` still fits.
    pub fn max_anchor(size: usize, orientation: Orientation) -> (usize, usize) {
        let last = BOARD_SIZE - 1;
        let span = BOARD_SIZE.saturating_sub(size);
        match orientation {
            Orientation::Horizontal => (span, last),
            Orientation::Vertical => (last, span),
        }
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.size).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
