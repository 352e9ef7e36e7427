//! A fixed 10×10 grid shared by ship ownership and shot tracking.
//!
//! Cells are stored row-major and addressed as `(x, y)`, where `x` is the
//! column and `y` the row. The type is `no_std` friendly and never allocates.

use core::fmt;

use crate::common::GridError;
use crate::config::BOARD_SIZE;

/// Ship id stored in an ownership grid; `0` marks an empty cell.
pub type ShipId = u8;

/// Grid recording which ship (if any) occupies each cell.
pub type OwnershipGrid = Grid<ShipId>;

/// Grid recording which cells have been shot.
pub type ShotGrid = Grid<bool>;

/// A fixed-size `BOARD_SIZE`×`BOARD_SIZE` matrix of `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: [[T; BOARD_SIZE]; BOARD_SIZE],
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Grid {
            cells: [[value; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a grid from rows, `rows[y][x]`.
    pub fn from_rows(rows: [[T; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Grid { cells: rows }
    }

    /// Returns `true` when `(x, y)` addresses a cell.
    #[inline]
    pub fn contains(x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    /// Gets the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<T, GridError> {
        Self::check_bounds(x, y)?;
        Ok(self.cells[y][x])
    }

    /// Sets the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        Self::check_bounds(x, y)?;
        self.cells[y][x] = value;
        Ok(())
    }

    #[inline]
    fn check_bounds(x: usize, y: usize) -> Result<(), GridError> {
        if Self::contains(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }

    /// Rows of the grid, `rows()[y][x]`.
    pub fn rows(&self) -> &[[T; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterator over every cell in row-major order, yielding `((x, y), value)`.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { grid: self, idx: 0 }
    }

    /// Positions of all cells matching `pred`, in row-major order.
    pub fn positions<'a, F>(&'a self, mut pred: F) -> impl Iterator<Item = (usize, usize)> + 'a
    where
        F: FnMut(T) -> bool + 'a,
    {
        self.iter()
            .filter(move |&(_, value)| pred(value))
            .map(|(pos, _)| pos)
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

/// The cell `(x, y)` and its 8-neighbourhood, clipped to the grid.
///
/// Positions outside the grid (including `(x, y)` itself) are skipped.
pub fn neighborhood(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let xs = x.saturating_sub(1)..=x.saturating_add(1).min(BOARD_SIZE - 1);
    let ys = y.saturating_sub(1)..=y.saturating_add(1).min(BOARD_SIZE - 1);
    let in_grid = x < BOARD_SIZE && y < BOARD_SIZE;
    ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
        .filter(move |_| in_grid)
}

/// Chebyshev (king-move) distance between two cells.
pub fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// Iterator over the cells of a grid.
#[derive(Clone, Copy)]
pub struct Cells<'a, T> {
    grid: &'a Grid<T>,
    idx: usize,
}

impl<T: Copy> Iterator for Cells<'_, T> {
    type Item = ((usize, usize), T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        let (x, y) = (self.idx % BOARD_SIZE, self.idx / BOARD_SIZE);
        self.idx += 1;
        Some(((x, y), self.grid.cells[y][x]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = BOARD_SIZE * BOARD_SIZE - self.idx.min(BOARD_SIZE * BOARD_SIZE);
        (left, Some(left))
    }
}

impl<T: Copy> ExactSizeIterator for Cells<'_, T> {}

impl fmt::Debug for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotGrid:")?;
        for row in self.cells.iter() {
            for &shot in row.iter() {
                write!(f, "{} ", if shot { '■' } else { '□' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid<ShipId> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OwnershipGrid:")?;
        for row in self.cells.iter() {
            for &id in row.iter() {
                if id == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, "{:>2}", id)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
