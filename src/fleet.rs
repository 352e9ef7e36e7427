//! Random fleet placement under the no-touching rule.

use rand::Rng;

use crate::common::{GenerationError, LayoutError, PlacementError};
use crate::config::{ship_size, GeneratorLimits, FLEET, NUM_SHIPS};
use crate::grid::{chebyshev, neighborhood, OwnershipGrid, ShipId};
use crate::ship::{Orientation, Placement};

/// Produces random, rule-valid fleet layouts from an injected random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetLayoutGenerator {
    limits: GeneratorLimits,
}

impl FleetLayoutGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: GeneratorLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> GeneratorLimits {
        self.limits
    }

    /// Generate a full fleet layout.
    ///
    /// Each ship gets `placement_attempts` random draws. If one ship runs out,
    /// the board is discarded and generation restarts from an empty grid, at
    /// most `board_restarts` times.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<OwnershipGrid, GenerationError> {
        for _ in 0..=self.limits.board_restarts {
            if let Some(grid) = self.try_generate(rng) {
                return Ok(grid);
            }
        }
        Err(GenerationError::Exhausted {
            restarts: self.limits.board_restarts,
        })
    }

    fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<OwnershipGrid> {
        let mut grid = OwnershipGrid::default();
        for (i, &size) in FLEET.iter().enumerate() {
            let placement = self.random_placement(&grid, size, rng)?;
            place(&mut grid, &placement, (i + 1) as ShipId).ok()?;
        }
        Some(grid)
    }

    /// Draw placements for a ship of `size` until one is valid on `grid`, or
    /// the per-ship attempt budget runs out.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        grid: &OwnershipGrid,
        size: usize,
        rng: &mut R,
    ) -> Option<Placement> {
        for _ in 0..self.limits.placement_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = Placement::max_anchor(size, orientation);
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let Ok(placement) = Placement::new(size, orientation, x, y) else {
                continue;
            };
            if can_place(grid, &placement) {
                return Some(placement);
            }
        }
        None
    }
}

/// Returns `true` when every cell of `placement` and its clipped
/// 8-neighbourhood is empty.
pub fn can_place(grid: &OwnershipGrid, placement: &Placement) -> bool {
    placement
        .cells()
        .flat_map(|(x, y)| neighborhood(x, y))
        .all(|(nx, ny)| grid.get(nx, ny) == Ok(0))
}

/// Write `id` into every cell of `placement`, refusing placements that touch
/// or overlap ships already on the grid.
pub fn place(grid: &mut OwnershipGrid, placement: &Placement, id: ShipId) -> Result<(), PlacementError> {
    if !can_place(grid, placement) {
        return Err(PlacementError::Blocked);
    }
    for (x, y) in placement.cells() {
        grid.set(x, y, id).map_err(|_| PlacementError::OutOfBounds)?;
    }
    Ok(())
}

/// Check a layout against the fleet composition and the no-touching rule.
pub fn validate_layout(grid: &OwnershipGrid) -> Result<(), LayoutError> {
    for ((x, y), id) in grid.iter() {
        if id != 0 && ship_size(id).is_none() {
            return Err(LayoutError::UnknownShip { id, x, y });
        }
    }

    for n in 1..=NUM_SHIPS {
        let id = n as ShipId;
        let expected = FLEET[n - 1];
        let mut cells = grid.positions(move |v| v == id);
        let Some(first) = cells.next() else {
            return Err(LayoutError::MissingShip { id });
        };
        let (mut min, mut max, mut found) = (first, first, 1usize);
        for (x, y) in cells {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
            found += 1;
        }
        if found != expected {
            return Err(LayoutError::WrongSize {
                id,
                expected,
                found,
            });
        }
        // `found` cells inside a one-wide bounding box of length `found` is a run.
        let (w, h) = (max.0 - min.0 + 1, max.1 - min.1 + 1);
        if !((w == 1 && h == found) || (h == 1 && w == found)) {
            return Err(LayoutError::NotStraight { id });
        }
    }

    let occupied = grid.positions(|v| v != 0);
    for a in occupied {
        let id_a = grid.get(a.0, a.1).unwrap_or(0);
        for b in grid.positions(move |v| v != 0 && v != id_a) {
            if chebyshev(a, b) < 2 {
                let id_b = grid.get(b.0, b.1).unwrap_or(0);
                return Err(LayoutError::Touching { a: id_a, b: id_b });
            }
        }
    }
    Ok(())
}
