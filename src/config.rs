//! Fixed game constants and generator limits.

/// Side length of every grid.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in one fleet.
pub const NUM_SHIPS: usize = 10;

/// Ship sizes of one fleet, in placement order. Ship ids are 1-based indices
/// into this array.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of cells covered by a full fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells();

/// Random draws allowed per ship before the whole board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Full-board regenerations allowed before generation fails.
pub const MAX_BOARD_RESTARTS: usize = 100;

const fn fleet_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += FLEET[i];
        i += 1;
    }
    total
}

/// Declared size of the ship with the given id, or `None` for 0 and ids past
/// the end of the fleet.
pub fn ship_size(id: u8) -> Option<usize> {
    match id as usize {
        0 => None,
        n => FLEET.get(n - 1).copied(),
    }
}

/// Retry budgets used by [`FleetLayoutGenerator`](crate::FleetLayoutGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorLimits {
    pub placement_attempts: usize,
    pub board_restarts: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            board_restarts: MAX_BOARD_RESTARTS,
        }
    }
}
