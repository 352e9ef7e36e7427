//! Shot-selection strategies used by the simulator.

use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::ShotOutcome,
    grid::{neighborhood, ShotGrid},
};

/// Interface implemented by automated players.
pub trait Player: Send {
    /// Choose the next cell to shoot given the shots already taken against the
    /// opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, shots: &ShotGrid) -> (usize, usize);

    /// Inform the player of the outcome of its last shot.
    fn handle_outcome(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}

/// Uniformly random cell among those not yet shot.
fn random_unshot<F>(rng: &mut SmallRng, shots: &ShotGrid, mut skip: F) -> Option<(usize, usize)>
where
    F: FnMut((usize, usize)) -> bool,
{
    let open: Vec<_> = shots.positions(|s| !s).filter(|&c| !skip(c)).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Shoots random unshot cells.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, shots: &ShotGrid) -> (usize, usize) {
        random_unshot(rng, shots, |_| false).unwrap_or((0, 0))
    }
}

/// Hunt/target player.
///
/// Hunts randomly until it hits, then works the orthogonal neighbours of the
/// wounded ship. Ships are straight and never touch, so the diagonals of every
/// hit and the whole surroundings of a sunk ship are known to be water.
#[derive(Debug, Default)]
pub struct HuntPlayer {
    pending: Vec<(usize, usize)>,
    wounded: Vec<(usize, usize)>,
    water: ShotGrid,
}

impl HuntPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_open(&self, shots: &ShotGrid, (x, y): (usize, usize)) -> bool {
        shots.get(x, y) == Ok(false) && self.water.get(x, y) == Ok(false)
    }

    fn mark_water(&mut self, x: usize, y: usize) {
        let _ = self.water.set(x, y, true);
    }

    /// Queue follow-up shots around the wounded ship. With two or more hits
    /// the ship's axis is known and only its two ends are worth trying.
    fn queue_follow_ups(&mut self) {
        self.pending.clear();
        let horizontal = self.wounded.windows(2).any(|w| w[0].1 == w[1].1);
        let vertical = self.wounded.windows(2).any(|w| w[0].0 == w[1].0);
        for &(x, y) in &self.wounded {
            let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(4);
            if !vertical {
                candidates.extend(x.checked_sub(1).map(|nx| (nx, y)));
                candidates.push((x + 1, y));
            }
            if !horizontal {
                candidates.extend(y.checked_sub(1).map(|ny| (x, ny)));
                candidates.push((x, y + 1));
            }
            self.pending.extend(candidates);
        }
    }
}

impl Player for HuntPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, shots: &ShotGrid) -> (usize, usize) {
        while let Some(coord) = self.pending.pop() {
            if self.is_open(shots, coord) {
                return coord;
            }
        }
        let water = self.water;
        random_unshot(rng, shots, |(x, y)| water.get(x, y) == Ok(true))
            .or_else(|| random_unshot(rng, shots, |_| false))
            .unwrap_or((0, 0))
    }

    fn handle_outcome(&mut self, (x, y): (usize, usize), outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit { sunk: false } => {
                for (nx, ny) in neighborhood(x, y) {
                    if nx != x && ny != y {
                        self.mark_water(nx, ny);
                    }
                }
                self.wounded.push((x, y));
                self.queue_follow_ups();
            }
            ShotOutcome::Hit { sunk: true } => {
                self.wounded.push((x, y));
                let cells = core::mem::take(&mut self.wounded);
                for (nx, ny) in cells.iter().flat_map(|&(cx, cy)| neighborhood(cx, cy)) {
                    self.mark_water(nx, ny);
                }
                self.pending.clear();
            }
            _ => {}
        }
    }
}
