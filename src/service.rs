#![cfg(feature = "std")]

//! Match orchestration on top of a [`BoardStore`].
//!
//! Each match has its own async mutex, held for the whole
//! load → shoot → evaluate → save sequence, so shots against one board never
//! interleave. Different matches proceed independently. Nothing is saved or
//! counted until the shot has been fully evaluated.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rand::Rng;
use tokio::sync::Mutex as AsyncMutex;

use crate::{
    board::BoardState,
    common::{MatchError, ShotOutcome},
    domain::{MatchId, MatchSummary, PlayerId, PlayerStats},
    fleet::FleetLayoutGenerator,
    game::{evaluate_winner, MatchState, MatchStatus},
    store::BoardStore,
};

#[derive(Debug)]
struct MatchRecord {
    state: MatchState<PlayerId>,
    shots_fired: usize,
}

type Handle = Arc<AsyncMutex<MatchRecord>>;

pub struct MatchService<S: BoardStore> {
    store: S,
    generator: FleetLayoutGenerator,
    matches: Mutex<HashMap<MatchId, Handle>>,
    next_id: AtomicU64,
}

impl<S: BoardStore> MatchService<S> {
    pub fn new(store: S) -> Self {
        Self::with_generator(store, FleetLayoutGenerator::new())
    }

    pub fn with_generator(store: S, generator: FleetLayoutGenerator) -> Self {
        Self {
            store,
            generator,
            matches: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn handle(&self, id: MatchId) -> anyhow::Result<Handle> {
        let matches = self
            .matches
            .lock()
            .map_err(|_| anyhow::anyhow!("match table lock poisoned"))?;
        matches
            .get(&id)
            .cloned()
            .ok_or_else(|| MatchError::MatchNotFound.into())
    }

    fn handles(&self) -> anyhow::Result<Vec<Handle>> {
        let matches = self
            .matches
            .lock()
            .map_err(|_| anyhow::anyhow!("match table lock poisoned"))?;
        Ok(matches.values().cloned().collect())
    }

    /// Register a new match between two players. It waits for its boards.
    pub async fn create_match(&self, player_a: PlayerId, player_b: PlayerId) -> anyhow::Result<MatchId> {
        let state = MatchState::new(player_a, player_b)?;
        let id = MatchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let record = MatchRecord {
            state,
            shots_fired: 0,
        };
        self.matches
            .lock()
            .map_err(|_| anyhow::anyhow!("match table lock poisoned"))?
            .insert(id, Arc::new(AsyncMutex::new(record)));
        log::info!("Created {} between {} and {}", id, player_a, player_b);
        Ok(id)
    }

    /// Generate and save a board for each player, then start the match.
    pub async fn start_match<R>(&self, id: MatchId, rng: &mut R) -> anyhow::Result<()>
    where
        R: Rng + Send + ?Sized,
    {
        let handle = self.handle(id)?;
        let mut record = handle.lock().await;
        if record.state.status() != MatchStatus::Waiting {
            return Err(MatchError::AlreadyStarted.into());
        }

        let players = record.state.players();
        let mut boards = Vec::with_capacity(players.len());
        for player in players {
            let layout = self.generator.generate(rng).map_err(|e| {
                log::error!("Board generation for {} in {} failed: {}", player, id, e);
                MatchError::from(e)
            })?;
            boards.push((player, BoardState::new(layout)));
        }
        for (player, board) in &boards {
            self.store.save(id, *player, board).await?;
        }
        record.state.begin()?;
        log::info!("Boards generated, {} is in progress", id);
        Ok(())
    }

    /// `shooter` fires at `(x, y)` on the opponent's board.
    pub async fn fire(&self, id: MatchId, shooter: PlayerId, x: i32, y: i32) -> anyhow::Result<ShotOutcome> {
        let handle = self.handle(id)?;
        let mut record = handle.lock().await;
        let target = record.state.target_of(shooter)?;
        log::info!("{} shoots ({}, {}) in {}", shooter, x, y, id);

        // Both boards are needed to settle the shot; load them before touching
        // either so a failed load leaves the match unchanged.
        let shooter_board = self.load_board(id, shooter).await?;
        let mut target_board = self.load_board(id, target).await?;
        let outcome = target_board.apply_shot(x, y);
        match outcome {
            ShotOutcome::OutOfBounds => {
                log::warn!("Shot ({}, {}) is outside the grid", x, y);
                return Ok(outcome);
            }
            ShotOutcome::AlreadyShot => {
                log::warn!("Cell ({}, {}) was already shot", x, y);
                return Ok(outcome);
            }
            ShotOutcome::Miss => log::info!("Miss at ({}, {})", x, y),
            ShotOutcome::Hit { sunk: false } => log::info!("Hit at ({}, {})", x, y),
            ShotOutcome::Hit { sunk: true } => log::info!(
                "Ship sunk at ({}, {}), {} ships remaining",
                x,
                y,
                target_board.ships_remaining()
            ),
        }
        let winner = evaluate_winner(&shooter_board, shooter, &target_board, target)?;
        self.store.save(id, target, &target_board).await?;
        record.shots_fired += 1;
        record.state.record_shot(outcome, winner);
        if let Some(winner) = winner {
            log::info!("{} won {}", winner, id);
        }
        Ok(outcome)
    }

    async fn load_board(&self, id: MatchId, player: PlayerId) -> anyhow::Result<BoardState> {
        match self.store.load(id, player).await? {
            Some(board) => Ok(board),
            None => {
                log::error!("Board for {} in {} not found", player, id);
                Err(MatchError::BoardNotFound.into())
            }
        }
    }

    /// Current board of `player` in match `id`.
    pub async fn board(&self, id: MatchId, player: PlayerId) -> anyhow::Result<BoardState> {
        let handle = self.handle(id)?;
        let record = handle.lock().await;
        record.state.seat(player)?;
        self.load_board(id, player).await
    }

    pub async fn summary(&self, id: MatchId) -> anyhow::Result<MatchSummary> {
        let handle = self.handle(id)?;
        let record = handle.lock().await;
        Ok(MatchSummary {
            id,
            players: record.state.players(),
            status: record.state.status(),
            winner: record.state.winner(),
            current_turn: record.state.current_turn(),
            shots_fired: record.shots_fired,
        })
    }

    /// Wins and losses of `player` over finished matches.
    pub async fn player_stats(&self, player: PlayerId) -> anyhow::Result<PlayerStats> {
        let mut stats = PlayerStats::default();
        for handle in self.handles()? {
            let record = handle.lock().await;
            if record.state.status() != MatchStatus::Finished || !record.state.involves(player) {
                continue;
            }
            stats.total_games += 1;
            if record.state.winner() == Some(player) {
                stats.wins += 1;
            }
        }
        stats.losses = stats.total_games - stats.wins;
        log::info!("{}: {} wins, {} losses", player, stats.wins, stats.losses);
        Ok(stats)
    }

    /// The `candidates` that are not in a waiting or running match.
    pub async fn available_players(&self, candidates: &[PlayerId]) -> anyhow::Result<Vec<PlayerId>> {
        let mut busy = Vec::new();
        for handle in self.handles()? {
            let record = handle.lock().await;
            if record.state.status() != MatchStatus::Finished {
                busy.extend(record.state.players());
            }
        }
        Ok(candidates
            .iter()
            .copied()
            .filter(|p| !busy.contains(p))
            .collect())
    }
}
