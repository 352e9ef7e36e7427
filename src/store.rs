#![cfg(feature = "std")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::board::BoardState;
use crate::domain::{MatchId, PlayerId};

/// Persistence for boards, one per (match, player).
///
/// A save must be visible to every later load of the same board.
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    async fn load(&self, match_id: MatchId, player: PlayerId) -> anyhow::Result<Option<BoardState>>;
    async fn save(&self, match_id: MatchId, player: PlayerId, board: &BoardState) -> anyhow::Result<()>;
}

/// Store keeping `bincode`-encoded boards in memory. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryBoardStore {
    boards: Arc<Mutex<HashMap<(MatchId, PlayerId), Vec<u8>>>>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boards stored.
    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<(MatchId, PlayerId), Vec<u8>>>> {
        self.boards
            .lock()
            .map_err(|_| anyhow::anyhow!("board store lock poisoned"))
    }
}

#[async_trait::async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn load(&self, match_id: MatchId, player: PlayerId) -> anyhow::Result<Option<BoardState>> {
        let bytes = self.lock()?.get(&(match_id, player)).cloned();
        match bytes {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, match_id: MatchId, player: PlayerId, board: &BoardState) -> anyhow::Result<()> {
        let bytes = bincode::serialize(board)?;
        self.lock()?.insert((match_id, player), bytes);
        Ok(())
    }
}
