//! In-memory PlayerStore implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::model::{Player, PlayerId};
use crate::store::{PlayerStore, StoreError};

/// In-memory implementation of [`PlayerStore`].
///
/// Records are kept in id order, so `find_all` lists them oldest first.
/// Ids start at 1 and are never reused, even after a delete.
pub struct MemoryStore {
    players: RwLock<BTreeMap<PlayerId, Player>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store seeded with existing records.
    ///
    /// Records are stored as given; fresh ids continue after the highest
    /// seeded id.
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        let players: BTreeMap<PlayerId, Player> =
            players.into_iter().map(|p| (p.id, p)).collect();
        let next = players
            .keys()
            .next_back()
            .map_or(1, |id| id.get().saturating_add(1));
        Self {
            players: RwLock::new(players),
            next_id: AtomicU64::new(next),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.players.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Player>, StoreError> {
        let players = self
            .players
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(players.values().cloned().collect())
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        let players = self
            .players
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(players.get(&id).cloned())
    }

    fn next_id(&self) -> Result<PlayerId, StoreError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map(PlayerId)
            .map_err(|_| StoreError::IdsExhausted)
    }

    fn save(&self, player: Player) -> Result<(), StoreError> {
        let mut players = self
            .players
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        tracing::debug!("Saved player[{}]", player.id);
        players.insert(player.id, player);
        Ok(())
    }

    fn delete_by_id(&self, id: PlayerId) -> Result<(), StoreError> {
        let mut players = self
            .players
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        if players.remove(&id).is_some() {
            tracing::debug!("Deleted player[{}]", id);
        }
        Ok(())
    }
}
