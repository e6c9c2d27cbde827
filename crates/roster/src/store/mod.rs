//! Record store contract.
//!
//! The service never owns durability. It reads and writes through a
//! [`PlayerStore`], which a host application implements over its database.
//! [`MemoryStore`] is the in-process implementation used by tests and
//! local runs.
//!
//! # Design Notes
//!
//! - **Sync-only**: every call completes before returning. Async backends
//!   wrap their client with `block_on()`.
//! - **Store-assigned ids**: [`next_id`](PlayerStore::next_id) hands out a
//!   fresh id for a record that is about to be created.
//! - **Failures are fatal**: a [`StoreError`] is propagated to the caller
//!   unchanged. The service does not retry.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::model::{Player, PlayerId};

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("player store lock was poisoned")]
    LockPoisoned,

    #[error("player store is out of ids")]
    IdsExhausted,

    #[error("player store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps an error raised by an external backend.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Storage backend for player records.
///
/// `Send + Sync` so one service can be shared across request threads; the
/// store is responsible for serializing conflicting writes.
pub trait PlayerStore: Send + Sync {
    /// Returns every stored record.
    ///
    /// Listing and counting preserve the order returned here.
    fn find_all(&self) -> Result<Vec<Player>, StoreError>;

    /// Retrieves a record by id, returning `None` if it does not exist.
    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Allocates an id for a record that is about to be created.
    fn next_id(&self) -> Result<PlayerId, StoreError>;

    /// Inserts or replaces the record stored under `player.id`.
    fn save(&self, player: Player) -> Result<(), StoreError>;

    /// Removes the record stored under `id`. Removing an absent id is a
    /// no-op.
    fn delete_by_id(&self, id: PlayerId) -> Result<(), StoreError>;

    /// Returns `true` if a record is stored under `id`.
    fn exists(&self, id: PlayerId) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

impl<S: PlayerStore + ?Sized> PlayerStore for &S {
    fn find_all(&self) -> Result<Vec<Player>, StoreError> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        (**self).find_by_id(id)
    }

    fn next_id(&self) -> Result<PlayerId, StoreError> {
        (**self).next_id()
    }

    fn save(&self, player: Player) -> Result<(), StoreError> {
        (**self).save(player)
    }

    fn delete_by_id(&self, id: PlayerId) -> Result<(), StoreError> {
        (**self).delete_by_id(id)
    }
}
