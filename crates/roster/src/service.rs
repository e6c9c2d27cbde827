//! The query service: listing, counting and the record lifecycle.
//!
//! [`PlayerService`] is stateless apart from its store and configuration.
//! Every operation reads the store, computes, and writes back at most one
//! record.

use crate::config::{PagingOrder, ServiceConfig};
use crate::error::{Result, RosterError};
use crate::model::{Player, PlayerDraft, PlayerId};
use crate::progression;
use crate::query::{sort, Criteria, Page, SortKey};
use crate::store::PlayerStore;
use crate::validate;

/// Player operations over a [`PlayerStore`].
///
/// # Example
///
/// ```
/// use roster::{Criteria, MemoryStore, Page, PlayerDraft, PlayerService, Profession, Race, SortKey};
///
/// let service = PlayerService::new(MemoryStore::new());
/// let created = service.create(
///     PlayerDraft::new()
///         .name("Gimli")
///         .title("Lord of the Glittering Caves")
///         .race(Race::Dwarf)
///         .profession(Profession::Warrior)
///         .birthday(1_000_000_000_000_i64)
///         .experience(2_500),
/// )?;
/// assert_eq!(created.level, 6);
///
/// let dwarves = service.list(&Criteria::new().race(Race::Dwarf), SortKey::Name, Page::default())?;
/// assert_eq!(dwarves.len(), 1);
/// # Ok::<(), roster::RosterError>(())
/// ```
pub struct PlayerService<S> {
    store: S,
    config: ServiceConfig,
}

impl<S: PlayerStore> PlayerService<S> {
    /// Creates a service with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ServiceConfig::default())
    }

    pub fn with_config(store: S, config: ServiceConfig) -> Self {
        PlayerService { store, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists the records matching `criteria`, ordered by `order`, restricted
    /// to `page`.
    ///
    /// With [`PagingOrder::SortThenPage`] the page is cut from the fully
    /// sorted result. With [`PagingOrder::PageThenSort`] the page is cut
    /// from the filtered records in store order and only its contents are
    /// sorted.
    pub fn list(&self, criteria: &Criteria, order: SortKey, page: Page) -> Result<Vec<Player>> {
        let all = self.store.find_all()?;
        let total = all.len();
        let matching = criteria.retain(all);
        let matched = matching.len();

        let listed = match self.config.paging {
            PagingOrder::SortThenPage => page.take(sort(matching, order)),
            PagingOrder::PageThenSort => sort(page.take(matching), order),
        };

        tracing::debug!(
            "Listed {} of {} matching players ({} stored), order {}, page {}x{}",
            listed.len(),
            matched,
            total,
            order,
            page.number,
            page.size
        );
        Ok(listed)
    }

    /// Counts the records matching `criteria`. Paging does not apply.
    pub fn count(&self, criteria: &Criteria) -> Result<usize> {
        let all = self.store.find_all()?;
        let count = criteria.count(&all);
        tracing::debug!("Counted {} of {} players", count, all.len());
        Ok(count)
    }

    /// Looks up a record; an unknown id is `Ok(None)`.
    pub fn get(&self, id: PlayerId) -> Result<Option<Player>> {
        let found = self.store.find_by_id(id)?;
        tracing::debug!("Loaded player[{}]: {}", id, found.is_some());
        Ok(found)
    }

    /// Validates and stores a new record under a fresh id.
    ///
    /// Any violation rejects the whole draft; nothing is persisted and no
    /// id is consumed.
    pub fn create(&self, draft: PlayerDraft) -> Result<Player> {
        let errors = validate::required_fields(&draft);
        if !errors.is_empty() {
            tracing::warn!("Rejected new player: {}", errors);
            return Err(RosterError::Validation(errors));
        }

        let id = self.store.next_id()?;
        let player = Player::from_draft(id, draft)?;
        self.store.save(player.clone())?;
        tracing::info!(
            "Created player[{}] '{}' at level {}",
            player.id,
            player.name,
            player.level
        );
        Ok(player)
    }

    /// Applies a partial update to an existing record.
    ///
    /// Absent draft attributes keep their current values. The merged
    /// record is range-checked and re-derived before it is saved. An
    /// unknown id is `Ok(None)` and leaves the store untouched.
    pub fn update(&self, id: PlayerId, draft: PlayerDraft) -> Result<Option<Player>> {
        let Some(existing) = self.store.find_by_id(id)? else {
            tracing::debug!("Update skipped, player[{}] not found", id);
            return Ok(None);
        };

        let mut player = existing.merge(draft);
        let errors = validate::value_range(&PlayerDraft::from(&player));
        if !errors.is_empty() {
            tracing::warn!("Rejected update of player[{}]: {}", id, errors);
            return Err(RosterError::Validation(errors));
        }

        progression::derive(&mut player);
        self.store.save(player.clone())?;
        tracing::info!("Updated player[{}] now at level {}", id, player.level);
        Ok(Some(player))
    }

    /// Removes a record and returns it; an unknown id is `Ok(None)`.
    pub fn delete(&self, id: PlayerId) -> Result<Option<Player>> {
        let Some(existing) = self.store.find_by_id(id)? else {
            tracing::debug!("Delete skipped, player[{}] not found", id);
            return Ok(None);
        };

        self.store.delete_by_id(id)?;
        tracing::info!("Deleted player[{}] '{}'", id, existing.name);
        Ok(Some(existing))
    }
}
