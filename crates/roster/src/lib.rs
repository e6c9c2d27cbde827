//! Roster - query, derivation and validation engine for game character records.
//!
//! Roster keeps the rules for a collection of player characters, independent
//! of how they are stored or served. It provides:
//!
//! - Filtering by optional predicates combined with AND
//! - Stable ascending ordering by one of five keys
//! - Zero-based pagination that never fails
//! - Level and next-level threshold derived from experience
//! - Accumulating validation for new records and partial updates
//!
//! Storage is behind the [`PlayerStore`] trait. [`MemoryStore`] is the
//! in-process implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use roster::{
//!     Criteria, MemoryStore, Page, PlayerDraft, PlayerService, Profession, Race, SortKey,
//! };
//!
//! let service = PlayerService::new(MemoryStore::new());
//!
//! for (name, race, experience) in [
//!     ("Legolas", Race::Elf, 50_000),
//!     ("Arwen", Race::Elf, 2_500),
//!     ("Gimli", Race::Dwarf, 48_000),
//! ] {
//!     service.create(
//!         PlayerDraft::new()
//!             .name(name)
//!             .title("of the Fellowship")
//!             .race(race)
//!             .profession(Profession::Warrior)
//!             .birthday(1_000_000_000_000_i64)
//!             .experience(experience),
//!     )?;
//! }
//!
//! let elves = Criteria::new().race(Race::Elf).min_level(5);
//! let listed = service.list(&elves, SortKey::Name, Page::default())?;
//!
//! assert_eq!(listed[0].name, "Arwen");
//! assert_eq!(listed[0].level, 6);
//! assert_eq!(service.count(&elves)?, 2);
//! # Ok::<(), roster::RosterError>(())
//! ```
//!
//! # Level Formula
//!
//! ```text
//! level            = floor((sqrt(2500 + 200 * experience) - 50) / 100)
//! until_next_level = 50 * (level + 1) * (level + 2) - experience
//! ```
//!
//! Derived attributes are recomputed on every create and update and can
//! never be set by a caller.
//!
//! # Validation Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | required on create, non-blank, at most 12 characters |
//! | `title` | required on create, non-blank, at most 30 characters |
//! | `race`, `profession` | required on create |
//! | `birthday` | required on create, 2000-01-01 to 3000-12-31 |
//! | `experience` | required on create, 0 to 10 000 000 |
//!
//! All violations of a request are reported together in
//! [`ValidationErrors`].

mod config;
mod error;
mod model;
pub mod params;
pub mod progression;
mod query;
mod service;
mod store;
pub mod validate;

// Re-export public API
pub use config::{ConfigError, PagingOrder, ServiceConfig};
pub use error::{ParseKindError, Result, RosterError};
pub use model::{Player, PlayerDraft, PlayerId, Profession, Race};
pub use query::{
    sort, Clause, ClauseValue, Criteria, Discriminant, Field, Fields, Op, Page, SortKey,
    Timestamp, Value,
};
pub use service::PlayerService;
pub use store::{MemoryStore, PlayerStore, StoreError};
pub use validate::{FieldError, ValidationErrors, Violation};
