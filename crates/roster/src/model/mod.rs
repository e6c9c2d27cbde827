//! Domain model: player records, drafts and their closed enum attributes.

mod kind;
mod player;

pub use kind::{Profession, Race};
pub use player::{Player, PlayerDraft, PlayerId};
