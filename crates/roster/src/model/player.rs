//! Player records and incoming drafts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::kind::{Profession, Race};
use crate::progression;
use crate::query::{Discriminant, Field, Fields, Timestamp, Value};
use crate::validate::{FieldError, ValidationErrors, Violation};

/// Store-assigned player identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(PlayerId)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        PlayerId(id)
    }
}

/// A persisted character record.
///
/// `level` and `until_next_level` are derived from `experience` and are
/// recomputed by the service on every write; see [`progression`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: Timestamp,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

impl Player {
    /// Builds a record from a complete draft.
    ///
    /// Absent required attributes are reported as [`Violation::Missing`];
    /// an absent `banned` becomes `false`. Derived attributes are computed.
    pub fn from_draft(id: PlayerId, draft: PlayerDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = require(&mut errors, Field::Name, draft.name);
        let title = require(&mut errors, Field::Title, draft.title);
        let race = require(&mut errors, Field::Race, draft.race);
        let profession = require(&mut errors, Field::Profession, draft.profession);
        let birthday = require(&mut errors, Field::Birthday, draft.birthday);
        let experience = require(&mut errors, Field::Experience, draft.experience);

        match (name, title, race, profession, birthday, experience) {
            (
                Some(name),
                Some(title),
                Some(race),
                Some(profession),
                Some(birthday),
                Some(experience),
            ) => {
                let mut player = Player {
                    id,
                    name,
                    title,
                    race,
                    profession,
                    birthday,
                    experience,
                    level: 0,
                    until_next_level: 0,
                    banned: draft.banned.unwrap_or(false),
                };
                progression::derive(&mut player);
                Ok(player)
            }
            _ => Err(errors),
        }
    }

    /// Applies a partial update: every attribute absent from `draft` keeps
    /// its current value. The id never changes.
    ///
    /// Derived attributes are left as they were; callers re-derive after
    /// validating the merged record.
    pub fn merge(mut self, draft: PlayerDraft) -> Self {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(race) = draft.race {
            self.race = race;
        }
        if let Some(profession) = draft.profession {
            self.profession = profession;
        }
        if let Some(birthday) = draft.birthday {
            self.birthday = birthday;
        }
        if let Some(experience) = draft.experience {
            self.experience = experience;
        }
        if let Some(banned) = draft.banned {
            self.banned = banned;
        }
        self
    }
}

fn require<T>(errors: &mut ValidationErrors, field: Field, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(field, Violation::Missing));
    }
    value
}

impl Fields for Player {
    fn field_value(&self, field: Field) -> Value<'_> {
        match field {
            // ids beyond i64::MAX are not produced by any store
            Field::Id => Value::Int(i64::try_from(self.id.0).unwrap_or(i64::MAX)),
            Field::Name => Value::String(&self.name),
            Field::Title => Value::String(&self.title),
            Field::Race => Value::Enum(self.race.discriminant()),
            Field::Profession => Value::Enum(self.profession.discriminant()),
            Field::Birthday => Value::Timestamp(self.birthday),
            Field::Experience => Value::Int(i64::from(self.experience)),
            Field::Level => Value::Int(i64::from(self.level)),
            Field::Banned => Value::Bool(self.banned),
        }
    }
}

/// Caller-supplied attributes for a create or update.
///
/// `None` means the caller left the attribute out. On create that is an
/// error for required attributes; on update it means "keep the stored
/// value". Derived attributes have no slot here and cannot be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
}

impl PlayerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn birthday(mut self, birthday: impl Into<Timestamp>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    /// Returns `true` if the draft carries no attributes at all.
    pub fn is_empty(&self) -> bool {
        *self == PlayerDraft::default()
    }
}

impl From<&Player> for PlayerDraft {
    fn from(player: &Player) -> Self {
        PlayerDraft {
            name: Some(player.name.clone()),
            title: Some(player.title.clone()),
            race: Some(player.race),
            profession: Some(player.profession),
            birthday: Some(player.birthday),
            experience: Some(player.experience),
            banned: Some(player.banned),
        }
    }
}
