//! Closed sets of character races and professions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;
use crate::query::Discriminant;

/// Playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::Giant,
        Race::Orc,
        Race::Troll,
        Race::Hobbit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl Discriminant for Race {
    fn discriminant(&self) -> u32 {
        match self {
            Race::Human => 0,
            Race::Dwarf => 1,
            Race::Elf => 2,
            Race::Giant => 3,
            Race::Orc => 4,
            Race::Troll => 5,
            Race::Hobbit => 6,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = ParseKindError;

    /// Parses the exact upper-case name; `"elf"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| ParseKindError::new("race", s))
    }
}

/// Character profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Profession::Warrior,
        Profession::Rogue,
        Profession::Sorcerer,
        Profession::Cleric,
        Profession::Paladin,
        Profession::Nazgul,
        Profession::Warlock,
        Profession::Druid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Cleric => "CLERIC",
            Profession::Paladin => "PALADIN",
            Profession::Nazgul => "NAZGUL",
            Profession::Warlock => "WARLOCK",
            Profession::Druid => "DRUID",
        }
    }
}

impl Discriminant for Profession {
    fn discriminant(&self) -> u32 {
        match self {
            Profession::Warrior => 0,
            Profession::Rogue => 1,
            Profession::Sorcerer => 2,
            Profession::Cleric => 3,
            Profession::Paladin => 4,
            Profession::Nazgul => 5,
            Profession::Warlock => 6,
            Profession::Druid => 7,
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::ALL
            .into_iter()
            .find(|profession| profession.as_str() == s)
            .ok_or_else(|| ParseKindError::new("profession", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn race_round_trips_through_name() {
        for race in Race::ALL {
            assert_eq!(race.as_str().parse::<Race>().unwrap(), race);
        }
    }

    #[test]
    fn profession_round_trips_through_name() {
        for profession in Profession::ALL {
            assert_eq!(profession.as_str().parse::<Profession>().unwrap(), profession);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = "elf".parse::<Race>().unwrap_err();
        assert_eq!(err.kind, "race");
        assert_eq!(err.value, "elf");
        assert!("Warrior".parse::<Profession>().is_err());
    }

    #[test]
    fn discriminants_are_unique() {
        let races: HashSet<u32> = Race::ALL.iter().map(Discriminant::discriminant).collect();
        assert_eq!(races.len(), Race::ALL.len());

        let professions: HashSet<u32> = Profession::ALL
            .iter()
            .map(Discriminant::discriminant)
            .collect();
        assert_eq!(professions.len(), Profession::ALL.len());
    }

    #[test]
    fn serde_matches_display() {
        assert_eq!(serde_json::to_string(&Race::Hobbit).unwrap(), "\"HOBBIT\"");
        let profession: Profession = serde_json::from_str("\"NAZGUL\"").unwrap();
        assert_eq!(profession, Profession::Nazgul);
    }
}
