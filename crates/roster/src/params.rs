//! Request parameter parsing for transports.
//!
//! Transports hand over raw key/value pairs (a query string, a form) and
//! get back typed requests, or a [`BadInput`] to answer with a client
//! error. The parameter names and defaults are those of the legacy HTTP
//! interface:
//!
//! | key | meaning | default |
//! |-----|---------|---------|
//! | `name`, `title` | substring filters | none |
//! | `race`, `profession` | exact match, upper-case names | none |
//! | `after`, `before` | birthday bounds in epoch ms | none |
//! | `minExperience`, `maxExperience` | experience bounds | `-1` (none) |
//! | `minLevel`, `maxLevel` | level bounds | `-1` (none) |
//! | `banned` | `true` / `false` | none |
//! | `pageNumber` | zero-based page | `0` |
//! | `pageSize` | records per page | configured, `3` |
//! | `order` | `ID`, `NAME`, `EXPERIENCE`, `BIRTHDAY`, `LEVEL` | configured, `ID` |
//!
//! Unknown keys are ignored.

use std::str::FromStr;

use thiserror::Error;

use crate::config::ServiceConfig;
use crate::error::ParseKindError;
use crate::model::PlayerId;
use crate::query::{Criteria, Page, SortKey, Timestamp};

/// Rejected request input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadInput {
    #[error("parameter '{param}' is not a valid number: '{value}'")]
    InvalidNumber { param: String, value: String },

    #[error("parameter '{param}' is not a valid boolean: '{value}'")]
    InvalidBool { param: String, value: String },

    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),

    #[error("invalid player id '{0}'")]
    InvalidId(String),
}

/// A fully parsed listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub criteria: Criteria,
    pub order: SortKey,
    pub page: Page,
}

impl ListRequest {
    /// The request sent when no parameter is given.
    pub fn defaults(config: &ServiceConfig) -> Self {
        ListRequest {
            criteria: Criteria::new(),
            order: config.default_order,
            page: config.default_page(),
        }
    }

    /// Parses request pairs on top of [`defaults`](Self::defaults). A
    /// repeated key keeps its last value.
    pub fn from_pairs<'a, I>(pairs: I, config: &ServiceConfig) -> Result<Self, BadInput>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = ListRequest::defaults(config);
        let criteria = &mut request.criteria;

        for (key, raw) in pairs {
            match key {
                "name" => criteria.name = Some(raw.to_owned()),
                "title" => criteria.title = Some(raw.to_owned()),
                "race" => criteria.race = Some(raw.parse()?),
                "profession" => criteria.profession = Some(raw.parse()?),
                "after" => {
                    criteria.birthday_after = Some(Timestamp::from_millis(number(key, raw)?))
                }
                "before" => {
                    criteria.birthday_before = Some(Timestamp::from_millis(number(key, raw)?))
                }
                "minExperience" => criteria.min_experience = sentinel_bound(number(key, raw)?),
                "maxExperience" => criteria.max_experience = sentinel_bound(number(key, raw)?),
                "minLevel" => criteria.min_level = sentinel_bound(number(key, raw)?),
                "maxLevel" => criteria.max_level = sentinel_bound(number(key, raw)?),
                "banned" => criteria.banned = Some(flag(key, raw)?),
                "pageNumber" => request.page.number = number(key, raw)?,
                "pageSize" => request.page.size = number(key, raw)?,
                "order" => request.order = raw.parse()?,
                other => tracing::debug!("Ignoring unknown list parameter '{}'", other),
            }
        }

        Ok(request)
    }
}

/// Converts a legacy range bound: `-1` means "no bound". Every other
/// value, zero and other negatives included, is a real bound.
pub fn sentinel_bound(raw: i32) -> Option<i32> {
    (raw != -1).then_some(raw)
}

/// Parses a path id. Ids are positive; zero, negatives and non-numbers are
/// rejected.
pub fn parse_id(raw: &str) -> Result<PlayerId, BadInput> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .and_then(|id| u64::try_from(id).ok())
        .map(PlayerId)
        .ok_or_else(|| BadInput::InvalidId(raw.to_owned()))
}

fn number<T: FromStr>(param: &str, raw: &str) -> Result<T, BadInput> {
    raw.parse().map_err(|_| BadInput::InvalidNumber {
        param: param.to_owned(),
        value: raw.to_owned(),
    })
}

fn flag(param: &str, raw: &str) -> Result<bool, BadInput> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(BadInput::InvalidBool {
            param: param.to_owned(),
            value: raw.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PagingOrder;
    use crate::model::{Profession, Race};

    fn parse(pairs: &[(&str, &str)]) -> Result<ListRequest, BadInput> {
        ListRequest::from_pairs(pairs.iter().copied(), &ServiceConfig::default())
    }

    #[test]
    fn no_pairs_gives_legacy_defaults() {
        let request = parse(&[]).unwrap();
        assert_eq!(request.criteria, Criteria::new());
        assert_eq!(request.order, SortKey::Id);
        assert_eq!(request.page, Page::new(0, 3));
    }

    #[test]
    fn defaults_follow_config() {
        let config = ServiceConfig::default()
            .with_default_page_size(20)
            .with_default_order(SortKey::Level)
            .with_paging(PagingOrder::PageThenSort);
        let request = ListRequest::from_pairs(std::iter::empty(), &config).unwrap();
        assert_eq!(request.order, SortKey::Level);
        assert_eq!(request.page, Page::new(0, 20));
    }

    #[test]
    fn parses_every_parameter() {
        let request = parse(&[
            ("name", "Ar"),
            ("title", "King"),
            ("race", "HUMAN"),
            ("profession", "PALADIN"),
            ("after", "946684800000"),
            ("before", "1000000000000"),
            ("minExperience", "0"),
            ("maxExperience", "5000"),
            ("minLevel", "1"),
            ("maxLevel", "9"),
            ("banned", "false"),
            ("pageNumber", "2"),
            ("pageSize", "5"),
            ("order", "EXPERIENCE"),
        ])
        .unwrap();

        let expected = Criteria::new()
            .name("Ar")
            .title("King")
            .race(Race::Human)
            .profession(Profession::Paladin)
            .born_after(946_684_800_000_i64)
            .born_before(1_000_000_000_000_i64)
            .min_experience(0)
            .max_experience(5_000)
            .min_level(1)
            .max_level(9)
            .banned(false);
        assert_eq!(request.criteria, expected);
        assert_eq!(request.page, Page::new(2, 5));
        assert_eq!(request.order, SortKey::Experience);
    }

    #[test]
    fn minus_one_means_no_bound() {
        let request = parse(&[("minExperience", "-1"), ("maxLevel", "-1")]).unwrap();
        assert_eq!(request.criteria.min_experience, None);
        assert_eq!(request.criteria.max_level, None);
        assert_eq!(sentinel_bound(0), Some(0));
        assert_eq!(sentinel_bound(-2), Some(-2));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(parse(&[("sort", "desc")]).unwrap(), parse(&[]).unwrap());
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert_eq!(
            parse(&[("race", "ENT")]),
            Err(BadInput::UnknownKind(ParseKindError::new("race", "ENT")))
        );
        assert!(matches!(
            parse(&[("order", "id")]),
            Err(BadInput::UnknownKind(_))
        ));
    }

    #[test]
    fn rejects_bad_numbers_and_flags() {
        assert_eq!(
            parse(&[("pageNumber", "-1")]),
            Err(BadInput::InvalidNumber {
                param: "pageNumber".into(),
                value: "-1".into(),
            })
        );
        assert!(matches!(
            parse(&[("minLevel", "high")]),
            Err(BadInput::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(&[("banned", "maybe")]),
            Err(BadInput::InvalidBool { .. })
        ));
        assert_eq!(parse(&[("banned", "TRUE")]).unwrap().criteria.banned, Some(true));
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(parse_id("42"), Ok(PlayerId(42)));
        assert_eq!(parse_id("0"), Err(BadInput::InvalidId("0".into())));
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }
}
