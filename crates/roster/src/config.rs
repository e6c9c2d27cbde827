//! Service configuration.
//!
//! [`ServiceConfig`] carries the listing defaults a transport falls back on
//! and the paging strategy used by [`PlayerService::list`]. Every key is
//! optional; a missing key keeps its default.
//!
//! ```yaml
//! default-page-size: 10
//! default-order: LEVEL
//! paging: page-then-sort
//! ```
//!
//! [`PlayerService::list`]: crate::PlayerService::list

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::{Page, SortKey};

/// Whether a listing cuts its page before or after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagingOrder {
    /// Sort the whole filtered set, then cut the page.
    #[default]
    SortThenPage,
    /// Cut the page from the filtered set in store order, then sort only
    /// the page contents.
    PageThenSort,
}

/// Listing defaults and strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServiceConfig {
    /// Page size used when a request does not name one.
    pub default_page_size: usize,
    /// Sort key used when a request does not name one.
    pub default_order: SortKey,
    pub paging: PagingOrder,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            default_page_size: Page::DEFAULT_SIZE,
            default_order: SortKey::default(),
            paging: PagingOrder::default(),
        }
    }
}

impl ServiceConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
                format: "yaml",
                message: e.to_string(),
            })?;
        config.check()
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse {
                format: "json",
                message: e.to_string(),
            })?;
        config.check()
    }

    pub fn with_paging(mut self, paging: PagingOrder) -> Self {
        self.paging = paging;
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_default_order(mut self, order: SortKey) -> Self {
        self.default_order = order;
        self
    }

    /// The page a request gets when it names neither number nor size.
    pub fn default_page(&self) -> Page {
        Page::first(self.default_page_size)
    }

    fn check(self) -> Result<Self, ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(self)
    }
}

/// Errors raised while loading a [`ServiceConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("default-page-size must be at least 1")]
    ZeroPageSize,
}
