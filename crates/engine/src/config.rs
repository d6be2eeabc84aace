//! Engine configuration.
//!
//! Read from TOML. Every key is optional:
//!
//! ```toml
//! search_fields = ["title", "description", "location"]
//! locale = "pt-br"
//! ```

use std::path::Path;

use questlog_core::Result;
use questlog_search::DEFAULT_SEARCH_FIELDS;
use serde::{Deserialize, Serialize};

use crate::empty_state::MessageLocale;

/// Tunables of a [`FilterEngine`](crate::FilterEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fields searched when a filter set names none.
    pub search_fields: Vec<String>,
    /// Language of empty-state copy.
    pub locale: MessageLocale,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
            locale: MessageLocale::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: "questlog::config",
            path = %path.display(),
            search_fields = ?config.search_fields,
            locale = ?config.locale,
            "engine config loaded"
        );
        Ok(config)
    }
}
