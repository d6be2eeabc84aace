//! Configured filtering facade
//!
//! `FilterEngine` is stateless apart from its configuration. It exists so
//! callers configure default search fields and the message locale once,
//! instead of threading them through every call.
//!
//! # Example
//!
//! ```
//! use questlog_engine::{EngineConfig, FilterEngine, FilterSet};
//! use questlog_core::Post;
//!
//! let engine = FilterEngine::new(EngineConfig::default());
//! let posts: Vec<Post> = Vec::new();
//! let visible = engine.combine(&posts, &FilterSet::new().search("dragon"));
//! assert!(visible.is_empty());
//! ```

use std::borrow::Cow;

use questlog_core::Document;
use questlog_search::filter_by_search_term;

use crate::config::EngineConfig;
use crate::empty_state::{localized_empty_state_message, EmptyState, EmptyStateContext};
use crate::pipeline::{apply_stages, FilterSet};

/// Filtering entry point carrying an [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: EngineConfig,
}

impl FilterEngine {
    /// Create an engine with `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply `filters` in pipeline order, searching the configured fields
    /// when the filter set names none.
    pub fn combine<'a, T>(&self, items: &'a [T], filters: &FilterSet) -> Cow<'a, [T]>
    where
        T: Document + Clone,
    {
        let stages = filters.stages_with_default_fields(&self.config.search_fields);
        apply_stages(items, &stages)
    }

    /// Free-text search over the configured fields.
    pub fn search<'a, T>(&self, items: &'a [T], term: &str) -> Cow<'a, [T]>
    where
        T: Document + Clone,
    {
        filter_by_search_term(items, term, self.config.search_fields.as_slice())
    }

    /// Empty-state copy in the configured locale.
    pub fn empty_state(
        &self,
        context: EmptyStateContext,
        has_adventures: bool,
        is_admin: bool,
        search_term: Option<&str>,
    ) -> EmptyState {
        localized_empty_state_message(
            self.config.locale,
            context,
            has_adventures,
            is_admin,
            search_term,
        )
    }
}
