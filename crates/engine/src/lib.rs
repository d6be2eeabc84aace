//! Listing engine for Questlog
//!
//! This crate turns a fetched candidate set into what a screen shows:
//! - `pipeline`: composite filter (search → tag → status → visibility → adventure)
//! - `status`: status filter
//! - `sort`: adventure and post ordering
//! - `group`: per-adventure grouping and related posts
//! - `stats`: visible/hidden counts
//! - `empty_state`: copy for empty listings
//! - `config` / `engine`: configured facade
//!
//! All operations are pure: they borrow their inputs and return new
//! collections or `Cow::Borrowed` when nothing was filtered.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod empty_state;
pub mod engine;
pub mod group;
pub mod pipeline;
pub mod sort;
pub mod stats;
pub mod status;

pub use config::EngineConfig;
pub use empty_state::{
    empty_state_message, localized_empty_state_message, EmptyState, EmptyStateContext,
    EmptyStateKind, MessageLocale,
};
pub use engine::FilterEngine;
pub use group::{group_posts_by_adventure, related_posts, AdventureGroup};
pub use pipeline::{apply_stages, combine_filters, has_active_filters, FilterSet, FilterStage};
pub use sort::{sort_adventures, sort_posts_by_date};
pub use stats::{filtering_stats, FilteringStats};
pub use status::filter_by_status;
