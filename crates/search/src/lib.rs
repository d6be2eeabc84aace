//! Accent-insensitive search for Questlog.
//!
//! - `normalize`: case folding and diacritic stripping
//! - `filter`: free-text and tag substring filters

pub mod filter;
pub mod normalize;

pub use filter::{filter_by_search_term, filter_posts_by_tag, DEFAULT_SEARCH_FIELDS};
pub use normalize::normalize_text;
