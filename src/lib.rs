//! Questlog: visibility and filtering for adventure-scoped feeds.
//!
//! Posts belong to zero or more adventures. A post with no adventure is
//! public; otherwise a viewer sees it by being an admin, by participating
//! in one of its adventures, or because one of them is open to everyone.
//! On top of that rule this crate offers search, tag and status filters,
//! sorting, grouping and empty-state copy for listing screens.
//!
//! Every operation is a pure function over data the caller already
//! fetched. Nothing here performs I/O except [`EngineConfig::load`].
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use questlog::{combine_filters, AccessContext, FilterSet, Post};
//!
//! let now = Utc::now();
//! let posts = vec![
//!     Post::new("p1", "Dragon lair", now).with_adventures(["g1"]),
//!     Post::new("p2", "Dragon egg", now).with_adventures(["g2"]),
//!     Post::new("p3", "Town square", now),
//! ];
//!
//! let filters = FilterSet::new().search("dragon").viewer(["g1"], false);
//! let visible = combine_filters(&posts, &filters);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id.as_str(), "p1");
//!
//! let ctx = AccessContext::new(["g1".into()], [], false);
//! assert!(ctx.can_see(&posts[0].adventures).can_see);
//! assert!(!ctx.can_see(&posts[1].adventures).can_see);
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;

pub use questlog_search::{
    filter_by_search_term, filter_posts_by_tag, normalize_text, DEFAULT_SEARCH_FIELDS,
};
pub use questlog_security::{
    can_manage_post, can_user_see_posts_from_adventures, filter_adventures_by_permissions,
    filter_posts_by_user_adventures, filter_visible, is_post_public,
};
pub use questlog_engine::{
    apply_stages, combine_filters, empty_state_message, filter_by_status, filtering_stats,
    group_posts_by_adventure, has_active_filters, localized_empty_state_message, related_posts,
    sort_adventures, sort_posts_by_date,
};
