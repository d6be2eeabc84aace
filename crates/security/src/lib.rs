//! Access control for Questlog.
//!
//! This crate decides which posts and adventures a viewer may see:
//! - [`can_user_see_posts_from_adventures`] explains a single decision
//! - [`AccessContext`] prepares a viewer's memberships for bulk checks
//! - [`filter_posts_by_user_adventures`] and friends filter whole listings

#![warn(missing_docs)]

pub mod access;
pub mod visibility;

pub use access::{can_user_see_posts_from_adventures, AccessContext, AccessDecision, AccessReason};
pub use visibility::{
    can_manage_post, filter_adventures_by_permissions, filter_posts_by_user_adventures,
    filter_visible, is_post_public,
};
