//! Bulk visibility filters over post and adventure listings.

use std::borrow::Cow;

use questlog_core::{Adventure, AdventureId, Document, Post, Status, User};

use crate::access::AccessContext;

/// Keep the posts a viewer may see, preserving order.
///
/// Admins get the input back unchanged. An empty input short-circuits
/// without building a context.
pub fn filter_posts_by_user_adventures<'a, T>(
    posts: &'a [T],
    user_adventure_ids: &[AdventureId],
    public_adventure_ids: &[AdventureId],
    is_admin: bool,
) -> Cow<'a, [T]>
where
    T: Document + Clone,
{
    if posts.is_empty() || is_admin {
        return Cow::Borrowed(posts);
    }

    let ctx = AccessContext::new(
        user_adventure_ids.iter().cloned(),
        public_adventure_ids.iter().cloned(),
        is_admin,
    );
    filter_visible(posts, &ctx)
}

/// Keep the posts visible in `ctx`, preserving order.
pub fn filter_visible<'a, T>(posts: &'a [T], ctx: &AccessContext) -> Cow<'a, [T]>
where
    T: Document + Clone,
{
    if posts.is_empty() || ctx.is_admin() {
        return Cow::Borrowed(posts);
    }

    let visible: Vec<T> = posts
        .iter()
        .filter(|post| ctx.is_visible(post.adventure_ids()))
        .cloned()
        .collect();

    tracing::trace!(
        target: "questlog::access",
        total = posts.len(),
        hidden = posts.len() - visible.len(),
        "visibility filter applied"
    );

    Cow::Owned(visible)
}

/// Whether a post belongs to no adventure, independent of any viewer.
pub fn is_post_public<T: Document + ?Sized>(post: &T) -> bool {
    post.adventure_ids().is_empty()
}

/// Adventures a user may browse: admins see all, others only active ones.
pub fn filter_adventures_by_permissions<'a>(
    adventures: &'a [Adventure],
    user: &User,
) -> Cow<'a, [Adventure]> {
    if adventures.is_empty() || user.is_admin() {
        return Cow::Borrowed(adventures);
    }

    Cow::Owned(
        adventures
            .iter()
            .filter(|a| a.status == Status::Active)
            .cloned()
            .collect(),
    )
}

/// Whether `user` may edit or delete `post`. Only the author can.
pub fn can_manage_post(user: &User, post: &Post) -> bool {
    post.creator.as_ref() == Some(&user.id)
}
