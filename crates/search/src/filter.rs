//! Substring filters over document text and tags.
//!
//! Both filters return `Cow::Borrowed(items)` when the criterion is blank
//! or the input is empty, and a freshly collected `Cow::Owned` otherwise.
//! Relative order of surviving items is preserved.

use std::borrow::Cow;

use questlog_core::Document;

use crate::normalize::normalize_text;

/// Fields searched when the caller names none.
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &["title", "description"];

/// Keep items where at least one named field contains `search_term`.
///
/// Matching is substring-based on normalized text. Fields the document
/// does not expose as a string never match.
pub fn filter_by_search_term<'a, T, F>(
    items: &'a [T],
    search_term: &str,
    search_fields: &[F],
) -> Cow<'a, [T]>
where
    T: Document + Clone,
    F: AsRef<str>,
{
    if search_term.trim().is_empty() || items.is_empty() {
        return Cow::Borrowed(items);
    }

    let needle = normalize_text(search_term);

    let kept: Vec<T> = items
        .iter()
        .filter(|item| {
            search_fields.iter().any(|field| {
                item.text_field(field.as_ref())
                    .map(|value| normalize_text(value).contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect();

    tracing::trace!(
        target: "questlog::search",
        term = %search_term,
        total = items.len(),
        kept = kept.len(),
        "search filter applied"
    );

    Cow::Owned(kept)
}

/// Keep posts with at least one tag containing `tag_name`.
///
/// Matching is substring-based on normalized text, so `"drag"` matches a
/// post tagged `"Dragões"`.
pub fn filter_posts_by_tag<'a, T>(posts: &'a [T], tag_name: &str) -> Cow<'a, [T]>
where
    T: Document + Clone,
{
    if tag_name.trim().is_empty() || posts.is_empty() {
        return Cow::Borrowed(posts);
    }

    let needle = normalize_text(tag_name);

    Cow::Owned(
        posts
            .iter()
            .filter(|post| {
                post.tags()
                    .iter()
                    .any(|tag| normalize_text(tag).contains(&needle))
            })
            .cloned()
            .collect(),
    )
}
