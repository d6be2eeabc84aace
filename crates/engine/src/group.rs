//! Per-adventure grouping and detail-view listings.

use std::collections::BTreeMap;

use questlog_core::{Adventure, AdventureId, Document, PostId};

/// An adventure together with the posts filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdventureGroup<'a, P> {
    /// The adventure.
    pub adventure: &'a Adventure,
    /// Posts that declare membership, in input order.
    pub posts: Vec<&'a P>,
}

/// Group posts under the adventures they declare.
///
/// Every adventure gets an entry, even when no post lands in it. A post
/// appears once per listed adventure that exists; ids with no matching
/// adventure are skipped. When `adventures` repeats an id the last one wins.
pub fn group_posts_by_adventure<'a, P>(
    posts: &'a [P],
    adventures: &'a [Adventure],
) -> BTreeMap<AdventureId, AdventureGroup<'a, P>>
where
    P: Document,
{
    let mut grouped: BTreeMap<AdventureId, AdventureGroup<'a, P>> = adventures
        .iter()
        .map(|adventure| {
            (
                adventure.id.clone(),
                AdventureGroup {
                    adventure,
                    posts: Vec::new(),
                },
            )
        })
        .collect();

    for post in posts {
        for adventure_id in post.adventure_ids() {
            if let Some(group) = grouped.get_mut(adventure_id) {
                group.posts.push(post);
            }
        }
    }

    grouped
}

/// Posts to list under a detail view: `posts` without the one being shown.
pub fn related_posts<'a, P>(posts: &'a [P], current: &PostId) -> Vec<&'a P>
where
    P: Document,
{
    posts
        .iter()
        .filter(|post| post.id() != current.as_str())
        .collect()
}
