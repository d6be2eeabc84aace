//! Tier 4: Listing helpers
//!
//! Sorting, grouping, stats, related posts, ownership and empty-state copy.

use crate::test_utils::*;
use questlog::{
    can_manage_post, empty_state_message, filter_visible, filtering_stats,
    group_posts_by_adventure, has_active_filters, related_posts, sort_adventures,
    sort_posts_by_date, AccessContext, EmptyStateContext, EmptyStateKind, FilterSet,
    FilteringStats, Post, PostId, StatusFilter,
};

#[test]
fn adventures_sorted_active_first_newest_first() {
    let adventures = adventures();
    let sorted = sort_adventures(&adventures);
    assert_eq!(ids(&sorted), vec!["dragon", "tavern", "strahd", "tomb"]);
    assert_eq!(ids(&adventures), vec!["strahd", "tavern", "tomb", "dragon"]);
}

#[test]
fn posts_sorted_newest_first() {
    let posts = posts();
    assert_eq!(
        ids(&sort_posts_by_date(&posts)),
        vec!["p6", "p2", "p1", "p3", "p4", "p5"]
    );
}

#[test]
fn grouping_over_world() {
    let posts = posts();
    let adventures = adventures();
    let grouped = group_posts_by_adventure(&posts, &adventures);

    let summary: Vec<(&str, Vec<&str>)> = grouped
        .iter()
        .map(|(id, g)| (id.as_str(), g.posts.iter().map(|p| p.id.as_str()).collect()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("dragon", vec!["p3"]),
            ("strahd", vec!["p1", "p5"]),
            ("tavern", vec!["p2"]),
            ("tomb", vec!["p5"]),
        ]
    );
}

#[test]
fn stats_for_participant_feed() {
    let posts = posts();
    let ctx = AccessContext::for_user(&player("ana"), &participants(), &adventures());
    let visible = filter_visible(&posts, &ctx);
    assert_eq!(
        filtering_stats(&posts, &visible),
        FilteringStats {
            total: 6,
            visible: 5,
            hidden: 1,
            percentage: 83
        }
    );
}

#[test]
fn stats_identity_and_empty() {
    let posts = posts();
    let stats = filtering_stats(&posts, &posts);
    assert_eq!((stats.hidden, stats.percentage), (0, 100));

    let none: Vec<Post> = Vec::new();
    assert_eq!(filtering_stats(&none, &none), FilteringStats::default());
}

#[test]
fn related_posts_on_detail_view() {
    let posts = posts();
    let by_ana: Vec<Post> = posts
        .iter()
        .filter(|p| p.creator.as_ref().map(|c| c.as_str()) == Some("ana"))
        .cloned()
        .collect();
    let related = related_posts(&by_ana, &PostId::from("p3"));
    let related: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(related, vec!["p1", "p5"]);
}

#[test]
fn only_author_manages_post() {
    let posts = posts();
    assert!(can_manage_post(&player("ana"), &posts[0]));
    assert!(!can_manage_post(&player("bia"), &posts[0]));
    assert!(!can_manage_post(&game_master(), &posts[0]));
}

#[test]
fn empty_state_decision_table() {
    use EmptyStateContext::*;
    let cases = [
        (Posts, false, false, None, EmptyStateKind::NoAdventures),
        (Posts, false, true, None, EmptyStateKind::NoPosts),
        (Posts, true, false, None, EmptyStateKind::NoPosts),
        (Adventures, false, false, None, EmptyStateKind::NoAdventuresAvailable),
        (Adventures, true, true, None, EmptyStateKind::NoAdventuresAvailable),
        (Search, true, false, Some("lich"), EmptyStateKind::NoResults),
        (Search, true, false, None, EmptyStateKind::NoResults),
        (Other, true, false, None, EmptyStateKind::Empty),
    ];
    for (ctx, has, admin, term, kind) in cases {
        assert_eq!(empty_state_message(ctx, has, admin, term).kind, kind);
    }
}

#[test]
fn active_filter_examples() {
    assert!(!has_active_filters(&FilterSet::new().status(StatusFilter::All)));
    assert!(!has_active_filters(&FilterSet::new().tag(" ")));
    assert!(has_active_filters(&FilterSet::new().search("dragon")));
    assert!(has_active_filters(&FilterSet::new().adventure("strahd")));
}
