//! Tier 3: Composite pipeline golden outputs
//!
//! The stage order search → tag → status → visibility → adventure is a
//! contract; these outputs pin it over the fixture world.

use std::borrow::Cow;

use crate::test_utils::*;
use questlog::{apply_stages, combine_filters, AdventureId, FilterSet, FilterStage, StatusFilter};

#[test]
fn stage_order_contract() {
    let filters = FilterSet::new()
        .adventure("strahd")
        .viewer(["strahd"], false)
        .status(StatusFilter::All)
        .tag("castelo")
        .search("castle");
    let names: Vec<&str> = filters.stages().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["search", "tag", "status", "visibility", "adventure"]);
}

#[test]
fn participant_feed_without_public_adventures() {
    // The pipeline's visibility stage runs with no public adventures, so the
    // open tavern post is hidden here even though the access context shows it.
    let posts = posts();
    let filters = FilterSet::new().viewer(["strahd", "dragon"], false);
    assert_eq!(ids(&combine_filters(&posts, &filters)), vec!["p1", "p3", "p4", "p5"]);
}

#[test]
fn search_then_visibility() {
    let posts = posts();
    let filters = FilterSet::new().search("drag").viewer(["dragon"], false);
    assert_eq!(ids(&combine_filters(&posts, &filters)), vec!["p3"]);

    let outsider = FilterSet::new().search("drag").viewer(Vec::<AdventureId>::new(), false);
    assert!(combine_filters(&posts, &outsider).is_empty());
}

#[test]
fn tag_and_adventure() {
    let posts = posts();
    let filters = FilterSet::new().tag("castelo").adventure("strahd");
    assert_eq!(ids(&combine_filters(&posts, &filters)), vec!["p1"]);

    let filters = FilterSet::new().adventure("strahd");
    assert_eq!(ids(&combine_filters(&posts, &filters)), vec!["p1", "p5"]);
}

#[test]
fn status_over_adventures() {
    let adventures = adventures();
    let filters = FilterSet::new().status(StatusFilter::Active).search("o");
    assert_eq!(
        ids(&combine_filters(&adventures, &filters)),
        vec!["strahd", "tavern", "dragon"]
    );
}

#[test]
fn posts_without_status_fail_concrete_status() {
    let posts = posts();
    let filters = FilterSet::new().status(StatusFilter::Active);
    assert!(combine_filters(&posts, &filters).is_empty());
}

#[test]
fn visibility_needs_both_viewer_fields() {
    let posts = posts();
    let filters = FilterSet {
        user_adventure_ids: Some(vec![]),
        ..FilterSet::default()
    };
    assert!(matches!(combine_filters(&posts, &filters), Cow::Borrowed(_)));
}

#[test]
fn admin_viewer_keeps_all() {
    let posts = posts();
    let filters = FilterSet::new().viewer(Vec::<AdventureId>::new(), true);
    assert_eq!(combine_filters(&posts, &filters).len(), posts.len());
}

#[test]
fn filter_set_from_query_string_json() {
    let posts = posts();
    let filters: FilterSet = serde_json::from_str(
        r#"{"tag": "gelo", "userAdventureIds": ["dragon"], "isAdmin": false}"#,
    )
    .unwrap();
    assert_eq!(ids(&combine_filters(&posts, &filters)), vec!["p3"]);
}

#[test]
fn explicit_stage_list() {
    let posts = posts();
    let stages = vec![
        FilterStage::Adventure("strahd".into()),
        FilterStage::Tag("vivos".to_string()),
    ];
    assert_eq!(ids(&apply_stages(&posts, &stages)), vec!["p5"]);
}

#[test]
fn each_stage_only_narrows() {
    let posts = posts();
    let filters = FilterSet::new()
        .search("a")
        .tag("a")
        .viewer(["strahd"], false)
        .adventure("strahd");
    let mut previous = posts.len();
    for n in 1..=filters.stages().len() {
        let out = apply_stages(&posts, &filters.stages()[..n]);
        assert!(out.len() <= previous);
        previous = out.len();
    }
}
