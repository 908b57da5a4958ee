// Unit tests for filter criteria and semantic query validation.
//
// Both are validated before any request is built, so these run without
// network access.

use glimpse::profiles::filters::{FilterCriteria, FollowerRange, PostRange};
use glimpse::profiles::query::{QueryError, SemanticQuery, MAX_QUERY_CHARS};

// ============================================================
// FilterCriteria -> query pairs
// ============================================================

#[test]
fn empty_criteria_serialize_to_nothing() {
    assert!(FilterCriteria::new().to_query_pairs().is_empty());
    assert!(FilterCriteria::default().is_empty());
}

#[test]
fn every_key_uses_its_wire_name() {
    let c = FilterCriteria::new()
        .with_username(Some("chef"))
        .with_full_name(Some("A"))
        .with_verified(Some(false))
        .with_followers(Some(1_000), Some(9_999))
        .with_posts(Some(10), Some(49))
        .with_category(Some("Food & Cooking"));

    let pairs = c.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("username", "chef".to_string()),
            ("full_name", "A".to_string()),
            ("is_verified", "false".to_string()),
            ("min_followers", "1000".to_string()),
            ("max_followers", "9999".to_string()),
            ("min_posts", "10".to_string()),
            ("max_posts", "49".to_string()),
            ("category_name", "Food & Cooking".to_string()),
        ]
    );
    assert_eq!(c.active_count(), 8);
}

#[test]
fn no_pair_ever_has_an_empty_value() {
    let c = FilterCriteria::new()
        .with_username(Some(""))
        .with_full_name(Some("  "))
        .with_category(Some("\t"))
        .with_verified(Some(true));
    let pairs = c.to_query_pairs();
    assert_eq!(pairs, vec![("is_verified", "true".to_string())]);
    assert!(pairs.iter().all(|(_, v)| !v.is_empty()));
}

#[test]
fn verified_only_shortcut() {
    let c = FilterCriteria::verified_only();
    assert_eq!(c.is_verified(), Some(true));
    assert_eq!(c.active_count(), 1);
}

#[test]
fn follower_preset_replaces_manual_bounds() {
    let c = FilterCriteria::new()
        .with_followers(Some(5), Some(6))
        .with_follower_range(FollowerRange::From10KTo50K);
    assert_eq!(c.followers(), (Some(10_000), Some(49_999)));
}

#[test]
fn post_preset_open_ended() {
    let c = FilterCriteria::new().with_post_range(PostRange::Over500);
    assert_eq!(c.posts(), (Some(500), None));
}

#[test]
fn preset_labels_are_case_insensitive() {
    assert_eq!(FollowerRange::from_label("500k+"), Some(FollowerRange::Over500K));
    assert_eq!(FollowerRange::from_label("ANY"), Some(FollowerRange::Any));
    assert_eq!(PostRange::from_label("100-500"), Some(PostRange::From100To500));
    assert_eq!(PostRange::from_label("lots"), None);
}

#[test]
fn criteria_equality_ignores_construction_order() {
    let a = FilterCriteria::new()
        .with_username(Some("x"))
        .with_verified(Some(true));
    let b = FilterCriteria::new()
        .with_verified(Some(true))
        .with_username(Some("x"));
    assert_eq!(a, b);
}

// ============================================================
// SemanticQuery validation
// ============================================================

#[test]
fn two_characters_is_too_short() {
    assert_eq!(SemanticQuery::parse("ab"), Err(QueryError::TooShort { len: 2 }));
}

#[test]
fn three_characters_is_enough() {
    assert_eq!(SemanticQuery::parse("abc").unwrap().as_str(), "abc");
}

#[test]
fn empty_query_is_rejected() {
    assert_eq!(SemanticQuery::parse(""), Err(QueryError::Empty));
    assert_eq!(SemanticQuery::parse("    "), Err(QueryError::Empty));
}

#[test]
fn exactly_max_length_is_accepted() {
    let raw = "a".repeat(MAX_QUERY_CHARS);
    assert!(SemanticQuery::parse(&raw).is_ok());
}

#[test]
fn over_max_length_is_rejected() {
    let raw = "a".repeat(MAX_QUERY_CHARS + 1);
    assert_eq!(
        SemanticQuery::parse(&raw),
        Err(QueryError::TooLong { len: MAX_QUERY_CHARS + 1 })
    );
}

#[test]
fn query_is_trimmed() {
    let q = SemanticQuery::parse("   tech reviewers with high engagement  ").unwrap();
    assert_eq!(q.as_str(), "tech reviewers with high engagement");
}

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(QueryError::Empty.to_string(), "Please enter a search query");
    assert!(QueryError::TooShort { len: 1 }
        .to_string()
        .starts_with("Search query must be at least 3 characters"));
}
