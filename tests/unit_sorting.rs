// Unit tests for the client-side listing sort.
//
// Covers per-field comparison rules, default orders, toggling, and
// stability (ties keep server order in both directions).

use glimpse::listing::sort::{ListView, SortField, SortOrder, SortSpec};
use glimpse::profiles::models::ProfileSummary;

fn profile(id: &str, username: &str, followers: u64, posts: u64) -> ProfileSummary {
    ProfileSummary {
        id: id.to_string(),
        username: username.to_string(),
        followers_count: followers,
        posts_count: posts,
        ..ProfileSummary::default()
    }
}

fn ids(rows: &[&ProfileSummary]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

fn sample() -> Vec<ProfileSummary> {
    let mut a = profile("1", "zeta", 500, 10);
    a.category_name = Some("Travel".to_string());
    a.engagement_rate = Some(2.5);

    let mut b = profile("2", "Alpha", 500, 30);
    b.category_name = None;
    b.engagement_rate = None;

    let mut c = profile("3", "beta", 9_000, 20);
    c.category_name = Some("Music".to_string());
    c.engagement_rate = Some(7.1);

    let mut d = profile("4", "gamma", 10, 30);
    d.category_name = Some("Art".to_string());
    d.engagement_rate = Some(0.4);

    vec![a, b, c, d]
}

// ============================================================
// Projection basics
// ============================================================

#[test]
fn unsorted_view_keeps_server_order() {
    let profiles = sample();
    let view = ListView::new();
    assert_eq!(ids(&view.project(&profiles)), ["1", "2", "3", "4"]);
}

#[test]
fn projection_does_not_mutate_the_page() {
    let profiles = sample();
    let before = profiles.clone();
    let view = ListView::with_sort(SortSpec::new(SortField::Followers, SortOrder::Ascending));
    let _ = view.project(&profiles);
    assert_eq!(profiles, before);
}

// ============================================================
// Field rules
// ============================================================

#[test]
fn username_is_case_insensitive() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Username, SortOrder::Ascending));
    // Alpha, beta, gamma, zeta
    assert_eq!(ids(&view.project(&profiles)), ["2", "3", "4", "1"]);
}

#[test]
fn followers_descending_with_stable_ties() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Followers, SortOrder::Descending));
    // 9000, then the two 500s in server order, then 10
    assert_eq!(ids(&view.project(&profiles)), ["3", "1", "2", "4"]);
}

#[test]
fn followers_ascending_with_stable_ties() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Followers, SortOrder::Ascending));
    assert_eq!(ids(&view.project(&profiles)), ["4", "1", "2", "3"]);
}

#[test]
fn posts_numeric_compare() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Posts, SortOrder::Descending));
    // 30 (id 2), 30 (id 4), 20, 10
    assert_eq!(ids(&view.project(&profiles)), ["2", "4", "3", "1"]);
}

#[test]
fn missing_category_sorts_as_empty_string() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Category, SortOrder::Ascending));
    // "" < Art < Music < Travel
    assert_eq!(ids(&view.project(&profiles)), ["2", "4", "3", "1"]);
}

#[test]
fn engagement_uses_displayed_rate_and_missing_sorts_lowest() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Engagement, SortOrder::Descending));
    assert_eq!(ids(&view.project(&profiles)), ["3", "1", "4", "2"]);
}

#[test]
fn zero_rate_sorts_with_missing_rates() {
    let mut zero = profile("z", "zero", 1, 1);
    zero.engagement_rate = Some(0.0);
    let mut none = profile("n", "none", 1, 1);
    none.engagement_rate = None;
    let mut low = profile("l", "low", 1, 1);
    low.engagement_rate = Some(0.1);
    let profiles = vec![none, zero, low];

    let view = ListView::with_sort(SortSpec::new(SortField::Engagement, SortOrder::Descending));
    // Both "-" rows tie and keep server order
    assert_eq!(ids(&view.project(&profiles)), ["l", "n", "z"]);

    let view = ListView::with_sort(SortSpec::new(SortField::Engagement, SortOrder::Ascending));
    assert_eq!(ids(&view.project(&profiles)), ["n", "z", "l"]);
}

#[test]
fn engagement_sort_is_deterministic() {
    let profiles = sample();
    let view = ListView::with_sort(SortSpec::new(SortField::Engagement, SortOrder::Descending));
    let first = ids(&view.project(&profiles));
    for _ in 0..10 {
        assert_eq!(ids(&view.project(&profiles)), first);
    }
}

// ============================================================
// Header clicks
// ============================================================

#[test]
fn clicking_new_field_applies_default_order() {
    for field in SortField::ALL {
        let mut view = ListView::new();
        let spec = view.click(field);
        assert_eq!(spec.field, field);
        assert_eq!(spec.order, field.default_order());
    }
}

#[test]
fn numeric_fields_default_descending_text_ascending() {
    assert_eq!(SortField::Followers.default_order(), SortOrder::Descending);
    assert_eq!(SortField::Posts.default_order(), SortOrder::Descending);
    assert_eq!(SortField::Engagement.default_order(), SortOrder::Descending);
    assert_eq!(SortField::Username.default_order(), SortOrder::Ascending);
    assert_eq!(SortField::Category.default_order(), SortOrder::Ascending);
}

#[test]
fn switching_fields_resets_to_default_order() {
    let mut view = ListView::new();
    view.click(SortField::Followers);
    view.click(SortField::Followers); // now ascending
    let spec = view.click(SortField::Posts);
    assert_eq!(spec.order, SortOrder::Descending);
    let spec = view.click(SortField::Followers);
    assert_eq!(spec.order, SortOrder::Descending);
}

#[test]
fn toggling_twice_restores_the_first_ordering() {
    let profiles = sample();
    for field in SortField::ALL {
        let mut view = ListView::new();
        view.click(field);
        let first = ids(&view.project(&profiles));
        view.click(field);
        view.click(field);
        assert_eq!(
            ids(&view.project(&profiles)),
            first,
            "field {:?} did not round-trip",
            field
        );
    }
}
