// Unit tests for profile API wire types.
//
// Tests serde deserialization of the nested server format and its
// flattening into ProfileSummary / ProfileDetail. No network access.

use glimpse::api::wire::{DetailResponse, ListingResponse, SearchResponse, WireProfile};
use glimpse::profiles::models::{ProfileDetail, ProfileSummary};

const FULL_PROFILE: &str = r#"{
    "_id": "64f1a2b3c4d5e6f708091a2b",
    "username": "chef.anna",
    "simplified_profile": {
        "basic_info": {
            "username": "chef.anna",
            "full_name": "Anna Cook",
            "biography": "Recipes and travel",
            "external_url": "https://anna.example",
            "profile_pic_url": "https://cdn.example/a.jpg",
            "profile_pic_url_hd": "https://cdn.example/a_hd.jpg",
            "is_verified": true,
            "is_private": false,
            "is_business_account": true
        },
        "stats": {
            "followers_count": 10000,
            "following_count": 321,
            "posts_count": 87,
            "engagement_rate": 1.7
        },
        "business_info": {
            "email": "anna@example.com",
            "phone": null,
            "category_name": "Food & Cooking",
            "address": ""
        },
        "bio_links": [
            {"title": "Shop", "lynx_url": "https://l.example", "url": "https://shop.example", "link_type": "external"}
        ],
        "media_info": {
            "timeline_media": {
                "count": 87,
                "has_next_page": true,
                "posts_sample": [
                    {"id": "p1", "shortcode": "A", "post_url": "", "media_link": "", "is_video": false, "timestamp": 1700000000, "likes": 100, "comments": 10},
                    {"id": "p2", "shortcode": "B", "post_url": "", "media_link": "", "is_video": true, "timestamp": 1700086400, "likes": 200, "comments": 20}
                ]
            }
        }
    }
}"#;

const MINIMAL_PROFILE: &str = r#"{
    "_id": "abc",
    "simplified_profile": {
        "basic_info": {"username": "bare", "full_name": null},
        "stats": {"followers_count": 5}
    }
}"#;

#[test]
fn full_profile_flattens_to_summary() {
    let wire: WireProfile = serde_json::from_str(FULL_PROFILE).unwrap();
    let summary = ProfileSummary::from(wire);
    assert_eq!(summary.id, "64f1a2b3c4d5e6f708091a2b");
    assert_eq!(summary.username, "chef.anna");
    assert_eq!(summary.full_name, "Anna Cook");
    assert!(summary.is_verified);
    assert!(summary.is_business);
    assert_eq!(summary.followers_count, 10_000);
    assert_eq!(summary.following_count, 321);
    assert_eq!(summary.posts_count, 87);
    assert_eq!(summary.engagement_rate, Some(1.7));
    assert_eq!(summary.category_name.as_deref(), Some("Food & Cooking"));
}

#[test]
fn full_profile_flattens_to_detail() {
    let resp: DetailResponse =
        serde_json::from_str(&format!(r#"{{"profile": {FULL_PROFILE}}}"#)).unwrap();
    let detail: ProfileDetail = resp.profile.into();

    assert_eq!(detail.biography, "Recipes and travel");
    assert_eq!(detail.avatar_url_hd.as_deref(), Some("https://cdn.example/a_hd.jpg"));
    assert_eq!(detail.bio_links.len(), 1);
    assert_eq!(detail.bio_links[0].url, "https://shop.example");

    let business = detail.business.unwrap();
    assert_eq!(business.email.as_deref(), Some("anna@example.com"));
    assert!(business.phone.is_none());
    // Blank strings are treated as absent
    assert!(business.address.is_none());

    assert_eq!(detail.recent_posts.len(), 2);
    assert_eq!(detail.recent_posts[1].likes, 200);
    assert!(detail.recent_posts[1].is_video);
}

#[test]
fn minimal_profile_defaults_missing_sections() {
    let wire: WireProfile = serde_json::from_str(MINIMAL_PROFILE).unwrap();
    let detail = ProfileDetail::from(wire);
    assert_eq!(detail.summary.username, "bare");
    assert_eq!(detail.summary.full_name, "");
    assert_eq!(detail.summary.display_name(), "bare");
    assert_eq!(detail.summary.followers_count, 5);
    assert!(detail.summary.engagement_rate.is_none());
    assert!(detail.summary.category_name.is_none());
    assert!(detail.business.is_none());
    assert!(detail.bio_links.is_empty());
    assert!(detail.recent_posts.is_empty());
}

#[test]
fn listing_response_with_pagination() {
    let json = format!(r#"{{"profiles": [{MINIMAL_PROFILE}], "totalPages": 12, "total": 590}}"#);
    let resp: ListingResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.profiles.len(), 1);
    assert_eq!(resp.total_pages, Some(12));
    assert_eq!(resp.total, Some(590));
}

#[test]
fn listing_response_missing_fields() {
    let resp: ListingResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.profiles.is_empty());
    assert!(resp.total_pages.is_none());
}

#[test]
fn search_response_failure_with_message() {
    let json = r#"{"success": false, "message": "AI service unavailable"}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("AI service unavailable"));
    assert!(resp.profiles.is_empty());
}

#[test]
fn search_response_success() {
    let json = format!(
        r#"{{"success": true, "profiles": [{MINIMAL_PROFILE}], "totalPages": 3, "page": 1, "total": 27}}"#
    );
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.page, Some(1));
    assert_eq!(resp.total, Some(27));
}

#[test]
fn null_scalars_default_instead_of_failing_the_page() {
    let json = format!(
        r#"{{"profiles": [
            {MINIMAL_PROFILE},
            {{
                "_id": "nulls",
                "simplified_profile": {{
                    "basic_info": {{"username": "sparse", "is_verified": null, "is_private": null}},
                    "stats": {{"followers_count": null, "following_count": null, "posts_count": null}},
                    "bio_links": [{{"title": null, "url": "https://x.example", "link_type": null}}],
                    "media_info": {{"timeline_media": {{"posts_sample": [
                        {{"id": "p1", "timestamp": null, "likes": null, "comments": 4, "is_video": null}}
                    ]}}}}
                }}
            }}
        ], "totalPages": 1}}"#
    );
    let resp: ListingResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.profiles.len(), 2);

    let detail = ProfileDetail::from(resp.profiles.into_iter().nth(1).unwrap());
    assert_eq!(detail.summary.username, "sparse");
    assert!(!detail.summary.is_verified);
    assert!(!detail.summary.is_private);
    assert_eq!(detail.summary.followers_count, 0);
    assert_eq!(detail.summary.posts_count, 0);
    assert_eq!(detail.bio_links[0].title, "");
    assert_eq!(detail.recent_posts[0].likes, 0);
    assert_eq!(detail.recent_posts[0].comments, 4);
}

#[test]
fn null_collections_and_sections_default() {
    let json = r#"{"profiles": null, "totalPages": null}"#;
    let resp: ListingResponse = serde_json::from_str(json).unwrap();
    assert!(resp.profiles.is_empty());

    let wire: WireProfile = serde_json::from_str(
        r#"{"_id": "x", "simplified_profile": {"basic_info": {"username": "x"}, "stats": null}}"#,
    )
    .unwrap();
    assert_eq!(ProfileSummary::from(wire).followers_count, 0);

    let resp: SearchResponse = serde_json::from_str(r#"{"success": null, "profiles": null}"#).unwrap();
    assert!(!resp.success);
}
