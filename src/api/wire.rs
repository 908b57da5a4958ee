// Serde types for the profile API's JSON responses.
//
// The server nests each profile under `simplified_profile` with separate
// `basic_info`, `stats`, `business_info` and `media_info` sections. Most
// fields can be missing or null, so everything optional defaults here and
// the conversions below flatten it into the domain models. Scalar fields
// read an explicit null as their default.

use serde::{Deserialize, Deserializer};

use crate::profiles::models::{BioLink, BusinessInfo, PostSample, ProfileDetail, ProfileSummary};

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response from `GET /profiles`.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<WireProfile>,
    #[serde(rename = "totalPages")]
    pub total_pages: Option<u32>,
    pub total: Option<u64>,
}

/// Response from `GET /profiles/ai-search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<WireProfile>,
    #[serde(rename = "totalPages")]
    pub total_pages: Option<u32>,
    pub page: Option<u32>,
    pub total: Option<u64>,
    pub message: Option<String>,
}

/// Response from `GET /profiles/:id`.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub profile: WireProfile,
}

/// Error body the server sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: Option<String>,
    pub simplified_profile: SimplifiedProfile,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedProfile {
    pub basic_info: BasicInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    pub business_info: Option<WireBusinessInfo>,
    pub bio_links: Option<Vec<WireBioLink>>,
    pub media_info: Option<MediaInfo>,
}

#[derive(Debug, Deserialize)]
pub struct BasicInfo {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub external_url: Option<String>,
    pub profile_pic_url: Option<String>,
    pub profile_pic_url_hd: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_private: bool,
    pub is_business_account: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub following_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts_count: u64,
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WireBusinessInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireBioLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_type: String,
}

#[derive(Debug, Deserialize)]
pub struct MediaInfo {
    pub timeline_media: Option<TimelineMedia>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineMedia {
    pub posts_sample: Option<Vec<WirePost>>,
}

#[derive(Debug, Deserialize)]
pub struct WirePost {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_video: bool,
}

/// Blank strings from the server mean "not set".
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl WireProfile {
    fn summary(&self) -> ProfileSummary {
        let basic = &self.simplified_profile.basic_info;
        let stats = &self.simplified_profile.stats;
        let username = basic
            .username
            .clone()
            .or_else(|| self.username.clone())
            .unwrap_or_default();

        ProfileSummary {
            id: self.id.clone(),
            username,
            full_name: basic.full_name.clone().unwrap_or_default(),
            avatar_url: basic.profile_pic_url.clone().unwrap_or_default(),
            is_verified: basic.is_verified,
            is_private: basic.is_private,
            is_business: basic.is_business_account.unwrap_or(false),
            followers_count: stats.followers_count,
            following_count: stats.following_count,
            posts_count: stats.posts_count,
            engagement_rate: stats.engagement_rate,
            category_name: self
                .simplified_profile
                .business_info
                .as_ref()
                .and_then(|b| present(b.category_name.clone())),
        }
    }
}

impl From<WireProfile> for ProfileSummary {
    fn from(wire: WireProfile) -> Self {
        wire.summary()
    }
}

impl From<WireProfile> for ProfileDetail {
    fn from(wire: WireProfile) -> Self {
        let summary = wire.summary();
        let SimplifiedProfile {
            basic_info,
            business_info,
            bio_links,
            media_info,
            ..
        } = wire.simplified_profile;

        let recent_posts = media_info
            .and_then(|m| m.timeline_media)
            .and_then(|t| t.posts_sample)
            .unwrap_or_default()
            .into_iter()
            .map(|p| PostSample {
                id: p.id,
                timestamp: p.timestamp,
                likes: p.likes,
                comments: p.comments,
                is_video: p.is_video,
            })
            .collect();

        ProfileDetail {
            summary,
            biography: basic_info.biography.unwrap_or_default(),
            external_url: present(basic_info.external_url),
            avatar_url_hd: present(basic_info.profile_pic_url_hd),
            business: business_info.map(|b| BusinessInfo {
                email: present(b.email),
                phone: present(b.phone),
                address: present(b.address),
                category_name: present(b.category_name),
            }),
            bio_links: bio_links
                .unwrap_or_default()
                .into_iter()
                .map(|l| BioLink {
                    title: l.title,
                    url: l.url,
                    link_type: l.link_type,
                })
                .collect(),
            recent_posts,
        }
    }
}
