// Profile data models: the flat domain types that flow through the app.
//
// These are separate from the wire structs in `api::wire` so the listing,
// sorting and metrics code never depends on the server's nested JSON shape.

use serde::{Deserialize, Serialize};

/// A lightweight listing record, one row in the profile table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
    pub is_verified: bool,
    pub is_private: bool,
    pub is_business: bool,
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    /// Pre-computed engagement rate (percent) when the server supplies one.
    pub engagement_rate: Option<f64>,
    pub category_name: Option<String>,
}

impl ProfileSummary {
    /// The name shown in the listing: full name, or the username if blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Business contact details attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category_name: Option<String>,
}

/// A link from the profile's bio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioLink {
    pub title: String,
    pub url: String,
    pub link_type: String,
}

/// One post from the bounded "recent posts" sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSample {
    pub id: String,
    /// Unix timestamp (seconds)
    pub timestamp: i64,
    pub likes: u64,
    pub comments: u64,
    pub is_video: bool,
}

/// The full profile record shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub summary: ProfileSummary,
    pub biography: String,
    pub external_url: Option<String>,
    /// High-resolution avatar, when available.
    pub avatar_url_hd: Option<String>,
    pub business: Option<BusinessInfo>,
    pub bio_links: Vec<BioLink>,
    /// Recent posts only, not guaranteed to cover the whole timeline.
    pub recent_posts: Vec<PostSample>,
}

/// Which acquisition mode produced a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultMode {
    Filtered,
    SemanticSearch,
}

impl ResultMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultMode::Filtered => "Filtered",
            ResultMode::SemanticSearch => "Semantic search",
        }
    }
}

impl std::fmt::Display for ResultMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered page of profiles plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub profiles: Vec<ProfileSummary>,
    pub page: u32,
    pub total_pages: u32,
    /// Total matching profiles across all pages, as declared by the server.
    pub total: u64,
    pub mode: ResultMode,
}

impl ResultPage {
    /// The page shown before anything has loaded, or after a failed fetch.
    pub fn empty(mode: ResultMode) -> Self {
        Self {
            profiles: Vec::new(),
            page: 1,
            total_pages: 1,
            total: 0,
            mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
