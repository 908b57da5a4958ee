// Filter criteria: the typed, sparse constraint set for filtered listings.
//
// Every field is optional and absent when unconstrained. Text setters
// never store empty strings, so serializing the criteria to a query string
// is a pure function that can't emit `username=` or `category_name=`.

use serde::{Deserialize, Serialize};

/// Structured constraints for the paginated profile listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    username: Option<String>,
    full_name: Option<String>,
    is_verified: Option<bool>,
    min_followers: Option<u64>,
    max_followers: Option<u64>,
    min_posts: Option<u64>,
    max_posts: Option<u64>,
    category_name: Option<String>,
}

/// Trim a text constraint, dropping it entirely if nothing is left.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only verified accounts: the one-click shortcut in the filter panel.
    pub fn verified_only() -> Self {
        Self {
            is_verified: Some(true),
            ..Self::default()
        }
    }

    /// Username substring match.
    pub fn with_username(mut self, value: Option<&str>) -> Self {
        self.username = non_empty(value);
        self
    }

    /// Full-name prefix match (the "name starts with" filter).
    pub fn with_full_name(mut self, value: Option<&str>) -> Self {
        self.full_name = non_empty(value);
        self
    }

    pub fn with_verified(mut self, value: Option<bool>) -> Self {
        self.is_verified = value;
        self
    }

    pub fn with_followers(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_followers = min;
        self.max_followers = max;
        self
    }

    pub fn with_posts(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_posts = min;
        self.max_posts = max;
        self
    }

    pub fn with_category(mut self, value: Option<&str>) -> Self {
        self.category_name = non_empty(value);
        self
    }

    /// Replace both follower bounds with a preset range.
    pub fn with_follower_range(self, range: FollowerRange) -> Self {
        let (min, max) = range.bounds();
        self.with_followers(min, max)
    }

    /// Replace both post-count bounds with a preset range.
    pub fn with_post_range(self, range: PostRange) -> Self {
        let (min, max) = range.bounds();
        self.with_posts(min, max)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn is_verified(&self) -> Option<bool> {
        self.is_verified
    }

    pub fn followers(&self) -> (Option<u64>, Option<u64>) {
        (self.min_followers, self.max_followers)
    }

    pub fn posts(&self) -> (Option<u64>, Option<u64>) {
        (self.min_posts, self.max_posts)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of keys that will appear in the query string.
    pub fn active_count(&self) -> usize {
        self.to_query_pairs().len()
    }

    /// Serialize the set constraints as query-string pairs.
    ///
    /// Unset keys are omitted. Key order is fixed so requests are
    /// reproducible, though the server doesn't depend on it.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.username {
            pairs.push(("username", v.clone()));
        }
        if let Some(v) = &self.full_name {
            pairs.push(("full_name", v.clone()));
        }
        if let Some(v) = self.is_verified {
            pairs.push(("is_verified", v.to_string()));
        }
        if let Some(v) = self.min_followers {
            pairs.push(("min_followers", v.to_string()));
        }
        if let Some(v) = self.max_followers {
            pairs.push(("max_followers", v.to_string()));
        }
        if let Some(v) = self.min_posts {
            pairs.push(("min_posts", v.to_string()));
        }
        if let Some(v) = self.max_posts {
            pairs.push(("max_posts", v.to_string()));
        }
        if let Some(v) = &self.category_name {
            pairs.push(("category_name", v.clone()));
        }
        pairs
    }
}

/// Follower-count presets offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerRange {
    Any,
    Under1K,
    From1KTo10K,
    From10KTo50K,
    From50KTo100K,
    From100KTo500K,
    Over500K,
}

impl FollowerRange {
    pub const ALL: [FollowerRange; 7] = [
        FollowerRange::Any,
        FollowerRange::Under1K,
        FollowerRange::From1KTo10K,
        FollowerRange::From10KTo50K,
        FollowerRange::From50KTo100K,
        FollowerRange::From100KTo500K,
        FollowerRange::Over500K,
    ];

    /// Inclusive (min, max) bounds. `Any` clears both.
    pub fn bounds(&self) -> (Option<u64>, Option<u64>) {
        match self {
            FollowerRange::Any => (None, None),
            FollowerRange::Under1K => (Some(0), Some(999)),
            FollowerRange::From1KTo10K => (Some(1_000), Some(9_999)),
            FollowerRange::From10KTo50K => (Some(10_000), Some(49_999)),
            FollowerRange::From50KTo100K => (Some(50_000), Some(99_999)),
            FollowerRange::From100KTo500K => (Some(100_000), Some(499_999)),
            FollowerRange::Over500K => (Some(500_000), None),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FollowerRange::Any => "any",
            FollowerRange::Under1K => "<1K",
            FollowerRange::From1KTo10K => "1K-10K",
            FollowerRange::From10KTo50K => "10K-50K",
            FollowerRange::From50KTo100K => "50K-100K",
            FollowerRange::From100KTo500K => "100K-500K",
            FollowerRange::Over500K => "500K+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Post-count presets offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRange {
    Any,
    Under10,
    From10To50,
    From50To100,
    From100To500,
    Over500,
}

impl PostRange {
    pub const ALL: [PostRange; 6] = [
        PostRange::Any,
        PostRange::Under10,
        PostRange::From10To50,
        PostRange::From50To100,
        PostRange::From100To500,
        PostRange::Over500,
    ];

    pub fn bounds(&self) -> (Option<u64>, Option<u64>) {
        match self {
            PostRange::Any => (None, None),
            PostRange::Under10 => (Some(0), Some(9)),
            PostRange::From10To50 => (Some(10), Some(49)),
            PostRange::From50To100 => (Some(50), Some(99)),
            PostRange::From100To500 => (Some(100), Some(499)),
            PostRange::Over500 => (Some(500), None),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostRange::Any => "any",
            PostRange::Under10 => "<10",
            PostRange::From10To50 => "10-50",
            PostRange::From50To100 => "50-100",
            PostRange::From100To500 => "100-500",
            PostRange::Over500 => "500+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}
