// Engagement estimates derived from a profile's recent post sample.
//
// This is one fixed heuristic model, not a fitted one. The coefficients
// below are demo-quality industry rules of thumb and are applied as-is.
// Nothing here is persisted: metrics are computed fresh for each detail view.

use serde::Serialize;

use crate::profiles::models::PostSample;

/// Share of followers assumed to see a typical post.
pub const REACH_RATE: f64 = 0.26;
/// Impressions per reached account.
pub const IMPRESSIONS_PER_REACH: f64 = 1.5;
/// Reel plays per reached account.
pub const REEL_PLAYS_PER_REACH: f64 = 0.43;
/// Shares per like.
pub const SHARES_PER_LIKE: f64 = 0.013;

/// Derived engagement figures for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementMetrics {
    /// Percent, rounded to two decimals.
    pub engagement_rate: f64,
    pub estimated_reach: u64,
    pub estimated_impressions: u64,
    pub average_likes: u64,
    pub average_comments: u64,
    pub average_reel_plays: u64,
    pub average_shares: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_engagement: u64,
    pub posts_count: usize,
    /// Follower figure used as the rate denominator.
    pub followers: u64,
}

/// Round to the nearest integer. Inputs are never negative here.
fn round_count(value: f64) -> u64 {
    value.round() as u64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute engagement metrics from a post sample and follower count.
///
/// Returns `None` for an empty sample. A follower count of 0 is treated
/// as 1 so the rate is still defined.
pub fn compute(posts: &[PostSample], followers_count: u64) -> Option<EngagementMetrics> {
    if posts.is_empty() {
        return None;
    }

    let n = posts.len() as f64;
    let followers = followers_count.max(1);

    let total_likes: u64 = posts.iter().map(|p| p.likes).sum();
    let total_comments: u64 = posts.iter().map(|p| p.comments).sum();
    let total_engagement = total_likes + total_comments;

    let average_likes = round_count(total_likes as f64 / n);
    let average_comments = round_count(total_comments as f64 / n);
    let engagement_rate = round2(total_engagement as f64 / n / followers as f64 * 100.0);

    // The reach-based estimates use the raw follower count (0 -> 0 reach).
    let estimated_reach = round_count(followers_count as f64 * REACH_RATE);
    let estimated_impressions = round_count(estimated_reach as f64 * IMPRESSIONS_PER_REACH);
    let average_reel_plays = round_count(estimated_reach as f64 * REEL_PLAYS_PER_REACH);
    let average_shares = round_count(average_likes as f64 * SHARES_PER_LIKE);

    Some(EngagementMetrics {
        engagement_rate,
        estimated_reach,
        estimated_impressions,
        average_likes,
        average_comments,
        average_reel_plays,
        average_shares,
        total_likes,
        total_comments,
        total_engagement,
        posts_count: posts.len(),
        followers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(likes: u64, comments: u64) -> PostSample {
        PostSample {
            id: format!("p{likes}"),
            timestamp: 1_700_000_000,
            likes,
            comments,
            is_video: false,
        }
    }

    #[test]
    fn test_two_post_sample() {
        let m = compute(&[post(100, 10), post(200, 20)], 10_000).unwrap();
        assert_eq!(m.average_likes, 150);
        assert_eq!(m.average_comments, 15);
        assert!((m.engagement_rate - 1.65).abs() < 1e-9, "got {}", m.engagement_rate);
        assert_eq!(m.estimated_reach, 2600);
        assert_eq!(m.estimated_impressions, 3900);
        assert_eq!(m.average_reel_plays, 1118);
        // 150 * 0.013 = 1.95
        assert_eq!(m.average_shares, 2);
    }

    #[test]
    fn test_empty_sample_is_undefined() {
        assert!(compute(&[], 10_000).is_none());
        assert!(compute(&[], 0).is_none());
    }

    #[test]
    fn test_zero_followers_does_not_divide_by_zero() {
        let m = compute(&[post(5, 1)], 0).unwrap();
        // (5 + 1) / 1 / 1 * 100
        assert!((m.engagement_rate - 600.0).abs() < 1e-9);
        assert_eq!(m.followers, 1);
        assert_eq!(m.estimated_reach, 0);
    }
}
