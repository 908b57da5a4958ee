// Profile detail resolver: full record for a clicked row, or the row
// itself when the full record can't be had.

use tracing::{debug, warn};

use crate::api::{ApiError, ProfileSource};
use crate::profiles::models::{PostSample, ProfileDetail, ProfileSummary};
use crate::scoring::engagement::{self, EngagementMetrics};
use crate::session::Session;

/// What the detail panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Full(ProfileDetail),
    /// The detail fetch failed; show the summary the user clicked.
    Fallback(ProfileSummary),
}

impl DetailView {
    pub fn summary(&self) -> &ProfileSummary {
        match self {
            DetailView::Full(detail) => &detail.summary,
            DetailView::Fallback(summary) => summary,
        }
    }

    pub fn recent_posts(&self) -> &[PostSample] {
        match self {
            DetailView::Full(detail) => &detail.recent_posts,
            DetailView::Fallback(_) => &[],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DetailView::Fallback(_))
    }

    /// Engagement estimates, when the view has any posts to work from.
    pub fn metrics(&self) -> Option<EngagementMetrics> {
        engagement::compute(self.recent_posts(), self.summary().followers_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Resolved(DetailView),
    SessionExpired,
}

/// Resolve the full record for a listed profile.
///
/// Only a 401 prevents the panel from rendering; every other failure
/// degrades to the summary.
pub async fn resolve_detail(
    source: &dyn ProfileSource,
    session: &dyn Session,
    summary: &ProfileSummary,
) -> DetailOutcome {
    match source.profile_detail(&summary.id).await {
        Ok(detail) => {
            debug!(
                id = %summary.id,
                posts = detail.recent_posts.len(),
                "Fetched profile detail"
            );
            DetailOutcome::Resolved(DetailView::Full(detail))
        }
        Err(ApiError::AuthExpired { .. }) => {
            session.on_session_expired();
            DetailOutcome::SessionExpired
        }
        Err(e) => {
            warn!(id = %summary.id, error = %e, "Failed to fetch profile details, showing summary");
            DetailOutcome::Resolved(DetailView::Fallback(summary.clone()))
        }
    }
}
