// Paginated listing fetcher: one page of profiles for a set of criteria.

use tracing::{debug, warn};

use crate::api::{ApiError, ProfileSource};
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::ResultPage;
use crate::session::Session;

/// Profiles per page in filtered mode.
pub const LISTING_PAGE_SIZE: u32 = 50;

/// Message shown when a listing fetch fails for any reason but auth.
pub const LISTING_FAILED_MESSAGE: &str = "Failed to load profiles. Please try again.";

/// What a listing fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingOutcome {
    Loaded(ResultPage),
    Failed { message: String },
    /// The credential was rejected and session termination already ran.
    SessionExpired,
}

/// Fetch one page of the filtered listing.
///
/// A 401 invokes `session.on_session_expired()` exactly once and reports
/// `SessionExpired` so the caller leaves its list untouched.
pub async fn fetch_listing(
    source: &dyn ProfileSource,
    session: &dyn Session,
    page: u32,
    criteria: &FilterCriteria,
) -> ListingOutcome {
    let page = page.max(1);

    match source.list_profiles(page, LISTING_PAGE_SIZE, criteria).await {
        Ok(result) => {
            debug!(
                page = result.page,
                total_pages = result.total_pages,
                total = result.total,
                filters = criteria.active_count(),
                "Fetched profile listing"
            );
            ListingOutcome::Loaded(result)
        }
        Err(ApiError::AuthExpired { .. }) => {
            session.on_session_expired();
            ListingOutcome::SessionExpired
        }
        Err(e) => {
            warn!(error = %e, page = page, "Failed to fetch profiles");
            ListingOutcome::Failed {
                message: LISTING_FAILED_MESSAGE.to_string(),
            }
        }
    }
}
