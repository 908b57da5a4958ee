// Semantic search fetcher: one ranked result set for a free-text query.
//
// Always asks for page 1 with a small fixed limit; the server's page and
// totals come back verbatim. There is no page advancement for searches.

use tracing::{info, warn};

use crate::api::{ApiError, ProfileSource};
use crate::profiles::models::ResultPage;
use crate::profiles::query::SemanticQuery;
use crate::session::Session;

pub const SEARCH_PAGE: u32 = 1;
pub const SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(ResultPage),
    Failed { message: String },
    SessionExpired,
}

/// Run a semantic search.
///
/// The query is already validated, so this always goes to the network.
/// Failure messages are the server's own when it sent one.
pub async fn fetch_search(
    source: &dyn ProfileSource,
    session: &dyn Session,
    query: &SemanticQuery,
) -> SearchOutcome {
    match source.semantic_search(query, SEARCH_PAGE, SEARCH_LIMIT).await {
        Ok(result) => {
            info!(
                total = result.total,
                returned = result.profiles.len(),
                "Semantic search complete"
            );
            SearchOutcome::Found(result)
        }
        Err(ApiError::AuthExpired { .. }) => {
            session.on_session_expired();
            SearchOutcome::SessionExpired
        }
        Err(e) => {
            warn!(error = %e, "Semantic search failed");
            let message = match e {
                ApiError::Rejected { message } | ApiError::UnexpectedStatus { message, .. }
                    if !message.trim().is_empty() =>
                {
                    message
                }
                other => other.to_string(),
            };
            SearchOutcome::Failed { message }
        }
    }
}
