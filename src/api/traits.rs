// Profile source trait: the seam between the fetchers and the network.
//
// `ProfileApiClient` is the production implementation. Tests plug in
// scripted sources so controller behavior can be checked without HTTP.

use async_trait::async_trait;

use super::error::ApiError;
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::{ProfileDetail, ResultPage};
use crate::profiles::query::SemanticQuery;

#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// One page of profiles matching the criteria, tagged `Filtered`.
    async fn list_profiles(
        &self,
        page: u32,
        limit: u32,
        criteria: &FilterCriteria,
    ) -> Result<ResultPage, ApiError>;

    /// Ranked results for a free-text query, tagged `SemanticSearch`.
    /// Page and totals are the server's, not the caller's.
    async fn semantic_search(
        &self,
        query: &SemanticQuery,
        page: u32,
        limit: u32,
    ) -> Result<ResultPage, ApiError>;

    /// The full record for one profile.
    async fn profile_detail(&self, id: &str) -> Result<ProfileDetail, ApiError>;
}
