// HTTP client for the profile API.
//
// A thin reqwest wrapper with one generic authenticated GET helper. Every
// request carries the session's bearer token; a 401 on any endpoint is
// surfaced as `ApiError::AuthExpired` and never retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::traits::ProfileSource;
use super::wire::{DetailResponse, ErrorBody, ListingResponse, SearchResponse};
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::{ProfileDetail, ProfileSummary, ResultMode, ResultPage};
use crate::profiles::query::SemanticQuery;
use crate::session::Session;

/// Default API endpoint when `GLIMPSE_API_URL` isn't set.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// Authenticated client for the `/profiles` endpoints.
pub struct ProfileApiClient {
    client: reqwest::Client,
    base_url: Url,
    session: Arc<dyn Session>,
}

impl ProfileApiClient {
    /// Create a client pointing at the given base URL (e.g. `https://host/api`).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        session: Arc<dyn Session>,
    ) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot have path segments".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("glimpse/0.1 (profile-discovery)")
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            session,
        })
    }

    /// Append path segments to the base URL. Each segment is
    /// percent-encoded, so an id can't escape into another route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `{base_url}/{segments...}` with query pairs and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let path = segments.join("/");
        let path = path.as_str();

        debug!(path = path, params = params.len(), "API GET request");

        let mut request = self.client.get(url).query(params);
        if let Some(token) = self.session.auth_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthExpired {
                endpoint: path.to_string(),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            // The server usually explains itself in `{ "message": ... }`.
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: path.to_string(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Deserialize {
            context: path.to_string(),
            source,
        })
    }
}

/// Servers send `0` or omit the field for "one page"; normalise to >= 1.
fn at_least_one(value: Option<u32>) -> u32 {
    value.filter(|v| *v > 0).unwrap_or(1)
}

#[async_trait]
impl ProfileSource for ProfileApiClient {
    async fn list_profiles(
        &self,
        page: u32,
        limit: u32,
        criteria: &FilterCriteria,
    ) -> Result<ResultPage, ApiError> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        params.extend(criteria.to_query_pairs());

        let resp: ListingResponse = self.get_json(&["profiles"], &params).await?;

        let profiles: Vec<ProfileSummary> = resp.profiles.into_iter().map(Into::into).collect();
        Ok(ResultPage {
            total: resp.total.unwrap_or(profiles.len() as u64),
            profiles,
            page,
            total_pages: at_least_one(resp.total_pages),
            mode: ResultMode::Filtered,
        })
    }

    async fn semantic_search(
        &self,
        query: &SemanticQuery,
        page: u32,
        limit: u32,
    ) -> Result<ResultPage, ApiError> {
        let params = [
            ("q", query.as_str().to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];

        let resp: SearchResponse = self.get_json(&["profiles", "ai-search"], &params).await?;

        if !resp.success {
            return Err(ApiError::Rejected {
                message: resp.message.unwrap_or_else(|| "Search failed".to_string()),
            });
        }

        let profiles: Vec<ProfileSummary> = resp.profiles.into_iter().map(Into::into).collect();
        Ok(ResultPage {
            total: resp.total.unwrap_or(profiles.len() as u64),
            profiles,
            page: at_least_one(resp.page),
            total_pages: at_least_one(resp.total_pages),
            mode: ResultMode::SemanticSearch,
        })
    }

    async fn profile_detail(&self, id: &str) -> Result<ProfileDetail, ApiError> {
        let resp: DetailResponse = self.get_json(&["profiles", id], &[]).await?;
        Ok(resp.profile.into())
    }
}
