// Search mode controller: reconciles filtered pagination and one-shot
// semantic search into a single presentation state.
//
// The controller never performs I/O. Each transition that needs data
// returns a request ticket carrying a sequence number; the caller runs the
// matching fetcher and hands the outcome back with that number. Only the
// latest ticket for each kind of request is applied, so a slow response
// can't overwrite newer state.
//
// State is replaced wholesale on every transition. `snapshot()` hands out
// the current `Arc<ViewState>` without copying.

pub mod state;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::fetch::detail::{DetailOutcome, DetailView};
use crate::fetch::listing::ListingOutcome;
use crate::fetch::search::SearchOutcome;
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::{ProfileSummary, ResultMode, ResultPage};
use crate::profiles::query::{QueryError, SemanticQuery};

pub use state::{Mode, ViewState};

/// A listing fetch the caller should run.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub seq: u64,
    pub page: u32,
    pub criteria: FilterCriteria,
}

/// A semantic search the caller should run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: SemanticQuery,
}

/// A detail lookup the caller should run.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRequest {
    pub seq: u64,
    pub summary: ProfileSummary,
}

/// What happened to a completion handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request superseded this one; the outcome was dropped.
    Stale,
    /// The session ended; state was left as it was.
    SessionExpired,
}

#[derive(Debug, Default)]
pub struct SearchModeController {
    state: Arc<ViewState>,
    next_seq: u64,
    listing_seq: Option<u64>,
    search_seq: Option<u64>,
    detail_seq: Option<u64>,
}

impl SearchModeController {
    /// Start in filtered mode with no criteria and nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<ViewState> {
        Arc::clone(&self.state)
    }

    /// Replace the state with a modified copy of the current one.
    fn transition(&mut self, f: impl FnOnce(&mut ViewState)) {
        let mut next = ViewState::clone(&self.state);
        f(&mut next);
        self.state = Arc::new(next);
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Enter (or stay in) filtered mode and issue a listing fetch.
    ///
    /// Leaving semantic mode drops its results and any search still in
    /// flight, so neither can resurface under the new criteria.
    fn enter_filtered(&mut self, criteria: FilterCriteria, page: u32) -> ListingRequest {
        let seq = self.issue();
        self.listing_seq = Some(seq);
        self.search_seq = None;

        let page = page.max(1);
        let leaving_search = self.state.mode.is_semantic();
        let mode_criteria = criteria.clone();
        self.transition(|s| {
            s.mode = Mode::Filtered {
                criteria: mode_criteria,
                page,
            };
            if leaving_search {
                s.results = ResultPage::empty(ResultMode::Filtered);
            }
            s.loading = true;
            s.searching = false;
            s.error = None;
        });

        debug!(seq, page, filters = criteria.active_count(), "Issued listing fetch");
        ListingRequest {
            seq,
            page,
            criteria,
        }
    }

    /// Apply new criteria: back to page 1, filtered mode.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> ListingRequest {
        self.enter_filtered(criteria, 1)
    }

    /// Drop all criteria: back to page 1, filtered mode.
    pub fn clear_filters(&mut self) -> ListingRequest {
        self.enter_filtered(FilterCriteria::default(), 1)
    }

    /// Move to another page of the filtered listing.
    ///
    /// Semantic results are one-shot, so this is a no-op (returns `None`)
    /// while a search is shown.
    pub fn change_page(&mut self, page: u32) -> Option<ListingRequest> {
        match &self.state.mode {
            Mode::Filtered { criteria, .. } => {
                let criteria = criteria.clone();
                Some(self.enter_filtered(criteria, page))
            }
            Mode::SemanticSearchActive { .. } => {
                debug!(page, "Pagination is not available for semantic search results");
                None
            }
        }
    }

    /// Re-issue the listing fetch.
    ///
    /// From semantic mode this returns to filtered mode with the criteria
    /// cleared when the search was entered, keeping the page it showed.
    pub fn refresh(&mut self) -> ListingRequest {
        match &self.state.mode {
            Mode::Filtered { criteria, page } => {
                let (criteria, page) = (criteria.clone(), *page);
                self.enter_filtered(criteria, page)
            }
            Mode::SemanticSearchActive { .. } => {
                let page = self.state.results.page;
                self.enter_filtered(FilterCriteria::default(), page)
            }
        }
    }

    /// Apply a listing outcome for the request with sequence number `seq`.
    pub fn complete_listing(&mut self, seq: u64, outcome: ListingOutcome) -> Completion {
        if self.listing_seq != Some(seq) {
            debug!(seq, latest = ?self.listing_seq, "Discarding stale listing result");
            return Completion::Stale;
        }
        self.listing_seq = None;

        match outcome {
            ListingOutcome::Loaded(page) => {
                self.transition(|s| {
                    s.results = page;
                    s.loading = false;
                    s.error = None;
                });
                Completion::Applied
            }
            ListingOutcome::Failed { message } => {
                // Never show an error next to the previous page's rows.
                self.transition(|s| {
                    s.results = ResultPage::empty(ResultMode::Filtered);
                    s.loading = false;
                    s.error = Some(message);
                });
                Completion::Applied
            }
            ListingOutcome::SessionExpired => Completion::SessionExpired,
        }
    }

    /// Validate the search box and issue a search.
    ///
    /// Invalid input surfaces inline and issues nothing.
    pub fn begin_search(&mut self, raw: &str) -> Result<SearchRequest, QueryError> {
        let draft = raw.to_string();
        let query = match SemanticQuery::parse(raw) {
            Ok(q) => q,
            Err(e) => {
                let message = e.to_string();
                self.transition(|s| {
                    s.search_draft = draft;
                    s.search_error = Some(message);
                });
                return Err(e);
            }
        };

        let seq = self.issue();
        self.search_seq = Some(seq);
        self.transition(|s| {
            s.search_draft = draft;
            s.searching = true;
            s.search_error = None;
        });

        debug!(seq, "Issued semantic search");
        Ok(SearchRequest { seq, query })
    }

    /// Enter semantic mode with a completed search result.
    ///
    /// The result page replaces the list wholesale, including its page
    /// number and totals. Criteria are dropped and any listing fetch still
    /// in flight is invalidated.
    pub fn submit_semantic_query(
        &mut self,
        seq: u64,
        query: &SemanticQuery,
        result: ResultPage,
    ) -> Completion {
        if self.search_seq != Some(seq) {
            debug!(seq, latest = ?self.search_seq, "Discarding stale search result");
            return Completion::Stale;
        }
        self.search_seq = None;
        self.listing_seq = None;

        info!(total = result.total, page = result.page, "Showing semantic search results");
        let query = query.as_str().to_string();
        self.transition(|s| {
            s.mode = Mode::SemanticSearchActive {
                query: query.clone(),
            };
            s.results = ResultPage {
                mode: ResultMode::SemanticSearch,
                ..result
            };
            s.loading = false;
            s.searching = false;
            s.error = None;
            s.search_error = None;
            s.search_draft.clear();
            s.last_search = Some(query);
        });
        Completion::Applied
    }

    /// Apply a search outcome for the request with sequence number `seq`.
    ///
    /// A failed search only sets the inline search error; whatever list
    /// was showing stays.
    pub fn complete_search(
        &mut self,
        seq: u64,
        query: &SemanticQuery,
        outcome: SearchOutcome,
    ) -> Completion {
        match outcome {
            SearchOutcome::Found(result) => self.submit_semantic_query(seq, query, result),
            SearchOutcome::Failed { message } => {
                if self.search_seq != Some(seq) {
                    return Completion::Stale;
                }
                self.search_seq = None;
                warn!(error = %message, "Search error");
                self.transition(|s| {
                    s.searching = false;
                    s.search_error = Some(message);
                });
                Completion::Applied
            }
            SearchOutcome::SessionExpired => {
                if self.search_seq == Some(seq) {
                    self.search_seq = None;
                }
                Completion::SessionExpired
            }
        }
    }

    /// Start resolving the detail record for a clicked row.
    pub fn open_detail(&mut self, summary: &ProfileSummary) -> DetailRequest {
        let seq = self.issue();
        self.detail_seq = Some(seq);
        DetailRequest {
            seq,
            summary: summary.clone(),
        }
    }

    /// Show the resolved detail for the latest clicked row.
    pub fn complete_detail(&mut self, seq: u64, outcome: DetailOutcome) -> Completion {
        if self.detail_seq != Some(seq) {
            debug!(seq, latest = ?self.detail_seq, "Discarding stale detail result");
            return Completion::Stale;
        }
        self.detail_seq = None;

        match outcome {
            DetailOutcome::Resolved(view) => {
                self.transition(|s| s.detail = Some(view));
                Completion::Applied
            }
            DetailOutcome::SessionExpired => Completion::SessionExpired,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_seq = None;
        self.transition(|s| s.detail = None);
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.state.detail.as_ref()
    }

    /// Dismiss both the listing and search error messages.
    pub fn dismiss_error(&mut self) {
        self.transition(|s| {
            s.error = None;
            s.search_error = None;
        });
    }
}
