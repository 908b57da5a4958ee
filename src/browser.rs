// Profile browser: drives the controller with real fetches.
//
// Each user action asks the controller for a request ticket, runs the
// matching fetcher, and hands the outcome back. Everything runs on the
// caller's task; the only suspension points are the network calls.

use std::sync::Arc;

use crate::api::ProfileSource;
use crate::controller::{Completion, SearchModeController, ViewState};
use crate::fetch::detail::{self, DetailView};
use crate::fetch::listing::{self, ListingOutcome};
use crate::fetch::search;
use crate::listing::sort::{ListView, SortField, SortSpec};
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::ProfileSummary;
use crate::profiles::query::QueryError;
use crate::session::Session;

pub struct ProfileBrowser {
    controller: SearchModeController,
    view: ListView,
    source: Arc<dyn ProfileSource>,
    session: Arc<dyn Session>,
}

impl ProfileBrowser {
    pub fn new(source: Arc<dyn ProfileSource>, session: Arc<dyn Session>) -> Self {
        Self {
            controller: SearchModeController::new(),
            view: ListView::new(),
            source,
            session,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SearchModeController {
        &self.controller
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.view.sort()
    }

    /// Click a column header.
    pub fn sort_by(&mut self, field: SortField) -> SortSpec {
        self.view.click(field)
    }

    /// The current result page in display order.
    pub fn rows(&self) -> Vec<&ProfileSummary> {
        self.view.project(&self.controller.state().results.profiles)
    }

    async fn run_listing(&mut self, seq: u64, page: u32, criteria: &FilterCriteria) -> Completion {
        let outcome: ListingOutcome = listing::fetch_listing(
            self.source.as_ref(),
            self.session.as_ref(),
            page,
            criteria,
        )
        .await;
        self.controller.complete_listing(seq, outcome)
    }

    /// Initial load; same as a refresh from the starting state.
    pub async fn load(&mut self) -> Completion {
        self.refresh().await
    }

    pub async fn apply_filters(&mut self, criteria: FilterCriteria) -> Completion {
        let req = self.controller.apply_filters(criteria);
        self.run_listing(req.seq, req.page, &req.criteria).await
    }

    pub async fn clear_filters(&mut self) -> Completion {
        let req = self.controller.clear_filters();
        self.run_listing(req.seq, req.page, &req.criteria).await
    }

    /// Returns `None` when pagination isn't available (semantic mode).
    pub async fn change_page(&mut self, page: u32) -> Option<Completion> {
        let req = self.controller.change_page(page)?;
        Some(self.run_listing(req.seq, req.page, &req.criteria).await)
    }

    pub async fn refresh(&mut self) -> Completion {
        let req = self.controller.refresh();
        self.run_listing(req.seq, req.page, &req.criteria).await
    }

    /// Validate and run a semantic search.
    ///
    /// Validation errors are returned without touching the network.
    pub async fn search(&mut self, raw: &str) -> Result<Completion, QueryError> {
        let req = self.controller.begin_search(raw)?;
        let outcome =
            search::fetch_search(self.source.as_ref(), self.session.as_ref(), &req.query).await;
        Ok(self.controller.complete_search(req.seq, &req.query, outcome))
    }

    /// Resolve and show the detail panel for a profile.
    pub async fn open_profile(&mut self, summary: &ProfileSummary) -> Completion {
        let req = self.controller.open_detail(summary);
        let outcome =
            detail::resolve_detail(self.source.as_ref(), self.session.as_ref(), &req.summary)
                .await;
        self.controller.complete_detail(req.seq, outcome)
    }

    /// Open the row at `index` in the current display order.
    pub async fn open_row(&mut self, index: usize) -> Option<Completion> {
        let summary = self.rows().get(index).map(|p| (*p).clone())?;
        Some(self.open_profile(&summary).await)
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.controller.detail()
    }

    pub fn close_detail(&mut self) {
        self.controller.close_detail();
    }

    pub fn dismiss_error(&mut self) {
        self.controller.dismiss_error();
    }
}
