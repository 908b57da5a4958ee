// Presentation state: one snapshot per controller transition.

use crate::fetch::detail::DetailView;
use crate::profiles::filters::FilterCriteria;
use crate::profiles::models::{ResultMode, ResultPage};

/// The active acquisition mode, carrying only the data valid in that mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Structured criteria with client-driven pagination.
    Filtered { criteria: FilterCriteria, page: u32 },
    /// A one-shot ranked result set for a free-text query.
    SemanticSearchActive { query: String },
}

impl Mode {
    pub fn filtered(criteria: FilterCriteria) -> Self {
        Mode::Filtered { criteria, page: 1 }
    }

    pub fn result_mode(&self) -> ResultMode {
        match self {
            Mode::Filtered { .. } => ResultMode::Filtered,
            Mode::SemanticSearchActive { .. } => ResultMode::SemanticSearch,
        }
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Mode::SemanticSearchActive { .. })
    }
}

/// Everything the listing and detail views render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub results: ResultPage,
    /// A listing fetch is in flight.
    pub loading: bool,
    /// A semantic search is in flight.
    pub searching: bool,
    /// Dismissible acquisition error for the listing.
    pub error: Option<String>,
    /// Inline error under the search box (validation or search failure).
    pub search_error: Option<String>,
    /// Text currently in the search box.
    pub search_draft: String,
    /// The last query that produced results.
    pub last_search: Option<String>,
    pub detail: Option<DetailView>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: Mode::filtered(FilterCriteria::default()),
            results: ResultPage::empty(ResultMode::Filtered),
            loading: false,
            searching: false,
            error: None,
            search_error: None,
            search_draft: String::new(),
            last_search: None,
            detail: None,
        }
    }
}

impl ViewState {
    /// Criteria in effect, or `None` while a semantic search is shown.
    pub fn criteria(&self) -> Option<&FilterCriteria> {
        match &self.mode {
            Mode::Filtered { criteria, .. } => Some(criteria),
            Mode::SemanticSearchActive { .. } => None,
        }
    }

    /// The current page: the requested one in filtered mode, the
    /// server-declared one for a semantic search.
    pub fn page(&self) -> u32 {
        match &self.mode {
            Mode::Filtered { page, .. } => *page,
            Mode::SemanticSearchActive { .. } => self.results.page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.results.total_pages
    }
}
