// Client-side sorting of the displayed result page.
//
// Sorting is a projection: it borrows the page's profiles and returns them
// in display order without touching the page itself. `slice::sort_by` is
// stable, so ties keep the order the server returned them in.

use std::cmp::Ordering;

use crate::profiles::models::ProfileSummary;

/// A sortable column of the profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Username,
    Followers,
    Posts,
    Engagement,
    Category,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Username,
        SortField::Followers,
        SortField::Posts,
        SortField::Engagement,
        SortField::Category,
    ];

    /// Numeric columns open descending, text columns ascending.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortField::Followers | SortField::Posts | SortField::Engagement => {
                SortOrder::Descending
            }
            SortField::Username | SortField::Category => SortOrder::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Username => "username",
            SortField::Followers => "followers",
            SortField::Posts => "posts",
            SortField::Engagement => "engagement",
            SortField::Category => "category",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// The sorted view over a result page.
///
/// Holds only the active sort; the profiles themselves are passed to
/// [`ListView::project`] each time it's rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    sort: Option<SortSpec>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortSpec) -> Self {
        Self { sort: Some(sort) }
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Handle a click on a column header.
    ///
    /// The active column toggles its order; a new column starts at its
    /// default order.
    pub fn click(&mut self, field: SortField) -> SortSpec {
        let next = match self.sort {
            Some(current) if current.field == field => {
                SortSpec::new(field, current.order.toggled())
            }
            _ => SortSpec::new(field, field.default_order()),
        };
        self.sort = Some(next);
        next
    }

    /// Profiles in display order. Unsorted views keep server order.
    pub fn project<'a>(&self, profiles: &'a [ProfileSummary]) -> Vec<&'a ProfileSummary> {
        let mut rows: Vec<&ProfileSummary> = profiles.iter().collect();
        if let Some(spec) = self.sort {
            sort_rows(&mut rows, spec);
        }
        rows
    }
}

/// Sort rows in place by field and order (stable).
pub fn sort_rows(rows: &mut [&ProfileSummary], spec: SortSpec) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, spec.field);
        match spec.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

/// The engagement figure shown in the listing. Rates shown as `-` (missing
/// or not positive) sort together, below every real rate.
fn displayed_engagement(p: &ProfileSummary) -> f64 {
    p.engagement_rate
        .filter(|r| *r > 0.0)
        .unwrap_or(f64::NEG_INFINITY)
}

fn compare(a: &ProfileSummary, b: &ProfileSummary, field: SortField) -> Ordering {
    match field {
        SortField::Username => a
            .username
            .to_lowercase()
            .cmp(&b.username.to_lowercase()),
        SortField::Followers => a.followers_count.cmp(&b.followers_count),
        SortField::Posts => a.posts_count.cmp(&b.posts_count),
        SortField::Engagement => displayed_engagement(a).total_cmp(&displayed_engagement(b)),
        SortField::Category => a
            .category_name
            .as_deref()
            .unwrap_or("")
            .cmp(b.category_name.as_deref().unwrap_or("")),
    }
}
