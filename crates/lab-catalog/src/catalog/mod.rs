//! Paper catalog pipeline.
//!
//! A paper collection and a set of [`FilterCriteria`] flow through three
//! stages:
//! 1. [`filter_papers`] keeps papers matching author, year and free text
//! 2. [`group_by_year`] partitions them into descending year groups
//! 3. [`sort_by_month`] orders each group by descending month
//!
//! [`PaperCatalogView`] recomputes on demand; [`LiveCatalog`] recomputes
//! whenever its inputs change.

mod facets;
mod filter;
mod group;
mod live;
mod month;

pub use facets::Facets;
pub use filter::{PaperFilter, filter_papers};
pub use group::{GroupedResult, YearGroup, group_by_year};
pub use live::{CatalogUpdate, LiveCatalog};
pub use month::{MONTHS, UNKNOWN_MONTH_RANK, month_name, month_rank, sort_by_month};

use crate::error::CatalogResult;
use crate::models::{FilterCriteria, Paper};

/// Run the full pipeline over borrowed inputs.
///
/// # Errors
///
/// Returns [`crate::CatalogError::InvalidPattern`] if the search string does
/// not compile.
pub fn run_pipeline(papers: &[Paper], criteria: &FilterCriteria) -> CatalogResult<GroupedResult> {
    let filtered = filter_papers(papers, criteria)?;
    let kept = filtered.len();
    let groups = group_by_year(filtered);

    tracing::debug!(total = papers.len(), kept, groups = groups.len(), "catalog recomputed");
    Ok(groups)
}

/// Pull-based catalog view.
///
/// The host replaces the paper collection or the criteria wholesale and calls
/// [`view`](Self::view) to get the current grouping.
#[derive(Debug, Clone, Default)]
pub struct PaperCatalogView {
    papers: Vec<Paper>,
    criteria: FilterCriteria,
    facets: Facets,
}

impl PaperCatalogView {
    /// Create a view over `papers` with no active filters.
    #[must_use]
    pub fn new(papers: Vec<Paper>) -> Self {
        let facets = Facets::from_papers(&papers);
        Self { papers, criteria: FilterCriteria::default(), facets }
    }

    /// Replace the paper collection and recompute the facets.
    pub fn set_papers(&mut self, papers: Vec<Paper>) {
        self.facets = Facets::from_papers(&papers);
        self.papers = papers;
    }

    /// Replace the filter criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Clear the author and year selections.
    pub fn reset_filters(&mut self) {
        self.criteria.reset_selections();
    }

    /// Current paper collection.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Author and year choices for the current collection.
    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Compute the grouped view for the current inputs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::InvalidPattern`] if the search string
    /// does not compile.
    pub fn view(&self) -> CatalogResult<GroupedResult> {
        run_pipeline(&self.papers, &self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn sample() -> Vec<Paper> {
        vec![
            Paper {
                authors: vec![Author::new("Jane Doe*")],
                year: Some("2019".into()),
                ..Paper::new("Graph Models")
            },
            Paper {
                authors: vec![Author::new("John Roe")],
                year: Some("2021".into()),
                month: Some("March".into()),
                ..Paper::new("Neural Networks")
            },
            Paper { authors: vec![Author::new("Jane Doe")], ..Paper::new("Preprint") },
        ]
    }

    #[test]
    fn test_view_without_filters() {
        let view = PaperCatalogView::new(sample());
        let groups = view.view().unwrap();
        let labels: Vec<_> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(labels, ["2021", "2019", "unknown"]);
    }

    #[test]
    fn test_set_criteria_and_reset() {
        let mut view = PaperCatalogView::new(sample());
        view.set_criteria(FilterCriteria::new().with_author("Jane Doe").with_search("g"));
        let groups = view.view().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].papers[0].name, "Graph Models");

        view.reset_filters();
        assert_eq!(view.criteria().author(), None);
        assert_eq!(view.criteria().search(), Some("g"));
    }

    #[test]
    fn test_set_papers_refreshes_facets() {
        let mut view = PaperCatalogView::new(sample());
        assert!(view.facets().has_author("John Roe"));

        view.set_papers(vec![Paper::new("Solo")]);
        assert!(view.facets().authors.is_empty());
        assert_eq!(view.papers().len(), 1);
    }
}
