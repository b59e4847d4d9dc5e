//! Distinct authors and years offered as filter choices.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{FilterCriteria, Paper};

/// Filter choices derived from a paper collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    /// Author display names, first-appearance order.
    pub authors: Vec<String>,

    /// Non-empty years, first-appearance order.
    pub years: Vec<String>,
}

impl Facets {
    /// Collect facets from papers.
    #[must_use]
    pub fn from_papers(papers: &[Paper]) -> Self {
        let mut authors = Vec::new();
        let mut years = Vec::new();
        let mut seen_authors = HashSet::new();
        let mut seen_years = HashSet::new();

        for paper in papers {
            for name in paper.author_names() {
                if seen_authors.insert(name) {
                    authors.push(name.to_string());
                }
            }
            if let Some(year) = paper.year() {
                if seen_years.insert(year) {
                    years.push(year.to_string());
                }
            }
        }

        Self { authors, years }
    }

    /// Whether `author` is one of the choices.
    #[must_use]
    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }

    /// Whether `year` is one of the choices.
    #[must_use]
    pub fn has_year(&self, year: &str) -> bool {
        self.years.iter().any(|y| y == year)
    }

    /// Whether the author and year selected in `criteria` are both on offer.
    ///
    /// A selection outside the choices can only produce an empty view.
    #[must_use]
    pub fn offers(&self, criteria: &FilterCriteria) -> bool {
        criteria.author().is_none_or(|a| self.has_author(a))
            && criteria.year().is_none_or(|y| self.has_year(y))
    }
}
