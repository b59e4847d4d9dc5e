//! Filter stage: author, year and free-text predicates.

use regex::{Regex, RegexBuilder};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{FilterCriteria, Paper};

/// Compiled form of [`FilterCriteria`].
#[derive(Debug, Clone)]
pub struct PaperFilter<'a> {
    author: Option<&'a str>,
    year: Option<&'a str>,
    search: Option<Regex>,
}

impl<'a> PaperFilter<'a> {
    /// Compile criteria into a reusable predicate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPattern`] if the search string is not a
    /// valid regular expression.
    pub fn new(criteria: &'a FilterCriteria) -> CatalogResult<Self> {
        let search = criteria
            .search()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| CatalogError::invalid_pattern(pattern, e.to_string()))
            })
            .transpose()?;

        Ok(Self { author: criteria.author(), year: criteria.year(), search })
    }

    /// Check whether a paper satisfies every active constraint.
    #[must_use]
    pub fn matches(&self, paper: &Paper) -> bool {
        if self.author.is_some_and(|author| !paper.has_author(author)) {
            return false;
        }

        if self.year.is_some_and(|year| paper.year.as_deref() != Some(year)) {
            return false;
        }

        if let Some(re) = &self.search {
            let in_venue = paper.venue().is_some_and(|v| re.is_match(v));
            if !re.is_match(&paper.name) && !in_venue {
                return false;
            }
        }

        true
    }
}

/// Keep the papers matching `criteria`, preserving input order.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPattern`] if the search string is not a
/// valid regular expression.
pub fn filter_papers(papers: &[Paper], criteria: &FilterCriteria) -> CatalogResult<Vec<Paper>> {
    let filter = PaperFilter::new(criteria)?;
    Ok(papers.iter().filter(|p| filter.matches(p)).cloned().collect())
}
