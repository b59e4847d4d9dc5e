//! Filter criteria selected in the paper list form.

use serde::{Deserialize, Serialize};

/// User-selected constraints narrowing the paper collection.
///
/// Empty strings count as unset, matching a cleared form control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Keep papers with this author (star-stripped, exact match).
    #[serde(default, alias = "authors", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Keep papers from this year (exact string match).
    #[serde(default, alias = "years", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Case-insensitive regular expression matched against title and venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_str: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every paper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author constraint.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the year constraint.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Set the free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_str = Some(search.into());
        self
    }

    /// Active author constraint.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        non_empty(self.author.as_deref())
    }

    /// Active year constraint.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        non_empty(self.year.as_deref())
    }

    /// Active search string.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        non_empty(self.search_str.as_deref())
    }

    /// True when no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.author().is_none() && self.year().is_none() && self.search().is_none()
    }

    /// Clear the author and year selections, keeping the free-text search.
    pub fn reset_selections(&mut self) {
        self.author = None;
        self.year = None;
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_are_unset() {
        let criteria = FilterCriteria::new().with_author("").with_year("").with_search("");
        assert!(criteria.is_empty());
        assert_eq!(criteria.author(), None);
    }

    #[test]
    fn test_form_aliases() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"authors": "Jane Doe", "years": "2021", "searchStr": "net"}"#)
                .unwrap();
        assert_eq!(criteria.author(), Some("Jane Doe"));
        assert_eq!(criteria.year(), Some("2021"));
        assert_eq!(criteria.search(), Some("net"));
    }

    #[test]
    fn test_reset_keeps_search() {
        let mut criteria = FilterCriteria::new().with_author("A").with_year("2020").with_search("x");
        criteria.reset_selections();
        assert_eq!(criteria.author(), None);
        assert_eq!(criteria.year(), None);
        assert_eq!(criteria.search(), Some("x"));
    }
}
