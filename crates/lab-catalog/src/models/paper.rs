//! Paper data model matching the website's publication JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::month_rank;

/// A publication listed on the lab website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper title.
    pub name: String,

    /// Ordered author list.
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    /// Free-text appended after the author list (e.g. "* equal contribution").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_extra: Option<String>,

    /// Publication venue (conference or journal).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_at: Option<String>,

    /// Paper abstract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Link to the PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_link: Option<String>,

    /// Link to the code repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    /// Badge image showing the repository's star count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars_svg_link: Option<String>,

    /// Link to the slides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_link: Option<String>,

    /// BibTeX citation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibtex: Option<String>,

    /// Publication year, kept as the string the source provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Publication month, optionally with a sub-period ("March-Workshop").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

impl Paper {
    /// Create a paper with only a title.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Get the year if present and non-empty.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty())
    }

    /// Get the year as an integer when it parses as one.
    #[must_use]
    pub fn numeric_year(&self) -> Option<i64> {
        self.year()?.trim().parse().ok()
    }

    /// Get the month if present and non-empty.
    #[must_use]
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref().filter(|m| !m.is_empty())
    }

    /// Sort rank of this paper's month (-1 when unknown).
    #[must_use]
    pub fn month_rank(&self) -> i32 {
        month_rank(self.month.as_deref())
    }

    /// Get the venue if available.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.public_at.as_deref()
    }

    /// Author names with equal-contribution markers removed.
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(Author::display_name).collect()
    }

    /// Check whether `name` is one of this paper's authors.
    ///
    /// Comparison is exact and case-sensitive after stripping the trailing `*`.
    #[must_use]
    pub fn has_author(&self, name: &str) -> bool {
        self.authors.iter().any(|a| a.display_name() == name)
    }
}

/// A paper author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name; a trailing `*` marks equal contribution.
    pub name: String,

    /// Author homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Author {
    /// Create an author without a link.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), link: None }
    }

    /// Name without the equal-contribution marker.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix('*').unwrap_or(&self.name)
    }

    /// Whether the author is marked as an equal contributor.
    #[must_use]
    pub fn is_equal_contribution(&self) -> bool {
        self.name.ends_with('*')
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_display_name_strips_star() {
        let author = Author::new("Jane Doe*");
        assert_eq!(author.display_name(), "Jane Doe");
        assert!(author.is_equal_contribution());

        let author = Author::new("John Roe");
        assert_eq!(author.display_name(), "John Roe");
        assert!(!author.is_equal_contribution());
    }

    #[test]
    fn test_only_one_trailing_star_is_stripped() {
        assert_eq!(Author::new("A**").display_name(), "A*");
    }

    #[test]
    fn test_has_author_is_case_sensitive() {
        let paper = Paper {
            authors: vec![Author::new("Jane Doe*"), Author::new("John Roe")],
            ..Paper::new("Test")
        };
        assert!(paper.has_author("Jane Doe"));
        assert!(paper.has_author("John Roe"));
        assert!(!paper.has_author("jane doe"));
        assert!(!paper.has_author("Jane Doe*"));
    }

    #[test]
    fn test_year_accessors() {
        let mut paper = Paper::new("Test");
        assert_eq!(paper.year(), None);

        paper.year = Some(String::new());
        assert_eq!(paper.year(), None);
        assert_eq!(paper.numeric_year(), None);

        paper.year = Some("2021".into());
        assert_eq!(paper.numeric_year(), Some(2021));

        paper.year = Some("in press".into());
        assert_eq!(paper.year(), Some("in press"));
        assert_eq!(paper.numeric_year(), None);
    }

    #[test]
    fn test_null_authors_deserialize_as_empty() {
        let paper: Paper = serde_json::from_str(r#"{"name": "X", "authors": null}"#).unwrap();
        assert!(paper.authors.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing() {
        let paper = Paper {
            public_at: Some("NeurIPS".into()),
            github_stars_svg_link: Some("https://img.shields.io/x.svg".into()),
            ..Paper::new("Test")
        };
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["publicAt"], "NeurIPS");
        assert_eq!(json["githubStarsSvgLink"], "https://img.shields.io/x.svg");
        assert!(json.get("year").is_none());
        assert!(json.get("authors").is_none());
    }
}
