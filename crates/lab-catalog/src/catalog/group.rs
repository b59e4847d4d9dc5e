//! Group-by-year stage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::month::sort_by_month;
use crate::config::defaults::UNKNOWN_YEAR;
use crate::models::Paper;

/// Papers published in one year, ordered by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Canonical year number, or `"unknown"`.
    pub year: String,

    /// Papers in descending month order.
    pub papers: Vec<Paper>,
}

impl YearGroup {
    /// Whether this is the trailing group of papers without a usable year.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.year == UNKNOWN_YEAR
    }

    /// Number of papers in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the group has no papers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// Year-partitioned, month-sorted view of a paper collection.
pub type GroupedResult = Vec<YearGroup>;

/// Partition papers into year groups.
///
/// Groups are ordered by descending numeric year. Papers whose year is
/// missing, empty or not an integer land in a final `"unknown"` group, which
/// is only emitted when non-empty. Year strings that share a numeric value
/// (`"2021"`, `" 2021"`) land in one group labelled with the canonical
/// number. Each group is sorted with [`sort_by_month`].
#[must_use]
pub fn group_by_year(papers: Vec<Paper>) -> GroupedResult {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut buckets: Vec<(i64, Vec<Paper>)> = Vec::new();
    let mut unknown = Vec::new();

    for paper in papers {
        let Some(numeric) = paper.numeric_year() else {
            unknown.push(paper);
            continue;
        };

        match index.get(&numeric) {
            Some(&slot) => buckets[slot].1.push(paper),
            None => {
                index.insert(numeric, buckets.len());
                buckets.push((numeric, vec![paper]));
            }
        }
    }

    buckets.sort_by(|a, b| b.0.cmp(&a.0));

    let mut result: GroupedResult = buckets
        .into_iter()
        .map(|(year, papers)| YearGroup { year: year.to_string(), papers: sort_by_month(papers) })
        .collect();

    if !unknown.is_empty() {
        result.push(YearGroup { year: UNKNOWN_YEAR.to_string(), papers: sort_by_month(unknown) });
    }

    result
}
