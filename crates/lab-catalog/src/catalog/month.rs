//! Month ranking and the within-year sort.

use crate::models::Paper;

/// Rank of papers whose month is missing or unrecognized.
pub const UNKNOWN_MONTH_RANK: i32 = -1;

/// Calendar months in rank order (January = 1).
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Resolve a month field to its sort rank.
///
/// Only the part before the first `-` is considered, so `"March-Workshop"`
/// ranks as March. The prefix matches the first month (in calendar order)
/// whose name starts with it, ignoring case: `"mar"` is March, `"ju"` is June.
/// The prefix is used as written, so an empty one (`"-Workshop"`) matches
/// January and a padded one (`" March"`) matches nothing.
#[must_use]
pub fn month_rank(month: Option<&str>) -> i32 {
    let Some(month) = month.filter(|m| !m.is_empty()) else {
        return UNKNOWN_MONTH_RANK;
    };

    let prefix = month.split_once('-').map_or(month, |(head, _)| head).to_lowercase();
    MONTHS
        .iter()
        .zip(1..)
        .find(|(name, _)| name.to_lowercase().starts_with(&prefix))
        .map_or(UNKNOWN_MONTH_RANK, |(_, rank)| rank)
}

/// Convert a numeric month ("3", "03") to its name.
#[must_use]
pub fn month_name(number: &str) -> Option<&'static str> {
    let index: usize = number.trim().parse().ok()?;
    MONTHS.get(index.checked_sub(1)?).copied()
}

/// Order papers by descending month rank.
///
/// The sort is stable: papers with equal rank keep their input order.
#[must_use]
pub fn sort_by_month(mut papers: Vec<Paper>) -> Vec<Paper> {
    papers.sort_by_cached_key(|p| std::cmp::Reverse(p.month_rank()));
    papers
}
