//! JSON output formatting.

use serde_json::{Value, json};

use crate::catalog::{Facets, GroupedResult};
use crate::models::Paper;
use crate::roster::{GroupTitles, PeopleGroup};

/// Create a compact paper representation for JSON output.
///
/// Citation text and abstract are omitted; they are only needed by the
/// website's dialogs.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "name": paper.name,
        "authors": paper.author_names(),
    });

    // Add optional fields only if present
    if let Some(venue) = paper.venue() {
        obj["venue"] = json!(venue);
    }

    if let Some(year) = paper.year() {
        obj["year"] = json!(year);
    }

    if let Some(month) = paper.month() {
        obj["month"] = json!(month);
    }

    let mut links = serde_json::Map::new();
    for (label, link) in [
        ("paper", &paper.paper_link),
        ("github", &paper.github_link),
        ("slides", &paper.slide_link),
    ] {
        if let Some(link) = link {
            links.insert(label.to_string(), json!(link));
        }
    }
    if !links.is_empty() {
        obj["links"] = Value::Object(links);
    }

    obj
}

/// Grouped view as a JSON array of `{year, count, papers}`.
#[must_use]
pub fn grouped_json(groups: &GroupedResult) -> Value {
    Value::Array(
        groups
            .iter()
            .map(|g| {
                json!({
                    "year": g.year,
                    "count": g.len(),
                    "papers": g.papers.iter().map(compact_paper).collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

/// Filter choices as JSON.
#[must_use]
pub fn facets_json(facets: &Facets) -> Value {
    json!({
        "authors": facets.authors,
        "years": facets.years,
    })
}

/// Roster as a JSON array of `{group, title, people}`.
#[must_use]
pub fn roster_json(groups: &[PeopleGroup], titles: &GroupTitles) -> Value {
    Value::Array(
        groups
            .iter()
            .map(|g| {
                json!({
                    "group": g.group,
                    "title": titles.title(&g.group),
                    "people": g.people,
                })
            })
            .collect(),
    )
}
