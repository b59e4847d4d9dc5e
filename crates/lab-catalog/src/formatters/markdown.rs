//! Markdown output formatting.

use super::remove_suffix;
use crate::catalog::{Facets, GroupedResult};
use crate::models::{Paper, Person};
use crate::roster::{GroupTitles, PeopleGroup, RosterMode};

/// Format a grouped paper view as Markdown.
#[must_use]
pub fn format_grouped_markdown(groups: &GroupedResult) -> String {
    if groups.is_empty() {
        return "No papers found.".to_string();
    }

    let total: usize = groups.iter().map(|g| g.len()).sum();
    let mut output = format!("# Publications ({total} papers)\n\n");

    for group in groups {
        let heading = if group.is_unknown() { "Unknown year" } else { group.year.as_str() };
        output.push_str(&format!("## {heading}\n\n"));
        for paper in &group.papers {
            output.push_str(&format_paper_markdown(paper));
        }
        output.push('\n');
    }

    output
}

/// Format a single paper as a Markdown list item.
#[must_use]
pub fn format_paper_markdown(paper: &Paper) -> String {
    let mut output = format!("- **{}**", remove_suffix(&paper.name, &['.']));

    // Authors keep their equal-contribution markers here
    if !paper.authors.is_empty() {
        let names: Vec<&str> = paper.authors.iter().map(|a| a.name.as_str()).collect();
        output.push_str(&format!(". {}", names.join(", ")));
        if let Some(extra) = paper.author_extra.as_deref().filter(|e| !e.is_empty()) {
            output.push_str(&format!(" ({extra})"));
        }
    }

    let mut venue = Vec::new();
    if let Some(public_at) = paper.venue() {
        venue.push(format!("*{public_at}*"));
    }
    if let Some(month) = paper.month() {
        venue.push(month.to_string());
    }
    if !venue.is_empty() {
        output.push_str(&format!(". {}", venue.join(", ")));
    }

    let links: Vec<String> = [
        ("PDF", &paper.paper_link),
        ("Code", &paper.github_link),
        ("Slides", &paper.slide_link),
    ]
    .into_iter()
    .filter_map(|(label, link)| link.as_ref().map(|l| format!("[{label}]({l})")))
    .collect();
    if !links.is_empty() {
        output.push_str(&format!(". {}", links.join(" | ")));
    }

    output.push('\n');
    output
}

/// Format filter choices as Markdown.
#[must_use]
pub fn format_facets_markdown(facets: &Facets) -> String {
    format!(
        "# Filters\n\n**Authors**: {}\n\n**Years**: {}\n",
        facets.authors.join(", "),
        facets.years.join(", ")
    )
}

/// Format a people roster as Markdown.
#[must_use]
pub fn format_roster_markdown(groups: &[PeopleGroup], titles: &GroupTitles, mode: RosterMode) -> String {
    if groups.is_empty() {
        return "No people found.".to_string();
    }

    let mut output = String::from("# People\n\n");
    for group in groups {
        output.push_str(&format!("## {}\n\n", titles.title(&group.group)));
        for person in &group.people {
            match mode {
                RosterMode::Simple => output.push_str(&format!("- {}\n", person_name(person))),
                RosterMode::Card => output.push_str(&format_person_card(person)),
            }
        }
        if mode == RosterMode::Simple {
            output.push('\n');
        }
    }

    output
}

fn format_person_card(person: &Person) -> String {
    let mut output = format!("### {}\n\n", person_name(person));
    if !person.avatar.is_empty() {
        output.push_str(&format!("![{}]({})\n\n", person.name, person.avatar));
    }
    for line in person.description() {
        output.push_str(line);
        output.push('\n');
    }
    if !person.description().is_empty() {
        output.push('\n');
    }
    output
}

fn person_name(person: &Person) -> String {
    match &person.link {
        Some(link) => format!("[{}]({link})", person.name),
        None => person.name.clone(),
    }
}
