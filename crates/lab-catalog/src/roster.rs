//! People roster grouped by role.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Person;

/// Role groups with a fixed position on the people page.
pub const GROUP_RANKS: [(&str, u32); 3] = [("Leaders", 0), ("Graduate Students", 1), ("Alumni", 3)];

/// Display style for the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RosterMode {
    /// One card per person with avatar and description.
    #[default]
    Card,
    /// Compact name list.
    Simple,
}

/// Members sharing a role group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleGroup {
    /// Group key as found on the members.
    pub group: String,

    /// Members in input order.
    pub people: Vec<Person>,
}

/// Display titles for group keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupTitles(HashMap<String, String>);

impl GroupTitles {
    /// Create titles from `(key, title)` pairs.
    #[must_use]
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Title for `group`, falling back to the key itself.
    #[must_use]
    pub fn title<'a>(&'a self, group: &'a str) -> &'a str {
        self.0.get(group).map_or(group, String::as_str)
    }
}

/// Position of a group key, `None` for groups without a fixed position.
#[must_use]
pub fn group_rank(group: &str) -> Option<u32> {
    GROUP_RANKS.iter().find(|(name, _)| *name == group).map(|(_, rank)| *rank)
}

/// Partition people by role group.
///
/// Ranked groups come first in rank order; other groups follow in
/// first-appearance order.
#[must_use]
pub fn group_people(people: &[Person]) -> Vec<PeopleGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<PeopleGroup> = Vec::new();

    for person in people {
        let slot = *index.entry(person.group.as_str()).or_insert_with(|| {
            groups.push(PeopleGroup { group: person.group.clone(), people: Vec::new() });
            groups.len() - 1
        });
        groups[slot].people.push(person.clone());
    }

    groups.sort_by_key(|g| group_rank(&g.group).unwrap_or(u32::MAX));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_groups_first() {
        let people = vec![
            Person::new("Carol", "Alumni"),
            Person::new("Visitor", "Visiting Scholars"),
            Person::new("Bob", "Graduate Students"),
            Person::new("Ada", "Leaders"),
            Person::new("Dan", "Graduate Students"),
            Person::new("Eve", "Undergraduates"),
        ];

        let groups = group_people(&people);
        let keys: Vec<_> = groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(
            keys,
            ["Leaders", "Graduate Students", "Alumni", "Visiting Scholars", "Undergraduates"]
        );

        let students: Vec<_> = groups[1].people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(students, ["Bob", "Dan"]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(group_people(&[]).is_empty());
    }

    #[test]
    fn test_group_titles_fallback() {
        let titles = GroupTitles::new([("Leaders", "Faculty")]);
        assert_eq!(titles.title("Leaders"), "Faculty");
        assert_eq!(titles.title("Alumni"), "Alumni");
    }

    #[test]
    fn test_group_rank() {
        assert_eq!(group_rank("Leaders"), Some(0));
        assert_eq!(group_rank("Alumni"), Some(3));
        assert_eq!(group_rank("leaders"), None);
    }
}
