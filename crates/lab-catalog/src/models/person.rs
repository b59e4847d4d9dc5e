//! Lab member data model.

use serde::{Deserialize, Serialize};

/// A member of the lab shown on the people page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Personal homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,

    /// Role group key (e.g. "Leaders", "Alumni").
    pub group: String,

    /// Description lines shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<Vec<String>>,
}

impl Person {
    /// Create a person in a group.
    #[must_use]
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self { name: name.into(), group: group.into(), ..Default::default() }
    }

    /// Description lines, empty when absent.
    #[must_use]
    pub fn description(&self) -> &[String] {
        self.desc.as_deref().unwrap_or_default()
    }
}
