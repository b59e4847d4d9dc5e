//! Output formatters for CLI and static-site rendering.

mod json;
mod markdown;

pub use json::{compact_paper, facets_json, grouped_json, roster_json};
pub use markdown::{
    format_facets_markdown, format_grouped_markdown, format_paper_markdown, format_roster_markdown,
};

use serde::{Deserialize, Serialize};

/// Output format for rendered views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Strip trailing characters, checking `suffixes` in order.
///
/// Each suffix character is tried once against the current end of the
/// string: `remove_suffix("Title.*", &['*', '.'])` yields `"Title"`, while
/// `remove_suffix("Title.*", &['.', '*'])` yields `"Title."`.
#[must_use]
pub fn remove_suffix<'a>(value: &'a str, suffixes: &[char]) -> &'a str {
    let mut rest = value;
    for &suffix in suffixes {
        if let Some(stripped) = rest.strip_suffix(suffix) {
            rest = stripped;
        }
        if rest.is_empty() {
            break;
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_default() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Markdown);
    }

    #[test]
    fn test_remove_suffix_order_matters() {
        assert_eq!(remove_suffix("Title.*", &['*', '.']), "Title");
        assert_eq!(remove_suffix("Title.*", &['.', '*']), "Title.");
    }

    #[test]
    fn test_remove_suffix_edge_cases() {
        assert_eq!(remove_suffix("", &['*']), "");
        assert_eq!(remove_suffix("*", &['*', '*']), "");
        assert_eq!(remove_suffix("Jane Doe*", &['*']), "Jane Doe");
        assert_eq!(remove_suffix("Jane Doe", &[]), "Jane Doe");
    }
}
