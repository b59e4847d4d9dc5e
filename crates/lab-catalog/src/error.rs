//! Error types for the lab catalog.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the catalog pipeline, roster, and importer.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Free-text search string is not a valid regular expression.
    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as typed by the user
        pattern: String,
        /// Compiler message from the regex engine
        message: String,
    },

    /// BibTeX source could not be parsed.
    #[error("BibTeX parse error: {0}")]
    Bibtex(String),

    /// A BibTeX entry lacks a field the catalog requires.
    #[error("BibTeX entry '{key}' is missing required field '{field}'")]
    MissingField {
        /// Citation key of the entry
        key: String,
        /// Name of the missing field
        field: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while reading inputs or probing assets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern { pattern: pattern.into(), message: message.into() }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField { key: key.into(), field: field.into() }
    }

    /// Returns true if this error comes from user-typed filter input.
    ///
    /// Hosts typically keep the previous view on screen for these instead of
    /// clearing it.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }

    /// Convert to a user-friendly error message.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::InvalidPattern { pattern, .. } => {
                format!("'{pattern}' is not a valid search pattern. Check brackets and escapes.")
            }
            Self::MissingField { key, field } => {
                format!("Entry '{key}' has no '{field}'. Add it to the .bib file.")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
