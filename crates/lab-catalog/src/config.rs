//! Configuration for the lab catalog.

use std::time::Duration;

/// Default values.
pub mod defaults {
    use std::time::Duration;

    /// Quiescence window before a criteria change triggers a recompute.
    pub const DEBOUNCE: Duration = Duration::from_millis(400);

    /// Group label for papers without a usable year.
    pub const UNKNOWN_YEAR: &str = "unknown";

    /// URL prefix under which imported PDF and slide assets are served.
    pub const ASSETS_URL_PREFIX: &str = "/assets/pp";
}

/// Environment variable names.
pub mod env {
    /// Debounce window in milliseconds.
    pub const DEBOUNCE_MS: &str = "LAB_CATALOG_DEBOUNCE_MS";

    /// Assets URL prefix for the importer.
    pub const ASSETS_URL_PREFIX: &str = "LAB_CATALOG_ASSETS_URL_PREFIX";
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Debounce window for criteria updates in the live view.
    pub debounce: Duration,

    /// URL prefix used for `paperLink` and `slideLink` on import.
    pub assets_url_prefix: String,
}

impl Config {
    /// Create a configuration with the given debounce window.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self { debounce, assets_url_prefix: defaults::ASSETS_URL_PREFIX.to_string() }
    }

    /// Create a test configuration with no debounce delay.
    #[must_use]
    pub fn for_testing() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `LAB_CATALOG_DEBOUNCE_MS` is set but not an integer.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the debounce value is not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(env::DEBOUNCE_MS) {
            let millis: u64 = raw.trim().parse().map_err(|e| {
                anyhow::anyhow!("{} must be an integer number of milliseconds: {e}", env::DEBOUNCE_MS)
            })?;
            config.debounce = Duration::from_millis(millis);
        }

        if let Some(prefix) = lookup(env::ASSETS_URL_PREFIX) {
            config.assets_url_prefix = prefix.trim_end_matches('/').to_string();
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::DEBOUNCE)
    }
}
