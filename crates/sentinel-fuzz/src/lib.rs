//! Fuzzing library for lab-catalog.
//!
//! Targets cover JSON decoding of catalog records, free-text search
//! patterns, and the BibTeX importer.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_search_pattern -- -max_total_time=60
//! ```

pub use lab_catalog::{bibtex, catalog, models};
