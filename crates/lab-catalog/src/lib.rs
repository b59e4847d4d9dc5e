//! Lab Catalog
//!
//! Data layer for an academic lab website: publication listings with
//! author/year/free-text filtering, year grouping and month ordering, a
//! people roster grouped by role, and a BibTeX importer producing the
//! publication JSON.
//!
//! # Features
//!
//! - **Pure pipeline**: filter, group by year, sort by month
//! - **Live view**: debounced recompute for hosts with changing inputs
//! - **BibTeX import**: `.bib` to JSON or a TypeScript module
//!
//! # Example
//!
//! ```no_run
//! use lab_catalog::{FilterCriteria, PaperCatalogView, models::Paper};
//!
//! fn main() -> anyhow::Result<()> {
//!     let papers: Vec<Paper> = serde_json::from_str(&std::fs::read_to_string("papers.json")?)?;
//!     let mut view = PaperCatalogView::new(papers);
//!     view.set_criteria(FilterCriteria::new().with_search("neural"));
//!
//!     for group in view.view()? {
//!         println!("{}: {} papers", group.year, group.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod bibtex;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod roster;

pub use catalog::{GroupedResult, LiveCatalog, PaperCatalogView, YearGroup};
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::FilterCriteria;
