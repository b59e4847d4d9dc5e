//! Data models for publications, filter criteria and lab members.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match the website's JSON.

mod criteria;
mod paper;
mod person;

pub use criteria::FilterCriteria;
pub use paper::{Author, Paper};
pub use person::Person;
