//! BibTeX importer tests.

use lab_catalog::CatalogError;
use lab_catalog::bibtex::{ImportOptions, OutputFormat, import_bibtex, import_bibtex_file, write_papers};
use lab_catalog::models::Paper;
use tokio_test::{assert_err, assert_ok};

const SAMPLE: &str = include_str!("fixtures/sample.bib");

fn import_sample() -> Vec<Paper> {
    assert_ok!(import_bibtex(SAMPLE, &ImportOptions::default()))
}

#[test]
fn test_untitled_entries_are_skipped() {
    let papers = import_sample();
    let names: Vec<_> = papers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Neural Networks at Scale", "Graph Models for Citation Networks"]);
}

#[test]
fn test_strict_mode_rejects_untitled_entries() {
    let opts = ImportOptions { strict: true, ..ImportOptions::default() };
    let err = assert_err!(import_bibtex(SAMPLE, &opts));
    assert!(matches!(err, CatalogError::MissingField { ref key, ref field }
        if key == "untitled2020" && field == "title"));
}

#[test]
fn test_field_mapping() {
    let papers = import_sample();
    let paper = &papers[0];

    assert_eq!(paper.author_names(), ["Jane Doe", "John Roe"]);
    assert_eq!(paper.venue(), Some("International Conference on Machine Learning"));
    assert_eq!(paper.year(), Some("2021"));
    assert_eq!(paper.r#abstract.as_deref(), Some("We scale neural networks."));
    assert_eq!(paper.author_extra.as_deref(), Some(""));
}

#[test]
fn test_numeric_month_becomes_name() {
    let papers = import_sample();
    assert_eq!(papers[0].month(), Some("July"));
    assert_eq!(papers[0].month_rank(), 7);
    assert_eq!(papers[1].month(), Some("August"));
}

#[test]
fn test_journal_is_venue_fallback() {
    let papers = import_sample();
    assert_eq!(papers[1].venue(), Some("Journal of Graph Learning"));
}

#[test]
fn test_github_links() {
    let papers = import_sample();
    assert_eq!(papers[0].github_link.as_deref(), Some("https://github.com/lab/nn-scale"));
    assert_eq!(
        papers[0].github_stars_svg_link.as_deref(),
        Some("https://img.shields.io/github/stars/lab/nn-scale.svg?style=social&label=Star&maxAge=2592000")
    );
    assert!(papers[1].github_link.is_none());
    assert!(papers[1].github_stars_svg_link.is_none());
}

#[test]
fn test_citation_text_omits_abstract() {
    let papers = import_sample();
    let bibtex = papers[0].bibtex.as_deref().unwrap();

    assert!(bibtex.starts_with('@'));
    assert!(bibtex.contains("doe2021neural"));
    assert!(bibtex.contains("booktitle = {"));
    assert!(!bibtex.contains("We scale neural networks."));
}

#[test]
fn test_asset_links_require_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("doe2021neural.pdf"), b"%PDF").unwrap();
    std::fs::write(dir.path().join("lee2019graph-slides.pdf"), b"%PDF").unwrap();

    let opts = ImportOptions {
        assets_dir: Some(dir.path().to_path_buf()),
        assets_url_prefix: "/assets/pp/".to_string(),
        strict: false,
    };
    let papers = assert_ok!(import_bibtex(SAMPLE, &opts));

    assert_eq!(papers[0].paper_link.as_deref(), Some("/assets/pp/doe2021neural.pdf"));
    assert!(papers[0].slide_link.is_none());
    assert!(papers[1].paper_link.is_none());
    assert_eq!(papers[1].slide_link.as_deref(), Some("/assets/pp/lee2019graph-slides.pdf"));
}

#[test]
fn test_import_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("refs.bib");
    std::fs::write(&path, SAMPLE).unwrap();

    let papers = assert_ok!(import_bibtex_file(&path, &ImportOptions::default()));
    assert_eq!(papers.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = assert_err!(import_bibtex_file(
        std::path::Path::new("/nonexistent/refs.bib"),
        &ImportOptions::default()
    ));
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_malformed_source_is_reported() {
    let err = assert_err!(import_bibtex("@article{broken, title = {never closed", &ImportOptions::default()));
    assert!(matches!(err, CatalogError::Bibtex(_)));
}

#[test]
fn test_written_json_reads_back() {
    let papers = import_sample();
    let json = assert_ok!(write_papers(&papers, OutputFormat::Json));

    let decoded: Vec<Paper> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, papers);
    assert!(json.contains("\n    {\n        \"name\": \"Neural Networks at Scale\""));
}

#[test]
fn test_written_ts_is_default_export() {
    let ts = assert_ok!(write_papers(&import_sample(), OutputFormat::Ts));
    assert!(ts.starts_with("export default [\n"));
    assert!(ts.contains("\"publicAt\": \"Journal of Graph Learning\""));
}
