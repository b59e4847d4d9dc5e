//! BibTeX import: turns a `.bib` file into the website's paper JSON.

use std::path::{Path, PathBuf};

use biblatex::{Bibliography, ChunksExt, Entry};
use serde::{Deserialize, Serialize};

use crate::catalog::month_name;
use crate::config::defaults;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Author, Paper};

const GITHUB_PREFIX: &str = "https://github.com/";

/// Serialized form of imported papers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// TypeScript module with the array as default export.
    Ts,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ts => "ts",
        }
    }

    /// Format matching the extension of `path`, if any.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        [Self::Json, Self::Ts].into_iter().find(|f| ext.eq_ignore_ascii_case(f.extension()))
    }
}

/// Import settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Directory holding `<key>.pdf` and `<key>-slides.pdf` files.
    pub assets_dir: Option<PathBuf>,

    /// URL prefix the assets directory is served under.
    pub assets_url_prefix: String,

    /// Fail on entries without a title instead of skipping them.
    pub strict: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            assets_dir: None,
            assets_url_prefix: defaults::ASSETS_URL_PREFIX.to_string(),
            strict: false,
        }
    }
}

impl ImportOptions {
    /// URL of `file_name` if it exists in the assets directory.
    fn asset_url(&self, file_name: &str) -> Option<String> {
        let dir = self.assets_dir.as_deref()?;
        dir.join(file_name)
            .is_file()
            .then(|| format!("{}/{file_name}", self.assets_url_prefix.trim_end_matches('/')))
    }
}

/// Parse BibTeX source into papers, in file order.
///
/// # Errors
///
/// Returns [`CatalogError::Bibtex`] if the source does not parse, or
/// [`CatalogError::MissingField`] for an untitled entry in strict mode.
pub fn import_bibtex(src: &str, opts: &ImportOptions) -> CatalogResult<Vec<Paper>> {
    let bibliography = Bibliography::parse(src).map_err(|e| CatalogError::Bibtex(e.to_string()))?;

    let mut papers = Vec::with_capacity(bibliography.len());
    for entry in bibliography.iter() {
        match entry_to_paper(entry, opts) {
            Ok(paper) => papers.push(paper),
            Err(e @ CatalogError::MissingField { .. }) if !opts.strict => {
                tracing::warn!(key = %entry.key, error = %e, "skipping BibTeX entry");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(entries = bibliography.len(), imported = papers.len(), "BibTeX imported");
    Ok(papers)
}

/// Read and import a `.bib` file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, otherwise as
/// [`import_bibtex`].
pub fn import_bibtex_file(path: &Path, opts: &ImportOptions) -> CatalogResult<Vec<Paper>> {
    let src = std::fs::read_to_string(path)?;
    import_bibtex(&src, opts)
}

fn entry_to_paper(entry: &Entry, opts: &ImportOptions) -> CatalogResult<Paper> {
    let key = entry.key.as_str();
    let field = |name: &str| {
        entry
            .get(name)
            .map(|chunks| strip_braces(&chunks.format_verbatim()).to_string())
            .filter(|value| !value.is_empty())
    };

    let name = field("title").ok_or_else(|| CatalogError::missing_field(key, "title"))?;

    let authors = field("author")
        .map(|list| list.split(" and ").map(|a| Author::new(a.trim())).collect())
        .unwrap_or_default();

    let month = field("month").map(|m| month_name(&m).map_or(m, String::from));

    let github_link = field("www-url");
    let github_stars_svg_link = github_link.as_deref().and_then(stars_badge);

    Ok(Paper {
        name,
        authors,
        author_extra: Some(String::new()),
        public_at: field("booktitle").or_else(|| field("journal")),
        r#abstract: field("abstract"),
        paper_link: opts.asset_url(&format!("{key}.pdf")),
        github_link,
        github_stars_svg_link,
        slide_link: opts.asset_url(&format!("{key}-slides.pdf")),
        bibtex: Some(citation_text(entry)),
        year: field("year"),
        month,
    })
}

fn strip_braces(value: &str) -> &str {
    value.trim_start_matches(['{', ' ']).trim_end_matches(['}', ' '])
}

/// Shields.io star badge for a GitHub repository URL.
fn stars_badge(url: &str) -> Option<String> {
    let repo = url.strip_prefix(GITHUB_PREFIX)?.trim_end_matches('/');
    (!repo.is_empty()).then(|| {
        format!("https://img.shields.io/github/stars/{repo}.svg?style=social&label=Star&maxAge=2592000")
    })
}

/// Re-serialize an entry for the citation dialog, without its abstract.
fn citation_text(entry: &Entry) -> String {
    let fields: Vec<String> = entry
        .fields
        .iter()
        .filter(|(name, _)| name.as_str() != "abstract")
        .map(|(name, value)| format!(" {name} = {{{}}}", value.format_verbatim()))
        .collect();

    format!("@{}{{{},\n{}\n}}\n", entry.entry_type, entry.key, fields.join(",\n"))
}

/// Render papers in the requested output format.
///
/// # Errors
///
/// Returns [`CatalogError::Serialization`] if serialization fails.
pub fn write_papers(papers: &[Paper], format: OutputFormat) -> CatalogResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    papers.serialize(&mut ser)?;

    // serde_json only ever writes UTF-8
    let json = String::from_utf8_lossy(&buf);
    Ok(match format {
        OutputFormat::Json => json.into_owned(),
        OutputFormat::Ts => format!("export default {json}"),
    })
}
