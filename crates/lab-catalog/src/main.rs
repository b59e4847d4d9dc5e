//! Lab Catalog - Entry Point
//!
//! Renders filtered publication lists and rosters, and imports BibTeX.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lab_catalog::bibtex::{self, ImportOptions, OutputFormat};
use lab_catalog::catalog::Facets;
use lab_catalog::formatters::{self, ResponseFormat};
use lab_catalog::models::{Paper, Person};
use lab_catalog::roster::{self, GroupTitles, RosterMode};
use lab_catalog::{Config, FilterCriteria, PaperCatalogView};

#[derive(Parser, Debug)]
#[command(name = "lab-catalog")]
#[command(about = "Publication and people data for lab websites")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter and group a paper JSON file
    Papers {
        /// Paper JSON file
        file: PathBuf,

        /// Only papers by this author
        #[arg(long)]
        author: Option<String>,

        /// Only papers from this year
        #[arg(long)]
        year: Option<String>,

        /// Case-insensitive pattern matched against title and venue
        #[arg(long)]
        search: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: ResponseFormat,
    },

    /// List the author and year filter choices
    Facets {
        /// Paper JSON file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: ResponseFormat,
    },

    /// Group a people JSON file by role
    People {
        /// People JSON file
        file: PathBuf,

        /// JSON object mapping group keys to display titles
        #[arg(long)]
        titles: Option<PathBuf>,

        /// Roster style
        #[arg(long, value_enum, default_value_t)]
        mode: RosterMode,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: ResponseFormat,
    },

    /// Convert a BibTeX file into paper JSON
    Import {
        /// BibTeX file
        bib: PathBuf,

        /// Output file
        out: PathBuf,

        /// Output format; defaults to the extension of the output file
        #[arg(long, value_enum)]
        out_format: Option<OutputFormat>,

        /// Directory holding <key>.pdf and <key>-slides.pdf
        #[arg(long)]
        assets_dir: Option<PathBuf>,

        /// URL prefix the assets directory is served under
        #[arg(long, env = "LAB_CATALOG_ASSETS_URL_PREFIX")]
        assets_url_prefix: Option<String>,

        /// Fail on entries without a title instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays clean for rendered output
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr)).init();
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting lab-catalog");

    let config = Config::from_env()?;

    match cli.command {
        Command::Papers { file, author, year, search, format } => {
            let papers: Vec<Paper> = read_json(&file)?;
            let mut view = PaperCatalogView::new(papers);
            view.set_criteria(FilterCriteria { author, year, search_str: search });

            if !view.facets().offers(view.criteria()) {
                tracing::warn!(criteria = ?view.criteria(), "Selected author or year is not in the paper file");
            }

            let groups = view.view().map_err(|e| {
                if e.is_user_input() { anyhow::anyhow!(e.to_user_message()) } else { anyhow::Error::from(e) }
            })?;
            tracing::info!(groups = groups.len(), "Rendered paper list");

            match format {
                ResponseFormat::Markdown => println!("{}", formatters::format_grouped_markdown(&groups)),
                ResponseFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&formatters::grouped_json(&groups))?);
                }
            }
        }
        Command::Facets { file, format } => {
            let papers: Vec<Paper> = read_json(&file)?;
            let facets = Facets::from_papers(&papers);

            match format {
                ResponseFormat::Markdown => println!("{}", formatters::format_facets_markdown(&facets)),
                ResponseFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&formatters::facets_json(&facets))?);
                }
            }
        }
        Command::People { file, titles, mode, format } => {
            let people: Vec<Person> = read_json(&file)?;
            let titles = match titles {
                Some(path) => read_json::<GroupTitles>(&path)?,
                None => GroupTitles::default(),
            };
            let groups = roster::group_people(&people);
            tracing::info!(people = people.len(), groups = groups.len(), "Rendered roster");

            match format {
                ResponseFormat::Markdown => {
                    println!("{}", formatters::format_roster_markdown(&groups, &titles, mode));
                }
                ResponseFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&formatters::roster_json(&groups, &titles))?);
                }
            }
        }
        Command::Import { bib, out, out_format, assets_dir, assets_url_prefix, strict } => {
            let opts = ImportOptions {
                assets_dir,
                assets_url_prefix: assets_url_prefix.unwrap_or(config.assets_url_prefix),
                strict,
            };
            let papers = bibtex::import_bibtex_file(&bib, &opts)
                .with_context(|| format!("importing {}", bib.display()))?;
            let out_format = out_format.or_else(|| OutputFormat::from_path(&out)).unwrap_or_default();
            let content = bibtex::write_papers(&papers, out_format)?;

            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&out, content).with_context(|| format!("writing {}", out.display()))?;

            tracing::info!(papers = papers.len(), out = %out.display(), "Wrote papers");
        }
    }

    Ok(())
}
