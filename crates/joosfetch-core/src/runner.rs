//! The fetch-and-save loop.
//!
//! One page at a time: GET, extract visible text, write the dump. A failed
//! fetch is reported and skipped; any other error ends the run.

use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::pairs;
use crate::config::FetchConfig;
use crate::extract::visible_text;
use crate::fetch::{self, FetchError};
use crate::storage;
use crate::url_model::{output_filename, output_path, page_url};

/// Result of one (category, feature) attempt.
#[derive(Debug)]
pub enum PageOutcome {
    /// Text was written to this path.
    Saved(PathBuf),
    /// The page could not be retrieved.
    Failed { url: String, error: FetchError },
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageOutcome::Saved(path) => write!(f, "Saved: {}", path.display()),
            PageOutcome::Failed { url, .. } => write!(f, "Failed to fetch: {}", url),
        }
    }
}

/// Totals for a whole run. Failed entries hold the URLs that could not be fetched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<String>,
}

impl RunReport {
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Saved(path) => self.saved.push(path),
            PageOutcome::Failed { url, .. } => self.failed.push(url),
        }
    }
}

/// Fetches one page and saves its visible text to
/// `output_dir/{category}_{feature}.txt`, printing one status line.
///
/// Fetch failures come back as `Ok(PageOutcome::Failed)`; filesystem errors
/// propagate.
pub fn fetch_and_save(
    base_url: &str,
    output_dir: &Path,
    category: &str,
    feature: &str,
) -> Result<PageOutcome> {
    let url = page_url(base_url, category, feature);
    tracing::debug!(%url, "GET");

    let outcome = match fetch::get(&url) {
        Ok(page) => {
            let text = visible_text(&page.text());
            let path = storage::write_text(output_dir, &output_filename(category, feature), &text)?;
            tracing::info!(
                path = %path.display(),
                status = page.status,
                bytes = text.len(),
                "saved page text"
            );
            PageOutcome::Saved(path)
        }
        Err(error) => {
            tracing::warn!(
                %url,
                timeout = error.is_timeout(),
                connection = error.is_connection(),
                "fetch failed: {}",
                error
            );
            PageOutcome::Failed { url, error }
        }
    };

    println!("{outcome}");
    Ok(outcome)
}

/// Runs `fetch_and_save` over every category × feature pair in order.
pub fn run_all(cfg: &FetchConfig) -> Result<RunReport> {
    tracing::info!(
        pages = cfg.page_count(),
        output_dir = %cfg.output_dir.display(),
        "starting run"
    );
    storage::ensure_output_dir(&cfg.output_dir)?;
    let mut report = RunReport::default();
    for page in pairs(&cfg.categories, &cfg.features) {
        let outcome = fetch_and_save(&cfg.base_url, &cfg.output_dir, page.category, page.feature)?;
        report.record(outcome);
    }
    tracing::info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        "run finished"
    );
    Ok(report)
}

/// One planned page: where it is fetched from and where its text lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    pub url: String,
    pub path: PathBuf,
}

/// The URL and output path for every pair, without touching the network.
pub fn plan(cfg: &FetchConfig) -> Vec<PlannedPage> {
    pairs(&cfg.categories, &cfg.features)
        .map(|p| PlannedPage {
            url: page_url(&cfg.base_url, p.category, p.feature),
            path: output_path(&cfg.output_dir, p.category, p.feature),
        })
        .collect()
}
