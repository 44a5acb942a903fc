//! `joosfetch fetch` – download every page and save its text.

use anyhow::Result;
use joosfetch_core::config::FetchConfig;
use joosfetch_core::runner;

/// Failed fetches are already printed per page; they do not fail the command.
pub fn run_fetch(cfg: &FetchConfig) -> Result<()> {
    let report = runner::run_all(cfg)?;
    if !report.failed.is_empty() {
        tracing::warn!(
            "{} of {} page(s) could not be fetched",
            report.failed.len(),
            report.attempted()
        );
    }
    Ok(())
}
