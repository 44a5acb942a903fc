//! `joosfetch plan` – show the URL → file mapping without fetching.

use joosfetch_core::config::FetchConfig;
use joosfetch_core::runner;

pub fn run_plan(cfg: &FetchConfig) {
    for page in runner::plan(cfg) {
        println!("{} -> {}", page.url, page.path.display());
    }
}
