//! CLI for joosfetch.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use joosfetch_core::config::{self, FetchConfig};
use std::path::PathBuf;

use commands::{run_fetch, run_plan};

/// Top-level CLI. With no subcommand, fetches every page with the defaults.
#[derive(Debug, Parser)]
#[command(name = "joosfetch")]
#[command(about = "Download the Joos feature pages and save their text", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/joosfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Per-run overrides of config values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct Overrides {
    /// Directory to write the text files into.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL that category/feature paths are appended to.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Overrides {
    fn apply(self, cfg: &mut FetchConfig) {
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        if let Some(url) = self.base_url {
            cfg.base_url = url;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every page and save its visible text (the default).
    Fetch {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print each page URL and the file it would be saved to, without fetching.
    Plan {
        #[command(flatten)]
        overrides: Overrides,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        let command = cli.command.unwrap_or(CliCommand::Fetch {
            overrides: Overrides::default(),
        });

        match command {
            CliCommand::Fetch { overrides } => {
                overrides.apply(&mut cfg);
                tracing::debug!("effective config: {:?}", cfg);
                run_fetch(&cfg)?;
            }
            CliCommand::Plan { overrides } => {
                overrides.apply(&mut cfg);
                run_plan(&cfg);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
