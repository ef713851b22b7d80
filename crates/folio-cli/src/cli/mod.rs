//! CLI for inspecting folio portfolio data.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::config::{self, FolioConfig};
use std::path::PathBuf;

use commands::{run_author, run_catalog, run_normalize, run_projects, run_skills, run_studies};

/// Top-level CLI for folio.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "folio: portfolio data and logo catalog", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/folio/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the display name derived from each asset path.
    Normalize {
        /// Asset paths, e.g. assets/logos/Google-Ads-logo.svg.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Discover logos and print the filtered, sorted catalog.
    Catalog {
        /// Logo directory (defaults to logo_dir from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Sort byte-wise instead of the locale-style default.
        #[arg(long)]
        ordinal: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List projects.
    Projects {
        /// Only projects whose tech stack lists ITEM (case-insensitive).
        #[arg(long, value_name = "ITEM")]
        stack: Option<String>,
        /// Sort by title instead of declaration order.
        #[arg(long)]
        sorted: bool,
        #[arg(long)]
        json: bool,
    },

    /// List skill areas.
    Skills {
        #[arg(long)]
        json: bool,
    },

    /// List studies.
    Studies {
        #[arg(long)]
        json: bool,
    },

    /// Show the author and the site URL.
    Author {
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<FolioConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Normalize { paths } => run_normalize(&mut out, &paths)?,
            CliCommand::Catalog { dir, ordinal, json } => {
                run_catalog(&mut out, &cfg, dir.as_deref(), ordinal, json)?
            }
            CliCommand::Projects {
                stack,
                sorted,
                json,
            } => run_projects(&mut out, stack.as_deref(), sorted, json)?,
            CliCommand::Skills { json } => run_skills(&mut out, json)?,
            CliCommand::Studies { json } => run_studies(&mut out, json)?,
            CliCommand::Author { json } => run_author(&mut out, &cfg.site_url, json)?,
        }

        Ok(())
    }
}
