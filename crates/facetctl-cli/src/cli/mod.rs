//! CLI for the facetctl filter controller.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use facetctl_core::config;
use facetctl_core::facet::FacetToggle;
use facetctl_core::selection::CommitOrder;
use std::path::Path;

use commands::{run_apply, run_completions, run_man, run_show};

/// Top-level CLI for facetctl.
#[derive(Debug, Parser)]
#[command(name = "facetctl")]
#[command(about = "facetctl: country/ASN/service filter selection for host search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the filters committed in a page URL (and the facet panel, given counts).
    Show {
        /// Page URL to read filters from (default: base_url from config).
        #[arg(long)]
        url: Option<String>,
        /// Facet counts JSON as returned by the data API.
        #[arg(long, value_name = "FILE")]
        facets: Option<String>,
    },

    /// Toggle facets and print the page URL the new selection navigates to.
    Apply {
        /// Page URL holding the current filters (default: base_url from config).
        #[arg(long)]
        url: Option<String>,
        /// Facet to toggle, as <category>:<value> (e.g. country:US, asn:64512). Repeatable.
        #[arg(long = "toggle", value_name = "CATEGORY:VALUE")]
        toggles: Vec<FacetToggle>,
        /// Join members in click order instead of sorted order.
        #[arg(long)]
        insertion_order: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Show { url, facets } => {
                let url = url.unwrap_or_else(|| cfg.base_url.clone());
                run_show(&cfg, &url, facets.as_deref().map(Path::new))?;
            }
            CliCommand::Apply {
                url,
                toggles,
                insertion_order,
            } => {
                let url = url.unwrap_or_else(|| cfg.base_url.clone());
                let order = if insertion_order {
                    CommitOrder::Insertion
                } else {
                    cfg.commit_order
                };
                run_apply(&url, &toggles, order).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
