//! `facetctl show` – committed filters and, optionally, the facet panel.

use anyhow::Result;
use facetctl_core::config::FacetConfig;
use facetctl_core::controller::FacetSelectionController;
use facetctl_core::facet::{FacetCategory, FacetCounts};
use facetctl_core::panel::FacetPanel;
use facetctl_core::selection::ordered_members;
use std::path::Path;

pub fn run_show(cfg: &FacetConfig, page_url: &str, facets: Option<&Path>) -> Result<()> {
    let ctl = FacetSelectionController::from_url(page_url, cfg.commit_order)?;

    for category in FacetCategory::ALL {
        let members = ordered_members(ctl.committed().set(category), category, cfg.commit_order);
        let shown = if members.is_empty() {
            "-".to_string()
        } else {
            members.join(",")
        };
        println!("{:<10} {}", category.query_key(), shown);
    }

    let Some(path) = facets else {
        return Ok(());
    };
    let counts = FacetCounts::load_from_path(path)?;
    let panel = FacetPanel::build(&counts, &ctl, &cfg.sections());
    for section in &panel.sections {
        println!();
        if !section.expanded {
            println!("{} (collapsed)", section.category.title().to_uppercase());
            continue;
        }
        println!("{}", section.category.title().to_uppercase());
        for row in &section.rows {
            let mark = if row.checked { "[x]" } else { "[ ]" };
            println!("  {} {:<10} {:<32} {:>8}", mark, row.value, row.label, row.count);
        }
    }
    Ok(())
}
