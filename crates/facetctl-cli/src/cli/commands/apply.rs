//! `facetctl apply` – toggle facets and commit through the navigator.

use anyhow::{bail, Result};
use facetctl_core::controller::FacetSelectionController;
use facetctl_core::facet::FacetToggle;
use facetctl_core::navigation::{navigation_channel, PageUrl};
use facetctl_core::query::committed_from_url;
use facetctl_core::selection::CommitOrder;

pub async fn run_apply(page_url: &str, toggles: &[FacetToggle], order: CommitOrder) -> Result<()> {
    let page = PageUrl::parse(page_url)?;
    let mut ctl = FacetSelectionController::from_url(page_url, order)?;
    for t in toggles {
        ctl.toggle(t.category, &t.value);
    }

    let (navigator, mut rx) = navigation_channel(page);
    let navigation = tokio::spawn(async move { rx.recv().await });

    let committed = ctl.commit_with(&navigator);
    // Closing the sender lets the navigation task finish when nothing was sent.
    drop(navigator);
    let target = navigation.await?;

    if !committed {
        println!("No filter changes.");
        return Ok(());
    }
    let Some(target) = target else {
        bail!("navigation task ended without a target URL");
    };

    println!("{target}");
    // Reload: the navigated URL becomes the new baseline.
    ctl.initialize(&committed_from_url(target.as_str())?);
    tracing::debug!(dirty = ctl.is_dirty(), "reloaded from {}", target);
    Ok(())
}
