//! Navigation collaborator seam.
//!
//! The controller never navigates itself. It hands a [`CommitRequest`] to a
//! [`Navigator`], which starts the page transition and returns immediately;
//! the host re-initializes the controller from the new URL once it lands.

use tokio::sync::mpsc;
use url::Url;

use crate::error::FacetError;
use crate::query::CommitRequest;

/// Starts a page transition for a committed filter selection.
///
/// Implementations must not block until the transition completes.
pub trait Navigator {
    fn navigate(&self, request: CommitRequest);
}

/// The search page that committed filters are applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    base: Url,
}

impl PageUrl {
    pub fn parse(page_url: &str) -> Result<Self, FacetError> {
        let base = Url::parse(page_url).map_err(|source| FacetError::InvalidUrl {
            url: page_url.to_string(),
            source,
        })?;
        Ok(Self { base })
    }

    /// Target URL for `request`: same page, query replaced by the request.
    ///
    /// Other query parameters (pagination and the like) are dropped, so an
    /// empty request yields the bare page.
    pub fn resolve(&self, request: &CommitRequest) -> Url {
        let mut target = self.base.clone();
        target.set_fragment(None);
        if request.is_empty() {
            target.set_query(None);
        } else {
            target.set_query(Some(&request.to_query_string()));
        }
        target
    }
}

/// Navigator that sends resolved target URLs to an async navigation task.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    page: PageUrl,
    tx: mpsc::UnboundedSender<Url>,
}

/// Create a navigator and the receiving end the navigation task drains.
pub fn navigation_channel(page: PageUrl) -> (ChannelNavigator, mpsc::UnboundedReceiver<Url>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelNavigator { page, tx }, rx)
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, request: CommitRequest) {
        let target = self.page.resolve(&request);
        tracing::info!(url = %target, "navigating to filtered results");
        if self.tx.send(target).is_err() {
            // Receiver gone: the page was torn down before the commit landed.
            tracing::warn!("navigation task closed; dropping commit");
        }
    }
}
