//! Facet selection controller.
//!
//! Holds the committed baseline (what the page URL says) and the working
//! selection (what the checkboxes say). Toggles only touch the working copy;
//! a commit turns it into query parameters for the navigation collaborator.
//! The baseline is only replaced by [`FacetSelectionController::initialize`],
//! which the host calls again once the new page state arrives.

use crate::error::FacetError;
use crate::facet::{canonical_asn, FacetCategory};
use crate::navigation::Navigator;
use crate::query::{committed_from_url, CommitRequest};
use crate::selection::{CommitOrder, CommittedState, InitialSelection, SelectionState};

/// Per-page filter controller for the country, ASN and service facets.
#[derive(Debug, Clone)]
pub struct FacetSelectionController {
    committed: CommittedState,
    selection: SelectionState,
    order: CommitOrder,
    in_flight: bool,
}

impl FacetSelectionController {
    /// Controller with sorted commit order.
    pub fn new(initial: &InitialSelection) -> Self {
        Self::with_order(initial, CommitOrder::default())
    }

    pub fn with_order(initial: &InitialSelection, order: CommitOrder) -> Self {
        let committed = CommittedState::from_initial(initial);
        let selection = committed.working_copy();
        Self {
            committed,
            selection,
            order,
            in_flight: false,
        }
    }

    /// Controller seeded from the facet parameters of `page_url`.
    pub fn from_url(page_url: &str, order: CommitOrder) -> Result<Self, FacetError> {
        Ok(Self::with_order(&committed_from_url(page_url)?, order))
    }

    /// Replace the baseline with `initial` and reset the working copy to it.
    ///
    /// Safe to call at any time; any in-flight commit is considered resolved.
    pub fn initialize(&mut self, initial: &InitialSelection) {
        self.committed = CommittedState::from_initial(initial);
        self.selection = self.committed.working_copy();
        self.in_flight = false;
        tracing::debug!(
            countries = self.committed.set(FacetCategory::Country).len(),
            asns = self.committed.set(FacetCategory::Asn).len(),
            services = self.committed.set(FacetCategory::Service).len(),
            "facet selection initialized"
        );
    }

    /// Flip `value` in `category`. Returns whether it is selected afterwards.
    ///
    /// Any value is accepted, including ones missing from the current facet
    /// counts. Allowed while a commit is in flight.
    pub fn toggle(&mut self, category: FacetCategory, value: &str) -> bool {
        let selected = self.selection.toggle(category, value);
        tracing::debug!(%category, value, selected, "facet toggled");
        selected
    }

    /// Toggle an ASN by its numeric code.
    pub fn toggle_asn(&mut self, code: u32) -> bool {
        self.toggle(FacetCategory::Asn, &canonical_asn(code))
    }

    pub fn is_selected(&self, category: FacetCategory, value: &str) -> bool {
        self.selection.contains(category, value)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn committed(&self) -> &CommittedState {
        &self.committed
    }

    pub fn commit_order(&self) -> CommitOrder {
        self.order
    }

    /// True when any category's selection differs, as a set, from the baseline.
    pub fn is_dirty(&self) -> bool {
        self.selection != *self.committed.selection()
    }

    pub fn is_commit_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether an "apply" action should be offered and enabled.
    pub fn can_commit(&self) -> bool {
        self.is_dirty() && !self.in_flight
    }

    /// Serialize the working selection.
    ///
    /// Returns an empty request when nothing changed. Does not navigate and
    /// does not touch the baseline.
    pub fn commit(&self) -> CommitRequest {
        if !self.is_dirty() {
            tracing::debug!("commit requested without changes");
            return CommitRequest::default();
        }
        let request = CommitRequest::from_selection(&self.selection, self.order);
        tracing::debug!(query = %request, "facet selection committed");
        request
    }

    /// Commit and hand the payload to `navigator`, marking the commit in flight.
    ///
    /// Returns false without navigating when there is nothing to commit or a
    /// previous commit has not resolved yet.
    pub fn commit_with<N: Navigator + ?Sized>(&mut self, navigator: &N) -> bool {
        if !self.can_commit() {
            return false;
        }
        let request = self.commit();
        self.in_flight = true;
        navigator.navigate(request);
        true
    }

    /// Clear the in-flight flag without a new baseline (navigation abandoned).
    pub fn finish_commit(&mut self) {
        self.in_flight = false;
    }
}
