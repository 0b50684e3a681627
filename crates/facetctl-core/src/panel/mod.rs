//! View model for the filter panel: facet rows with check marks and counts,
//! section expansion, and the apply button state.
//!
//! Purely derived from [`FacetCounts`](crate::facet::FacetCounts) and the
//! controller; nothing here feeds back into selection or commit.

mod sections;
mod view;

pub use sections::SectionState;
pub use view::{ApplyButton, FacetPanel, FacetRow, FacetSection};
