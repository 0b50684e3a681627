//! Facet dimensions and the externally supplied facet counts.
//!
//! A facet is a filterable dimension over the host/service dataset (country,
//! ASN, service). Counts come from the data API and are read-only here; the
//! controller never validates selections against them, since facet lists
//! legitimately narrow as filters are applied.

mod asn;
mod category;
mod counts;

pub use asn::{asn_code, canonical_asn, canonicalize_asn_value};
pub use category::{FacetCategory, FacetToggle};
pub use counts::{AsnFacet, CountryFacet, FacetCounts};
