//! Error type for the few fallible edges of the filter controller.
//!
//! Toggling, dirty checks and commits never fail; only inputs that come from
//! outside (category names typed by a user, page URLs, facet JSON) do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacetError {
    /// Category name did not match country/asn/service (singular or plural).
    #[error("unknown facet category: {0:?} (expected country, asn or service)")]
    UnknownCategory(String),

    /// A `category:value` toggle argument without the separator or value.
    #[error("invalid toggle {0:?}: expected <category>:<value>")]
    InvalidToggle(String),

    /// Page URL could not be parsed.
    #[error("invalid page URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Facet counts payload did not match the data API shape.
    #[error("invalid facet counts: {0}")]
    InvalidFacets(#[from] serde_json::Error),
}
