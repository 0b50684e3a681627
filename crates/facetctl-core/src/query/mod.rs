//! URL query codec for facet filters.
//!
//! Inbound: `countries`, `asns` and `services` parameters of the page URL,
//! each a comma-separated list, become the committed selection. Outbound: a
//! selection becomes a [`CommitRequest`] with the same keys, empty categories
//! omitted.

mod commit;
mod parse;

pub use commit::{CommitParam, CommitRequest};
pub use parse::{committed_from_url, parse_query};
