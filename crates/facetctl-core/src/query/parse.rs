//! Committed selection from an inbound page URL.

use url::form_urlencoded;

use crate::error::FacetError;
use crate::facet::FacetCategory;
use crate::selection::InitialSelection;

/// Parse the facet parameters out of a query string (leading `?` optional).
///
/// Absent parameters give empty lists and empty fragments (`US,,DE`) are
/// dropped. A key repeated in the query contributes all of its values.
/// Unrelated parameters are ignored.
pub fn parse_query(query: &str) -> InitialSelection {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut initial = InitialSelection::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(category) = FacetCategory::from_query_key(&key) else {
            continue;
        };
        let target = match category {
            FacetCategory::Country => &mut initial.countries,
            FacetCategory::Asn => &mut initial.asns,
            FacetCategory::Service => &mut initial.services,
        };
        target.extend(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    initial
}

/// Parse the committed selection from a full page URL.
pub fn committed_from_url(page_url: &str) -> Result<InitialSelection, FacetError> {
    let parsed = url::Url::parse(page_url).map_err(|source| FacetError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;
    Ok(parse_query(parsed.query().unwrap_or("")))
}
