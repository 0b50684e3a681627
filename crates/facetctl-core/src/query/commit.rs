//! Commit payload handed to the navigation collaborator.

use std::fmt;

use url::form_urlencoded::byte_serialize;

use crate::facet::FacetCategory;
use crate::selection::{ordered_members, CommitOrder, SelectionState};

/// One query parameter: a category and its ordered members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitParam {
    pub category: FacetCategory,
    pub members: Vec<String>,
}

impl CommitParam {
    pub fn key(&self) -> &'static str {
        self.category.query_key()
    }

    /// Comma-joined value, unencoded.
    pub fn value(&self) -> String {
        self.members.join(",")
    }
}

/// Ordered set of query parameters for the next page load.
///
/// Keys appear as `countries`, `asns`, `services`; a category with no
/// selection has no parameter at all. An empty request means "no filters".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRequest {
    params: Vec<CommitParam>,
}

impl CommitRequest {
    /// Serialize every non-empty category of `selection`.
    pub fn from_selection(selection: &SelectionState, order: CommitOrder) -> Self {
        let params = FacetCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let set = selection.set(category);
                if set.is_empty() {
                    return None;
                }
                let members = ordered_members(set, category, order)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                Some(CommitParam { category, members })
            })
            .collect();
        Self { params }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn params(&self) -> &[CommitParam] {
        &self.params
    }

    /// Key/value pairs with comma-joined, unencoded values.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.params.iter().map(|p| (p.key(), p.value())).collect()
    }

    /// Unencoded value for a query key, if that category is present.
    pub fn get(&self, key: &str) -> Option<String> {
        self.params.iter().find(|p| p.key() == key).map(CommitParam::value)
    }

    /// Canonical query string without the leading `?`.
    ///
    /// Members are form-urlencoded individually; the separating commas stay
    /// literal so `countries=US,DE&asns=AS64512` reads as it is written.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|p| {
                let members: Vec<String> = p
                    .members
                    .iter()
                    .map(|m| byte_serialize(m.as_bytes()).collect::<String>())
                    .collect();
                format!("{}={}", p.key(), members.join(","))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for CommitRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
