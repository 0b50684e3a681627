//! Member ordering inside a committed query value.

use serde::{Deserialize, Serialize};

use super::SelectionSet;
use crate::facet::{asn_code, FacetCategory};

/// How members of one category are ordered when joined into a query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitOrder {
    /// Ascending: lexicographic for countries and services, numeric for
    /// ASNs. Same selection always yields the same URL.
    #[default]
    Sorted,
    /// Click order, as the selection was built.
    Insertion,
}

/// Members of `set` in the order they should appear in the commit payload.
pub fn ordered_members<'a>(
    set: &'a SelectionSet,
    category: FacetCategory,
    order: CommitOrder,
) -> Vec<&'a str> {
    match order {
        CommitOrder::Insertion => set.in_insertion_order(),
        CommitOrder::Sorted => {
            let mut members: Vec<&str> = set.iter().collect();
            match category {
                // Numeric ASNs first by code, anything unrecognised after them.
                FacetCategory::Asn => members.sort_by(|a, b| {
                    match (asn_code(a), asn_code(b)) {
                        (Some(x), Some(y)) => x.cmp(&y),
                        (Some(_), None) => std::cmp::Ordering::Less,
                        (None, Some(_)) => std::cmp::Ordering::Greater,
                        (None, None) => a.cmp(b),
                    }
                }),
                FacetCategory::Country | FacetCategory::Service => members.sort_unstable(),
            }
            members
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_countries_are_lexicographic() {
        let set = SelectionSet::from_values(["US", "DE", "BR"]);
        assert_eq!(
            ordered_members(&set, FacetCategory::Country, CommitOrder::Sorted),
            vec!["BR", "DE", "US"]
        );
    }

    #[test]
    fn sorted_asns_are_numeric() {
        let set = SelectionSet::from_values(["AS1000", "AS2", "AS64512", "ASX"]);
        assert_eq!(
            ordered_members(&set, FacetCategory::Asn, CommitOrder::Sorted),
            vec!["AS2", "AS1000", "AS64512", "ASX"]
        );
    }

    #[test]
    fn insertion_order_is_click_order() {
        let set = SelectionSet::from_values(["US", "DE"]);
        assert_eq!(
            ordered_members(&set, FacetCategory::Country, CommitOrder::Insertion),
            vec!["US", "DE"]
        );
    }
}
