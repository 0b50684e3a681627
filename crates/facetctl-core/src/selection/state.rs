//! Per-category selection state and the committed baseline.

use serde::{Deserialize, Serialize};

use super::SelectionSet;
use crate::facet::{canonicalize_asn_value, FacetCategory};

/// Committed selection as read from the page URL, before normalization.
///
/// ASN entries may be canonical (`AS64512`) or bare numbers; duplicates are
/// allowed and collapse when the state is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSelection {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub asns: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// One selection set per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    countries: SelectionSet,
    asns: SelectionSet,
    services: SelectionSet,
}

impl SelectionState {
    pub fn from_initial(initial: &InitialSelection) -> Self {
        let normalized = |category: FacetCategory, values: &[String]| {
            SelectionSet::from_values(
                values
                    .iter()
                    .filter_map(|v| Self::normalize(category, v)),
            )
        };
        Self {
            countries: normalized(FacetCategory::Country, initial.countries.as_slice()),
            asns: normalized(FacetCategory::Asn, initial.asns.as_slice()),
            services: normalized(FacetCategory::Service, initial.services.as_slice()),
        }
    }

    pub fn set(&self, category: FacetCategory) -> &SelectionSet {
        match category {
            FacetCategory::Country => &self.countries,
            FacetCategory::Asn => &self.asns,
            FacetCategory::Service => &self.services,
        }
    }

    fn set_mut(&mut self, category: FacetCategory) -> &mut SelectionSet {
        match category {
            FacetCategory::Country => &mut self.countries,
            FacetCategory::Asn => &mut self.asns,
            FacetCategory::Service => &mut self.services,
        }
    }

    /// Flip membership of `value` in `category`. Values are trimmed and ASNs
    /// canonicalized first; a blank value is ignored. Returns whether the
    /// value is selected afterwards.
    pub fn toggle(&mut self, category: FacetCategory, value: &str) -> bool {
        match Self::normalize(category, value) {
            Some(value) => self.set_mut(category).toggle(value),
            None => false,
        }
    }

    pub fn contains(&self, category: FacetCategory, value: &str) -> bool {
        Self::normalize(category, value).is_some_and(|v| self.set(category).contains(&v))
    }

    pub fn is_empty(&self) -> bool {
        FacetCategory::ALL.iter().all(|c| self.set(*c).is_empty())
    }

    /// Same form the query parser produces: trimmed, never empty.
    fn normalize(category: FacetCategory, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(match category {
            FacetCategory::Asn => canonicalize_asn_value(value),
            FacetCategory::Country | FacetCategory::Service => value.to_string(),
        })
    }
}

/// Selection currently reflected in the page URL.
///
/// Read-only once built; a new baseline only arrives through a fresh
/// initialization from the updated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommittedState(SelectionState);

impl CommittedState {
    pub fn from_initial(initial: &InitialSelection) -> Self {
        Self(SelectionState::from_initial(initial))
    }

    pub fn selection(&self) -> &SelectionState {
        &self.0
    }

    pub fn set(&self, category: FacetCategory) -> &SelectionSet {
        self.0.set(category)
    }

    /// Working copy seeded from this baseline.
    pub fn working_copy(&self) -> SelectionState {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial(countries: &[&str], asns: &[&str], services: &[&str]) -> InitialSelection {
        let owned = |v: &[&str]| -> Vec<String> { v.iter().map(|s| s.to_string()).collect() };
        InitialSelection {
            countries: owned(countries),
            asns: owned(asns),
            services: owned(services),
        }
    }

    #[test]
    fn initial_asns_are_canonicalized() {
        let state = SelectionState::from_initial(&initial(&[], &["64512", "AS64512", "as7"], &[]));
        assert_eq!(state.set(FacetCategory::Asn).len(), 2);
        assert!(state.contains(FacetCategory::Asn, "AS64512"));
        assert!(state.contains(FacetCategory::Asn, "7"));
    }

    #[test]
    fn categories_are_independent() {
        let mut state = SelectionState::default();
        state.toggle(FacetCategory::Country, "US");
        assert!(state.contains(FacetCategory::Country, "US"));
        assert!(!state.contains(FacetCategory::Service, "US"));
        assert!(state.set(FacetCategory::Asn).is_empty());
    }

    #[test]
    fn working_copy_does_not_alias_baseline() {
        let committed = CommittedState::from_initial(&initial(&["US"], &[], &[]));
        let mut working = committed.working_copy();
        working.toggle(FacetCategory::Country, "US");
        assert!(committed.set(FacetCategory::Country).contains("US"));
        assert!(working.is_empty());
    }

    #[test]
    fn blank_values_are_never_members() {
        let mut state = SelectionState::from_initial(&initial(&["", " "], &[""], &["ssh", ""]));
        assert!(state.set(FacetCategory::Country).is_empty());
        assert!(state.set(FacetCategory::Asn).is_empty());
        assert_eq!(state.set(FacetCategory::Service).len(), 1);

        assert!(!state.toggle(FacetCategory::Service, ""));
        assert!(!state.toggle(FacetCategory::Service, "   "));
        assert_eq!(state.set(FacetCategory::Service).len(), 1);
        assert!(!state.contains(FacetCategory::Service, ""));
    }

    #[test]
    fn toggled_values_are_trimmed_like_parsed_ones() {
        let mut state = SelectionState::from_initial(&initial(&[" US "], &[], &[]));
        assert!(state.contains(FacetCategory::Country, "US"));
        assert!(!state.toggle(FacetCategory::Country, "US "));
        assert!(state.toggle(FacetCategory::Service, " ssh"));
        assert!(state.contains(FacetCategory::Service, "ssh"));
    }
}
