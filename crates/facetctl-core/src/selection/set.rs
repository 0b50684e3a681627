//! Order-independent selection set with remembered insertion order.

use std::collections::HashMap;

/// Set of selected facet values for one category.
///
/// Equality is set equality: two sets are equal when they hold the same
/// members, whatever order they were toggled in. The insertion sequence is
/// kept only so commits can reproduce click order when configured to.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// member -> insertion sequence number
    members: HashMap<String, u64>,
    next_seq: u64,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a sequence; duplicates collapse to their first occurrence.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for v in values {
            set.insert(v.into());
        }
        set
    }

    pub fn contains(&self, value: &str) -> bool {
        self.members.contains_key(value)
    }

    /// Add `value`; returns false if it was already a member.
    pub fn insert(&mut self, value: String) -> bool {
        if self.members.contains_key(&value) {
            return false;
        }
        self.members.insert(value, self.next_seq);
        self.next_seq += 1;
        true
    }

    /// Remove `value`; returns false if it was not a member.
    pub fn remove(&mut self, value: &str) -> bool {
        self.members.remove(value).is_some()
    }

    /// Flip membership of `value`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, value: String) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.insert(value)
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in the order they were (last) added.
    pub fn in_insertion_order(&self) -> Vec<&str> {
        let mut entries: Vec<(&str, u64)> =
            self.members.iter().map(|(v, seq)| (v.as_str(), *seq)).collect();
        entries.sort_by_key(|(_, seq)| *seq);
        entries.into_iter().map(|(v, _)| v).collect()
    }

    /// Members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self.members.keys().all(|k| other.members.contains_key(k))
    }
}

impl Eq for SelectionSet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = SelectionSet::from_values(["US", "US", "DE"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.in_insertion_order(), vec!["US", "DE"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = SelectionSet::new();
        assert!(set.toggle("ssh".to_string()));
        assert!(set.contains("ssh"));
        assert!(!set.toggle("ssh".to_string()));
        assert!(!set.contains("ssh"));
        assert!(set.is_empty());
    }

    #[test]
    fn equality_ignores_order() {
        let a = SelectionSet::from_values(["A", "B"]);
        let b = SelectionSet::from_values(["B", "A"]);
        assert_eq!(a, b);
        assert_ne!(a, SelectionSet::from_values(["A"]));
        assert_ne!(a, SelectionSet::from_values(["A", "C"]));
    }

    #[test]
    fn retoggled_member_moves_to_end_of_insertion_order() {
        let mut set = SelectionSet::from_values(["A", "B"]);
        set.toggle("A".to_string());
        set.toggle("A".to_string());
        assert_eq!(set.in_insertion_order(), vec!["B", "A"]);
        assert_eq!(set, SelectionSet::from_values(["A", "B"]));
    }
}
