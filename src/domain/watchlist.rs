//! Tracked-address set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of `host:port` addresses the user is watching.
///
/// Uniqueness is enforced. Iteration is sorted so renders come out
/// deterministic; ordering is a rendering convenience, not a contract.
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchList {
    addresses: BTreeSet<String>,
}

impl WatchList {
    /// An empty watch list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an address. Returns `true` if it was not already tracked.
    pub fn add(&mut self, address: impl Into<String>) -> bool {
        self.addresses.insert(address.into())
    }

    /// Stop tracking an address. Returns `true` if it was tracked.
    pub fn remove(&mut self, address: &str) -> bool {
        self.addresses.remove(address)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    /// Iterate tracked addresses in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<String> for WatchList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_enforces_uniqueness() {
        let mut list = WatchList::new();
        assert!(list.add("1.2.3.4:27015"));
        assert!(!list.add("1.2.3.4:27015"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_reports_membership() {
        let mut list = WatchList::new();
        list.add("1.2.3.4:27015");
        assert!(list.remove("1.2.3.4:27015"));
        assert!(!list.remove("1.2.3.4:27015"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut list = WatchList::new();
        list.add("9.9.9.9:1");
        list.add("1.1.1.1:1");
        let order: Vec<_> = list.iter().collect();
        assert_eq!(order, vec!["1.1.1.1:1", "9.9.9.9:1"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut list = WatchList::new();
        list.add("1.2.3.4:27015");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["1.2.3.4:27015"]"#);
        let back: WatchList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
