//! # Fragment Store
//!
//! The session cache of loaded page fragments. Insertion-ordered: search
//! results and bulk operations iterate fragments in the order they were
//! first cached (home is inserted at startup, so it always comes first).
//!
//! Fragments are immutable once stored: there is no eviction, no TTL and
//! no reload within a session, so a linear scan over a small vector beats
//! a hash map that would lose ordering.

use crate::content::Fragment;

/// Insertion-ordered map from page key to cached [`Fragment`].
#[derive(Debug, Default)]
pub struct FragmentStore {
    entries: Vec<(String, Fragment)>,
}

impl FragmentStore {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Cache a fragment under `key`. The first insertion wins: fragments are
    /// immutable for the session, so a duplicate insert is dropped.
    pub fn insert(&mut self, key: String, fragment: Fragment) {
        if self.contains(&key) {
            log::debug!("fragment '{}' already cached, keeping first copy", key);
            return;
        }
        self.entries.push((key, fragment));
    }

    pub fn get(&self, key: &str) -> Option<&Fragment> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fragment)| fragment)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate cached fragments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fragment)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
