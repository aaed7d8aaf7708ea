//! Selection store - the authoritative set of selected item identities.
//!
//! Membership is keyed by identity string, never by item reference, so a
//! regenerated catalog with equal names selects the same items. Insertion
//! order is kept for the selected-items panel.
//!
//! Every mutator is total and reports whether the store changed, so callers
//! only notify observers on real changes.

use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionStore {
    selected: IndexSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `identity`. No-op if already selected.
    pub fn add(&mut self, identity: &str) -> bool {
        if self.selected.contains(identity) {
            return false;
        }
        self.selected.insert(identity.to_string());
        true
    }

    /// Remove `identity`. No-op if not selected.
    ///
    /// Uses an order-preserving removal so the panel does not reshuffle.
    pub fn remove(&mut self, identity: &str) -> bool {
        self.selected.shift_remove(identity)
    }

    /// Flip membership of `identity`. Returns the new membership.
    pub fn toggle(&mut self, identity: &str) -> bool {
        if self.remove(identity) {
            false
        } else {
            self.add(identity);
            true
        }
    }

    /// Replace the store with the empty set.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected = IndexSet::new();
        true
    }

    /// Replace the store with exactly `identities`, in the given order.
    pub fn select_all<I, S>(&mut self, identities: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: IndexSet<String> = identities.into_iter().map(Into::into).collect();
        if next.iter().eq(self.selected.iter()) {
            return false;
        }
        self.selected = next;
        true
    }

    #[inline]
    pub fn has(&self, identity: &str) -> bool {
        self.selected.contains(identity)
    }

    /// Selected identities in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
