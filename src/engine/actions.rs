//! Direct store actions - bulk select/clear, panel removal, programmatic toggle.

use super::{GestureHost, SelectionEngine};
use tracing::debug;

impl<H: GestureHost> SelectionEngine<H> {
    /// Replace the selection with every catalog identity.
    pub fn select_all(&mut self) -> bool {
        let changed = self.store.select_all(self.catalog.identities());
        if changed {
            debug!(selected = self.store.len(), "Selected all items");
            self.notify_subscribers();
        }
        changed
    }

    /// Replace the selection with the empty set.
    pub fn clear(&mut self) -> bool {
        let changed = self.store.clear();
        if changed {
            debug!("Cleared selection");
            self.notify_subscribers();
        }
        changed
    }

    /// Selected-items panel click: remove exactly `identity`.
    pub fn remove_entry(&mut self, identity: &str) -> bool {
        let changed = self.store.remove(identity);
        if changed {
            debug!(identity, "Removed from selection");
            self.notify_subscribers();
        }
        changed
    }

    /// Toggle the item at `index`. Unknown indices are ignored.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        let Some(item) = self.catalog.get(index) else {
            return false;
        };
        self.store.toggle(&item.identity);
        self.notify_subscribers();
        true
    }

    /// "Clear Selections" is offered only while something is selected.
    pub fn can_clear(&self) -> bool {
        !self.store.is_empty()
    }

    /// "Select All" is offered only while something is left unselected.
    pub fn can_select_all(&self) -> bool {
        self.store.len() < self.catalog.len()
    }
}
