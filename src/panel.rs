//! Selected-items panel and bulk action view model.
//!
//! Pure derivation from the engine's read-only outputs; views render this and
//! route clicks back through [`SelectionEngine::remove_entry`],
//! [`SelectionEngine::select_all`] and [`SelectionEngine::clear`].

use crate::engine::{GestureHost, SelectionEngine};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelEntry {
    pub identity: String,
    pub color_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelModel {
    /// Selected items in insertion order
    pub entries: Vec<PanelEntry>,
    /// The panel is shown only while something is selected
    pub visible: bool,
    pub show_clear: bool,
    pub show_select_all: bool,
}

impl PanelModel {
    pub fn from_engine<H: GestureHost>(engine: &SelectionEngine<H>) -> Self {
        let catalog = engine.catalog();
        let entries: Vec<PanelEntry> = engine
            .store()
            .iter()
            .filter_map(|identity| catalog.find(identity))
            .map(|item| PanelEntry {
                identity: item.identity.clone(),
                color_tag: item.color_tag.clone(),
            })
            .collect();

        Self {
            visible: !entries.is_empty(),
            entries,
            show_clear: engine.can_clear(),
            show_select_all: engine.can_select_all(),
        }
    }
}
