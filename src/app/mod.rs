//! Application module - the fruit selector window state.
//!
//! - `lifecycle` - Construction, settings hot-reload and relayout
//! - `pointer_handlers` - gpui mouse events translated into engine calls
//!
//! Rendering lives in [`crate::render`].

mod lifecycle;
mod pointer_handlers;

pub(crate) use lifecycle::LIST_TOP;

use crate::engine::{OverlayHost, SelectionEngine};
use crate::geometry::{Point, Rect};
use crate::layout::{GridLayout, LayoutProvider};
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::spatial_index::IndexedLayout;

/// Item layout used for hit testing, switched on catalog size.
pub enum ListLayout {
    /// Linear scan over grid cells
    Grid(GridLayout),
    /// Grid geometry for painting, R-tree for hit testing
    Indexed {
        grid: GridLayout,
        index: IndexedLayout,
    },
}

impl ListLayout {
    pub fn new(grid: GridLayout, use_spatial_index: bool) -> Self {
        if use_spatial_index {
            let mut unscrolled = grid.clone();
            unscrolled.set_scroll(Point::default());
            let mut index = IndexedLayout::new(&unscrolled);
            index.set_scroll(grid.scroll);
            Self::Indexed { grid, index }
        } else {
            Self::Grid(grid)
        }
    }

    pub fn grid(&self) -> &GridLayout {
        match self {
            Self::Grid(grid) => grid,
            Self::Indexed { grid, .. } => grid,
        }
    }

    pub fn provider(&self) -> &dyn LayoutProvider {
        match self {
            Self::Grid(grid) => grid,
            Self::Indexed { index, .. } => index,
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed { .. })
    }

    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        match self {
            Self::Grid(grid) => grid.scroll_by(dx, dy),
            Self::Indexed { grid, index } => {
                grid.scroll_by(dx, dy);
                index.set_scroll(grid.scroll);
            }
        }
    }
}

/// The fruit selector view.
pub struct FruitSelector {
    /// gpui divs have no native text selection, so only the host's marquee
    /// is drawn; its suppression flag is bookkeeping.
    pub(crate) engine: SelectionEngine<OverlayHost>,
    pub(crate) layout: ListLayout,
    pub(crate) settings: Settings,
    pub(crate) settings_watcher: Option<SettingsWatcher>,
    /// Visible list area in window coordinates, updated every frame
    pub(crate) viewport: Rect,
}

impl FruitSelector {
    pub fn engine(&self) -> &SelectionEngine<OverlayHost> {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
