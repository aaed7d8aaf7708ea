//! Fruitpicker - a selectable list widget with click and marquee paint selection.
//!
//! The selection engine ([`engine`]) is toolkit-independent. The gpui view
//! layer lives behind the `gui` feature.

pub mod catalog;
pub mod colors;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod panel;
pub mod perf;
pub mod selection;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod render;

pub use catalog::{Catalog, Item};
pub use engine::{EngineOptions, SelectionEngine};
pub use geometry::{Point, Rect};
pub use layout::{GridLayout, LayoutProvider};
pub use selection::SelectionStore;
