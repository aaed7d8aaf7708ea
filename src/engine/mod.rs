//! Selection engine - turns pointer gestures into selection store mutations.
//!
//! The engine knows nothing about rendering. Views feed it pointer events and
//! a [`LayoutProvider`](crate::layout::LayoutProvider) with live item bounds;
//! they read back the marquee rectangle and the selection store, or subscribe
//! to store changes.
//!
//! ## Architecture
//!
//! Gesture tracking is an explicit state machine ([`GestureState`]). A drag
//! fixes its [`PaintMode`] at pointer-down from the item under the pointer,
//! then every pointer-move paints that mode onto all items the marquee
//! overlaps. Painted items stay painted when the marquee moves away.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine and paint mode
//! - `pointer` - Toolkit-independent pointer events
//! - `host` - Scoped host side effects (overlay, text-selection suppression)
//! - `pointer_down` - Gesture start and paint-mode determination
//! - `pointer_move` - Marquee update and incremental hit-test painting
//! - `pointer_up` - Gesture end, click toggling, cancel and teardown
//! - `actions` - Bulk actions and panel removal

mod actions;
mod host;
mod pointer;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use host::{GestureHost, NoopHost, OverlayHost};
pub use pointer::{PointerButton, PointerDown, PointerMove, PointerUp};
pub use state::{Gesture, GestureState, PaintMode};

use crate::catalog::Catalog;
use crate::constants::DEFAULT_CLICK_TOLERANCE;
use crate::geometry::Rect;
use crate::perf::HitTestProfiler;
use crate::selection::SelectionStore;
use crate::settings::Settings;
use std::sync::Arc;

/// Engine tuning taken from [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Maximum per-axis pointer travel for a press/release to count as a click
    pub click_tolerance: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
        }
    }
}

impl From<&Settings> for EngineOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            click_tolerance: settings.click_tolerance,
        }
    }
}

/// Handle returned by [`SelectionEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SelectionStore)>;

pub struct SelectionEngine<H: GestureHost = NoopHost> {
    catalog: Arc<Catalog>,
    store: SelectionStore,
    state: GestureState,
    host: H,
    options: EngineOptions,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    hit_profiler: HitTestProfiler,
}

impl SelectionEngine<NoopHost> {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_host(catalog, NoopHost)
    }
}

impl<H: GestureHost> SelectionEngine<H> {
    pub fn with_host(catalog: Arc<Catalog>, host: H) -> Self {
        Self {
            catalog,
            store: SelectionStore::new(),
            state: GestureState::Idle,
            host,
            options: EngineOptions::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
            hit_profiler: HitTestProfiler::new(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Read-only view of the selection. Only the engine mutates it.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Selected identities in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.store.snapshot()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.catalog
            .get(index)
            .is_some_and(|item| self.store.has(&item.identity))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Paint mode of the in-flight gesture.
    pub fn paint_mode(&self) -> Option<PaintMode> {
        self.state.paint_mode()
    }

    /// Current marquee, for the view's overlay.
    pub fn marquee(&self) -> Option<Rect> {
        self.state.marquee()
    }

    pub fn hit_profiler(&self) -> &HitTestProfiler {
        &self.hit_profiler
    }

    /// Register a callback run after every effective store change.
    pub fn subscribe(&mut self, callback: impl FnMut(&SelectionStore) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify_subscribers(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.store);
        }
    }

    /// Apply `mode` to every catalog item in `indices`. Unknown indices are
    /// skipped. Returns true if the store changed.
    fn paint<I>(&mut self, mode: PaintMode, indices: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let mut changed = false;
        for index in indices {
            if let Some(item) = self.catalog.get(index) {
                changed |= mode.apply(&mut self.store, &item.identity);
            }
        }
        changed
    }

    /// Release the effects acquired at pointer-down.
    fn release_host(&mut self) {
        self.host.hide_marquee();
        self.host.set_text_selection_suppressed(false);
    }
}

impl<H: GestureHost> Drop for SelectionEngine<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: GestureHost + std::fmt::Debug> std::fmt::Debug for SelectionEngine<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("catalog_len", &self.catalog.len())
            .field("store", &self.store)
            .field("state", &self.state)
            .field("host", &self.host)
            .field("options", &self.options)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
