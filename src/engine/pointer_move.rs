//! Pointer move handling - marquee update and incremental painting.
//!
//! ## Performance Notes
//!
//! Pointer move fires on every movement event while dragging. The hit test is
//! delegated to [`LayoutProvider::hits`], which is a linear scan over the
//! catalog unless the provider knows better (grid arithmetic, R-tree).
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::{GestureHost, PointerMove, SelectionEngine};
use crate::layout::LayoutProvider;
use crate::perf::measure;
use crate::profile_scope;
use tracing::trace;

impl<H: GestureHost> SelectionEngine<H> {
    /// Extend the marquee to the pointer and paint every item it overlaps.
    ///
    /// Items the marquee no longer covers keep whatever this gesture painted
    /// onto them. Returns false when no gesture is active.
    pub fn pointer_move<L>(&mut self, event: PointerMove, layout: &L) -> bool
    where
        L: LayoutProvider + ?Sized,
    {
        profile_scope!("pointer_move");

        let click_tolerance = self.options.click_tolerance;
        let Some(gesture) = self.state.gesture_mut() else {
            return false;
        };
        gesture.current = event.position;
        if !gesture.anchor.within(event.position, click_tolerance) {
            gesture.moved = true;
        }
        let rect = gesture.rect();
        let paint_mode = gesture.paint_mode;

        self.host.show_marquee(rect);

        let (hits, elapsed_ms) = {
            profile_scope!("marquee_hit_test");
            measure(|| layout.hits(&rect))
        };
        self.hit_profiler
            .record(layout.len(), hits.len(), elapsed_ms);
        trace!(hits = hits.len(), elapsed_ms, "Marquee hit test");

        if self.paint(paint_mode, hits) {
            self.notify_subscribers();
        }
        true
    }
}
