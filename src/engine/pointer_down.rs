//! Pointer down handling - gesture start and paint-mode determination.

use super::{GestureHost, PaintMode, PointerButton, PointerDown, SelectionEngine};
use crate::geometry::Rect;
use crate::layout::LayoutProvider;
use crate::profile_scope;
use tracing::debug;

impl<H: GestureHost> SelectionEngine<H> {
    /// Start a gesture. Returns true if a gesture started.
    ///
    /// Non-primary buttons and a second press while already dragging are
    /// ignored. The store is not touched here: a press that is released
    /// without moving is resolved as a click in `pointer_up`.
    pub fn pointer_down<L>(&mut self, event: PointerDown, layout: &L) -> bool
    where
        L: LayoutProvider + ?Sized,
    {
        profile_scope!("pointer_down");

        if event.button != PointerButton::Primary {
            return false;
        }
        if self.state.is_dragging() {
            debug!("Ignoring pointer down during an active gesture");
            return false;
        }

        let target = event
            .target
            .or_else(|| layout.index_at(event.position))
            .filter(|&index| index < self.catalog.len());
        let paint_mode = PaintMode::for_target(
            target.and_then(|index| self.catalog.get(index)),
            &self.store,
        );

        self.state.start(event.position, paint_mode, target);
        self.host.set_text_selection_suppressed(true);
        self.host.show_marquee(Rect::at_point(event.position));

        debug!(
            x = event.position.x,
            y = event.position.y,
            ?target,
            ?paint_mode,
            "Gesture started"
        );
        true
    }
}
