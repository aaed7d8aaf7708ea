//! Pointer up handling - gesture end, click resolution, cancel and teardown.

use super::{GestureHost, PointerButton, PointerUp, SelectionEngine};
use tracing::debug;

impl<H: GestureHost> SelectionEngine<H> {
    /// End the gesture. The release may happen anywhere, including outside
    /// the item surface.
    ///
    /// A release that never left the click tolerance around the anchor is a
    /// click: the gesture's paint mode is applied to the item under the
    /// anchor, which toggles it. Applying the mode (instead of a raw toggle)
    /// keeps the result correct when a tolerance-sized wiggle already painted
    /// the item during the press.
    pub fn pointer_up(&mut self, event: PointerUp) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }
        let Some(gesture) = self.state.take() else {
            return false;
        };

        let is_click = !gesture.moved
            && gesture
                .anchor
                .within(event.position, self.options.click_tolerance);

        let mut changed = false;
        if is_click {
            if let Some(target) = gesture.target {
                changed = self.paint(gesture.paint_mode, [target]);
                debug!(target, paint_mode = ?gesture.paint_mode, "Click toggled item");
            }
        }

        self.release_host();
        if changed {
            self.notify_subscribers();
        }

        debug!(is_click, selected = self.store.len(), "Gesture ended");
        true
    }

    /// Abort the gesture without resolving a click, e.g. when the host loses
    /// pointer capture. Painting already done by the gesture is kept.
    pub fn cancel(&mut self) -> bool {
        if self.state.take().is_none() {
            return false;
        }
        self.release_host();
        debug!("Gesture cancelled");
        true
    }

    /// Unmount: end any in-flight gesture and drop every subscriber.
    /// Safe to call repeatedly; also runs when the engine is dropped.
    pub fn teardown(&mut self) {
        self.cancel();
        self.subscribers.clear();
    }
}
