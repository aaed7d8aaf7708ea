//! Mouse handling - gpui events in, engine calls out.
//!
//! Window coordinates are used unchanged as engine coordinates; the grid
//! layout is built in window space with the list offset baked into its origin.

use super::FruitSelector;
use crate::engine::{PointerDown, PointerMove, PointerUp};
use crate::geometry;
use crate::perf::ScopedTimer;
use gpui::*;
use tracing::trace;

/// Scroll step for line-based wheels
const SCROLL_LINE_HEIGHT: f32 = 20.0;

fn to_engine_point(position: Point<Pixels>) -> geometry::Point {
    geometry::Point::new(f32::from(position.x), f32::from(position.y))
}

impl FruitSelector {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let down = PointerDown::primary(to_engine_point(event.position));
        if self.engine.pointer_down(down, self.layout.provider()) {
            cx.notify();
        }
    }

    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.engine.is_dragging() {
            return;
        }
        let _timer = ScopedTimer::with_default_threshold("handle_mouse_move");
        // Button released somewhere we never heard about (e.g. another window)
        if event.pressed_button != Some(MouseButton::Left) {
            self.engine.cancel();
            cx.notify();
            return;
        }
        self.engine.pointer_move(
            PointerMove::to(to_engine_point(event.position)),
            self.layout.provider(),
        );
        // The marquee moves even when the store does not change
        cx.notify();
    }

    /// Release inside or outside the list area ends the gesture.
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self
            .engine
            .pointer_up(PointerUp::primary(to_engine_point(event.position)))
        {
            self.promote_layout_if_slow();
            cx.notify();
        }
    }

    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let delta = event.delta.pixel_delta(px(SCROLL_LINE_HEIGHT));
        let dy = -f32::from(delta.y);
        if dy == 0.0 {
            return;
        }

        let (_, content_height) = self.layout.grid().content_size();
        let max_scroll = (content_height - self.viewport.height()).max(0.0);
        let current = self.layout.grid().scroll.y;
        let dy = (current + dy).clamp(0.0, max_scroll) - current;
        self.layout.scroll_by(0.0, dy);
        trace!(scroll_y = self.layout.grid().scroll.y, "Scrolled list");

        // Keep painting under a stationary pointer while the list scrolls
        if self.engine.is_dragging() {
            self.engine.pointer_move(
                PointerMove::to(to_engine_point(event.position)),
                self.layout.provider(),
            );
        }
        cx.notify();
    }

    pub fn handle_remove_entry(&mut self, identity: &str, cx: &mut Context<Self>) {
        if self.engine.remove_entry(identity) {
            cx.notify();
        }
    }

    pub fn handle_select_all(&mut self, cx: &mut Context<Self>) {
        if self.engine.select_all() {
            cx.notify();
        }
    }

    pub fn handle_clear(&mut self, cx: &mut Context<Self>) {
        if self.engine.clear() {
            cx.notify();
        }
    }
}
