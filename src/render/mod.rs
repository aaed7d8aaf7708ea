//! Rendering - the fruit selector window.
//!
//! - `header` - Title, hint and bulk action buttons
//! - `panel` - Selected-items strip
//! - `list` - Item grid and the marquee overlay
//!
//! Everything is derived from engine state on each frame; handlers only call
//! into the engine and request a redraw.

mod header;
mod list;
mod panel;

pub use header::TITLE;

use crate::app::FruitSelector;
use crate::app::LIST_TOP;
use crate::geometry::Rect;
use crate::panel::PanelModel;
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;

pub(crate) const BACKGROUND: u32 = 0xf7f7f5;
pub(crate) const SURFACE: u32 = 0xffffff;
pub(crate) const BORDER: u32 = 0xd9d9d6;
pub(crate) const FOREGROUND: u32 = 0x1f1f1f;
pub(crate) const MUTED_FOREGROUND: u32 = 0x6b6b6b;
pub(crate) const ACCENT: u32 = 0x2f6fed;

impl Render for FruitSelector {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_fruit_selector");

        let size = window.viewport_size();
        self.viewport = Rect::new(0.0, LIST_TOP, f32::from(size.width), f32::from(size.height));
        let model = PanelModel::from_engine(&self.engine);

        div()
            .size_full()
            .relative()
            .bg(rgb(BACKGROUND))
            .text_color(rgb(FOREGROUND))
            // Window-wide, so the marquee keeps following a drag that leaves the list
            .on_mouse_move(cx.listener(FruitSelector::handle_mouse_move))
            .child(list::render_list(self, cx))
            .child(header::render_header(&model, cx))
            .when(model.visible, |d| d.child(panel::render_panel(&model, cx)))
    }
}
