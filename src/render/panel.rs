//! Selected-items panel - one chip per selected item, click to remove.
//! Only drawn while something is selected; its space stays reserved.

use super::{BORDER, SURFACE};
use crate::app::FruitSelector;
use crate::colors::{label_rgb, tag_rgb};
use crate::constants::{HEADER_HEIGHT, PANEL_HEIGHT};
use crate::panel::{PanelEntry, PanelModel};
use gpui::*;

fn render_chip(entry: &PanelEntry, cx: &Context<FruitSelector>) -> Stateful<Div> {
    let identity = entry.identity.clone();
    div()
        .id(ElementId::Name(format!("selected-{}", entry.identity).into()))
        .flex_none()
        .px(px(10.0))
        .py(px(4.0))
        .rounded(px(12.0))
        .bg(rgb(tag_rgb(&entry.color_tag)))
        .text_color(rgb(label_rgb(&entry.color_tag)))
        .text_size(px(12.0))
        .cursor_pointer()
        .hover(|s| s.opacity(0.8))
        .child(format!("{} \u{00d7}", entry.identity))
        .on_click(cx.listener(move |this, _, _, cx| {
            this.handle_remove_entry(&identity, cx);
        }))
}

pub fn render_panel(panel: &PanelModel, cx: &Context<FruitSelector>) -> impl IntoElement {
    div()
        .id("selected-items-panel")
        .absolute()
        .top(px(HEADER_HEIGHT))
        .left_0()
        .w_full()
        .h(px(PANEL_HEIGHT))
        .px(px(16.0))
        .flex()
        .items_center()
        .gap(px(6.0))
        .overflow_x_scroll()
        .bg(rgb(SURFACE))
        .border_b_1()
        .border_color(rgb(BORDER))
        .children(panel.entries.iter().map(|entry| render_chip(entry, cx)))
}
