//! Header - title, usage hint and the Clear / Select All buttons

use super::{ACCENT, BORDER, MUTED_FOREGROUND, SURFACE};
use crate::app::FruitSelector;
use crate::constants::HEADER_HEIGHT;
use crate::panel::PanelModel;
use gpui::prelude::FluentBuilder;
use gpui::*;

pub const TITLE: &str = "My Magnificent Fruit Selector";
const HINT: &str = "Click to select individual items, and drag to select multiple items";

fn render_action_button(id: &'static str, label: &'static str) -> Stateful<Div> {
    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(rgb(ACCENT))
        .text_size(px(13.0))
        .font_weight(FontWeight::MEDIUM)
        .text_color(rgb(ACCENT))
        .cursor_pointer()
        .hover(|s| s.bg(Hsla::from(rgb(ACCENT)).opacity(0.08)))
        .child(label)
}

pub fn render_header(panel: &PanelModel, cx: &Context<FruitSelector>) -> impl IntoElement {
    div()
        .absolute()
        .top_0()
        .left_0()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .px(px(16.0))
        .flex()
        .flex_col()
        .justify_center()
        .gap(px(6.0))
        .bg(rgb(SURFACE))
        .border_b_1()
        .border_color(rgb(BORDER))
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_size(px(20.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(TITLE),
                )
                .child(
                    div()
                        .flex()
                        .gap(px(8.0))
                        .when(panel.show_clear, |d| {
                            d.child(
                                render_action_button("clear-selections", "Clear Selections")
                                    .on_click(cx.listener(|this, _, _, cx| this.handle_clear(cx))),
                            )
                        })
                        .when(panel.show_select_all, |d| {
                            d.child(
                                render_action_button("select-all", "Select All")
                                    .on_click(
                                        cx.listener(|this, _, _, cx| this.handle_select_all(cx)),
                                    ),
                            )
                        }),
                ),
        )
        .child(
            div()
                .text_size(px(13.0))
                .text_color(rgb(MUTED_FOREGROUND))
                .child(HINT),
        )
}
