//! Item grid and marquee overlay
//!
//! ## Performance Notes
//!
//! Only items overlapping the visible list area are built each frame. The
//! visibility query goes through the same layout provider the engine hit-tests
//! with, so large catalogs cull through the R-tree.

use super::{ACCENT, BORDER, SURFACE};
use crate::app::{FruitSelector, LIST_TOP};
use crate::catalog::Item;
use crate::colors::{label_rgb, tag_rgb};
use crate::geometry::Rect;
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;

fn render_item(item: &Item, bounds: Rect, selected: bool) -> Div {
    let swatch = rgb(tag_rgb(&item.color_tag));
    div()
        .absolute()
        .left(px(bounds.left))
        .top(px(bounds.top - LIST_TOP))
        .w(px(bounds.width()))
        .h(px(bounds.height()))
        .px(px(8.0))
        .flex()
        .items_center()
        .gap(px(6.0))
        .rounded(px(6.0))
        .border_1()
        .overflow_hidden()
        .text_size(px(13.0))
        .when(selected, |d| {
            d.bg(swatch)
                .border_color(rgb(ACCENT))
                .text_color(rgb(label_rgb(&item.color_tag)))
        })
        .when(!selected, |d| {
            d.bg(rgb(SURFACE)).border_color(rgb(BORDER)).child(
                div()
                    .flex_none()
                    .size(px(10.0))
                    .rounded_full()
                    .bg(swatch),
            )
        })
        .child(item.identity.clone())
}

fn render_marquee(marquee: Rect) -> Div {
    let accent = Hsla::from(rgb(ACCENT));
    div()
        .absolute()
        .left(px(marquee.left))
        .top(px(marquee.top - LIST_TOP))
        .w(px(marquee.width()))
        .h(px(marquee.height()))
        .border_1()
        .border_color(accent)
        .bg(accent.opacity(0.1))
        .rounded(px(2.0))
}

pub fn render_list(view: &FruitSelector, cx: &Context<FruitSelector>) -> impl IntoElement {
    profile_scope!("render_list");

    let engine = view.engine();
    let catalog = engine.catalog();
    let layout = view.layout.provider();
    let visible = layout.hits(&view.viewport);

    let items: Vec<Div> = visible
        .into_iter()
        .filter_map(|index| {
            let item = catalog.get(index)?;
            let bounds = layout.bounds_of(index)?;
            Some(render_item(item, bounds, engine.is_selected(index)))
        })
        .collect();

    div()
        .absolute()
        .top(px(LIST_TOP))
        .left_0()
        .right_0()
        .bottom_0()
        .overflow_hidden()
        .on_mouse_down(MouseButton::Left, cx.listener(FruitSelector::handle_mouse_down))
        .on_mouse_up(MouseButton::Left, cx.listener(FruitSelector::handle_mouse_up))
        .on_mouse_up_out(MouseButton::Left, cx.listener(FruitSelector::handle_mouse_up))
        .on_scroll_wheel(cx.listener(FruitSelector::handle_scroll))
        .children(items)
        .when_some(engine.host().marquee, |d, marquee| d.child(render_marquee(marquee)))
}
