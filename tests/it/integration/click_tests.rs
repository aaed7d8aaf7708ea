//! Click handling - a press and release without movement toggles its target.

use crate::helpers::{TestListBuilder, assert_host_settled, assert_selection, click, row_of_four};
use fruitpicker::engine::{EngineOptions, PointerDown, PointerMove, PointerUp};
use fruitpicker::geometry::Point;

#[test]
fn test_click_toggles_exactly_once() {
    let list = row_of_four();
    let mut engine = list.engine();

    for index in 0..4 {
        let before = engine.is_selected(index);
        click(&mut engine, &list.bounds, list.center(index));
        assert_ne!(engine.is_selected(index), before, "item {index} did not flip");
        assert_host_settled(&engine);
    }
    assert_selection(&engine, &["A", "B", "C", "D"]);

    click(&mut engine, &list.bounds, list.center(2));
    assert_selection(&engine, &["A", "B", "D"]);
}

#[test]
fn test_click_leaves_other_items_alone() {
    let list = row_of_four();
    let mut engine = list.engine();
    engine.toggle_item(0);
    engine.toggle_item(3);

    click(&mut engine, &list.bounds, list.center(1));
    assert_selection(&engine, &["A", "D", "B"]);
}

#[test]
fn test_click_with_stationary_move_event() {
    // Some hosts report a move at the press position before the release
    let list = row_of_four();
    let mut engine = list.engine();
    let at = list.center(1);

    engine.pointer_down(PointerDown::primary(at), &list.bounds);
    engine.pointer_move(PointerMove::to(at), &list.bounds);
    engine.pointer_up(PointerUp::primary(at));
    assert_selection(&engine, &["B"]);

    engine.pointer_down(PointerDown::primary(at), &list.bounds);
    engine.pointer_move(PointerMove::to(at), &list.bounds);
    engine.pointer_up(PointerUp::primary(at));
    assert_selection(&engine, &[]);
}

#[test]
fn test_click_on_item_edge_belongs_to_one_item() {
    // Two items sharing an edge at x = 50
    let list = TestListBuilder::new()
        .with_item("left", "red", (0.0, 0.0, 50.0, 20.0))
        .with_item("right", "blue", (50.0, 0.0, 50.0, 20.0))
        .build();
    let mut engine = list.engine();

    click(&mut engine, &list.bounds, Point::new(50.0, 10.0));
    assert_selection(&engine, &["right"]);
}

#[test]
fn test_click_tolerance_absorbs_jitter() {
    let list = row_of_four();
    let mut engine = list.engine().with_options(EngineOptions {
        click_tolerance: 4.0,
    });
    let at = list.center(0);
    let jitter = at.offset(3.0, -2.0);

    engine.pointer_down(PointerDown::primary(at), &list.bounds);
    engine.pointer_move(PointerMove::to(jitter), &list.bounds);
    engine.pointer_up(PointerUp::primary(jitter));
    assert_selection(&engine, &["A"]);

    engine.pointer_down(PointerDown::primary(at), &list.bounds);
    engine.pointer_move(PointerMove::to(jitter), &list.bounds);
    engine.pointer_up(PointerUp::primary(jitter));
    assert_selection(&engine, &[]);
}

#[test]
fn test_click_with_view_resolved_target() {
    let list = row_of_four();
    let mut engine = list.engine();

    // The view already knows the press landed on D
    let at = list.center(3);
    engine.pointer_down(PointerDown::primary(at).with_target(3), &list.bounds);
    engine.pointer_up(PointerUp::primary(at));
    assert_selection(&engine, &["D"]);
}
