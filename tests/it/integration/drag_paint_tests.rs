//! Drag painting - paint mode, accumulation and intersection rules.

use crate::helpers::{assert_host_settled, assert_selection, drag, drag_path, row_of_four};
use fruitpicker::engine::{PaintMode, PointerDown, PointerMove, PointerUp};
use fruitpicker::geometry::{Point, Rect};

#[test]
fn test_drag_a_to_c_then_repeat_removes() {
    let list = row_of_four();
    let mut engine = list.engine();

    drag(&mut engine, &list.bounds, list.center(0), list.center(2));
    assert_selection(&engine, &["A", "B", "C"]);
    assert_host_settled(&engine);

    // Same gesture again starts on a selected item
    engine.pointer_down(PointerDown::primary(list.center(0)), &list.bounds);
    assert_eq!(engine.paint_mode(), Some(PaintMode::Remove));
    engine.pointer_move(PointerMove::to(list.center(2)), &list.bounds);
    engine.pointer_up(PointerUp::primary(list.center(2)));

    assert_selection(&engine, &[]);
    assert_host_settled(&engine);
}

#[test]
fn test_add_mode_never_removes() {
    let list = row_of_four();
    let mut engine = list.engine();
    engine.toggle_item(1);

    // Starts on unselected A, sweeps over already-selected B
    drag(&mut engine, &list.bounds, list.center(0), list.center(2));
    assert_selection(&engine, &["B", "A", "C"]);
}

#[test]
fn test_remove_mode_never_adds() {
    let list = row_of_four();
    let mut engine = list.engine();
    engine.toggle_item(0);
    engine.toggle_item(2);

    drag(&mut engine, &list.bounds, list.center(0), list.center(3));
    assert_selection(&engine, &[]);
}

#[test]
fn test_moving_away_keeps_painted_items() {
    let list = row_of_four();
    let mut engine = list.engine();

    // Sweep right to D, then back to A without releasing
    drag_path(
        &mut engine,
        &list.bounds,
        list.center(0),
        &[list.center(3), list.center(0)],
    );
    assert_selection(&engine, &["A", "B", "C", "D"]);
}

#[test]
fn test_edge_touch_is_not_a_hit() {
    let list = row_of_four();
    let mut engine = list.engine();

    // Start in the gutter right of A, end exactly on B's left edge
    engine.pointer_down(PointerDown::primary(Point::new(90.0, 0.0)), &list.bounds);
    engine.pointer_move(PointerMove::to(Point::new(100.0, 40.0)), &list.bounds);
    assert_eq!(engine.marquee(), Some(Rect::new(90.0, 0.0, 100.0, 40.0)));
    assert!(engine.store().is_empty());

    // Any positive overlap selects
    engine.pointer_move(PointerMove::to(Point::new(100.5, 40.0)), &list.bounds);
    engine.pointer_up(PointerUp::primary(Point::new(100.5, 40.0)));
    assert_selection(&engine, &["B"]);
}

#[test]
fn test_drag_from_empty_space_adds() {
    let list = row_of_four();
    let mut engine = list.engine();
    engine.select_all();
    engine.remove_entry("D");

    // Below the row, sweeping up over C and D
    engine.pointer_down(PointerDown::primary(Point::new(395.0, 80.0)), &list.bounds);
    assert_eq!(engine.paint_mode(), Some(PaintMode::Add));
    engine.pointer_move(PointerMove::to(Point::new(250.0, 20.0)), &list.bounds);
    engine.pointer_up(PointerUp::primary(Point::new(250.0, 20.0)));

    assert_selection(&engine, &["A", "B", "C", "D"]);
}

#[test]
fn test_release_outside_surface_ends_gesture() {
    let list = row_of_four();
    let mut engine = list.engine();

    engine.pointer_down(PointerDown::primary(list.center(0)), &list.bounds);
    engine.pointer_move(PointerMove::to(list.center(1)), &list.bounds);
    assert!(engine.pointer_up(PointerUp::primary(Point::new(-500.0, 900.0))));

    assert_selection(&engine, &["A", "B"]);
    assert_host_settled(&engine);

    // Later moves are ignored
    assert!(!engine.pointer_move(PointerMove::to(list.center(3)), &list.bounds));
    assert_selection(&engine, &["A", "B"]);
}

#[test]
fn test_overlay_tracks_marquee_while_dragging() {
    let list = row_of_four();
    let mut engine = list.engine();

    engine.pointer_down(PointerDown::primary(Point::new(150.0, 30.0)), &list.bounds);
    engine.pointer_move(PointerMove::to(Point::new(20.0, 10.0)), &list.bounds);

    let expected = Rect::new(20.0, 10.0, 150.0, 30.0);
    assert_eq!(engine.marquee(), Some(expected));
    assert_eq!(engine.host().marquee, Some(expected));
    assert!(engine.host().text_selection_suppressed);
    assert_eq!(engine.hit_profiler().items_hit, 2);
}

#[test]
fn test_overlay_follows_pointer_outside_surface() {
    let list = row_of_four();
    let mut engine = list.engine();

    engine.pointer_down(PointerDown::primary(list.center(1)), &list.bounds);
    // Above and left of every item, e.g. over the header
    assert!(engine.pointer_move(PointerMove::to(Point::new(-40.0, -120.0)), &list.bounds));

    let anchor = list.center(1);
    let expected = Rect::new(-40.0, -120.0, anchor.x, anchor.y);
    assert_eq!(engine.host().marquee, Some(expected));
    assert_selection(&engine, &["A", "B"]);
}
