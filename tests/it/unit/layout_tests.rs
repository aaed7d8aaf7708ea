//! Unit tests for layout providers.

use fruitpicker::geometry::{Point, Rect};
use fruitpicker::layout::{GridLayout, LayoutProvider};
use fruitpicker::settings::LayoutSettings;

#[test]
fn test_slice_provider_uses_strict_intersection() {
    let bounds = vec![
        Rect::new(0.0, 0.0, 90.0, 40.0),
        Rect::new(100.0, 0.0, 190.0, 40.0),
    ];
    // Touches item 0's right edge only
    assert!(bounds.hits(&Rect::new(90.0, 0.0, 100.0, 40.0)).is_empty());
    // One pixel of overlap
    assert_eq!(bounds.hits(&Rect::new(89.0, 0.0, 100.0, 40.0)), vec![0]);
    assert_eq!(bounds.as_slice().hits(&Rect::new(89.0, 0.0, 101.0, 1.0)), vec![0, 1]);
}

#[test]
fn test_slice_provider_index_at_is_half_open() {
    let bounds = vec![Rect::new(0.0, 0.0, 90.0, 40.0)];
    assert_eq!(bounds.index_at(Point::new(0.0, 0.0)), Some(0));
    assert_eq!(bounds.index_at(Point::new(90.0, 10.0)), None);
    assert!(!bounds.is_empty());
}

#[test]
fn test_grid_from_settings_applies_origin() {
    let settings = LayoutSettings {
        item_width: 50.0,
        item_height: 10.0,
        gap: 5.0,
        columns: 2,
        origin_x: 20.0,
        origin_y: 100.0,
    };
    let layout = GridLayout::from_settings(&settings, 3);
    assert_eq!(layout.bounds_of(0), Some(Rect::new(20.0, 100.0, 70.0, 110.0)));
    assert_eq!(layout.bounds_of(2), Some(Rect::new(20.0, 115.0, 70.0, 125.0)));
    assert_eq!(layout.index_at(Point::new(80.0, 105.0)), Some(1));
}

#[test]
fn test_scroll_by_clamps_at_origin() {
    let mut layout = GridLayout::new(20, 4, 100.0, 20.0, 10.0);
    layout.scroll_by(0.0, -50.0);
    assert_eq!(layout.scroll, Point::default());

    layout.scroll_by(0.0, 45.0);
    assert_eq!(layout.scroll, Point::new(0.0, 45.0));
    // Row 1 now starts 15px above the viewport top
    assert_eq!(layout.bounds_of(4), Some(Rect::new(0.0, -15.0, 100.0, 5.0)));
}

#[test]
fn test_zero_columns_is_one_column() {
    let layout = GridLayout::new(3, 0, 10.0, 10.0, 0.0);
    assert_eq!(layout.columns, 1);
    assert_eq!(layout.rows(), 3);
}

#[test]
fn test_empty_grid_hits_nothing() {
    let layout = GridLayout::new(0, 4, 10.0, 10.0, 0.0);
    assert!(layout.is_empty());
    assert!(layout.hits(&Rect::new(-10.0, -10.0, 100.0, 100.0)).is_empty());
    assert_eq!(layout.index_at(Point::new(1.0, 1.0)), None);
}

#[test]
fn test_tiny_cells_far_pointer_hits_nothing() {
    // Validated settings can still make a pitch small enough to overflow
    // the row arithmetic for a distant pointer
    let layout = GridLayout::new(800, 4, 1e-30, 1e-30, 0.0);
    assert_eq!(layout.index_at(Point::new(1e-31, 1e10)), None);
    assert_eq!(layout.index_at(Point::new(1e-31, 1e-31)), Some(0));
}
