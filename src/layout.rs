//! Layout providers - where each catalog item currently sits on screen.
//!
//! The engine never computes layout itself. It asks a [`LayoutProvider`] for
//! the live bounds of an item index on every pointer move, so providers must
//! be cheap and must already include scroll offsets.

use crate::geometry::{Point, Rect};
use crate::settings::LayoutSettings;

pub trait LayoutProvider {
    /// Number of laid-out items. Indices `0..len()` are valid.
    fn len(&self) -> usize;

    /// Current screen-space bounds of item `index`, or `None` if the index is
    /// not laid out.
    fn bounds_of(&self, index: usize) -> Option<Rect>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item under `point`, if any. Linear scan by default.
    fn index_at(&self, point: Point) -> Option<usize> {
        (0..self.len()).find(|&index| {
            self.bounds_of(index)
                .is_some_and(|bounds| bounds.contains(point))
        })
    }

    /// All items whose bounds strictly overlap `rect`, in index order.
    /// Linear scan by default; providers with spatial knowledge override it.
    fn hits(&self, rect: &Rect) -> Vec<usize> {
        (0..self.len())
            .filter(|&index| {
                self.bounds_of(index)
                    .is_some_and(|bounds| bounds.intersects(rect))
            })
            .collect()
    }
}

impl LayoutProvider for [Rect] {
    fn len(&self) -> usize {
        <[Rect]>::len(self)
    }

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

impl LayoutProvider for Vec<Rect> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

/// Row-major wrapped grid of equally sized cells.
///
/// Item `i` sits in column `i % columns`, row `i / columns`. The scroll offset
/// is subtracted from every position so bounds stay in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub item_width: f32,
    pub item_height: f32,
    pub gap: f32,
    pub columns: usize,
    pub origin: Point,
    pub scroll: Point,
    pub len: usize,
}

impl GridLayout {
    pub fn new(len: usize, columns: usize, item_width: f32, item_height: f32, gap: f32) -> Self {
        Self {
            item_width,
            item_height,
            gap,
            columns: columns.max(1),
            origin: Point::default(),
            scroll: Point::default(),
            len,
        }
    }

    pub fn from_settings(settings: &LayoutSettings, len: usize) -> Self {
        Self::new(
            len,
            settings.columns,
            settings.item_width,
            settings.item_height,
            settings.gap,
        )
        .with_origin(Point::new(settings.origin_x, settings.origin_y))
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Scroll by a delta, clamped so the grid never scrolls above its origin.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll = Point::new((self.scroll.x + dx).max(0.0), (self.scroll.y + dy).max(0.0));
    }

    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Total size of the grid content (without scroll).
    pub fn content_size(&self) -> (f32, f32) {
        let columns = self.columns.min(self.len.max(1)) as f32;
        let rows = self.rows() as f32;
        (
            (columns * self.pitch_x() - self.gap).max(0.0),
            (rows * self.pitch_y() - self.gap).max(0.0),
        )
    }

    #[inline]
    fn pitch_x(&self) -> f32 {
        self.item_width + self.gap
    }

    #[inline]
    fn pitch_y(&self) -> f32 {
        self.item_height + self.gap
    }

    /// Top-left of cell (0, 0) in client coordinates.
    #[inline]
    fn grid_origin(&self) -> Point {
        Point::new(self.origin.x - self.scroll.x, self.origin.y - self.scroll.y)
    }

    /// Inclusive cell range that may overlap `[lo, hi]` along one axis.
    fn cell_span(lo: f32, hi: f32, pitch: f32, count: usize) -> Option<(usize, usize)> {
        if count == 0 || pitch <= 0.0 || hi < 0.0 {
            return None;
        }
        let first = (lo / pitch).floor().max(0.0) as usize;
        let last = ((hi / pitch).floor().max(0.0) as usize).min(count - 1);
        (first <= last).then_some((first, last))
    }
}

impl LayoutProvider for GridLayout {
    fn len(&self) -> usize {
        self.len
    }

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let column = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        let origin = self.grid_origin();
        Some(Rect::from_origin_size(
            Point::new(
                origin.x + column * self.pitch_x(),
                origin.y + row * self.pitch_y(),
            ),
            self.item_width,
            self.item_height,
        ))
    }

    fn index_at(&self, point: Point) -> Option<usize> {
        let origin = self.grid_origin();
        let local_x = point.x - origin.x;
        let local_y = point.y - origin.y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }
        // Float-to-int casts saturate, so far points land on usize::MAX
        let column = (local_x / self.pitch_x()).floor() as usize;
        let row = (local_y / self.pitch_y()).floor() as usize;
        if column >= self.columns || row >= self.rows() {
            return None;
        }
        let index = row * self.columns + column;
        // Points in the gutter between cells hit nothing
        self.bounds_of(index)
            .filter(|bounds| bounds.contains(point))
            .map(|_| index)
    }

    fn hits(&self, rect: &Rect) -> Vec<usize> {
        let origin = self.grid_origin();
        let local = rect.translate(-origin.x, -origin.y);
        let Some((first_col, last_col)) =
            Self::cell_span(local.left, local.right, self.pitch_x(), self.columns)
        else {
            return Vec::new();
        };
        let Some((first_row, last_row)) =
            Self::cell_span(local.top, local.bottom, self.pitch_y(), self.rows())
        else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        for row in first_row..=last_row {
            for column in first_col..=last_col {
                let index = row * self.columns + column;
                if let Some(bounds) = self.bounds_of(index) {
                    if bounds.intersects(rect) {
                        hits.push(index);
                    }
                }
            }
        }
        hits
    }
}
