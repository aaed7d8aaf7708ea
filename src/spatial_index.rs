//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for marquee hit testing on large
//! catalogs. This reduces a pointer-move hit test from O(n) over every item to
//! O(log n + k) for the k items under the marquee.

use crate::geometry::{Point, Rect};
use crate::layout::LayoutProvider;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing one laid-out item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub index: usize,
    pub bounds: Rect,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.left, self.bounds.top],
            [self.bounds.right, self.bounds.bottom],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Spatial index for item bounds using an R-tree.
///
/// The R-tree's envelope queries are inclusive of edges, so every query
/// re-checks candidates with the strict [`Rect::intersects`] /
/// half-open [`Rect::contains`] rules before returning them.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<usize, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from `(index, bounds)` pairs.
    pub fn from_bounds<I>(bounds: I) -> Self
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(bounds);
        index
    }

    /// Snapshot every item of a layout provider.
    pub fn from_layout<L: LayoutProvider + ?Sized>(layout: &L) -> Self {
        Self::from_bounds((0..layout.len()).filter_map(|i| layout.bounds_of(i).map(|b| (i, b))))
    }

    pub fn insert(&mut self, index: usize, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&index) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry { index, bounds };
        self.tree.insert(entry);
        self.entries.insert(index, entry);
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if let Some(entry) = self.entries.remove(&index) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.entries.get(&index).map(|entry| entry.bounds)
    }

    /// Items containing `point`, in index order.
    pub fn query_point(&self, point: Point) -> Vec<usize> {
        let envelope = AABB::from_point([point.x, point.y]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(point))
            .map(|entry| entry.index)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Items whose bounds overlap `rect` with positive area, in index order.
    pub fn query_rect(&self, rect: &Rect) -> Vec<usize> {
        let envelope = AABB::from_corners([rect.left, rect.top], [rect.right, rect.bottom]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.intersects(rect))
            .map(|entry| entry.index)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, bounds: I)
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let entries: Vec<SpatialEntry> = bounds
            .into_iter()
            .map(|(index, bounds)| SpatialEntry { index, bounds })
            .collect();

        self.entries = entries.iter().map(|e| (e.index, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout provider backed by a spatial index.
///
/// Bounds are indexed in content space once; scrolling only changes a
/// translation applied at query time, so the tree survives scroll events and
/// has to be rebuilt only when the layout itself changes.
pub struct IndexedLayout {
    index: SpatialIndex,
    len: usize,
    scroll: Point,
}

impl IndexedLayout {
    /// Index `layout` as it is laid out right now. The layout's current
    /// positions become the zero-scroll reference.
    pub fn new<L: LayoutProvider + ?Sized>(layout: &L) -> Self {
        Self {
            index: SpatialIndex::from_layout(layout),
            len: layout.len(),
            scroll: Point::default(),
        }
    }

    /// Re-snapshot after a relayout (resize, column change).
    pub fn rebuild<L: LayoutProvider + ?Sized>(&mut self, layout: &L) {
        self.index = SpatialIndex::from_layout(layout);
        self.len = layout.len();
        self.scroll = Point::default();
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }
}

impl LayoutProvider for IndexedLayout {
    fn len(&self) -> usize {
        self.len
    }

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.index
            .bounds_of(index)
            .map(|bounds| bounds.translate(-self.scroll.x, -self.scroll.y))
    }

    fn index_at(&self, point: Point) -> Option<usize> {
        let content_point = point.offset(self.scroll.x, self.scroll.y);
        self.index.query_point(content_point).into_iter().next()
    }

    fn hits(&self, rect: &Rect) -> Vec<usize> {
        self.index
            .query_rect(&rect.translate(self.scroll.x, self.scroll.y))
    }
}
