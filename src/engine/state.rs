//! Gesture state machine - the engine's private record of an in-flight drag.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging   (primary pointer down over the item surface)
//! Dragging -> Dragging (pointer move)
//! Dragging -> Idle   (primary pointer up anywhere, cancel, teardown)
//! ```

use crate::catalog::Item;
use crate::geometry::{Point, Rect};
use crate::selection::SelectionStore;

/// Whether a gesture adds or removes the items it sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Add,
    Remove,
}

impl PaintMode {
    /// Remove when the item under the pointer is already selected, Add
    /// otherwise (including when there is no item under the pointer).
    pub fn for_target(target: Option<&Item>, store: &SelectionStore) -> Self {
        match target {
            Some(item) if store.has(&item.identity) => Self::Remove,
            _ => Self::Add,
        }
    }

    /// Apply this mode to one identity. Returns true if the store changed.
    pub fn apply(self, store: &mut SelectionStore, identity: &str) -> bool {
        match self {
            Self::Add => store.add(identity),
            Self::Remove => store.remove(identity),
        }
    }
}

/// One in-flight drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Pointer position at pointer-down
    pub anchor: Point,
    /// Latest pointer position
    pub current: Point,
    /// Fixed for the whole gesture
    pub paint_mode: PaintMode,
    /// Catalog index directly under the anchor
    pub target: Option<usize>,
    /// Set once the pointer leaves the click tolerance around the anchor
    pub moved: bool,
}

impl Gesture {
    /// Marquee spanned by the anchor and the current pointer position.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer is down and the marquee is live
    Dragging(Gesture),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn start(&mut self, anchor: Point, paint_mode: PaintMode, target: Option<usize>) {
        *self = Self::Dragging(Gesture {
            anchor,
            current: anchor,
            paint_mode,
            target,
            moved: false,
        });
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    /// End the gesture, returning it. Leaves the state Idle.
    pub fn take(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn paint_mode(&self) -> Option<PaintMode> {
        self.gesture().map(|g| g.paint_mode)
    }

    pub fn marquee(&self) -> Option<Rect> {
        self.gesture().map(Gesture::rect)
    }
}
