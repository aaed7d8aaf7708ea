//! Pointer event inputs, independent of any windowing toolkit.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub position: Point,
    pub button: PointerButton,
    /// Item index under the pointer as resolved by the view, if it knows it.
    /// When absent the engine asks the layout provider.
    pub target: Option<usize>,
}

impl PointerDown {
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            target: None,
        }
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    pub position: Point,
}

impl PointerMove {
    pub fn to(position: Point) -> Self {
        Self { position }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerUp {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerUp {
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
        }
    }
}
