//! Host side effects tied to the Dragging state.
//!
//! A gesture acquires two global effects from its host: text-selection
//! suppression and the marquee overlay. The engine pairs every acquisition
//! with a release on each exit path (pointer-up, cancel, teardown and drop),
//! so a host never sees a suppression or overlay outlive its gesture.

use crate::geometry::Rect;

pub trait GestureHost {
    /// Suppress (or restore) the host's native text selection.
    fn set_text_selection_suppressed(&mut self, suppressed: bool);

    /// Show the marquee overlay at `rect`, or move it there if already shown.
    fn show_marquee(&mut self, rect: Rect);

    /// Remove the marquee overlay.
    fn hide_marquee(&mut self);
}

/// Host with no side effects. Views that only read
/// [`SelectionEngine::marquee`](super::SelectionEngine::marquee) use this.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl GestureHost for NoopHost {
    fn set_text_selection_suppressed(&mut self, _suppressed: bool) {}

    fn show_marquee(&mut self, _rect: Rect) {}

    fn hide_marquee(&mut self) {}
}

/// Host that keeps the overlay and suppression state as plain data, for
/// retained-mode views that paint from state on the next frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayHost {
    pub marquee: Option<Rect>,
    pub text_selection_suppressed: bool,
    /// Number of suppress calls seen
    pub acquisitions: usize,
    /// Number of restore calls seen
    pub releases: usize,
}

impl OverlayHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every acquisition has been released and no overlay is up.
    pub fn is_settled(&self) -> bool {
        self.acquisitions == self.releases && !self.text_selection_suppressed && self.marquee.is_none()
    }
}

impl GestureHost for OverlayHost {
    fn set_text_selection_suppressed(&mut self, suppressed: bool) {
        if suppressed {
            self.acquisitions += 1;
        } else {
            self.releases += 1;
        }
        self.text_selection_suppressed = suppressed;
    }

    fn show_marquee(&mut self, rect: Rect) {
        self.marquee = Some(rect);
    }

    fn hide_marquee(&mut self) {
        self.marquee = None;
    }
}
