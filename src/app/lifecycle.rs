//! Application lifecycle - initialization, settings reload and relayout.

use super::{FruitSelector, ListLayout};
use crate::catalog::Catalog;
use crate::constants::{HEADER_HEIGHT, PANEL_HEIGHT};
use crate::engine::{EngineOptions, OverlayHost, SelectionEngine};
use crate::geometry::{Point, Rect};
use crate::layout::GridLayout;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use gpui::*;
use std::time::Duration;
use tracing::{debug, info, warn};

const SETTINGS_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Top of the item list in window coordinates. Space for the panel is
/// always reserved so items do not jump when the first one is selected.
pub(crate) const LIST_TOP: f32 = HEADER_HEIGHT + PANEL_HEIGHT;

/// Left padding of the grid inside the window
const LIST_PADDING: f32 = 16.0;

impl FruitSelector {
    pub fn new(settings: Settings, cx: &mut Context<Self>) -> Self {
        let catalog = Catalog::shared_fruits();
        let mut engine = SelectionEngine::with_host(catalog, OverlayHost::new())
            .with_options(EngineOptions::from(&settings));
        engine.subscribe(|store| debug!(selected = store.len(), "Selection changed"));

        let layout = Self::build_layout(&settings, engine.catalog().len(), Point::default());
        info!(
            items = engine.catalog().len(),
            indexed = layout.is_indexed(),
            "Fruit selector ready"
        );

        let settings_watcher = default_settings_path().and_then(|path| {
            SettingsWatcher::new(path)
                .map_err(|e| debug!(error = %e, "Settings hot-reload disabled"))
                .ok()
        });
        if settings_watcher.is_some() {
            Self::spawn_settings_poll(cx);
        }

        Self {
            engine,
            layout,
            settings,
            settings_watcher,
            viewport: Rect::default(),
        }
    }

    fn build_layout(settings: &Settings, len: usize, scroll: Point) -> ListLayout {
        let mut grid = GridLayout::from_settings(&settings.layout, len);
        grid.origin = Point::new(
            grid.origin.x + LIST_PADDING,
            grid.origin.y + LIST_TOP + LIST_PADDING,
        );
        grid.set_scroll(scroll);
        ListLayout::new(grid, settings.use_spatial_index(len))
    }

    /// Move hit testing onto the R-tree once grid hit tests get slow.
    /// Only called between gestures.
    pub(crate) fn promote_layout_if_slow(&mut self) {
        let profiler = self.engine.hit_profiler();
        if self.layout.is_indexed() || !profiler.is_bottleneck() {
            return;
        }
        info!(
            avg_ms = profiler.average_ms(),
            items = profiler.items_tested,
            "Slow hit testing, switching to spatial index"
        );
        self.layout = ListLayout::new(self.layout.grid().clone(), true);
    }

    fn spawn_settings_poll(cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(SETTINGS_POLL_INTERVAL).await;
                if this
                    .update(cx, |this, cx| this.check_settings_reload(cx))
                    .is_err()
                {
                    break;
                }
            }
        })
        .detach();
    }

    /// Check for settings file changes and apply them.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(watcher) = self.settings_watcher.as_mut() else {
            return;
        };
        match watcher.poll() {
            Some(SettingsEvent::Reloaded(settings)) => {
                self.apply_settings(settings);
                cx.notify();
            }
            Some(SettingsEvent::Rejected(reason)) => {
                warn!(%reason, "Keeping previous settings");
            }
            None => {}
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        if settings == self.settings {
            return;
        }
        // A relayout mid-drag would move items under the marquee
        self.engine.cancel();
        self.engine.set_options(EngineOptions::from(&settings));
        let scroll = self.layout.grid().scroll;
        self.layout = Self::build_layout(&settings, self.engine.catalog().len(), scroll);
        self.settings = settings;
        info!(indexed = self.layout.is_indexed(), "Applied new settings");
    }
}
