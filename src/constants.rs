//! Application-wide constants.
//!
//! Centralizes layout defaults and tuning values so the engine, settings and
//! view layer agree on them.

// ============================================================================
// Layout Defaults
// ============================================================================

/// Default width of one list item in pixels
pub const DEFAULT_ITEM_WIDTH: f32 = 160.0;

/// Default height of one list item in pixels
pub const DEFAULT_ITEM_HEIGHT: f32 = 32.0;

/// Default spacing between neighbouring items in pixels
pub const DEFAULT_ITEM_GAP: f32 = 8.0;

/// Default number of grid columns
pub const DEFAULT_COLUMNS: usize = 5;

/// Height of the header (title, hint and bulk action buttons) in the demo window
pub const HEADER_HEIGHT: f32 = 96.0;

/// Height of the selected-items panel strip when visible
pub const PANEL_HEIGHT: f32 = 48.0;

// ============================================================================
// Gesture Tuning
// ============================================================================

/// Maximum pointer travel (per axis) for a press/release to still count as a click.
/// Zero means the release must land exactly on the anchor.
pub const DEFAULT_CLICK_TOLERANCE: f32 = 0.0;

/// Catalog size at which hit testing switches from a linear scan to the R-tree
pub const DEFAULT_SPATIAL_INDEX_THRESHOLD: usize = 2000;

// ============================================================================
// Logging
// ============================================================================

/// Default `tracing` filter directive when neither settings nor `RUST_LOG` set one
pub const DEFAULT_LOG_FILTER: &str = "fruitpicker=info";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "fruitpicker";

/// Settings file name inside [`CONFIG_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
