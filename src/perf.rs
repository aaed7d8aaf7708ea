//! Performance monitoring utilities.
//!
//! Tracks how expensive marquee hit testing is, so hosts can tell when a
//! catalog has outgrown the linear scan and should switch to
//! [`IndexedLayout`](crate::spatial_index::IndexedLayout).
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! fruitpicker = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn pointer_move() {
//!     profile_scope!("marquee_hit_test");
//!     // ... work ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Time budget for one pointer-move at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Exponential moving average factor for hit test statistics
const EMA_ALPHA: f64 = 0.1;

/// Average per-move cost above which a linear hit test counts as a bottleneck
const BOTTLENECK_MS: f64 = 1.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that reports when the guarded scope exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the frame budget as threshold.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    /// Timer for profiling builds (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        {
            if is_profiling_enabled() {
                trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
                return;
            }
        }

        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Running statistics for marquee hit tests.
#[derive(Debug, Clone, Default)]
pub struct HitTestProfiler {
    /// Items considered by the last hit test
    pub items_tested: usize,
    /// Items that intersected in the last hit test
    pub items_hit: usize,
    /// Time taken for the last hit test
    pub last_test_ms: f64,
    avg_ms: f64,
    test_count: u64,
}

impl HitTestProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, items_tested: usize, items_hit: usize, elapsed_ms: f64) {
        self.items_tested = items_tested;
        self.items_hit = items_hit;
        self.last_test_ms = elapsed_ms;
        self.avg_ms = if self.test_count == 0 {
            elapsed_ms
        } else {
            self.avg_ms * (1.0 - EMA_ALPHA) + elapsed_ms * EMA_ALPHA
        };
        self.test_count += 1;
    }

    pub fn average_ms(&self) -> f64 {
        self.avg_ms
    }

    pub fn test_count(&self) -> u64 {
        self.test_count
    }

    /// True once hit testing costs more than a millisecond per move on average.
    pub fn is_bottleneck(&self) -> bool {
        self.test_count > 0 && self.avg_ms > BOTTLENECK_MS
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
