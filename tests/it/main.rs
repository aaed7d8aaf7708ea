//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Builders and gesture shortcuts shared by all tests
//! - integration: Full gestures driven through the engine
//! - unit: Single-component unit tests
