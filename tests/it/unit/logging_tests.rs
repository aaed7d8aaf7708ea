//! Unit tests for logging setup and settings load warnings.

use fruitpicker::logging::{env_filter, with_bootstrap_logging};
use fruitpicker::settings::Settings;
use std::fs;
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tracing::Level;
use tracing::level_filters::LevelFilter;

/// In-memory log sink shared with a test subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn test_broken_settings_file_warns_and_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let (settings, logs) = capture(|| Settings::load_or_default(&path));
    assert_eq!(settings, Settings::default());
    assert!(logs.contains("WARN"), "no warning in {logs:?}");
    assert!(logs.contains("Ignoring settings file"), "no warning in {logs:?}");
}

#[test]
fn test_invalid_settings_file_warns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "layout": { "columns": 0 } }"#).unwrap();

    let (settings, logs) = capture(|| Settings::load_or_default(&path));
    assert_eq!(settings.layout.columns, Settings::default().layout.columns);
    assert!(logs.contains("layout.columns"), "no field in {logs:?}");
}

#[test]
fn test_missing_settings_file_does_not_warn() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let (settings, logs) = capture(|| Settings::load_or_default(&path));
    assert_eq!(settings, Settings::default());
    assert!(!logs.contains("WARN"), "unexpected warning in {logs:?}");
}

#[test]
fn test_bootstrap_subscriber_sees_crate_warnings() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let enabled = with_bootstrap_logging(|| tracing::enabled!(target: "fruitpicker", Level::WARN));
    assert!(enabled);
}

#[test]
fn test_unparsable_log_filter_falls_back_to_default() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let settings = Settings {
        log_filter: "fruitpicker=loud".to_string(),
        ..Settings::default()
    };
    assert_eq!(env_filter(&settings).max_level_hint(), Some(LevelFilter::INFO));

    let settings = Settings {
        log_filter: "fruitpicker=trace".to_string(),
        ..Settings::default()
    };
    assert_eq!(env_filter(&settings).max_level_hint(), Some(LevelFilter::TRACE));
}
