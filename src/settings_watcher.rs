//! Settings file watcher for hot-reload.
//!
//! Watches the settings file's parent directory (editors often replace the
//! file instead of writing in place) and reports changes to the file itself
//! through [`SettingsWatcher::poll`], which never blocks.

use crate::error::{SettingsError, SettingsResult};
use crate::settings::Settings;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{info, warn};

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// File changed and parsed; apply these settings
    Reloaded(Settings),
    /// File changed but could not be loaded; keep the current settings
    Rejected(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if !dir.exists() {
            return Err(SettingsError::io(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "settings directory missing"),
            ));
        }
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file events. Returns at most one event per call: the
    /// result of reloading the file if any drained event touched it.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut touched = false;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if self.is_relevant(&event) {
                        touched = true;
                    }
                }
                Ok(Err(e)) => warn!("Settings watcher error: {}", e),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Settings watcher disconnected");
                    break;
                }
            }
        }

        if !touched {
            return None;
        }
        Some(self.reload())
    }

    fn is_relevant(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event
            .paths
            .iter()
            .any(|p| p.file_name() == self.path.file_name())
    }

    fn reload(&self) -> SettingsEvent {
        if !self.path.exists() {
            info!("Settings file removed, reverting to defaults");
            return SettingsEvent::Reloaded(Settings::default());
        }
        match Settings::load_from(&self.path) {
            Ok(settings) => {
                info!("Settings reloaded");
                SettingsEvent::Reloaded(settings)
            }
            Err(e) => {
                warn!(error = %e, "Rejected settings change");
                SettingsEvent::Rejected(e.to_string())
            }
        }
    }
}
