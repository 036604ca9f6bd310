//! Store — durable preferences with per-field atomic access.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use thiserror::Error;

use super::model::{Preferences, Rgb};

/// Internal persistence failure. Never reaches callers of the store's
/// public API; degraded loads fall back to defaults and failed saves leave
/// the in-memory value authoritative, both with a logged warning.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Process-scoped preferences context.
///
/// Construct one store at startup and share it (typically as an
/// `Arc<PreferencesStore>`) with every component that reads or writes
/// display settings. Each individual field access is atomic; there is no
/// locking across multiple accesses, so a multi-field read sees each field
/// as of its own access time. Use [`snapshot`](Self::snapshot) when a
/// single consistent view of the whole set is needed.
///
/// Every setter persists the whole blob immediately after updating the
/// in-memory value. Persistence is best-effort, not transactional: a crash
/// between two setters may leave durable storage partially updated.
pub struct PreferencesStore {
    path: PathBuf,
    data: RwLock<Preferences>,
}

impl PreferencesStore {
    /// Open a store backed by the given file, loading the persisted
    /// preference set wholesale. A missing, unreadable, or corrupt file
    /// degrades to full defaults; this constructor never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = if path.exists() {
            match Self::load(&path) {
                Ok(prefs) => prefs,
                Err(err) => {
                    tracing::warn!(
                        "Failed to load preferences from {}: {}; using defaults",
                        path.display(),
                        err
                    );
                    Preferences::default()
                }
            }
        } else {
            tracing::info!("No preferences file at {}, using defaults", path.display());
            Preferences::default()
        };

        Self {
            path,
            data: RwLock::new(data),
        }
    }

    /// Open the store at the platform's standard location,
    /// `<config dir>/console-core/preferences.toml`.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("console-core")
            .join("preferences.toml")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the whole preference set as of this call.
    pub fn snapshot(&self) -> Preferences {
        self.data.read().clone()
    }

    pub fn last_start(&self) -> Option<DateTime<Utc>> {
        self.data.read().last_start
    }

    pub fn set_last_start(&self, value: Option<DateTime<Utc>>) {
        self.update(|prefs| prefs.last_start = value);
    }

    /// Stamp the current time, as done once per application launch.
    pub fn touch_last_start(&self) {
        self.set_last_start(Some(Utc::now()));
    }

    pub fn font_name(&self) -> String {
        self.data.read().font_name.clone()
    }

    pub fn set_font_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|prefs| prefs.font_name = value);
    }

    pub fn font_size(&self) -> f64 {
        self.data.read().font_size
    }

    pub fn set_font_size(&self, value: f64) {
        self.update(|prefs| prefs.font_size = value);
    }

    pub fn background_color(&self) -> Rgb {
        self.data.read().background_color
    }

    pub fn set_background_color(&self, value: Rgb) {
        self.update(|prefs| prefs.background_color = value);
    }

    pub fn foreground_color(&self) -> Rgb {
        self.data.read().foreground_color
    }

    pub fn set_foreground_color(&self, value: Rgb) {
        self.update(|prefs| prefs.foreground_color = value);
    }

    /// Apply one field mutation under the write lock, then persist.
    fn update(&self, apply: impl FnOnce(&mut Preferences)) {
        {
            let mut data = self.data.write();
            apply(&mut data);
        }
        self.persist();
    }

    /// Best-effort write-through: the in-memory value stays authoritative
    /// if the save fails.
    fn persist(&self) {
        if let Err(err) = self.save() {
            tracing::warn!(
                "Failed to persist preferences to {}: {}",
                self.path.display(),
                err
            );
        }
    }

    fn load(path: &Path) -> Result<Preferences, StoreError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save(&self) -> Result<(), StoreError> {
        let contents = toml::to_string_pretty(&self.snapshot())?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file, then rename into place so a crash
        // mid-write cannot leave a truncated blob behind.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
