//! Model — preferences data and platform defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default monospace font name for this platform.
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_NAME: &str = "Menlo";
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_NAME: &str = "Consolas";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_FONT_NAME: &str = "DejaVu Sans Mono";

pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// White background, black text.
pub const DEFAULT_BACKGROUND_COLOR: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
pub const DEFAULT_FOREGROUND_COLOR: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

/// A color as red/green/blue channels in 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// The persisted preference set.
///
/// Serialized as a small TOML blob with these field names as its stable
/// keys. Any key missing from the persisted form takes its default, so
/// blobs written by older versions load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Last application launch, stamped by the embedding application.
    pub last_start: Option<DateTime<Utc>>,
    pub font_name: String,
    pub font_size: f64,
    pub background_color: Rgb,
    pub foreground_color: Rgb,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            last_start: None,
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            background_color: DEFAULT_BACKGROUND_COLOR,
            foreground_color: DEFAULT_FOREGROUND_COLOR,
        }
    }
}
