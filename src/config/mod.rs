// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery's configuration: optional user settings read
//! from a `settings.toml` file and resolved into always-valid [`ViewerSettings`].
//!
//! The file is only ever read. Nothing the viewer does at runtime is written
//! back, so no state survives between sessions.
//!
//! # Examples
//!
//! ```no_run
//! use lens_gallery::config;
//!
//! // Load the user's configuration, falling back to defaults
//! let config = config::load().unwrap_or_default();
//! let settings = config.resolve();
//! assert!(settings.slide_duration.as_millis() >= 500);
//! ```

pub mod defaults;

use crate::domain::ui::{HideDelay, SlideDuration, SwipeThreshold, ThumbnailEdge};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensGallery";

/// Raw user settings as found in `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub slide_duration_ms: Option<u64>,
    #[serde(default)]
    pub chrome_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub swipe_threshold_px: Option<f32>,
    #[serde(default)]
    pub thumbnail_edge_px: Option<u32>,
}

impl Config {
    /// Resolves optional values into clamped settings.
    #[must_use]
    pub fn resolve(&self) -> ViewerSettings {
        ViewerSettings {
            slide_duration: self
                .slide_duration_ms
                .map(SlideDuration::from_millis)
                .unwrap_or_default(),
            hide_delay: self
                .chrome_hide_delay_ms
                .map(HideDelay::from_millis)
                .unwrap_or_default(),
            swipe_threshold: self
                .swipe_threshold_px
                .map(SwipeThreshold::new)
                .unwrap_or_default(),
            thumbnail_edge: self
                .thumbnail_edge_px
                .map(ThumbnailEdge::new)
                .unwrap_or_default(),
            seek_retry_delay: Duration::from_millis(SEEK_RETRY_DELAY_MS),
        }
    }
}

/// Resolved settings handed to the viewer and the ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub slide_duration: SlideDuration,
    pub hide_delay: HideDelay,
    pub swipe_threshold: SwipeThreshold,
    pub thumbnail_edge: ThumbnailEdge,
    pub seek_retry_delay: Duration,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Config::default().resolve()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the user's config directory.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads the configuration from a specific file.
///
/// Invalid TOML falls back to the default configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}
