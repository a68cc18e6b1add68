// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving interaction tuning to a `settings.toml` file.
//!
//! Hosts usually load once at startup, resolve the raw [`Config`] into a
//! validated [`Tuning`] and hand that to [`crate::feed::Feed::new`].

mod defaults;

pub use defaults::{
    BACKDROP_OPACITY, DIM_IN_DURATION_MS, MAX_BACKDROP_OPACITY, MAX_SCALE, MIN_BACKDROP_OPACITY,
    MIN_SCALE, SNAP_BACK_DURATION_MS,
};

use crate::error::Result;
use crate::transform::ScaleBounds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PinchFeed";

/// Raw persisted configuration. Every field is optional so partial files
/// (and files written by older versions) keep loading.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub min_scale: Option<f32>,
    #[serde(default)]
    pub max_scale: Option<f32>,
    #[serde(default)]
    pub backdrop_opacity: Option<f32>,
    #[serde(default)]
    pub dim_in_ms: Option<u64>,
    #[serde(default)]
    pub snap_back_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_scale: Some(MIN_SCALE),
            max_scale: Some(MAX_SCALE),
            backdrop_opacity: Some(BACKDROP_OPACITY),
            dim_in_ms: Some(DIM_IN_DURATION_MS),
            snap_back_ms: Some(SNAP_BACK_DURATION_MS),
        }
    }
}

impl Config {
    /// Resolves the raw configuration into validated interaction tuning,
    /// substituting defaults for missing fields and clamping out-of-range
    /// values.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        Tuning {
            bounds: ScaleBounds::new(
                self.min_scale.unwrap_or(MIN_SCALE),
                self.max_scale.unwrap_or(MAX_SCALE),
            ),
            backdrop_opacity: self
                .backdrop_opacity
                .unwrap_or(BACKDROP_OPACITY)
                .clamp(MIN_BACKDROP_OPACITY, MAX_BACKDROP_OPACITY),
            dim_in: Duration::from_millis(self.dim_in_ms.unwrap_or(DIM_IN_DURATION_MS)),
            snap_back: Duration::from_millis(self.snap_back_ms.unwrap_or(SNAP_BACK_DURATION_MS)),
        }
    }
}

/// Validated interaction tuning consumed by the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Bounds on the combined overlay scale.
    pub bounds: ScaleBounds,
    /// Target backdrop opacity while a session is active.
    pub backdrop_opacity: f32,
    /// Backdrop dim-in duration.
    pub dim_in: Duration,
    /// Snap-back-to-rest animation duration.
    pub snap_back: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Config::default().tuning()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
