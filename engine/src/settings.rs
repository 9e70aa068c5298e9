use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{Margins, ViewportConfig};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportSettings {
    pub logical_width: u32,
    pub logical_height: u32,
    pub margins: Margins,
    pub keep_aspect_ratio: bool,
    pub reduce_if_needed: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            logical_width: 800,
            logical_height: 600,
            margins: Margins::ZERO,
            keep_aspect_ratio: true,
            reduce_if_needed: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub start_fullscreen: bool,
    pub forced_fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            start_fullscreen: false,
            forced_fullscreen: false,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: default_title(),
            viewport: ViewportSettings::default(),
            window: WindowSettings::default(),
        }
    }
}

impl RuntimeSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.viewport.logical_width = self.viewport.logical_width.max(1);
        self.viewport.logical_height = self.viewport.logical_height.max(1);
        self.viewport.margins = self.viewport.margins.clamped();
        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self
    }

    pub fn viewport_config(&self) -> ViewportConfig {
        let v = &self.viewport;
        ViewportConfig {
            logical_width: v.logical_width as f32,
            logical_height: v.logical_height as f32,
            margins: v.margins.clamped(),
            keep_aspect_ratio: v.keep_aspect_ratio,
            reduce_if_needed: v.reduce_if_needed,
            is_fullscreen: false,
            is_forced_fullscreen: self.window.forced_fullscreen,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_title() -> String {
    "letterbox".to_owned()
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("LETTERBOX_SETTINGS_PATH") {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("letterbox");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults when the file is missing or broken.
    pub fn load(&self) -> RuntimeSettings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(Error::SettingsRead { .. }) => {
                debug!("no settings at {}, using defaults", self.path.display());
                RuntimeSettings::default()
            }
            Err(err) => {
                warn!("{err}; using defaults");
                RuntimeSettings::default()
            }
        }
    }

    pub fn try_load(&self) -> Result<RuntimeSettings> {
        let bytes = fs::read(&self.path).map_err(|source| Error::SettingsRead {
            path: self.path.clone(),
            source,
        })?;
        let settings = serde_json::from_slice::<RuntimeSettings>(&bytes).map_err(|source| {
            Error::SettingsParse {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(settings.sanitized())
    }

    pub fn save(&self, settings: &RuntimeSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
