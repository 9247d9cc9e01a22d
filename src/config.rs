//! Configuration persistence for deskfence settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskfenceConfig {
    /// Layout file; `None` means the default location under the config dir
    #[serde(default)]
    pub layout_file: Option<PathBuf>,
    /// Folder scanned for shortcuts; `None` means the user's desktop
    #[serde(default)]
    pub desktop_dir: Option<PathBuf>,
    /// Image handed to every discovered icon
    #[serde(default = "default_placeholder_icon")]
    pub placeholder_icon: PathBuf,
    /// Where the new-fence command places fences
    #[serde(default = "default_new_fence_origin")]
    pub new_fence_origin: (i32, i32),
    /// Whether quitting writes the layout
    #[serde(default)]
    pub save_on_exit: bool,
}

fn default_placeholder_icon() -> PathBuf {
    PathBuf::from("assets/icons/placeholder.png")
}

fn default_new_fence_origin() -> (i32, i32) {
    (50, 50)
}

impl Default for DeskfenceConfig {
    fn default() -> Self {
        Self {
            layout_file: None,
            desktop_dir: None,
            placeholder_icon: default_placeholder_icon(),
            new_fence_origin: default_new_fence_origin(),
            save_on_exit: false,
        }
    }
}

impl DeskfenceConfig {
    /// Directory name under the platform config dir
    pub const APP_DIR: &'static str = "deskfence";

    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR))
    }

    /// Default path of the config file itself
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load configuration from the default location, or defaults if unavailable
    ///
    /// On first run the defaults are written out so there is a file to edit.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if !path.exists() => {
                let config = Self::default();
                match config.save_to(&path) {
                    Ok(()) => log::info!("Wrote default config to {}", path.display()),
                    Err(err) => log::warn!("Could not write default config: {:?}", err),
                }
                config
            }
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Layout file to use: configured, else `<config>/deskfence/layout.json`,
    /// else `layout.json` in the working directory
    pub fn layout_path(&self) -> PathBuf {
        self.layout_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("layout.json")))
            .unwrap_or_else(|| PathBuf::from("layout.json"))
    }

    /// Shortcut folder: configured, else the desktop if it exists, else the
    /// working directory
    pub fn desktop_path(&self) -> PathBuf {
        if let Some(dir) = &self.desktop_dir {
            return dir.clone();
        }
        dirs::desktop_dir()
            .filter(|dir| dir.exists())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
