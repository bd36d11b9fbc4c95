//! Configuration for the command stream player

use serde::{Deserialize, Serialize};

use crate::renderer::RenderOptions;

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clear the display before every rendered frame
    pub clear_between_frames: bool,
    /// Print a blank separator after every rendered frame
    pub frame_separator: bool,
    /// Render after every frame; when false only the final screen is shown
    pub render_every_frame: bool,
    /// Shown in place of non-printable cells
    pub replacement_char: char,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            clear_between_frames: render.clear,
            frame_separator: render.separator,
            render_every_frame: true,
            replacement_char: render.replacement,
            log_filter: "bytegrid=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `~/.config/bytegrid/config.json`, or the default config when
    /// there is no such file. A file that exists but fails to load is an
    /// error; the caller decides whether to fall back.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Location of the per-user configuration file
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs_config_path().map(|dir| dir.join("config.json"))
    }

    /// Renderer layout derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            clear: self.clear_between_frames,
            separator: self.frame_separator,
            replacement: self.replacement_char,
        }
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("bytegrid"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
