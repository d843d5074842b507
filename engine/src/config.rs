//! Optional user configuration at `~/.nbdeck/config.toml`.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [extract]
//! marker = "#"
//! first_title = "Dataset Schema"
//! title_prefix = "Question"
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use nbdeck_notebook::ExtractOptions;
use nbdeck_types::UiOptions;

const ASCII_ENV: &str = "NBDECK_ASCII";

#[derive(Debug, Default, Deserialize)]
pub struct NbdeckConfig {
    pub app: Option<AppConfig>,
    pub extract: Option<ExtractConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the control bar.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Overrides for heading recognition. Unset fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractConfig {
    pub marker: Option<String>,
    pub first_title: Option<String>,
    pub title_prefix: Option<String>,
}

impl NbdeckConfig {
    /// Load the config file. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path).map(Some),
            _ => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        toml::from_str(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::default();
        let Some(extract) = self.extract.as_ref() else {
            return options;
        };
        if let Some(marker) = extract.marker.as_ref().filter(|m| !m.is_empty()) {
            options.marker.clone_from(marker);
        }
        if let Some(title) = &extract.first_title {
            options.first_title.clone_from(title);
        }
        if let Some(prefix) = &extract.title_prefix {
            options.title_prefix = prefix.trim().to_string();
        }
        options
    }

    /// UI options from `[app]`, with `NBDECK_ASCII=1` forcing ASCII glyphs.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only) || ascii_from_env(),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
        }
    }
}

fn ascii_from_env() -> bool {
    match env::var(ASCII_ENV) {
        Ok(value) => matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => false,
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nbdeck").join("config.toml"))
}
