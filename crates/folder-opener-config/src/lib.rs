use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File managers tried, in order, when no intent resolves for the folder itself.
pub const DEFAULT_CANDIDATE_PACKAGES: &[&str] = &[
    "com.android.documentsui",
    "com.google.android.documentsui",
    "com.mi.android.globalFileexplorer",
    "com.android.fileexplorer",
    "com.estrongs.android.pop",
];

pub const DEFAULT_CHOOSER_TITLE: &str = "Choose File Manager";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub candidate_packages: Vec<String>,
    pub chooser_title: String,
    pub create_missing_directory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidate_packages: DEFAULT_CANDIDATE_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            chooser_title: DEFAULT_CHOOSER_TITLE.to_string(),
            create_missing_directory: true,
        }
    }
}

impl Config {
    /// Load the config at `config_path`, expanding `~` and `$VARS` in the path.
    ///
    /// A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let config_path =
            Self::expand_path(config_path).unwrap_or_else(|| config_path.to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Load the config at `config_path`, falling back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
