use crate::fs::{DirectoryState, ensure_directory};
use crate::host::{HostError, IntentHost};
use crate::strategy::{Attempt, Strategy, StrategyKind, default_strategies};
use folder_opener_config::Config;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRequest {
    pub path: PathBuf,
}

impl FolderRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// An intent was dispatched. This does not guarantee the app shows `path`.
    Opened { via: StrategyKind },
    Failed(String),
}

impl LaunchOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, LaunchOutcome::Opened { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Path is empty")]
    EmptyPath,
    #[error("Invalid path {path}: {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open folder: {source}")]
    TotalFailure {
        strategy: StrategyKind,
        #[source]
        source: HostError,
    },
    #[error("No strategy could open a file manager")]
    Exhausted,
}

/// Runs the fallback cascade against an [`IntentHost`], stopping at the first launch.
pub struct FolderOpener<H> {
    host: H,
    strategies: Vec<Box<dyn Strategy>>,
    create_missing_directory: bool,
}

impl<H: IntentHost> FolderOpener<H> {
    pub fn new(host: H) -> Self {
        Self::from_config(host, &Config::default())
    }

    pub fn from_config(host: H, config: &Config) -> Self {
        Self {
            host,
            strategies: default_strategies(config),
            create_missing_directory: config.create_missing_directory,
        }
    }

    /// Replace the cascade. The last strategy is terminal: its error fails the whole open.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn Strategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn open(&self, path: impl AsRef<Path>) -> LaunchOutcome {
        let request = FolderRequest::new(path.as_ref());
        match self.try_open(&request) {
            Ok(via) => LaunchOutcome::Opened { via },
            Err(e) => {
                log::error!("Could not open {}: {e}", request.path.display());
                LaunchOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn try_open(&self, request: &FolderRequest) -> Result<StrategyKind, OpenError> {
        if request.path.as_os_str().is_empty() {
            return Err(OpenError::EmptyPath);
        }

        // Relative paths resolve against the working directory, as File.getAbsolutePath does
        let path = std::path::absolute(&request.path).map_err(|source| OpenError::InvalidPath {
            path: request.path.clone(),
            source,
        })?;
        let request = &FolderRequest::new(path);

        if self.create_missing_directory {
            self.prepare_directory(&request.path);
        }

        let host: &dyn IntentHost = &self.host;
        let last = self.strategies.len().saturating_sub(1);

        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.attempt(host, request) {
                Ok(Attempt::Launched) => {
                    log::info!(
                        "Opened file manager for {} via {}",
                        request.path.display(),
                        strategy.kind()
                    );
                    return Ok(strategy.kind());
                }
                Ok(Attempt::Unresolved) => {
                    log::debug!("{}: nothing to handle the intent", strategy.kind());
                }
                Err(source) if index == last => {
                    return Err(OpenError::TotalFailure {
                        strategy: strategy.kind(),
                        source,
                    });
                }
                Err(e) => {
                    log::debug!("{} failed, trying next: {e}", strategy.kind());
                }
            }
        }

        Err(OpenError::Exhausted)
    }

    fn prepare_directory(&self, path: &Path) {
        match ensure_directory(path) {
            Ok(DirectoryState::Created) => log::info!("Created {}", path.display()),
            Ok(DirectoryState::Existing) => {}
            Err(e) => log::warn!("Failed to create {}: {e}", path.display()),
        }
    }
}
