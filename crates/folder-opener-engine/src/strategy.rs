//! The individual ways of surfacing a file manager, tried in order by
//! [`crate::FolderOpener`].

use crate::host::{HostError, IntentHost};
use crate::intent::{
    ACTION_GET_CONTENT, ACTION_MAIN, ACTION_VIEW, CATEGORY_LAUNCHER, CATEGORY_OPENABLE, Intent,
    MIME_ANY, MIME_FOLDER, file_uri,
};
use crate::opener::FolderRequest;
use folder_opener_config::Config;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    FolderView,
    ContentPicker,
    KnownFileManager,
    SystemChooser,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::FolderView => "folder view",
            StrategyKind::ContentPicker => "content picker",
            StrategyKind::KnownFileManager => "known file manager",
            StrategyKind::SystemChooser => "system chooser",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Launched,
    /// Nothing on the device handles this strategy's intent.
    Unresolved,
}

pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;
    fn attempt(
        &self,
        host: &dyn IntentHost,
        request: &FolderRequest,
    ) -> Result<Attempt, HostError>;
}

fn launch_if_resolvable(host: &dyn IntentHost, intent: &Intent) -> Result<Attempt, HostError> {
    if !host.resolve(intent)? {
        return Ok(Attempt::Unresolved);
    }
    host.launch(intent)?;
    Ok(Attempt::Launched)
}

/// `ACTION_VIEW` on the folder typed as `resource/folder`.
#[derive(Debug, Default)]
pub struct FolderView;

impl Strategy for FolderView {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FolderView
    }

    fn attempt(
        &self,
        host: &dyn IntentHost,
        request: &FolderRequest,
    ) -> Result<Attempt, HostError> {
        let intent =
            Intent::action(ACTION_VIEW).with_data_and_type(file_uri(&request.path), MIME_FOLDER);
        launch_if_resolvable(host, &intent)
    }
}

/// `ACTION_GET_CONTENT` anchored at the folder, restricted to openable items.
#[derive(Debug, Default)]
pub struct ContentPicker;

impl Strategy for ContentPicker {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ContentPicker
    }

    fn attempt(
        &self,
        host: &dyn IntentHost,
        request: &FolderRequest,
    ) -> Result<Attempt, HostError> {
        let intent = Intent::action(ACTION_GET_CONTENT)
            .with_data_and_type(file_uri(&request.path), MIME_ANY)
            .with_category(CATEGORY_OPENABLE);
        launch_if_resolvable(host, &intent)
    }
}

/// Launches the first installed app from a fixed list of file managers.
///
/// The launched app is not pointed at the requested folder.
#[derive(Debug)]
pub struct KnownFileManager {
    packages: Vec<String>,
}

impl KnownFileManager {
    pub fn new(packages: Vec<String>) -> Self {
        Self { packages }
    }
}

impl Strategy for KnownFileManager {
    fn kind(&self) -> StrategyKind {
        StrategyKind::KnownFileManager
    }

    fn attempt(
        &self,
        host: &dyn IntentHost,
        _request: &FolderRequest,
    ) -> Result<Attempt, HostError> {
        for package in &self.packages {
            let intent = Intent::launch_package(package);
            match launch_if_resolvable(host, &intent) {
                Ok(Attempt::Launched) => return Ok(Attempt::Launched),
                Ok(Attempt::Unresolved) => {
                    log::debug!("{package} has no launch entry");
                }
                Err(e) => {
                    log::debug!("Skipping {package}: {e}");
                }
            }
        }
        Ok(Attempt::Unresolved)
    }
}

/// Terminal fallback: any folder viewer, else the system chooser over launcher apps.
#[derive(Debug)]
pub struct SystemChooser {
    title: String,
}

impl SystemChooser {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Strategy for SystemChooser {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SystemChooser
    }

    fn attempt(
        &self,
        host: &dyn IntentHost,
        _request: &FolderRequest,
    ) -> Result<Attempt, HostError> {
        let view = Intent::action(ACTION_VIEW).with_type(MIME_FOLDER);
        if host.resolve(&view)? {
            host.launch(&view)?;
        } else {
            let launchers = Intent::action(ACTION_MAIN)
                .with_category(CATEGORY_LAUNCHER)
                .with_type(MIME_ANY);
            host.launch(&Intent::chooser(launchers, &self.title))?;
        }
        Ok(Attempt::Launched)
    }
}

/// The standard cascade, in the order it is attempted.
pub fn default_strategies(config: &Config) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(FolderView),
        Box::new(ContentPicker),
        Box::new(KnownFileManager::new(config.candidate_packages.clone())),
        Box::new(SystemChooser::new(config.chooser_title.clone())),
    ]
}
