use crate::host::{HostError, IntentHost};
use crate::intent::{Intent, IntentTarget};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use tempfile::TempDir;

/// Keys [`RecordingHost`] uses for the intents the standard cascade builds.
pub mod keys {
    pub const FOLDER_VIEW: &str = "VIEW resource/folder with data";
    pub const CONTENT_PICKER: &str = "GET_CONTENT */* with data";
    pub const BARE_FOLDER_VIEW: &str = "VIEW resource/folder";
    pub const CHOOSER: &str = "chooser";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Resolve(String),
    Launch(String),
}

/// Short stable name for an intent, e.g. `VIEW resource/folder with data` or
/// `package com.android.documentsui`.
pub fn key(intent: &Intent) -> String {
    match &intent.target {
        IntentTarget::Action(action) => {
            let action = action.trim_start_matches("android.intent.action.");
            let mime_type = intent.mime_type.as_deref().unwrap_or("-");
            let data = if intent.data.is_some() { " with data" } else { "" };
            format!("{action} {mime_type}{data}")
        }
        IntentTarget::Package(package) => format!("package {package}"),
        IntentTarget::Chooser { .. } => "chooser".to_string(),
    }
}

/// Scripted [`IntentHost`] that records every call.
///
/// Intents resolve only when their key was registered with [`Self::resolves`];
/// launches succeed unless registered with [`Self::fails_launch`].
#[derive(Default)]
pub struct RecordingHost {
    resolvable: HashSet<String>,
    resolve_failures: HashMap<String, String>,
    launch_failures: HashMap<String, String>,
    calls: RefCell<Vec<HostCall>>,
    data: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn resolves(mut self, key: &str) -> Self {
        self.resolvable.insert(key.to_string());
        self
    }

    pub fn fails_resolve(mut self, key: &str, message: &str) -> Self {
        self.resolve_failures
            .insert(key.to_string(), message.to_string());
        self
    }

    pub fn fails_launch(mut self, key: &str, message: &str) -> Self {
        self.launch_failures
            .insert(key.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn launched(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Launch(key) => Some(key.clone()),
                HostCall::Resolve(_) => None,
            })
            .collect()
    }

    /// Data URIs of every intent passed to `resolve`, in order.
    pub fn data_seen(&self) -> Vec<String> {
        self.data.borrow().clone()
    }

    pub fn resolve_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, HostCall::Resolve(_)))
            .count()
    }
}

impl IntentHost for RecordingHost {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError> {
        let key = key(intent);
        self.calls.borrow_mut().push(HostCall::Resolve(key.clone()));
        if let Some(data) = &intent.data {
            self.data.borrow_mut().push(data.clone());
        }
        if let Some(message) = self.resolve_failures.get(&key) {
            return Err(HostError::Platform(message.clone()));
        }
        Ok(self.resolvable.contains(&key))
    }

    fn launch(&self, intent: &Intent) -> Result<(), HostError> {
        let key = key(intent);
        self.calls.borrow_mut().push(HostCall::Launch(key.clone()));
        match self.launch_failures.get(&key) {
            Some(message) => Err(HostError::Platform(message.clone())),
            None => Ok(()),
        }
    }
}

/// Temporary directory standing in for external storage
pub fn create_test_root() -> TempDir {
    tempfile::tempdir().unwrap()
}
