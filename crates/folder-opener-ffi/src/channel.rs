//! Method-channel dispatch for the native helper channel.
//!
//! The app's non-native side sends a method name plus string arguments and
//! receives a success value, a coded error, or "not implemented", matching
//! the shape of a Flutter `MethodChannel` result.

use folder_opener_engine::{FolderOpener, IntentHost, LaunchOutcome};
use std::collections::HashMap;

pub const CHANNEL_NAME: &str = "flutter.native/helper";
pub const METHOD_OPEN_FILE_MANAGER: &str = "openFileManager";
pub const ARG_PATH: &str = "path";

pub const CODE_INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CODE_ERROR: &str = "ERROR";

pub const OPENED_MESSAGE: &str = "File manager opened";

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MethodCall {
    pub method: String,
    pub arguments: HashMap<String, String>,
}

impl MethodCall {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_argument(mut self, key: &str, value: &str) -> Self {
        self.arguments.insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MethodResult {
    Success { value: String },
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResult {
    fn error(code: &str, message: String) -> Self {
        MethodResult::Error {
            code: code.to_string(),
            message,
        }
    }
}

pub struct MethodChannel<H> {
    opener: FolderOpener<H>,
}

impl<H: IntentHost> MethodChannel<H> {
    pub fn new(opener: FolderOpener<H>) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &FolderOpener<H> {
        &self.opener
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        match call.method.as_str() {
            METHOD_OPEN_FILE_MANAGER => self.open_file_manager(call.arguments.get(ARG_PATH)),
            other => {
                log::debug!("No handler for method {other} on {CHANNEL_NAME}");
                MethodResult::NotImplemented
            }
        }
    }

    fn open_file_manager(&self, path: Option<&String>) -> MethodResult {
        let Some(path) = path.filter(|path| !path.is_empty()) else {
            return MethodResult::error(CODE_INVALID_ARGUMENT, "Path is required".to_string());
        };

        match self.opener.open(path) {
            LaunchOutcome::Opened { .. } => MethodResult::Success {
                value: OPENED_MESSAGE.to_string(),
            },
            LaunchOutcome::Failed(reason) => {
                MethodResult::error(CODE_ERROR, format!("Failed to open file manager: {reason}"))
            }
        }
    }
}
