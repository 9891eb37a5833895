//! UniFFI bindings for opening a file manager from mobile apps
//!
//! Exposes the `flutter.native/helper` method channel to the Kotlin side:
//! `openFileManager` with a `path` argument runs the fallback cascade and
//! reports whether a file manager was launched.

use folder_opener_config::Config;
use folder_opener_engine::{FolderOpener, LaunchOutcome};

pub mod channel;
mod logging;
pub mod platform;

pub use channel::{MethodCall, MethodChannel, MethodResult};
pub use logging::init_logging;
pub use platform::PlatformHost;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum BridgeError {
    #[error("{reason}")]
    InvalidArgument { reason: String },
    #[error("{reason}")]
    OpenFailed { reason: String },
    #[error("Config error: {reason}")]
    Config { reason: String },
}

// ============ Channel Handle ============

/// The native side of the helper method channel.
#[derive(uniffi::Object)]
pub struct NativeHelperChannel {
    inner: MethodChannel<PlatformHost>,
}

impl NativeHelperChannel {
    fn from_config(config: &Config) -> Self {
        Self {
            inner: MethodChannel::new(FolderOpener::from_config(PlatformHost::default(), config)),
        }
    }
}

#[uniffi::export]
impl NativeHelperChannel {
    /// Create a channel using the built-in candidate list.
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a channel from a TOML config file; a missing file means defaults.
    #[uniffi::constructor]
    pub fn with_config_file(config_path: String) -> Result<Self, BridgeError> {
        let config = Config::load_or_default(&config_path).map_err(|e| BridgeError::Config {
            reason: e.to_string(),
        })?;
        Ok(Self::from_config(&config))
    }

    /// Name the Kotlin side registers the channel under.
    pub fn name(&self) -> String {
        channel::CHANNEL_NAME.to_string()
    }

    pub fn handle(&self, call: MethodCall) -> MethodResult {
        self.inner.handle(&call)
    }
}

// ============ Standalone Functions ============

/// Open a file manager at `path`, creating the folder if needed.
///
/// Success means an intent was dispatched, not that the app shows `path`.
#[uniffi::export]
pub fn open_file_manager(path: String) -> Result<String, BridgeError> {
    if path.is_empty() {
        return Err(BridgeError::InvalidArgument {
            reason: "Path is required".to_string(),
        });
    }

    match FolderOpener::new(PlatformHost::default()).open(&path) {
        LaunchOutcome::Opened { .. } => Ok(channel::OPENED_MESSAGE.to_string()),
        LaunchOutcome::Failed(reason) => Err(BridgeError::OpenFailed {
            reason: format!("Failed to open file manager: {reason}"),
        }),
    }
}
