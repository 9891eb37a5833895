//! Platform-specific functionality
//!
//! Provides the [`IntentHost`](folder_opener_engine::IntentHost) the bridge
//! runs the cascade against.

mod jni_host;

pub use jni_host::*;

#[cfg(target_os = "android")]
pub use jni_host::JniHost as PlatformHost;

/// On non-Android platforms nothing resolves and every launch fails.
#[cfg(not(target_os = "android"))]
pub use folder_opener_engine::UnsupportedHost as PlatformHost;
