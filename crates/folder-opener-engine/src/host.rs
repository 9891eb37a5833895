use crate::intent::Intent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("No activity found to handle {0}")]
    ActivityNotFound(String),
    #[error("Launch rejected: {0}")]
    Rejected(String),
    #[error("Platform call failed: {0}")]
    Platform(String),
    #[error("Opening a file manager is not supported on this platform")]
    Unsupported,
}

/// The OS capability the cascade runs against.
///
/// `resolve` answers whether some activity would handle the intent (for a
/// [`crate::IntentTarget::Package`] target: whether the package registers a
/// launcher entry point). `launch` dispatches it.
pub trait IntentHost {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError>;
    fn launch(&self, intent: &Intent) -> Result<(), HostError>;
}

impl<H: IntentHost + ?Sized> IntentHost for &H {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError> {
        (**self).resolve(intent)
    }

    fn launch(&self, intent: &Intent) -> Result<(), HostError> {
        (**self).launch(intent)
    }
}

impl<H: IntentHost + ?Sized> IntentHost for Box<H> {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError> {
        (**self).resolve(intent)
    }

    fn launch(&self, intent: &Intent) -> Result<(), HostError> {
        (**self).launch(intent)
    }
}

/// Host for targets without an activity manager. Nothing resolves and every launch fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedHost;

impl IntentHost for UnsupportedHost {
    fn resolve(&self, _intent: &Intent) -> Result<bool, HostError> {
        Ok(false)
    }

    fn launch(&self, _intent: &Intent) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }
}
