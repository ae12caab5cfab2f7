//! Component registry capability.

use thiserror::Error;

use crate::component::ComponentName;

/// Failure reported by a registry backend.
///
/// The message is forwarded to callers verbatim and may be empty (some
/// platform exceptions carry no text).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RegistryError {
    message: String,
}

impl RegistryError {
    /// Wrap a backend failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Backend message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Injected capability over the OS component registry.
///
/// The OS owns enablement state; this code only issues mutation requests
/// and never reads back to confirm. Implementations must ask the OS not
/// to kill the host process as a side effect of the change (Android:
/// `DONT_KILL_APP`).
pub trait ComponentRegistry {
    /// Request that `component` be enabled or disabled.
    fn set_enabled(
        &mut self,
        component: &ComponentName,
        enabled: bool,
    ) -> Result<(), RegistryError>;
}
