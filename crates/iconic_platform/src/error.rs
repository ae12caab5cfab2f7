//! Error types for icon switching.

use thiserror::Error;

/// Errors surfaced by the icon switching core.
#[derive(Debug, Error)]
pub enum IconError {
    /// Alias missing, blank, or not a member of the declared variant set.
    /// Detected before any side effect; no component state changed.
    #[error("invalid alias: {0}")]
    InvalidArgument(String),

    /// A registry mutation failed partway through the enable/disable
    /// sequence. Mutations already applied are not rolled back; the
    /// payload is the backend's message, forwarded verbatim (may be
    /// empty).
    #[error("icon switch failed: {0}")]
    SwitchFailed(String),
}

/// Result type for icon switching operations.
pub type Result<T> = std::result::Result<T, IconError>;
