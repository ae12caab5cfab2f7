//! The `app_icon` method channel.
//!
//! Request gateway between the application shell and the icon switcher.
//! Mirrors platform method-channel semantics: a named operation with a
//! JSON-shaped argument map in, a structured success / not-implemented /
//! error response out. Every failure is absorbed here into a response;
//! nothing escapes to the shell as a panic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IconError;
use crate::registry::ComponentRegistry;
use crate::switcher::switch_icon;
use crate::variant::IconVariant;

/// Channel name the application shell binds this gateway to.
pub const CHANNEL_NAME: &str = "app_icon";

/// Wire error codes surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Alias missing, blank, or not a declared variant.
    #[serde(rename = "BAD_ARGS")]
    BadArgs,
    /// The underlying registry mutation failed.
    #[serde(rename = "SWITCH_FAILED")]
    SwitchFailed,
}

impl ErrorCode {
    /// Wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadArgs => "BAD_ARGS",
            ErrorCode::SwitchFailed => "SWITCH_FAILED",
        }
    }
}

/// One incoming request from the shell.
#[derive(Clone, Debug, Deserialize)]
pub struct MethodCall {
    /// Operation name, e.g. `switchIcon`.
    pub method: String,
    /// Named arguments; `Value::Null` when the call carries none.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Build a call from a method name and argument map.
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// String argument by key, if present and a string.
    pub fn argument_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }
}

/// Structured response to the shell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum MethodResponse {
    /// Operation completed.
    Success(bool),
    /// Method name not recognized. Distinct from an error; no side effect
    /// was performed.
    NotImplemented,
    /// Operation rejected or failed.
    Error {
        code: ErrorCode,
        message: String,
    },
}

/// Request gateway bound to a [`ComponentRegistry`] backend and the host
/// application's package name.
pub struct IconChannel<R> {
    registry: R,
    package: String,
}

impl<R: ComponentRegistry> IconChannel<R> {
    /// Bind the gateway to a registry backend and package.
    pub fn new(registry: R, package: impl Into<String>) -> Self {
        Self {
            registry,
            package: package.into(),
        }
    }

    /// Package name the channel switches components within.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Borrow the registry backend.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Reclaim the registry backend.
    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Dispatch one call and produce its response.
    pub fn handle(&mut self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            "switchIcon" => self.switch_icon(call),
            other => {
                tracing::debug!(method = other, "unrecognized method on app_icon channel");
                MethodResponse::NotImplemented
            }
        }
    }

    fn switch_icon(&mut self, call: &MethodCall) -> MethodResponse {
        let alias = call.argument_str("alias").unwrap_or("");
        if alias.trim().is_empty() {
            return MethodResponse::Error {
                code: ErrorCode::BadArgs,
                message: "alias is required".to_string(),
            };
        }

        // Total parse: a non-member alias is rejected here, before any
        // registry mutation.
        let variant = match alias.parse::<IconVariant>() {
            Ok(variant) => variant,
            Err(IconError::InvalidArgument(message)) | Err(IconError::SwitchFailed(message)) => {
                return MethodResponse::Error {
                    code: ErrorCode::BadArgs,
                    message,
                };
            }
        };

        match switch_icon(&mut self.registry, &self.package, variant) {
            Ok(()) => MethodResponse::Success(true),
            Err(IconError::SwitchFailed(message)) => MethodResponse::Error {
                code: ErrorCode::SwitchFailed,
                message,
            },
            Err(IconError::InvalidArgument(message)) => MethodResponse::Error {
                code: ErrorCode::BadArgs,
                message,
            },
        }
    }
}
