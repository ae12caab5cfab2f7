//! OS-addressable component identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified name (package + class) the OS uses to address a
/// manifest-declared component such as an activity alias.
///
/// Values are built per call and never persisted; the OS component
/// registry is the only durable state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    /// Create a component name from a package and a fully-qualified class.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Owning package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fully-qualified class name.
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Android's flattened form
        write!(f, "{}/{}", self.package, self.class)
    }
}
