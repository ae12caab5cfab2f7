//! The closed set of launcher icon variants.
//!
//! Each variant corresponds to one manifest-declared activity alias
//! carrying its own icon and label. The set is fixed at compile time;
//! incoming alias strings are parsed totally, so a value outside the set
//! is rejected before any component state is touched.

use std::fmt;
use std::str::FromStr;

use crate::component::ComponentName;
use crate::error::IconError;

/// A declared launcher icon variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Classic,
    Outline,
    Gradient,
}

impl IconVariant {
    /// All variants, in declared order. The switcher walks this set.
    pub const ALL: [IconVariant; 3] = [
        IconVariant::Classic,
        IconVariant::Outline,
        IconVariant::Gradient,
    ];

    /// Simple class name of the manifest activity alias for this variant.
    pub const fn alias(&self) -> &'static str {
        match self {
            IconVariant::Classic => "MainActivityAliasClassic",
            IconVariant::Outline => "MainActivityAliasOutline",
            IconVariant::Gradient => "MainActivityAliasGradient",
        }
    }

    /// Component identifier for this variant within `package`.
    ///
    /// The alias class lives in the application package, so the
    /// fully-qualified class is `{package}.{alias}`.
    pub fn component(&self, package: &str) -> ComponentName {
        ComponentName::new(package, format!("{package}.{}", self.alias()))
    }
}

impl FromStr for IconVariant {
    type Err = IconError;

    /// Exact match against the declared alias names. No trimming, no case
    /// folding: anything but the three literal names is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconVariant::ALL
            .into_iter()
            .find(|variant| variant.alias() == s)
            .ok_or_else(|| IconError::InvalidArgument(format!("unknown icon alias: {s:?}")))
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
