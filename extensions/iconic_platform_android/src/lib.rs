//! Iconic Android backend.
//!
//! PackageManager bridge for the `app_icon` channel: enables the alias
//! component for the requested icon variant and disables the others.

mod logging;
mod registry;

pub use logging::init_logging;
pub use registry::PackageManagerRegistry;

#[cfg(target_os = "android")]
use android_activity::AndroidApp;
#[cfg(target_os = "android")]
use iconic_platform::{IconChannel, RegistryError};

/// Build an `app_icon` channel bound to the host app's own package.
#[cfg(target_os = "android")]
pub fn channel_for_app(app: &AndroidApp) -> Result<IconChannel<PackageManagerRegistry>, RegistryError> {
    let registry = PackageManagerRegistry::from_android_app(app)?;
    let package = registry.package_name()?;
    Ok(IconChannel::new(registry, package))
}
