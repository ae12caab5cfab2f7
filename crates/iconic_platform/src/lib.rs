//! Launcher icon switching, platform-agnostic core.
//!
//! The host app declares one activity alias per icon variant in its
//! manifest; switching the icon means enabling the chosen alias component
//! and disabling the others. This crate models that flow without any OS
//! dependency:
//! - [`IconVariant`]: the closed set of declared variants
//! - [`ComponentRegistry`]: injected capability over the OS component
//!   registry, so backends (and tests) plug in
//! - [`switch_icon`]: the enable-one/disable-rest sequence
//! - [`IconChannel`]: the `app_icon` request gateway the app shell talks to

mod channel;
mod component;
mod error;
mod registry;
mod switcher;
mod variant;

pub use channel::{ErrorCode, IconChannel, MethodCall, MethodResponse, CHANNEL_NAME};
pub use component::ComponentName;
pub use error::{IconError, Result};
pub use registry::{ComponentRegistry, RegistryError};
pub use switcher::switch_icon;
pub use variant::IconVariant;
