//! Enable one variant's component, disable the rest.

use crate::error::{IconError, Result};
use crate::registry::ComponentRegistry;
use crate::variant::IconVariant;

/// Switch the launcher icon to `variant` within `package`.
///
/// Walks [`IconVariant::ALL`] in declared order and issues one enablement
/// mutation per component: enabled for the target, disabled for the other
/// two. On success exactly one component is enabled, and repeating the
/// same switch is idempotent.
///
/// The sequence is best-effort. There is no atomicity across the three
/// mutations and no rollback: if the second or third call fails, the
/// earlier mutations stay applied and the backend's message is surfaced
/// as [`IconError::SwitchFailed`].
pub fn switch_icon<R: ComponentRegistry>(
    registry: &mut R,
    package: &str,
    variant: IconVariant,
) -> Result<()> {
    for candidate in IconVariant::ALL {
        let component = candidate.component(package);
        let enabled = candidate == variant;
        registry.set_enabled(&component, enabled).map_err(|err| {
            tracing::warn!(
                component = %component,
                enabled,
                error = %err,
                "component enablement mutation failed"
            );
            IconError::SwitchFailed(err.message().to_string())
        })?;
    }

    tracing::info!(alias = variant.alias(), "launcher icon switched");
    Ok(())
}
