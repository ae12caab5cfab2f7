//! PackageManager-backed component registry.
//!
//! Enablement changes go through
//! `PackageManager#setComponentEnabledSetting` with `DONT_KILL_APP`, so
//! switching the icon does not restart the host process. The OS persists
//! the resulting state across process restarts; this code never reads it
//! back.

use iconic_platform::{ComponentName, ComponentRegistry, RegistryError};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
use jni::objects::{GlobalRef, JObject, JString, JValue};
#[cfg(target_os = "android")]
use jni::{JNIEnv, JavaVM};

// android.content.pm.PackageManager constants
#[cfg(target_os = "android")]
const COMPONENT_ENABLED_STATE_ENABLED: i32 = 1;
#[cfg(target_os = "android")]
const COMPONENT_ENABLED_STATE_DISABLED: i32 = 2;
#[cfg(target_os = "android")]
const DONT_KILL_APP: i32 = 1;

/// Component registry backed by the Android `PackageManager`.
pub struct PackageManagerRegistry {
    #[cfg(target_os = "android")]
    vm: JavaVM,
    #[cfg(target_os = "android")]
    context: GlobalRef,
}

#[cfg(target_os = "android")]
impl PackageManagerRegistry {
    /// Build a registry from the host `AndroidApp`'s VM and activity
    /// context.
    pub fn from_android_app(app: &AndroidApp) -> Result<Self, RegistryError> {
        // SAFETY: android-activity guarantees both pointers stay valid for
        // the lifetime of the app.
        let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr() as *mut _) }
            .map_err(|e| RegistryError::new(format!("JavaVM unavailable: {e}")))?;

        let context = {
            let mut env = vm
                .attach_current_thread()
                .map_err(|e| RegistryError::new(format!("JNI attach failed: {e}")))?;
            let activity =
                unsafe { JObject::from_raw(app.activity_as_ptr() as jni::sys::jobject) };
            env.new_global_ref(&activity)
                .map_err(|e| RegistryError::new(format!("global ref failed: {e}")))?
        };

        Ok(Self { vm, context })
    }

    /// Read the application package name from the context.
    pub fn package_name(&self) -> Result<String, RegistryError> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| RegistryError::new(format!("JNI attach failed: {e}")))?;

        let name = env
            .call_method(
                self.context.as_obj(),
                "getPackageName",
                "()Ljava/lang/String;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| RegistryError::new(format!("getPackageName failed: {e}")))?;

        let name = JString::from(name);
        let name = env
            .get_string(&name)
            .map_err(|e| RegistryError::new(format!("string conversion failed: {e}")))?;
        Ok(name.into())
    }
}

/// Clear a pending Java exception and return its message, if one is set.
///
/// `setComponentEnabledSetting` signals failure by throwing (for example
/// `SecurityException`); the message is forwarded to the caller verbatim
/// and may be empty.
#[cfg(target_os = "android")]
fn take_exception_message(env: &mut JNIEnv) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;

    let message = env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .ok()?;
    if message.is_null() {
        return Some(String::new());
    }
    let message = JString::from(message);
    env.get_string(&message).ok().map(Into::into)
}

#[cfg(target_os = "android")]
impl ComponentRegistry for PackageManagerRegistry {
    fn set_enabled(
        &mut self,
        component: &ComponentName,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| RegistryError::new(format!("JNI attach failed: {e}")))?;

        let package = env
            .new_string(component.package())
            .map_err(|e| RegistryError::new(format!("string alloc failed: {e}")))?;
        let class = env
            .new_string(component.class())
            .map_err(|e| RegistryError::new(format!("string alloc failed: {e}")))?;
        let component = env
            .new_object(
                "android/content/ComponentName",
                "(Ljava/lang/String;Ljava/lang/String;)V",
                &[JValue::Object(&package), JValue::Object(&class)],
            )
            .map_err(|e| RegistryError::new(format!("ComponentName alloc failed: {e}")))?;

        let package_manager = env
            .call_method(
                self.context.as_obj(),
                "getPackageManager",
                "()Landroid/content/pm/PackageManager;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| RegistryError::new(format!("getPackageManager failed: {e}")))?;

        let state = if enabled {
            COMPONENT_ENABLED_STATE_ENABLED
        } else {
            COMPONENT_ENABLED_STATE_DISABLED
        };
        let outcome = env.call_method(
            &package_manager,
            "setComponentEnabledSetting",
            "(Landroid/content/ComponentName;II)V",
            &[
                JValue::Object(&component),
                JValue::Int(state),
                JValue::Int(DONT_KILL_APP),
            ],
        );

        if let Some(message) = take_exception_message(&mut env) {
            return Err(RegistryError::new(message));
        }
        outcome
            .map(|_| ())
            .map_err(|e| RegistryError::new(format!("setComponentEnabledSetting failed: {e}")))
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl PackageManagerRegistry {
    /// Create a placeholder registry (fails on non-Android).
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for PackageManagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl ComponentRegistry for PackageManagerRegistry {
    fn set_enabled(
        &mut self,
        component: &ComponentName,
        _enabled: bool,
    ) -> Result<(), RegistryError> {
        tracing::warn!(component = %component, "component enablement requested on non-Android host");
        Err(RegistryError::new(
            "component enablement only available on Android",
        ))
    }
}
