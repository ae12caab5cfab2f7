//! End-to-end flow through the `app_icon` channel against a fake
//! component registry that tracks enablement state.

use std::collections::BTreeMap;

use serde_json::json;

use iconic_platform::{
    ComponentName, ComponentRegistry, ErrorCode, IconChannel, IconVariant, MethodCall,
    MethodResponse, RegistryError,
};

const PACKAGE: &str = "com.example.app";

/// Fake registry: tracks per-component enablement and can fail a chosen
/// mutation to exercise the partial-failure path.
#[derive(Default)]
struct FakeRegistry {
    state: BTreeMap<String, bool>,
    calls: usize,
    fail_on_call: Option<usize>,
    fail_message: String,
}

impl FakeRegistry {
    fn failing_on(call: usize, message: &str) -> Self {
        Self {
            fail_on_call: Some(call),
            fail_message: message.to_string(),
            ..Self::default()
        }
    }

    fn enabled_classes(&self) -> Vec<&str> {
        self.state
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(class, _)| class.as_str())
            .collect()
    }
}

impl ComponentRegistry for FakeRegistry {
    fn set_enabled(
        &mut self,
        component: &ComponentName,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        self.calls += 1;
        if self.fail_on_call == Some(self.calls) {
            return Err(RegistryError::new(self.fail_message.clone()));
        }
        self.state.insert(component.class().to_string(), enabled);
        Ok(())
    }
}

fn switch_call(alias: &str) -> MethodCall {
    MethodCall::new("switchIcon", json!({ "alias": alias }))
}

#[test]
fn each_valid_alias_enables_exactly_its_component() {
    for variant in IconVariant::ALL {
        let mut channel = IconChannel::new(FakeRegistry::default(), PACKAGE);
        let response = channel.handle(&switch_call(variant.alias()));
        assert_eq!(response, MethodResponse::Success(true));

        let registry = channel_registry(channel);
        assert_eq!(registry.state.len(), 3, "all three components touched");
        let expected = variant.component(PACKAGE).class().to_string();
        assert_eq!(
            registry.enabled_classes(),
            vec![expected.as_str()],
            "only the {} component should be enabled",
            variant.alias()
        );
    }
}

#[test]
fn switching_twice_to_the_same_variant_is_idempotent() {
    let mut channel = IconChannel::new(FakeRegistry::default(), PACKAGE);

    assert_eq!(
        channel.handle(&switch_call("MainActivityAliasOutline")),
        MethodResponse::Success(true)
    );
    let first = channel_state_snapshot(&channel);

    assert_eq!(
        channel.handle(&switch_call("MainActivityAliasOutline")),
        MethodResponse::Success(true)
    );
    let second = channel_state_snapshot(&channel);

    assert_eq!(first, second);
}

#[test]
fn failure_on_second_mutation_keeps_the_first_and_reports_switch_failed() {
    // First call disables Classic; the second (enable Outline) throws.
    let registry = FakeRegistry::failing_on(2, "security exception");
    let mut channel = IconChannel::new(registry, PACKAGE);

    let response = channel.handle(&switch_call("MainActivityAliasOutline"));
    assert_eq!(
        response,
        MethodResponse::Error {
            code: ErrorCode::SwitchFailed,
            message: "security exception".to_string(),
        }
    );

    let registry = channel_registry(channel);
    assert_eq!(registry.calls, 2, "sequence stops at the failing call");
    assert_eq!(
        registry.state.get("com.example.app.MainActivityAliasClassic"),
        Some(&false),
        "the first mutation is not rolled back"
    );
    assert!(
        !registry
            .state
            .contains_key("com.example.app.MainActivityAliasOutline"),
        "the failing mutation took no effect"
    );
}

#[test]
fn empty_backend_message_is_forwarded_verbatim() {
    let registry = FakeRegistry::failing_on(1, "");
    let mut channel = IconChannel::new(registry, PACKAGE);

    let response = channel.handle(&switch_call("MainActivityAliasClassic"));
    assert_eq!(
        response,
        MethodResponse::Error {
            code: ErrorCode::SwitchFailed,
            message: String::new(),
        }
    );
}

#[test]
fn rejected_requests_leave_the_registry_untouched() {
    let mut channel = IconChannel::new(FakeRegistry::default(), PACKAGE);

    for call in [
        MethodCall::new("doSomethingElse", serde_json::Value::Null),
        MethodCall::new("switchIcon", serde_json::Value::Null),
        switch_call("   "),
        switch_call("Nonexistent"),
    ] {
        let response = channel.handle(&call);
        assert_ne!(response, MethodResponse::Success(true));
    }

    let registry = channel_registry(channel);
    assert_eq!(registry.calls, 0);
    assert!(registry.state.is_empty());
}

fn channel_registry(channel: IconChannel<FakeRegistry>) -> FakeRegistry {
    channel.into_registry()
}

fn channel_state_snapshot(channel: &IconChannel<FakeRegistry>) -> BTreeMap<String, bool> {
    channel.registry().state.clone()
}
