//! Then steps for pubsub registration BDD scenarios.

use super::world::RegistryWorld;
use component_registry::{component::ComponentError, pubsub::services::SERVICE_NAME};
use rstest_bdd_macros::then;

#[then(r#"creation succeeds with a backend built by "{label}""#)]
fn creation_succeeds(world: &RegistryWorld, label: String) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected creation to succeed, got {err}"));
    }
    let builds = world.builds();
    if builds.last() != Some(&label) {
        return Err(eyre::eyre!(
            "expected last backend built by '{label}', build log is {builds:?}"
        ));
    }
    Ok(())
}

#[then("creation fails with a not registered error")]
fn creation_fails_not_registered(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    match result {
        Err(err @ ComponentError::NotRegistered { .. })
            if err.to_string().contains("not registered") =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected not registered error, got {other:?}")),
    }
}

#[then(r#"the constructor "{label}" was called {count:usize} times"#)]
fn constructor_call_count(
    world: &RegistryWorld,
    label: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let calls = world
        .builds()
        .iter()
        .filter(|entry| **entry == label)
        .count();
    if calls != count {
        return Err(eyre::eyre!(
            "expected constructor '{label}' to run {count} times, ran {calls}"
        ));
    }
    Ok(())
}

#[then(r#"the runtime info lists "{name}" as loaded"#)]
fn runtime_info_lists_loaded(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let component = world
        .registry
        .runtime_info()
        .component_info(SERVICE_NAME)
        .ok_or_else(|| eyre::eyre!("pubsub service missing from runtime info"))?;
    if !component.loaded().contains(&name) {
        return Err(eyre::eyre!(
            "expected '{name}' in loaded components, found {:?}",
            component.loaded()
        ));
    }
    Ok(())
}
