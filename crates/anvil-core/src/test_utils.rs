//! Shared fixtures for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::context::{BuildConfiguration, BuildContext};
use crate::descriptor::{ModuleList, SettingsVersion, TargetDescriptor, TargetType};
use crate::registry::DescriptorRegistry;

// ===========================================================================
// Descriptor fixtures
// ===========================================================================

/// The declared example target: Editor type, V2 settings, one module.
pub fn editor_target() -> TargetDescriptor {
    TargetDescriptor::new(
        "GraphDevEditor",
        TargetType::Editor,
        SettingsVersion::V2,
        ModuleList::from_names(["GraphDev"]).unwrap(),
    )
    .unwrap()
}

pub fn game_target() -> TargetDescriptor {
    TargetDescriptor::new(
        "GraphDev",
        TargetType::Game,
        SettingsVersion::V2,
        ModuleList::from_names(["GraphDev"]).unwrap(),
    )
    .unwrap()
}

pub fn server_target() -> TargetDescriptor {
    TargetDescriptor::new(
        "GraphDevServer",
        TargetType::Server,
        SettingsVersion::V1,
        ModuleList::from_names(["GraphDev", "NetCore"]).unwrap(),
    )
    .unwrap()
}

/// A descriptor with a caller-chosen name and module set, Game/V1 otherwise.
pub fn named_target(name: &str, modules: &[&str]) -> TargetDescriptor {
    TargetDescriptor::new(
        name,
        TargetType::Game,
        SettingsVersion::V1,
        ModuleList::from_names(modules.iter().copied()).unwrap(),
    )
    .unwrap()
}

// ===========================================================================
// Context fixtures
// ===========================================================================

pub fn dev_context() -> BuildContext {
    BuildContext::new("Win64", BuildConfiguration::Development)
}

pub fn shipping_context() -> BuildContext {
    BuildContext::new("Linux", BuildConfiguration::Shipping)
}

// ===========================================================================
// Registry fixtures
// ===========================================================================

/// A registry preloaded with the editor, game, and server fixtures.
pub fn populated_registry() -> DescriptorRegistry {
    let registry = DescriptorRegistry::new();
    registry.register(editor_target()).unwrap();
    registry.register(game_target()).unwrap();
    registry.register(server_target()).unwrap();
    registry
}
