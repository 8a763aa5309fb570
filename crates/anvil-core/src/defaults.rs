//! Static default tables consulted during validation and resolution.
//!
//! Each [`SettingsVersion`] maps to a table of default build flags. V2 is
//! strictly additive over V1: it introduces new defaults but never removes
//! one. Target types map to the modules they implicitly require, and build
//! configurations map to their optimization/debug-info defaults.

use crate::context::BuildConfiguration;
use crate::descriptor::{SettingsVersion, TargetType};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Supported settings versions
// ---------------------------------------------------------------------------

/// Settings versions the resolver has a flag table for. Validation rejects
/// descriptors outside this set so resolve never sees one.
pub const SUPPORTED_VERSIONS: [SettingsVersion; 2] = [SettingsVersion::V1, SettingsVersion::V2];

pub fn is_supported(version: SettingsVersion) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}

// ---------------------------------------------------------------------------
// Default flag tables
// ---------------------------------------------------------------------------

const V1_DEFAULTS: &[(&str, &str)] = &[
    ("CppStandard", "cpp17"),
    ("IncludeOrderPolicy", "permissive"),
    ("PchUsage", "shared"),
    ("UnityBuild", "true"),
];

// New keys only. Adding a key already present in V1 would break the
// strictly-additive contract.
const V2_ADDITIONS: &[(&str, &str)] = &[
    ("DefaultWarningLevel", "error"),
    ("ShadowVariableWarnings", "true"),
    ("StrictConformance", "true"),
];

/// The default flag table for a settings version.
pub fn default_flags(version: SettingsVersion) -> BTreeMap<String, String> {
    let mut flags: BTreeMap<String, String> = V1_DEFAULTS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if version == SettingsVersion::V2 {
        for (k, v) in V2_ADDITIONS {
            flags.insert(k.to_string(), v.to_string());
        }
    }
    flags
}

// ---------------------------------------------------------------------------
// Per-configuration flags
// ---------------------------------------------------------------------------

/// Flags contributed by the build configuration.
pub fn configuration_flags(configuration: BuildConfiguration) -> BTreeMap<String, String> {
    let (optimization, debug_info) = match configuration {
        BuildConfiguration::Debug => ("none", "full"),
        BuildConfiguration::Development => ("balanced", "full"),
        BuildConfiguration::Shipping => ("full", "stripped"),
    };
    BTreeMap::from([
        ("Optimization".to_string(), optimization.to_string()),
        ("DebugInfo".to_string(), debug_info.to_string()),
    ])
}

// ---------------------------------------------------------------------------
// Type-implied modules
// ---------------------------------------------------------------------------

/// Modules a target type implicitly requires. The resolver appends these
/// after the explicitly listed modules, skipping any already present.
pub fn implied_modules(target_type: TargetType) -> &'static [&'static str] {
    match target_type {
        TargetType::Editor => &["EditorFramework"],
        TargetType::Game
        | TargetType::Server
        | TargetType::Client
        | TargetType::Program => &[],
    }
}

// ===========================================================================
// Tests
// ===========================================================================
