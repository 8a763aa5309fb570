//! Contextual build parameters supplied by the orchestrator at resolve time.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Build configuration
// ---------------------------------------------------------------------------

/// Optimization/debug profile selected for a build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildConfiguration {
    Debug,
    Development,
    Shipping,
}

impl BuildConfiguration {
    /// The canonical string form used in data files and flag values.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Development => "Development",
            BuildConfiguration::Shipping => "Shipping",
        }
    }

    pub fn parse(s: &str) -> Option<BuildConfiguration> {
        match s {
            "Debug" => Some(BuildConfiguration::Debug),
            "Development" => Some(BuildConfiguration::Development),
            "Shipping" => Some(BuildConfiguration::Shipping),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Build context
// ---------------------------------------------------------------------------

/// Parameters a resolve call carries alongside the target name.
///
/// The platform identifier is a free-form string: the orchestrator owns the
/// platform vocabulary and this subsystem passes it through into the resolved
/// flag set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    pub platform: String,
    pub configuration: BuildConfiguration,
}

impl BuildContext {
    pub fn new(platform: impl Into<String>, configuration: BuildConfiguration) -> Self {
        Self {
            platform: platform.into(),
            configuration,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
