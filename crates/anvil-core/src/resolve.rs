//! Resolution of a registered target into a concrete build configuration.
//!
//! Resolution merges three sources, in order: the default flag table of the
//! descriptor's settings version, the flags implied by the build context,
//! and the modules implied by the target type (appended after the explicit
//! list). It is deterministic: identical descriptor and context always
//! produce an identical [`ResolvedConfig`].

use crate::context::BuildContext;
use crate::defaults;
use crate::descriptor::{ModuleName, TargetDescriptor, TargetType};
use crate::registry::DescriptorRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// A fully resolved target configuration, ready for the orchestrator to
/// turn into compiler and linker invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub name: String,
    pub target_type: TargetType,
    /// Explicit modules in declaration order, then type-implied modules not
    /// already present. Order is link order.
    pub effective_modules: Vec<ModuleName>,
    /// Flag name to value. `BTreeMap` keeps the flag set in a stable order.
    pub flags: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// ResolveError
// ---------------------------------------------------------------------------

/// Errors raised while resolving a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No descriptor is registered under the requested name.
    #[error("unknown target '{0}'")]
    UnknownTarget(String),
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Look up `name` in the registry and resolve it against `context`.
pub fn resolve(
    registry: &DescriptorRegistry,
    name: &str,
    context: &BuildContext,
) -> Result<ResolvedConfig, ResolveError> {
    let descriptor = registry
        .lookup(name)
        .ok_or_else(|| ResolveError::UnknownTarget(name.to_string()))?;
    Ok(resolve_descriptor(&descriptor, context))
}

/// Resolve an already-looked-up descriptor. Pure computation.
pub fn resolve_descriptor(descriptor: &TargetDescriptor, context: &BuildContext) -> ResolvedConfig {
    let mut flags = defaults::default_flags(descriptor.settings());
    flags.extend(defaults::configuration_flags(context.configuration));
    flags.insert("Platform".to_string(), context.platform.clone());
    flags.insert(
        "Configuration".to_string(),
        context.configuration.as_str().to_string(),
    );

    let mut effective_modules: Vec<ModuleName> = descriptor.modules().as_slice().to_vec();
    for implied in defaults::implied_modules(descriptor.target_type()) {
        if !effective_modules.iter().any(|m| m.as_str() == *implied) {
            effective_modules.push(ModuleName::new(*implied));
        }
    }

    ResolvedConfig {
        name: descriptor.name().to_string(),
        target_type: descriptor.target_type(),
        effective_modules,
        flags,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
