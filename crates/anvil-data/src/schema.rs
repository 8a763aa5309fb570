//! Serde data file structs for target declarations.
//!
//! These structs define the on-disk format for build-target descriptors.
//! They are deserialized from RON, JSON, or TOML data files and then
//! validated into typed descriptors by the registrar.

use anvil_core::descriptor::TargetRecord;
use serde::Deserialize;

// ===========================================================================
// Targets
// ===========================================================================

/// A build-target declaration in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetData {
    pub name: String,
    #[serde(rename = "type")]
    pub target_type: String,
    pub settings: String,
    #[serde(default)]
    pub modules: Vec<String>,
}

impl TargetData {
    /// Convert into the raw record form that core validation consumes.
    pub fn into_record(self) -> TargetRecord {
        TargetRecord {
            name: self.name,
            target_type: self.target_type,
            settings: self.settings,
            modules: self.modules,
        }
    }
}

// ===========================================================================
// TOML wrappers (TOML does not support top-level arrays)
// ===========================================================================

/// Wrapper for a list of targets in TOML format.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTargets {
    pub targets: Vec<TargetData>,
}

// ===========================================================================
// Tests
// ===========================================================================
