//! Descriptor validation, pure and side-effect-free.
//!
//! [`validate`] checks a typed descriptor's internal consistency before the
//! registry accepts it. [`validate_record`] does the same for the raw string
//! form coming out of data files, producing the typed descriptor on success.
//! Neither function mutates its input or any global state.

use crate::defaults;
use crate::descriptor::{
    DescriptorError, ModuleList, SettingsVersion, TargetDescriptor, TargetRecord, TargetType,
};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Why a descriptor failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The target type string is not a recognized enumerated value.
    #[error("unknown target type '{0}'")]
    UnknownTargetType(String),
    /// The settings version is outside the resolver's supported table.
    #[error("unsupported settings version '{0}'")]
    UnsupportedSettingsVersion(String),
    /// The module list contains an empty or duplicate entry.
    #[error("invalid module list: {0}")]
    InvalidModuleList(String),
    /// The descriptor itself could not be constructed.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

// ---------------------------------------------------------------------------
// Typed validation
// ---------------------------------------------------------------------------

/// Validate a typed descriptor.
///
/// The module-list checks repeat what [`ModuleList`] already enforces at
/// construction. Descriptors can also arrive through deserialization, which
/// bypasses construction, so the registry relies on this check rather than
/// on how the value was built.
pub fn validate(descriptor: &TargetDescriptor) -> Result<(), ValidationError> {
    if !defaults::is_supported(descriptor.settings()) {
        return Err(ValidationError::UnsupportedSettingsVersion(
            descriptor.settings().as_str().to_string(),
        ));
    }
    check_module_names(descriptor.modules().iter().map(|m| m.as_str()))
}

fn check_module_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(ValidationError::InvalidModuleList(
                "empty module name".to_string(),
            ));
        }
        if !seen.insert(name) {
            return Err(ValidationError::InvalidModuleList(format!(
                "duplicate module '{name}'"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Record validation
// ---------------------------------------------------------------------------

/// Validate a raw record and produce the typed descriptor.
///
/// This is where `UnknownTargetType` is reachable: the typed enum cannot
/// hold an unrecognized value, so the string form is checked here before
/// construction.
pub fn validate_record(record: &TargetRecord) -> Result<TargetDescriptor, ValidationError> {
    let target_type = TargetType::parse(&record.target_type)
        .ok_or_else(|| ValidationError::UnknownTargetType(record.target_type.clone()))?;
    let settings = SettingsVersion::parse(&record.settings)
        .ok_or_else(|| ValidationError::UnsupportedSettingsVersion(record.settings.clone()))?;
    if !defaults::is_supported(settings) {
        return Err(ValidationError::UnsupportedSettingsVersion(
            record.settings.clone(),
        ));
    }
    check_module_names(record.modules.iter().map(String::as_str))?;
    let modules = ModuleList::from_names(record.modules.iter().cloned())?;
    Ok(TargetDescriptor::new(
        &record.name,
        target_type,
        settings,
        modules,
    )?)
}

// ===========================================================================
// Tests
// ===========================================================================
