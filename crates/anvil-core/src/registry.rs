//! Process-wide registry of validated target descriptors.
//!
//! One `DescriptorRegistry` is shared across the whole build process. All
//! operations take `&self`: an interior `RwLock` serializes `register`
//! against every other operation, while lookups and enumeration may run
//! concurrently with each other. The lock is held only for the map update
//! itself; validation runs outside it.

use crate::descriptor::TargetDescriptor;
use crate::validation::{self, ValidationError};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Registry of target descriptors keyed by unique name.
///
/// Registration is last-write-wins: re-registering a name atomically replaces
/// the prior entry. A failed `register` leaves the contents untouched. The
/// registry starts empty and owns every descriptor until cleared or dropped.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    /// Descriptors in first-registration order. A replaced entry keeps its
    /// original position so enumeration order stays stable.
    entries: Vec<TargetDescriptor>,
    index: HashMap<String, usize>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a descriptor, replacing any prior entry with the
    /// same name.
    pub fn register(&self, descriptor: TargetDescriptor) -> Result<(), RegistryError> {
        validation::validate(&descriptor)?;
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match inner.index.get(descriptor.name()).copied() {
            Some(slot) => inner.entries[slot] = descriptor,
            None => {
                let slot = inner.entries.len();
                inner.index.insert(descriptor.name().to_string(), slot);
                inner.entries.push(descriptor);
            }
        }
        Ok(())
    }

    /// The current descriptor for `name`, if any. Absence is a normal
    /// outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<TargetDescriptor> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .index
            .get(name)
            .map(|&slot| inner.entries[slot].clone())
    }

    /// Snapshot of every registered descriptor in registration order.
    pub fn list_all(&self) -> Vec<TargetDescriptor> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.clone()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every descriptor. Used at process teardown.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.entries.clear();
        inner.index.clear();
    }
}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// Errors raised by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The descriptor failed validation and was not inserted.
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

// ===========================================================================
// Tests
// ===========================================================================
