//! Build-target descriptor value types.
//!
//! A [`TargetDescriptor`] is the immutable, validated form of one declared
//! build target: its name, target type, settings version, and ordered module
//! list. [`TargetRecord`] is the raw string form as it appears in data files,
//! before validation has mapped the enumerated fields to typed values.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Target type
// ---------------------------------------------------------------------------

/// What kind of binary a target builds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// The editor executable, with tooling modules linked in.
    Editor,
    /// A standalone game executable.
    Game,
    /// A dedicated server (no rendering).
    Server,
    /// A network client without server logic.
    Client,
    /// A freestanding utility program outside the engine runtime.
    Program,
}

impl TargetType {
    /// All recognized target types, in declaration order.
    pub const ALL: [TargetType; 5] = [
        TargetType::Editor,
        TargetType::Game,
        TargetType::Server,
        TargetType::Client,
        TargetType::Program,
    ];

    /// The canonical string form used in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Editor => "Editor",
            TargetType::Game => "Game",
            TargetType::Server => "Server",
            TargetType::Client => "Client",
            TargetType::Program => "Program",
        }
    }

    /// Parse the canonical string form. Returns `None` for unrecognized
    /// strings; validation turns that into an `UnknownTargetType` error.
    pub fn parse(s: &str) -> Option<TargetType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

// ---------------------------------------------------------------------------
// Settings version
// ---------------------------------------------------------------------------

/// Schema version selecting which default build flags apply to a target.
///
/// Later versions are strictly additive over earlier ones: they introduce
/// new defaults but never remove one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsVersion {
    V1,
    V2,
}

impl SettingsVersion {
    /// The canonical string form used in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsVersion::V1 => "V1",
            SettingsVersion::V2 => "V2",
        }
    }

    /// Parse the canonical string form. Returns `None` for unrecognized
    /// strings; validation turns that into `UnsupportedSettingsVersion`.
    pub fn parse(s: &str) -> Option<SettingsVersion> {
        match s {
            "V1" => Some(SettingsVersion::V1),
            "V2" => Some(SettingsVersion::V2),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Module names
// ---------------------------------------------------------------------------

/// The name of a feature module linked into a target. Cheap to clone and
/// compare; emptiness is rejected when the name enters a [`ModuleList`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        ModuleName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free sequence of module names. Order is link order and
/// is preserved exactly as entries were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleList {
    entries: Vec<ModuleName>,
}

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module name, rejecting empty names and duplicates.
    pub fn push(&mut self, name: impl Into<String>) -> Result<(), DescriptorError> {
        let name = ModuleName::new(name);
        if name.as_str().is_empty() {
            return Err(DescriptorError::EmptyModuleName);
        }
        if self.entries.contains(&name) {
            return Err(DescriptorError::DuplicateModule(name.0));
        }
        self.entries.push(name);
        Ok(())
    }

    /// Build a list from an iterator of names, preserving order and failing
    /// on the first empty or duplicate entry.
    pub fn from_names<I, S>(names: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(name)?;
        }
        Ok(list)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|m| m.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleName> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ModuleName] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Target descriptor
// ---------------------------------------------------------------------------

/// One declared build target: an immutable record of name, type, settings
/// version, and module list.
///
/// Construction enforces the name and module-list invariants and has no
/// other side effect. A registered descriptor is never mutated; re-registering
/// under the same name replaces the prior entry atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    name: String,
    target_type: TargetType,
    settings: SettingsVersion,
    modules: ModuleList,
}

impl TargetDescriptor {
    pub fn new(
        name: impl Into<String>,
        target_type: TargetType,
        settings: SettingsVersion,
        modules: ModuleList,
    ) -> Result<Self, DescriptorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        Ok(Self {
            name,
            target_type,
            settings,
            modules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn settings(&self) -> SettingsVersion {
        self.settings
    }

    pub fn modules(&self) -> &ModuleList {
        &self.modules
    }
}

// ---------------------------------------------------------------------------
// Raw record form
// ---------------------------------------------------------------------------

/// Raw string form of a target declaration, as parsed from a data file or
/// assembled by an external discovery pass. Field meanings mirror
/// [`TargetDescriptor`]; `validation::validate_record` maps the enumerated
/// fields to their typed values and enforces all invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub name: String,
    pub target_type: String,
    pub settings: String,
    pub modules: Vec<String>,
}

// ---------------------------------------------------------------------------
// DescriptorError
// ---------------------------------------------------------------------------

/// Errors raised while constructing a descriptor or its module list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The target name was empty.
    #[error("target name must not be empty")]
    EmptyName,
    /// A module entry was empty.
    #[error("module name must not be empty")]
    EmptyModuleName,
    /// A module appeared more than once.
    #[error("duplicate module '{0}'")]
    DuplicateModule(String),
}

// ===========================================================================
// Tests
// ===========================================================================
