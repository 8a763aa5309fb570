//! Discovery and registration pipeline for on-disk target declarations.
//!
//! A target directory may hold a shared `targets.{ron,json,toml}` manifest
//! listing several targets, plus any number of per-target files named
//! `<Name>.target.{ron,json,toml}` (one declaration each). Discovery order
//! is deterministic: manifest entries first in file order, then per-target
//! files sorted by file name.

use crate::loader::{
    DataLoadError, deserialize_file, deserialize_list, detect_format, find_data_file,
};
use crate::schema::TargetData;
use anvil_core::descriptor::TargetRecord;
use anvil_core::registry::{DescriptorRegistry, RegistryError};
use anvil_core::validation;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Base name of the shared manifest file.
const MANIFEST_BASE: &str = "targets";

/// Suffix (before the format extension) marking a per-target file.
const TARGET_SUFFIX: &str = ".target";

// ===========================================================================
// Discovery
// ===========================================================================

/// Find every per-target declaration file (`*.target.{ron,json,toml}`) in a
/// directory, sorted by file name.
pub fn discover_target_files(dir: &Path) -> Result<Vec<PathBuf>, DataLoadError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.ends_with(TARGET_SUFFIX) && detect_format(&path).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ===========================================================================
// Loading
// ===========================================================================

/// Parse one per-target file into its raw record.
pub fn load_target_file(path: &Path) -> Result<TargetRecord, DataLoadError> {
    let data: TargetData = deserialize_file(path)?;
    Ok(data.into_record())
}

/// Parse a shared manifest file into raw records, in file order.
pub fn load_manifest(path: &Path) -> Result<Vec<TargetRecord>, DataLoadError> {
    let targets: Vec<TargetData> = deserialize_list(path, MANIFEST_BASE)?;
    Ok(targets.into_iter().map(TargetData::into_record).collect())
}

// ===========================================================================
// Registration pipeline
// ===========================================================================

/// Load every target declaration in `dir` and register it, returning the
/// registered names in order.
///
/// The whole directory is treated as one batch: declaring the same name
/// twice within it is an error, while a name already present in the registry
/// from an earlier batch is replaced (last registration wins).
pub fn load_and_register(
    dir: &Path,
    registry: &DescriptorRegistry,
) -> Result<Vec<String>, DataLoadError> {
    let mut batch: Vec<(PathBuf, TargetRecord)> = Vec::new();

    if let Some(manifest) = find_data_file(dir, MANIFEST_BASE)? {
        for record in load_manifest(&manifest)? {
            batch.push((manifest.clone(), record));
        }
    }
    for path in discover_target_files(dir)? {
        let record = load_target_file(&path)?;
        batch.push((path, record));
    }

    let mut seen = HashSet::new();
    for (file, record) in &batch {
        if !seen.insert(record.name.clone()) {
            return Err(DataLoadError::DuplicateTarget {
                file: file.clone(),
                name: record.name.clone(),
            });
        }
    }

    // Validate the whole batch before touching the registry, so a bad file
    // never leaves a directory half-registered.
    let mut descriptors = Vec::with_capacity(batch.len());
    for (file, record) in batch {
        let descriptor =
            validation::validate_record(&record).map_err(|source| DataLoadError::Invalid {
                file: file.clone(),
                source,
            })?;
        descriptors.push((file, descriptor));
    }

    let mut registered = Vec::with_capacity(descriptors.len());
    for (file, descriptor) in descriptors {
        let name = descriptor.name().to_string();
        registry.register(descriptor).map_err(|e| match e {
            RegistryError::ValidationFailed(source) => DataLoadError::Invalid { file, source },
        })?;
        registered.push(name);
    }
    Ok(registered)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use anvil_core::context::{BuildConfiguration, BuildContext};
    use anvil_core::resolve::resolve;
    use anvil_core::validation::ValidationError;
    use std::fs;

    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "anvil_registrar_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    fn write_editor_target(dir: &Path) {
        fs::write(
            dir.join("GraphDevEditor.target.ron"),
            r#"(name: "GraphDevEditor", type: "Editor", settings: "V2", modules: ["GraphDev"])"#,
        )
        .unwrap();
    }

    // -----------------------------------------------------------------------
    // discover_target_files
    // -----------------------------------------------------------------------

    #[test]
    fn discovery_finds_only_target_files_sorted() {
        let dir = make_test_dir("discover");
        write_editor_target(&dir);
        fs::write(
            dir.join("Alpha.target.json"),
            r#"{"name": "Alpha", "type": "Game", "settings": "V1", "modules": []}"#,
        )
        .unwrap();
        fs::write(dir.join("notes.txt"), "not a target").unwrap();
        fs::write(dir.join("targets.ron"), "[]").unwrap();

        let files = discover_target_files(&dir).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Alpha.target.json", "GraphDevEditor.target.ron"]);

        cleanup(&dir);
    }

    #[test]
    fn discovery_of_empty_directory_is_empty() {
        let dir = make_test_dir("discover_empty");
        assert!(discover_target_files(&dir).unwrap().is_empty());
        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // load_target_file / load_manifest
    // -----------------------------------------------------------------------

    #[test]
    fn per_target_file_loads_to_record() {
        let dir = make_test_dir("load_one");
        write_editor_target(&dir);

        let record = load_target_file(&dir.join("GraphDevEditor.target.ron")).unwrap();
        assert_eq!(record.name, "GraphDevEditor");
        assert_eq!(record.target_type, "Editor");
        assert_eq!(record.settings, "V2");
        assert_eq!(record.modules, vec!["GraphDev"]);

        cleanup(&dir);
    }

    #[test]
    fn manifest_loads_records_in_file_order() {
        let dir = make_test_dir("load_manifest");
        fs::write(
            dir.join("targets.toml"),
            r#"
[[targets]]
name = "GraphDev"
type = "Game"
settings = "V2"
modules = ["GraphDev"]

[[targets]]
name = "GraphDevServer"
type = "Server"
settings = "V1"
modules = ["GraphDev", "NetCore"]
"#,
        )
        .unwrap();

        let records = load_manifest(&dir.join("targets.toml")).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["GraphDev", "GraphDevServer"]);

        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // load_and_register
    // -----------------------------------------------------------------------

    #[test]
    fn directory_registers_manifest_then_target_files() {
        let dir = make_test_dir("register_all");
        fs::write(
            dir.join("targets.json"),
            r#"[{"name": "GraphDev", "type": "Game", "settings": "V2", "modules": ["GraphDev"]}]"#,
        )
        .unwrap();
        write_editor_target(&dir);

        let registry = DescriptorRegistry::new();
        let names = load_and_register(&dir, &registry).unwrap();
        assert_eq!(names, vec!["GraphDev", "GraphDevEditor"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("GraphDevEditor").is_some());

        cleanup(&dir);
    }

    #[test]
    fn registered_target_resolves_end_to_end() {
        let dir = make_test_dir("register_resolve");
        write_editor_target(&dir);

        let registry = DescriptorRegistry::new();
        load_and_register(&dir, &registry).unwrap();

        let context = BuildContext::new("Win64", BuildConfiguration::Development);
        let config = resolve(&registry, "GraphDevEditor", &context).unwrap();
        let modules: Vec<&str> = config
            .effective_modules
            .iter()
            .map(|m| m.as_str())
            .collect();
        assert_eq!(modules, vec!["GraphDev", "EditorFramework"]);

        cleanup(&dir);
    }

    #[test]
    fn duplicate_name_within_batch_fails_before_registering() {
        let dir = make_test_dir("register_dup");
        fs::write(
            dir.join("targets.json"),
            r#"[{"name": "GraphDevEditor", "type": "Game", "settings": "V1", "modules": []}]"#,
        )
        .unwrap();
        write_editor_target(&dir);

        let registry = DescriptorRegistry::new();
        let result = load_and_register(&dir, &registry);
        assert!(matches!(
            result,
            Err(DataLoadError::DuplicateTarget { ref name, .. }) if name == "GraphDevEditor"
        ));
        assert!(registry.is_empty());

        cleanup(&dir);
    }

    #[test]
    fn later_batch_replaces_earlier_registration() {
        let first = make_test_dir("register_first");
        let second = make_test_dir("register_second");
        fs::write(
            first.join("GraphDev.target.json"),
            r#"{"name": "GraphDev", "type": "Game", "settings": "V1", "modules": ["Old"]}"#,
        )
        .unwrap();
        fs::write(
            second.join("GraphDev.target.json"),
            r#"{"name": "GraphDev", "type": "Game", "settings": "V2", "modules": ["New"]}"#,
        )
        .unwrap();

        let registry = DescriptorRegistry::new();
        load_and_register(&first, &registry).unwrap();
        load_and_register(&second, &registry).unwrap();

        let found = registry.lookup("GraphDev").unwrap();
        assert!(found.modules().contains("New"));
        assert_eq!(registry.len(), 1);

        cleanup(&first);
        cleanup(&second);
    }

    #[test]
    fn invalid_declaration_reports_file_and_cause() {
        let dir = make_test_dir("register_invalid");
        fs::write(
            dir.join("Bad.target.ron"),
            r#"(name: "Bad", type: "Plugin", settings: "V2", modules: [])"#,
        )
        .unwrap();

        let registry = DescriptorRegistry::new();
        let result = load_and_register(&dir, &registry);
        match result {
            Err(DataLoadError::Invalid { file, source }) => {
                assert!(file.ends_with("Bad.target.ron"));
                assert_eq!(
                    source,
                    ValidationError::UnknownTargetType("Plugin".to_string())
                );
            }
            other => panic!("expected Invalid, got: {other:?}"),
        }
        assert!(registry.is_empty());

        cleanup(&dir);
    }
}
