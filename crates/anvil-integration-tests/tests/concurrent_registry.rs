//! Concurrency tests for the shared registry: parallel registration and
//! resolution must never observe a partially inserted descriptor.

use anvil_core::context::{BuildConfiguration, BuildContext};
use anvil_core::registry::DescriptorRegistry;
use anvil_core::resolve::resolve;
use anvil_core::test_utils::*;

// ===========================================================================
// Parallel registration
// ===========================================================================

/// Many threads registering distinct targets: all end up present.
#[test]
fn parallel_registration_registers_everything() {
    let registry = DescriptorRegistry::new();
    let thread_count = 8;
    let per_thread = 25;

    std::thread::scope(|scope| {
        for t in 0..thread_count {
            let registry = &registry;
            scope.spawn(move || {
                for i in 0..per_thread {
                    let d = named_target(&format!("Target_{t}_{i}"), &["Core"]);
                    registry.register(d).unwrap();
                }
            });
        }
    });

    assert_eq!(registry.len(), thread_count * per_thread);
    for t in 0..thread_count {
        for i in 0..per_thread {
            assert!(registry.lookup(&format!("Target_{t}_{i}")).is_some());
        }
    }
}

// ===========================================================================
// Readers concurrent with a writer
// ===========================================================================

/// Readers racing a writer always see either the old or the new descriptor,
/// never a torn one.
#[test]
fn readers_never_observe_partial_replacement() {
    let registry = DescriptorRegistry::new();
    registry
        .register(named_target("Contended", &["Old"]))
        .unwrap();
    let context = BuildContext::new("Win64", BuildConfiguration::Development);

    std::thread::scope(|scope| {
        let writer_registry = &registry;
        scope.spawn(move || {
            for round in 0..200 {
                let modules = if round % 2 == 0 { ["New"] } else { ["Old"] };
                writer_registry
                    .register(named_target("Contended", &modules))
                    .unwrap();
            }
        });

        for _ in 0..4 {
            let registry = &registry;
            let context = &context;
            scope.spawn(move || {
                for _ in 0..200 {
                    let config = resolve(registry, "Contended", context).unwrap();
                    let modules: Vec<&str> = config
                        .effective_modules
                        .iter()
                        .map(|m| m.as_str())
                        .collect();
                    assert!(
                        modules == vec!["Old"] || modules == vec!["New"],
                        "torn read: {modules:?}"
                    );
                }
            });
        }
    });

    assert_eq!(registry.len(), 1);
}

// ===========================================================================
// Enumeration concurrent with registration
// ===========================================================================

/// `list_all` snapshots taken while registrations are in flight are always
/// prefixes of the final registration order, never partial entries.
#[test]
fn enumeration_snapshots_are_consistent() {
    let registry = DescriptorRegistry::new();
    let total = 100;

    std::thread::scope(|scope| {
        let writer_registry = &registry;
        scope.spawn(move || {
            for i in 0..total {
                writer_registry
                    .register(named_target(&format!("Seq{i:03}"), &["Core"]))
                    .unwrap();
            }
        });

        let reader_registry = &registry;
        scope.spawn(move || {
            for _ in 0..50 {
                let snapshot = reader_registry.list_all();
                for (i, d) in snapshot.iter().enumerate() {
                    assert_eq!(d.name(), format!("Seq{i:03}"));
                }
            }
        });
    });

    assert_eq!(registry.len(), total);
}
