//! Anvil Data -- on-disk target declarations for the Anvil build tool.
//!
//! Declarations live in RON, JSON, or TOML files: a shared
//! `targets.{ron,json,toml}` manifest, per-target
//! `<Name>.target.{ron,json,toml}` files, or both. This crate discovers and
//! parses them, then validates and registers the results into an
//! `anvil_core` registry.

pub mod loader;
pub mod registrar;
pub mod schema;

pub use loader::DataLoadError;
pub use registrar::{discover_target_files, load_and_register};
