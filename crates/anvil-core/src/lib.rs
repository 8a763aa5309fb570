//! Anvil Core -- target descriptor registry and resolver for the Anvil
//! build-orchestration tool.
//!
//! Declarative build-target records pass through a fixed lifecycle:
//! constructed (or parsed from a data file), validated, registered into the
//! process-wide [`registry::DescriptorRegistry`], and later resolved against
//! a [`context::BuildContext`] into a [`resolve::ResolvedConfig`] the
//! orchestrator consumes. Every transition is atomic from the perspective of
//! other callers; there is no partially registered or partially resolved
//! state.
//!
//! # Key Types
//!
//! - [`descriptor::TargetDescriptor`] -- Immutable record of one declared
//!   target (name, type, settings version, ordered module list).
//! - [`descriptor::ModuleList`] -- Insertion-ordered, duplicate-free module
//!   sequence; order is link order.
//! - [`validation`] -- Pure validation of typed descriptors and raw records.
//! - [`registry::DescriptorRegistry`] -- Shared, lock-protected registry;
//!   last registration under a name wins.
//! - [`resolve`] -- Merges settings-version defaults, context flags, and
//!   type-implied modules into a deterministic [`resolve::ResolvedConfig`].
//! - [`defaults`] -- The static flag and implied-module tables.

pub mod context;
pub mod defaults;
pub mod descriptor;
pub mod registry;
pub mod resolve;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
