//! # vu-core — Foundational Types for the Virtual Universe Stack
//!
//! Every other crate in the workspace depends on `vu-core`; it depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`RecordStore`] — generic keyed record container with monotonic id
//!   issuance and predicate-gated updates. One instance per record type.
//! - [`RecordId`], [`UniverseId`] — integer newtypes. A `RecordId` is issued
//!   by a store; a `UniverseId` is an opaque key owned by some external
//!   universe registry and is never validated here.
//! - [`Timestamp`] — UTC instant with millisecond precision, serialized as
//!   epoch milliseconds.
//! - [`Outcome`] — the `{ success, result }` envelope returned by the domain
//!   registries built on top of the store.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vu-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - State lives in explicit store values. There is no module-level state.

pub mod error;
pub mod identity;
pub mod outcome;
pub mod store;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{StoreError, VuError};
pub use identity::{RecordId, UniverseId};
pub use outcome::Outcome;
pub use store::RecordStore;
pub use temporal::Timestamp;
