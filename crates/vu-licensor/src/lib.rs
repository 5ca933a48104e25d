//! # vu-licensor — Experience Licensor
//!
//! Issues licenses that grant a recipient usage rights over a universe for a
//! fixed duration, and lets the holder of a transferable license hand it to a
//! new owner.
//!
//! - [`License`] (`license.rs`): the record. `transferable` is fixed at
//!   issue; `owner` changes only through a successful transfer.
//! - [`LicenseRegistry`] (`registry.rs`): issue / get / transfer over a
//!   `RecordStore<License>`, plus read-only queries by universe and owner.
//!
//! Expiration is recorded but never enforced: an expired license can still
//! be read and transferred.

pub mod license;
pub mod registry;

pub use license::{License, LicenseError};
pub use registry::LicenseRegistry;
