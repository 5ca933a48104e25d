//! # Error Types
//!
//! The store itself never fails on create or read; a missing record is a
//! `None`, not an error. The only failing operation is a conditional update,
//! and [`StoreError`] tells its two failure causes apart for callers that
//! need more than the boolean the domain operations expose.

use thiserror::Error;

use crate::identity::RecordId;

/// Top-level error type for the Virtual Universe stack.
#[derive(Error, Debug)]
pub enum VuError {
    /// A timestamp is outside the representable range.
    #[error("timestamp error: {0}")]
    Timestamp(String),
}

/// Why a conditional update did not apply.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record has been issued under this id.
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// The record exists but the update predicate rejected it.
    #[error("precondition failed for record {0}")]
    PreconditionFailed(RecordId),
}
