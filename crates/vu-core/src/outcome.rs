//! # Operation Outcome Envelope
//!
//! Domain operations report `{ success, result }` rather than an error type.
//! Create-style operations always succeed and carry the new id in `result`;
//! update-style operations carry no result and signal failure only through
//! `success: false`.

use serde::{Deserialize, Serialize};

/// The `{ success, result }` envelope returned by registry operations.
///
/// `result` is omitted from the serialized form when absent, so a transfer
/// serializes as `{"success":true}` and an issue as
/// `{"success":true,"result":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// Whether the operation took effect.
    pub success: bool,
    /// The value produced by a successful operation, if it produces one.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
        }
    }
}

impl Outcome<()> {
    /// An outcome with no result payload, succeeding iff `success`.
    pub fn from_success(success: bool) -> Self {
        Self {
            success,
            result: None,
        }
    }
}
