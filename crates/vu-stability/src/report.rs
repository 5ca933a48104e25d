//! # Stability Report Record

use serde::{Deserialize, Serialize};

use vu_core::{Timestamp, UniverseId};

/// One assessment of a universe's simulated stability.
///
/// `stability_score` has no declared bounds. `issues` are free-form notes,
/// kept in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Universe the report is about.
    pub universe_id: UniverseId,
    /// Submission time, in epoch milliseconds.
    pub timestamp: Timestamp,
    /// Reported stability.
    pub stability_score: f64,
    /// Diagnostic notes.
    pub issues: Vec<String>,
}
