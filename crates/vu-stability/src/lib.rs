//! # vu-stability — Simulation Stability Monitor
//!
//! Collects timestamped stability assessments of universes and answers
//! per-universe score queries.
//!
//! - [`StabilityReport`] (`report.rs`): immutable once submitted.
//! - [`StabilityMonitor`] (`monitor.rs`): submit / get over a
//!   `RecordStore<StabilityReport>`, the highest-score query, and lookups by
//!   universe.
//!
//! Reports are append-only. Several reports may reference the same universe;
//! their order is the order of their ids.

pub mod monitor;
pub mod report;

pub use monitor::StabilityMonitor;
pub use report::StabilityReport;
