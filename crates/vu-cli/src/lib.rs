//! # vu-cli — Virtual Universe Command-Line Interface
//!
//! A local front end over the in-memory licensor and stability monitor.
//! Nothing is persisted: every invocation starts from empty stores.
//!
//! ## Subcommands
//!
//! - `replay` — Run a YAML script of licensor and monitor operations and
//!   print one JSON line per step.
//! - `config` — Print the effective configuration.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here so tests can
//!   drive them without a process boundary.
//! - Handlers delegate to the domain crates and hold no business logic.

pub mod config;
pub mod replay;
