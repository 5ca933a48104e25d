//! # Replay Subcommand
//!
//! Runs a YAML script of operations against a fresh [`LicenseRegistry`] and
//! [`StabilityMonitor`], writing one JSON object per step to stdout:
//!
//! ```yaml
//! steps:
//!   - op: issue_license
//!     universe_id: 1
//!     recipient: alice
//!     duration_secs: 100
//!     transferable: true
//!   - op: transfer_license
//!     license_id: 1
//!     new_owner: bob
//!   - op: submit_stability_report
//!     universe_id: 1
//!     stability_score: 95
//!     issues: ["Minor fluctuations in gravity"]
//!   - op: latest_stability_score
//!     universe_id: 1
//! ```
//!
//! Each output line is `{"op": <name>, "output": <value>}` where `output` is
//! the operation's outcome envelope, the looked-up record (or `null`), or
//! the score.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use vu_core::{RecordId, UniverseId};
use vu_licensor::LicenseRegistry;
use vu_stability::StabilityMonitor;

use crate::config::{ClockConfig, VuConfig};

/// Arguments for the `vu replay` subcommand.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the YAML script.
    pub script: PathBuf,
}

/// A replay script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Operations to run, in order. An empty script produces no output.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Issue a license; outputs `{ success, result: <license id> }`.
    IssueLicense {
        /// Universe the license covers.
        universe_id: UniverseId,
        /// Initial owner.
        recipient: String,
        /// Validity in seconds from the replay clock's "now".
        duration_secs: u64,
        /// Whether the license may change owner.
        transferable: bool,
    },
    /// Look up a license; outputs the record or `null`.
    GetLicense {
        /// Id returned by an earlier `issue_license` step.
        license_id: RecordId,
    },
    /// Transfer a license; outputs `{ success }`.
    TransferLicense {
        /// License to transfer.
        license_id: RecordId,
        /// Owner after a successful transfer.
        new_owner: String,
    },
    /// Submit a report; outputs `{ success, result: <report id> }`.
    SubmitStabilityReport {
        /// Universe the report describes.
        universe_id: UniverseId,
        /// Reported score.
        stability_score: f64,
        /// Free-form issue notes. Defaults to none.
        #[serde(default)]
        issues: Vec<String>,
    },
    /// Look up a report; outputs the record or `null`.
    GetStabilityReport {
        /// Id returned by an earlier `submit_stability_report` step.
        report_id: RecordId,
    },
    /// Outputs the highest score reported for a universe, or 0.
    LatestStabilityScore {
        /// Universe to score.
        universe_id: UniverseId,
    },
}

impl Step {
    /// The `op` tag of this step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IssueLicense { .. } => "issue_license",
            Self::GetLicense { .. } => "get_license",
            Self::TransferLicense { .. } => "transfer_license",
            Self::SubmitStabilityReport { .. } => "submit_stability_report",
            Self::GetStabilityReport { .. } => "get_stability_report",
            Self::LatestStabilityScore { .. } => "latest_stability_score",
        }
    }
}

impl Script {
    /// Load a script from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse script {}", path.display()))
    }
}

/// Fresh in-memory stores plus the clock that stamps new records.
#[derive(Debug, Default)]
pub struct Replay {
    licenses: LicenseRegistry,
    stability: StabilityMonitor,
    clock: ClockConfig,
}

impl Replay {
    /// Empty registry and monitor, stamping records with `clock`.
    pub fn new(clock: ClockConfig) -> Self {
        Self {
            licenses: LicenseRegistry::new(),
            stability: StabilityMonitor::new(),
            clock,
        }
    }

    /// Execute one step and return its JSON output.
    pub fn execute(&self, step: &Step) -> Result<Value> {
        let output = match step {
            Step::IssueLicense {
                universe_id,
                recipient,
                duration_secs,
                transferable,
            } => {
                let outcome = self
                    .licenses
                    .issue_license_at(
                        *universe_id,
                        recipient.as_str(),
                        *duration_secs,
                        *transferable,
                        self.clock.now()?,
                    )
                    .context("issue_license failed")?;
                serde_json::to_value(outcome)?
            }
            Step::GetLicense { license_id } => {
                serde_json::to_value(self.licenses.get_license(*license_id))?
            }
            Step::TransferLicense {
                license_id,
                new_owner,
            } => serde_json::to_value(
                self.licenses
                    .transfer_license(*license_id, new_owner.as_str()),
            )?,
            Step::SubmitStabilityReport {
                universe_id,
                stability_score,
                issues,
            } => serde_json::to_value(self.stability.submit_stability_report_at(
                *universe_id,
                *stability_score,
                issues.clone(),
                self.clock.now()?,
            ))?,
            Step::GetStabilityReport { report_id } => {
                serde_json::to_value(self.stability.get_stability_report(*report_id))?
            }
            Step::LatestStabilityScore { universe_id } => {
                json!(self.stability.get_latest_stability_score(*universe_id))
            }
        };
        Ok(output)
    }

    /// Execute every step in order, writing one JSON line per step.
    ///
    /// Stops at the first step that errors.
    pub fn run(&self, script: &Script, out: &mut impl Write) -> Result<()> {
        for (index, step) in script.steps.iter().enumerate() {
            let output = self
                .execute(step)
                .with_context(|| format!("step {} ({}) failed", index + 1, step.name()))?;
            tracing::debug!(step = index + 1, op = step.name(), "step executed");
            let line = json!({ "op": step.name(), "output": output });
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Execute the replay subcommand.
pub fn run_replay(args: &ReplayArgs, config: &VuConfig) -> Result<u8> {
    let script = Script::load(&args.script)?;
    tracing::info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        "replaying script"
    );
    let replay = Replay::new(config.clock.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    replay.run(&script, &mut out)?;
    Ok(0)
}
