//! # Stability Monitor
//!
//! Append-only collection of [`StabilityReport`]s with per-universe queries.
//!
//! ## Latest Score
//!
//! [`StabilityMonitor::get_latest_stability_score`] returns the highest score
//! any report has given the universe, not the score of the newest report.
//! The scan starts from 0 and only moves up on a strictly greater score, so
//! a universe with no reports, or with only non-positive or NaN scores,
//! reads as 0. [`StabilityMonitor::highest_stability_score`] returns `None`
//! in the no-report case instead.

use vu_core::{Outcome, RecordId, RecordStore, Timestamp, UniverseId};

use crate::report::StabilityReport;

/// Monitor of submitted stability reports. Cloning yields a handle to the
/// same monitor.
#[derive(Debug, Clone, Default)]
pub struct StabilityMonitor {
    store: RecordStore<StabilityReport>,
}

impl StabilityMonitor {
    /// Create an empty monitor. The first report submitted gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report timestamped now. Always succeeds; the outcome carries
    /// the new report id.
    pub fn submit_stability_report(
        &self,
        universe_id: UniverseId,
        stability_score: f64,
        issues: Vec<String>,
    ) -> Outcome<RecordId> {
        self.submit_stability_report_at(universe_id, stability_score, issues, Timestamp::now())
    }

    /// Record a report with an explicit submission time.
    pub fn submit_stability_report_at(
        &self,
        universe_id: UniverseId,
        stability_score: f64,
        issues: Vec<String>,
        timestamp: Timestamp,
    ) -> Outcome<RecordId> {
        let issue_count = issues.len();
        let id = self.store.create(StabilityReport {
            universe_id,
            timestamp,
            stability_score,
            issues,
        });
        tracing::debug!(
            report_id = %id,
            universe_id = %universe_id,
            stability_score,
            issue_count,
            "stability report submitted"
        );
        Outcome::ok(id)
    }

    /// Look up a report. Unknown ids yield `None`.
    pub fn get_stability_report(&self, report_id: RecordId) -> Option<StabilityReport> {
        self.store.get(report_id)
    }

    /// Highest score reported for `universe_id`, or 0 if none exceeds 0.
    pub fn get_latest_stability_score(&self, universe_id: UniverseId) -> f64 {
        self.store.fold(0.0, |latest, _, report| {
            if report.universe_id == universe_id && report.stability_score > latest {
                report.stability_score
            } else {
                latest
            }
        })
    }

    /// Highest score reported for `universe_id`, or `None` if it has no
    /// reports. NaN scores are ignored unless every score is NaN.
    pub fn highest_stability_score(&self, universe_id: UniverseId) -> Option<f64> {
        self.store.fold(None, |best: Option<f64>, _, report| {
            if report.universe_id != universe_id {
                return best;
            }
            Some(best.map_or(report.stability_score, |b| b.max(report.stability_score)))
        })
    }

    /// The report with the highest id for `universe_id`.
    pub fn most_recent_report(
        &self,
        universe_id: UniverseId,
    ) -> Option<(RecordId, StabilityReport)> {
        self.reports_for_universe(universe_id).pop()
    }

    /// All reports for `universe_id`, ordered by id.
    pub fn reports_for_universe(
        &self,
        universe_id: UniverseId,
    ) -> Vec<(RecordId, StabilityReport)> {
        self.store.select(|report| report.universe_id == universe_id)
    }

    /// Number of reports submitted.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no report has been submitted.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(notes: &[&str]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn should_submit_a_stability_report() {
        let monitor = StabilityMonitor::new();
        let outcome = monitor.submit_stability_report(
            UniverseId(1),
            95.0,
            issues(&["Minor fluctuations in gravity"]),
        );
        assert!(outcome.success);
        assert_eq!(outcome.result, Some(RecordId(1)));
    }

    #[test]
    fn should_retrieve_a_stability_report() {
        let monitor = StabilityMonitor::new();
        monitor.submit_stability_report(
            UniverseId(1),
            95.0,
            issues(&["Minor fluctuations in gravity"]),
        );
        let report = monitor.get_stability_report(RecordId(1)).unwrap();
        assert_eq!(report.universe_id, UniverseId(1));
        assert_eq!(report.stability_score, 95.0);
        assert_eq!(report.issues, issues(&["Minor fluctuations in gravity"]));
    }

    #[test]
    fn should_get_the_latest_stability_score_for_a_universe() {
        let monitor = StabilityMonitor::new();
        monitor.submit_stability_report(
            UniverseId(1),
            95.0,
            issues(&["Minor fluctuations in gravity"]),
        );
        monitor.submit_stability_report(
            UniverseId(1),
            98.0,
            issues(&["Improved gravity stability"]),
        );
        assert_eq!(monitor.get_latest_stability_score(UniverseId(1)), 98.0);
    }

    #[test]
    fn latest_score_is_the_maximum_not_the_newest() {
        let monitor = StabilityMonitor::new();
        monitor.submit_stability_report(UniverseId(1), 98.0, vec![]);
        monitor.submit_stability_report(UniverseId(1), 40.0, vec![]);
        assert_eq!(monitor.get_latest_stability_score(UniverseId(1)), 98.0);
        let (id, newest) = monitor.most_recent_report(UniverseId(1)).unwrap();
        assert_eq!(id, RecordId(2));
        assert_eq!(newest.stability_score, 40.0);
    }

    #[test]
    fn latest_score_ignores_other_universes() {
        let monitor = StabilityMonitor::new();
        monitor.submit_stability_report(UniverseId(1), 50.0, vec![]);
        monitor.submit_stability_report(UniverseId(2), 99.0, vec![]);
        assert_eq!(monitor.get_latest_stability_score(UniverseId(1)), 50.0);
        assert_eq!(monitor.get_latest_stability_score(UniverseId(2)), 99.0);
    }

    #[test]
    fn latest_score_defaults_to_zero() {
        let monitor = StabilityMonitor::new();
        assert_eq!(monitor.get_latest_stability_score(UniverseId(7)), 0.0);
        monitor.submit_stability_report(UniverseId(7), -12.5, vec![]);
        assert_eq!(monitor.get_latest_stability_score(UniverseId(7)), 0.0);
        monitor.submit_stability_report(UniverseId(7), f64::NAN, vec![]);
        assert_eq!(monitor.get_latest_stability_score(UniverseId(7)), 0.0);
    }

    #[test]
    fn highest_score_distinguishes_no_reports() {
        let monitor = StabilityMonitor::new();
        assert_eq!(monitor.highest_stability_score(UniverseId(1)), None);
        monitor.submit_stability_report(UniverseId(1), -3.0, vec![]);
        assert_eq!(monitor.highest_stability_score(UniverseId(1)), Some(-3.0));
        monitor.submit_stability_report(UniverseId(1), f64::NAN, vec![]);
        monitor.submit_stability_report(UniverseId(1), -1.0, vec![]);
        assert_eq!(monitor.highest_stability_score(UniverseId(1)), Some(-1.0));
    }

    #[test]
    fn unknown_report_is_absent() {
        let monitor = StabilityMonitor::new();
        assert_eq!(monitor.get_stability_report(RecordId(1)), None);
        assert!(monitor.most_recent_report(UniverseId(1)).is_none());
    }

    #[test]
    fn submission_time_is_recorded() {
        let monitor = StabilityMonitor::new();
        let at = Timestamp::from_epoch_millis(1_768_478_400_123).unwrap();
        monitor.submit_stability_report_at(UniverseId(3), 1.0, vec![], at);
        assert_eq!(monitor.get_stability_report(RecordId(1)).unwrap().timestamp, at);
    }

    #[test]
    fn reports_for_universe_are_ordered_by_id() {
        let monitor = StabilityMonitor::new();
        monitor.submit_stability_report(UniverseId(1), 1.0, vec![]);
        monitor.submit_stability_report(UniverseId(2), 2.0, vec![]);
        monitor.submit_stability_report(UniverseId(1), 3.0, vec![]);
        let ids: Vec<RecordId> = monitor
            .reports_for_universe(UniverseId(1))
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec![RecordId(1), RecordId(3)]);
        assert_eq!(monitor.len(), 3);
    }

    #[test]
    fn report_serializes_with_snake_case_fields() {
        let monitor = StabilityMonitor::new();
        let at = Timestamp::from_epoch_millis(1_000).unwrap();
        monitor.submit_stability_report_at(UniverseId(1), 95.0, issues(&["drift"]), at);
        let report = monitor.get_stability_report(RecordId(1)).unwrap();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "universe_id": 1,
                "timestamp": 1_000,
                "stability_score": 95.0,
                "issues": ["drift"],
            })
        );
    }
}
