use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one completed scan run.
///
/// Built exactly once per run, immutable thereafter. Always satisfies
/// `infected_count + clean_count == total_files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// When the run finished
    pub completed_at: DateTime<Utc>,

    /// Number of files in the batch
    pub total_files: u64,

    /// Files that matched a signature
    pub infected_count: u64,

    /// Files with no signature match
    pub clean_count: u64,

    /// Wall-clock duration of the run in seconds
    pub duration_seconds: f64,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s), {} threat(s), {} clean in {:.1}s",
            self.total_files, self.infected_count, self.clean_count, self.duration_seconds
        )
    }
}

/// A file flagged as infected, retained for display and reporting.
///
/// No actual isolation happens; records are append-only and never removed
/// by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarantineRecord {
    /// Name of the flagged file
    pub file_name: String,

    /// Label of the detected threat
    pub threat_label: String,

    /// When the verdict was produced
    pub detected_at: DateTime<Utc>,
}

/// Process-lifetime scan totals, accumulated across runs.
///
/// Counters only ever grow; they reset when the process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeCounters {
    /// Files scanned across all runs
    pub total_scanned: u64,

    /// Infected verdicts across all runs
    pub total_infected: u64,

    /// Clean verdicts across all runs
    pub total_clean: u64,
}

impl LifetimeCounters {
    /// Record one file having been scanned
    pub fn file_scanned(&mut self) {
        self.total_scanned += 1;
    }

    /// Fold a completed run's verdict counts into the lifetime totals
    pub fn run_completed(&mut self, infected: u64, clean: u64) {
        self.total_infected += infected;
        self.total_clean += clean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut counters = LifetimeCounters::default();
        for _ in 0..3 {
            counters.file_scanned();
        }
        counters.run_completed(1, 2);

        assert_eq!(counters.total_scanned, 3);
        assert_eq!(counters.total_infected, 1);
        assert_eq!(counters.total_clean, 2);
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            completed_at: Utc::now(),
            total_files: 4,
            infected_count: 1,
            clean_count: 3,
            duration_seconds: 3.25,
        };
        assert_eq!(report.to_string(), "4 file(s), 1 threat(s), 3 clean in 3.2s");
    }
}
