//! In-memory stores for reports and quarantined files.

use std::collections::VecDeque;

use avsim_core::{QuarantineRecord, Report};

/// Ordered collection of past reports, newest first.
///
/// Reports are inserted in scan-completion order and never reordered,
/// deduplicated, or removed. The history is unbounded; it lives for the
/// process lifetime only.
#[derive(Debug, Clone, Default)]
pub struct ReportHistory {
    reports: VecDeque<Report>,
}

impl ReportHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed report
    pub fn insert(&mut self, report: Report) {
        self.reports.push_front(report);
    }

    /// Iterate reports newest first
    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    /// The most recently completed report, if any
    #[must_use]
    pub fn latest(&self) -> Option<&Report> {
        self.reports.front()
    }

    /// Number of stored reports
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if no report has been stored yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Owned snapshot, newest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<Report> {
        self.reports.iter().cloned().collect()
    }
}

/// Append-only list of files flagged as infected.
///
/// Display/reporting only; nothing is ever isolated or removed.
#[derive(Debug, Clone, Default)]
pub struct Quarantine {
    records: Vec<QuarantineRecord>,
}

impl Quarantine {
    /// Create an empty quarantine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a freshly flagged file
    pub fn record(&mut self, record: QuarantineRecord) {
        self.records.push(record);
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &QuarantineRecord> {
        self.records.iter()
    }

    /// Number of quarantined files
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been flagged yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned snapshot in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<QuarantineRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(total: u64) -> Report {
        Report {
            completed_at: Utc::now(),
            total_files: total,
            infected_count: 0,
            clean_count: total,
            duration_seconds: 0.0,
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut history = ReportHistory::new();
        history.insert(report(1));
        history.insert(report(2));
        history.insert(report(3));

        let totals: Vec<u64> = history.iter().map(|r| r.total_files).collect();
        assert_eq!(totals, vec![3, 2, 1]);
        assert_eq!(history.latest().map(|r| r.total_files), Some(3));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_iteration_is_restartable() {
        let mut history = ReportHistory::new();
        history.insert(report(5));

        assert_eq!(history.iter().count(), 1);
        // A second pass sees the same sequence.
        assert_eq!(history.iter().count(), 1);
    }

    #[test]
    fn test_quarantine_keeps_insertion_order() {
        let mut quarantine = Quarantine::new();
        for name in ["a.exe", "b.dll"] {
            quarantine.record(QuarantineRecord {
                file_name: name.to_string(),
                threat_label: "Generic.Trojan".to_string(),
                detected_at: Utc::now(),
            });
        }

        let names: Vec<&str> = quarantine.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.exe", "b.dll"]);
    }
}
