use serde::{Deserialize, Serialize};

use crate::types::Report;

/// Notification emitted by the scan engine as a run progresses.
///
/// Events for one run arrive in a fixed order: `ScanStarted`, then per
/// file a verdict event (`FileClean` or `ThreatDetected`) followed by
/// `ScanProgress`, and finally `ScanCompleted`. Presentation layers that
/// animate progress interpolate between the discrete `ScanProgress`
/// values themselves; the engine never emits staged increments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    /// A run began
    ScanStarted {
        /// Number of files in the batch
        file_count: u64,
    },

    /// A file produced a clean verdict
    FileClean {
        /// Name of the scanned file
        file_name: String,
    },

    /// A file matched a signature
    ThreatDetected {
        /// Name of the scanned file
        file_name: String,
        /// Label of the matched threat
        threat_label: String,
    },

    /// A file finished processing
    ScanProgress {
        /// Files completed so far, including this one
        completed: u64,
        /// Total files in the batch
        total: u64,
    },

    /// The run finished
    ScanCompleted {
        /// Summary of the completed run
        report: Report,
    },
}

impl ScanEvent {
    /// Stable event name for presentation layers that key on strings
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::ScanStarted { .. } => "scan.started",
            Self::FileClean { .. } => "scan.file_clean",
            Self::ThreatDetected { .. } => "scan.threat_detected",
            Self::ScanProgress { .. } => "scan.progress",
            Self::ScanCompleted { .. } => "scan.completed",
        }
    }

    /// Fractional progress in `[0, 1]` for `ScanProgress` events
    #[must_use]
    pub fn progress_fraction(&self) -> Option<f64> {
        match self {
            Self::ScanProgress { completed, total } if *total > 0 => {
                Some(*completed as f64 / *total as f64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let event = ScanEvent::ScanStarted { file_count: 3 };
        assert_eq!(event.event_name(), "scan.started");

        let event = ScanEvent::ThreatDetected {
            file_name: "a.exe".into(),
            threat_label: "Generic.Trojan".into(),
        };
        assert_eq!(event.event_name(), "scan.threat_detected");
    }

    #[test]
    fn test_progress_fraction() {
        let event = ScanEvent::ScanProgress {
            completed: 1,
            total: 4,
        };
        assert_eq!(event.progress_fraction(), Some(0.25));

        let event = ScanEvent::FileClean {
            file_name: "b.txt".into(),
        };
        assert_eq!(event.progress_fraction(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let event = ScanEvent::ScanProgress {
            completed: 2,
            total: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""event":"scan_progress""#));

        let back: ScanEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
