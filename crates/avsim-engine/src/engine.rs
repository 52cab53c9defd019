//! The scan orchestrator.
//!
//! [`ScanEngine`] owns all mutable pipeline state (selected batch,
//! lifetime counters, report history, quarantine) and drives the
//! sequential async scan loop over a batch. At most one session runs at
//! a time; a second caller fails fast with
//! [`ScanError::SessionBusy`] instead of queueing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

use avsim_core::{
    FileDescriptor, LifetimeCounters, QuarantineRecord, Report, Result, ScanError, ScanEvent,
    ScanVerdict,
};

use crate::classify::Classifier;
use crate::clock::{Clock, SystemClock};
use crate::config::ScanConfig;
use crate::fingerprint::{FingerprintSource, RandomFingerprinter};
use crate::history::{Quarantine, ReportHistory};
use crate::signatures::SignatureTable;

/// The asynchronous mock scan pipeline.
///
/// Shareable across tasks (`&self` API over internal locks); clone a
/// subscription with [`subscribe`](Self::subscribe) to observe runs from
/// any number of presentation layers.
pub struct ScanEngine {
    config: ScanConfig,
    running: AtomicBool,
    state: Mutex<EngineState>,
    events: broadcast::Sender<ScanEvent>,
    clock: Box<dyn Clock>,
}

struct EngineState {
    batch: Vec<FileDescriptor>,
    classifier: Classifier,
    counters: LifetimeCounters,
    history: ReportHistory,
    quarantine: Quarantine,
}

/// Clears the running flag when a session ends, on every exit path.
struct SessionGuard<'a> {
    running: &'a AtomicBool,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

impl ScanEngine {
    /// Create an engine with default configuration, the builtin
    /// signature table, and true randomness
    #[must_use]
    pub fn new() -> Self {
        ScanEngineBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> ScanEngineBuilder {
        ScanEngineBuilder::new()
    }

    /// The engine's configuration
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Replace any previously selected, unscanned batch
    pub fn select_batch(&self, files: Vec<FileDescriptor>) {
        debug!(files = files.len(), "batch selected");
        self.state().batch = files;
    }

    /// Returns true while a scan session is in progress
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Subscribe to the scan event stream.
    ///
    /// Events are fanned out with broadcast semantics: a receiver that
    /// falls more than the configured capacity behind sees a lag error
    /// and skips ahead rather than stalling the scan.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ScanEvent> {
        self.events.subscribe()
    }

    /// The event stream as a `Stream` adapter, for `async` consumers
    /// that prefer iteration over explicit `recv` loops
    #[must_use]
    pub fn events(&self) -> BroadcastStream<ScanEvent> {
        BroadcastStream::new(self.subscribe())
    }

    /// Read-only snapshot of the lifetime counters.
    ///
    /// Mid-run reads see the per-file `total_scanned` increments as they
    /// land; the infected/clean totals update only when a run completes.
    #[must_use]
    pub fn lifetime_counters(&self) -> LifetimeCounters {
        self.state().counters
    }

    /// Past reports, newest first
    #[must_use]
    pub fn report_history(&self) -> Vec<Report> {
        self.state().history.snapshot()
    }

    /// Quarantined files in detection order
    #[must_use]
    pub fn quarantine(&self) -> Vec<QuarantineRecord> {
        self.state().quarantine.snapshot()
    }

    /// Run one scan over the currently selected batch.
    ///
    /// Processes files strictly in order: simulated latency, then
    /// classification, then accounting and event emission, before the
    /// next file begins. The batch is consumed by the run; on success the
    /// completed [`Report`] is returned and also delivered via
    /// [`ScanEvent::ScanCompleted`].
    ///
    /// # Errors
    ///
    /// [`ScanError::SessionBusy`] if a session is already running, and
    /// [`ScanError::EmptyBatch`] if no files are selected. Both are
    /// rejected at entry; nothing fails mid-run.
    pub async fn run_scan(&self) -> Result<Report> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ScanError::SessionBusy)?;
        let _session = SessionGuard {
            running: &self.running,
        };

        let batch = std::mem::take(&mut self.state().batch);
        if batch.is_empty() {
            return Err(ScanError::EmptyBatch);
        }

        let file_count = batch.len() as u64;
        info!(files = file_count, "started scanning {file_count} file(s)");
        self.emit(ScanEvent::ScanStarted { file_count });
        let started = Instant::now();

        let mut infected_count: u64 = 0;
        let mut clean_count: u64 = 0;

        for (index, file) in batch.iter().enumerate() {
            // Simulated per-file scan cost; the loop's suspension point.
            if !self.config.per_file_latency.is_zero() {
                tokio::time::sleep(self.config.per_file_latency).await;
            }

            let verdict = self.state().classifier.classify(file);
            match verdict {
                ScanVerdict::Infected { threat_label } => {
                    infected_count += 1;
                    warn!(file = %file.name, threat = %threat_label, "threat detected");
                    self.state().quarantine.record(QuarantineRecord {
                        file_name: file.name.clone(),
                        threat_label: threat_label.clone(),
                        detected_at: self.clock.now(),
                    });
                    self.emit(ScanEvent::ThreatDetected {
                        file_name: file.name.clone(),
                        threat_label,
                    });
                }
                ScanVerdict::Clean => {
                    clean_count += 1;
                    debug!(file = %file.name, "file is clean");
                    self.emit(ScanEvent::FileClean {
                        file_name: file.name.clone(),
                    });
                }
            }

            self.state().counters.file_scanned();
            self.emit(ScanEvent::ScanProgress {
                completed: index as u64 + 1,
                total: file_count,
            });
        }

        let duration_seconds = started.elapsed().as_secs_f64();
        let report = Report {
            completed_at: self.clock.now(),
            total_files: file_count,
            infected_count,
            clean_count,
            duration_seconds,
        };

        // Publish atomically: counters and history move together, and the
        // report is fully formed before any reader can see it.
        {
            let mut state = self.state();
            state.counters.run_completed(infected_count, clean_count);
            state.history.insert(report.clone());
        }

        info!(
            infected = infected_count,
            clean = clean_count,
            "scan completed in {duration_seconds:.1}s"
        );
        self.emit(ScanEvent::ScanCompleted {
            report: report.clone(),
        });

        Ok(report)
    }

    fn emit(&self, event: ScanEvent) {
        // No receivers is fine; headless callers just poll the getters.
        let _ = self.events.send(event);
    }

    fn state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScanEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanEngine")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

/// Builder for a customized [`ScanEngine`]
#[derive(Default)]
pub struct ScanEngineBuilder {
    config: ScanConfig,
    table: Option<SignatureTable>,
    source: Option<Box<dyn FingerprintSource>>,
    clock: Option<Box<dyn Clock>>,
}

impl ScanEngineBuilder {
    /// Start from the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScanConfig::new(),
            table: None,
            source: None,
            clock: None,
        }
    }

    /// Set the engine configuration
    #[must_use]
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the builtin signature table
    #[must_use]
    pub fn signature_table(mut self, table: SignatureTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Inject a fingerprint source (the decision seam for tests).
    ///
    /// When none is given, the engine uses a [`RandomFingerprinter`]
    /// driven by the configured infection probability.
    #[must_use]
    pub fn fingerprint_source(mut self, source: Box<dyn FingerprintSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Inject a timestamp source
    #[must_use]
    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the engine
    #[must_use]
    pub fn build(self) -> ScanEngine {
        let source = self.source.unwrap_or_else(|| {
            Box::new(RandomFingerprinter::new(self.config.infection_probability))
        });
        let classifier = Classifier::new(
            self.table.unwrap_or_else(SignatureTable::builtin),
            source,
        );
        let (events, _) = broadcast::channel(self.config.event_capacity);

        ScanEngine {
            config: self.config,
            running: AtomicBool::new(false),
            state: Mutex::new(EngineState {
                batch: Vec::new(),
                classifier,
                counters: LifetimeCounters::default(),
                history: ReportHistory::new(),
                quarantine: Quarantine::new(),
            }),
            events,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        }
    }
}

impl std::fmt::Debug for ScanEngineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanEngineBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
