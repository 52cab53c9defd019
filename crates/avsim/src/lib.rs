//! Simulated antivirus scan workflow.
//!
//! A mock scan pipeline: select a batch of files, run an asynchronous
//! scan that classifies each one against a fake signature table, and
//! read back reports, quarantine records, and lifetime statistics. No
//! real detection, no real hashing, no filesystem access.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use avsim::{FileDescriptor, ScanEngine};
//!
//! #[tokio::main]
//! async fn main() -> avsim::Result<()> {
//!     let engine = ScanEngine::new();
//!
//!     // Watch the run from any number of observers
//!     let mut events = engine.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("{}", event.event_name());
//!         }
//!     });
//!
//!     engine.select_batch(vec![
//!         FileDescriptor::new("report.pdf", 48_128),
//!         FileDescriptor::new("setup.exe", 1_024_000),
//!     ]);
//!
//!     let report = engine.run_scan().await?;
//!     println!("{report}");
//!     println!("quarantined: {}", engine.quarantine().len());
//!
//!     Ok(())
//! }
//! ```

// Re-export core types
pub use avsim_core::*;

// Re-export the engine
pub use avsim_engine::{
    Classifier, Clock, FingerprintSource, FixedClock, Quarantine, RandomFingerprinter,
    ReportHistory, ScanConfig, ScanEngine, ScanEngineBuilder, SignatureTable, SystemClock,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
