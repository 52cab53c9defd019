//! Mock scan pipeline for the avsim workspace.
//!
//! This crate provides the [`ScanEngine`], which drives the ordered,
//! asynchronous scan over a selected batch of files: per-file simulated
//! latency, signature classification, quarantine and lifetime-counter
//! accounting, and a broadcast [`ScanEvent`](avsim_core::ScanEvent)
//! stream for any presentation layer to subscribe to.
//!
//! All randomness lives behind the [`FingerprintSource`] seam and all
//! timestamps behind [`Clock`], so the whole pipeline runs
//! deterministically under test.

mod classify;
mod clock;
mod config;
mod engine;
mod fingerprint;
mod history;
mod signatures;

pub use classify::Classifier;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ScanConfig;
pub use engine::{ScanEngine, ScanEngineBuilder};
pub use fingerprint::{FingerprintSource, RandomFingerprinter};
pub use history::{Quarantine, ReportHistory};
pub use signatures::{
    SignatureTable, EMPTY_FILE_FINGERPRINT, EMPTY_FILE_LABEL, TEST_VIRUS_FINGERPRINT,
    TEST_VIRUS_LABEL,
};

pub use avsim_core::{Result, ScanError};
