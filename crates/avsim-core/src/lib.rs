//! Core types for the avsim mock scan pipeline.
//!
//! This crate provides the foundational types shared across the avsim
//! workspace:
//!
//! - **Types**: file descriptors, verdicts, reports, quarantine records,
//!   lifetime counters, and the [`ScanEvent`] stream vocabulary
//! - **Errors**: session-level error handling with [`ScanError`]
//!
//! Nothing in here performs any scanning; see `avsim-engine` for the
//! pipeline itself.
//!
//! # Example
//!
//! ```rust
//! use avsim_core::{FileDescriptor, Report};
//!
//! fn summarize(report: &Report) -> String {
//!     format!(
//!         "{} files, {} infected, {} clean",
//!         report.total_files, report.infected_count, report.clean_count
//!     )
//! }
//!
//! let file = FileDescriptor::new("invoice.pdf", 1024);
//! assert!(!file.is_empty());
//! ```

mod error;
pub mod types;

pub use error::{Result, ScanError};
pub use types::*;
