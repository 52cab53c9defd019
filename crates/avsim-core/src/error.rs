use thiserror::Error;

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur when driving a scan session.
///
/// Both variants are rejected synchronously at the entry of a run; the
/// mock pipeline has no mid-run failure modes since classification
/// cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A scan session is already running - wait for it to finish and retry
    #[error("a scan session is already running")]
    SessionBusy,

    /// No files were selected for scanning
    #[error("no files selected for scanning")]
    EmptyBatch,
}

impl ScanError {
    /// Returns true if the error clears on its own and the caller can
    /// simply retry later
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SessionBusy)
    }

    /// Returns true if the caller must change its input before retrying
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::EmptyBatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(ScanError::SessionBusy.is_retryable());
        assert!(!ScanError::EmptyBatch.is_retryable());
        assert!(ScanError::EmptyBatch.is_caller_error());
        assert!(!ScanError::SessionBusy.is_caller_error());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ScanError::SessionBusy.to_string(),
            "a scan session is already running"
        );
        assert_eq!(
            ScanError::EmptyBatch.to_string(),
            "no files selected for scanning"
        );
    }
}
