//! File classification against the signature table.

use avsim_core::{FileDescriptor, ScanVerdict};
use tracing::trace;

use crate::fingerprint::FingerprintSource;
use crate::signatures::SignatureTable;

/// Classifies files by fingerprinting them and consulting the signature
/// table.
///
/// Classification never fails: every file yields exactly one verdict.
pub struct Classifier {
    table: SignatureTable,
    source: Box<dyn FingerprintSource>,
}

impl Classifier {
    /// Create a classifier over the given table and fingerprint source
    #[must_use]
    pub fn new(table: SignatureTable, source: Box<dyn FingerprintSource>) -> Self {
        Self { table, source }
    }

    /// Produce the verdict for a single file
    pub fn classify(&mut self, file: &FileDescriptor) -> ScanVerdict {
        let fingerprint = self.source.fingerprint(file);
        let verdict = match self.table.lookup(&fingerprint) {
            Some(label) => ScanVerdict::infected(label),
            None => ScanVerdict::Clean,
        };
        trace!(file = %file.name, %fingerprint, %verdict, "classified");
        verdict
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("signatures", &self.table.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::RandomFingerprinter;
    use crate::signatures::{EMPTY_FILE_LABEL, TEST_VIRUS_LABEL};

    fn classifier(probability: f64) -> Classifier {
        Classifier::new(
            SignatureTable::builtin(),
            Box::new(RandomFingerprinter::seeded(probability, 99)),
        )
    }

    #[test]
    fn test_empty_file_is_always_suspicious() {
        let mut classifier = classifier(0.0);
        let verdict = classifier.classify(&FileDescriptor::new("empty.dat", 0));
        assert_eq!(verdict.threat_label(), Some(EMPTY_FILE_LABEL));
    }

    #[test]
    fn test_forced_infection() {
        let mut classifier = classifier(1.0);
        let verdict = classifier.classify(&FileDescriptor::new("app.exe", 4096));
        assert_eq!(verdict.threat_label(), Some(TEST_VIRUS_LABEL));
    }

    #[test]
    fn test_clean_when_probability_zero() {
        let mut classifier = classifier(0.0);
        for i in 0..10 {
            let file = FileDescriptor::new(format!("file_{i}.txt"), 1024);
            assert!(!classifier.classify(&file).is_infected());
        }
    }
}
