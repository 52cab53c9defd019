//! The mock signature database.
//!
//! A static fingerprint-to-threat-label mapping, loaded at construction
//! and never mutated. Lookups that find nothing are a normal outcome,
//! not an error.

use std::collections::HashMap;

/// Fingerprint every zero-length file resolves to
pub const EMPTY_FILE_FINGERPRINT: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Threat label for the empty-file signature
pub const EMPTY_FILE_LABEL: &str = "Suspicious.EmptyFile";

/// Fingerprint a probabilistically "infected" file resolves to
pub const TEST_VIRUS_FINGERPRINT: &str = "5d41402abc4b2a76b9719d911017c592";

/// Threat label for the test-virus signature
pub const TEST_VIRUS_LABEL: &str = "EICAR.Test.Virus";

const TROJAN_FINGERPRINT: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const TROJAN_LABEL: &str = "Generic.Trojan";

/// Read-only mapping from fingerprint tokens to threat labels.
///
/// The fingerprints are fixed stand-in digest strings, not real hashes
/// of anything the pipeline sees.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: HashMap<String, String>,
}

impl SignatureTable {
    /// The builtin database with the three stock signatures
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries([
            (TROJAN_FINGERPRINT, TROJAN_LABEL),
            (TEST_VIRUS_FINGERPRINT, TEST_VIRUS_LABEL),
            (EMPTY_FILE_FINGERPRINT, EMPTY_FILE_LABEL),
        ])
    }

    /// Build a table from arbitrary fingerprint/label pairs
    pub fn from_entries<I, F, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(fingerprint, label)| (fingerprint.into(), label.into()))
                .collect(),
        }
    }

    /// Look up the threat label for a fingerprint
    #[must_use]
    pub fn lookup(&self, fingerprint: &str) -> Option<&str> {
        self.entries.get(fingerprint).map(String::as_str)
    }

    /// Number of signatures in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no signatures
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let table = SignatureTable::builtin();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup(EMPTY_FILE_FINGERPRINT), Some(EMPTY_FILE_LABEL));
        assert_eq!(table.lookup(TEST_VIRUS_FINGERPRINT), Some(TEST_VIRUS_LABEL));
        assert_eq!(table.lookup(TROJAN_FINGERPRINT), Some(TROJAN_LABEL));
    }

    #[test]
    fn test_absent_is_none() {
        let table = SignatureTable::builtin();
        assert_eq!(table.lookup("clean_0123456789abcdef"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_custom_table() {
        let table = SignatureTable::from_entries([("abc", "Test.Threat")]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.lookup("abc"), Some("Test.Threat"));
        assert_eq!(table.lookup(TEST_VIRUS_FINGERPRINT), None);
    }
}
