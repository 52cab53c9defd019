use serde::{Deserialize, Serialize};

/// Outcome of classifying a single file.
///
/// Every file produces exactly one verdict per scan run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ScanVerdict {
    /// No signature matched
    Clean,

    /// A signature matched
    Infected {
        /// Label of the matched threat, e.g. `EICAR.Test.Virus`
        threat_label: String,
    },
}

impl ScanVerdict {
    /// Create an infected verdict with the given threat label
    #[must_use]
    pub fn infected(threat_label: impl Into<String>) -> Self {
        Self::Infected {
            threat_label: threat_label.into(),
        }
    }

    /// Returns true if a signature matched
    #[must_use]
    pub const fn is_infected(&self) -> bool {
        matches!(self, Self::Infected { .. })
    }

    /// The matched threat label, if any
    #[must_use]
    pub fn threat_label(&self) -> Option<&str> {
        match self {
            Self::Clean => None,
            Self::Infected { threat_label } => Some(threat_label),
        }
    }
}

impl std::fmt::Display for ScanVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Infected { threat_label } => write!(f, "infected ({threat_label})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_accessors() {
        let clean = ScanVerdict::Clean;
        assert!(!clean.is_infected());
        assert_eq!(clean.threat_label(), None);

        let infected = ScanVerdict::infected("Generic.Trojan");
        assert!(infected.is_infected());
        assert_eq!(infected.threat_label(), Some("Generic.Trojan"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ScanVerdict::Clean.to_string(), "clean");
        assert_eq!(
            ScanVerdict::infected("EICAR.Test.Virus").to_string(),
            "infected (EICAR.Test.Virus)"
        );
    }
}
