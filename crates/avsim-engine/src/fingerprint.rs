//! Fingerprint generation, the stand-in for real content hashing.
//!
//! All randomness in the pipeline lives behind [`FingerprintSource`].
//! Production uses [`RandomFingerprinter`]; tests inject a scripted
//! implementation (or a seeded one) to make every run reproducible.

use avsim_core::FileDescriptor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::signatures::{EMPTY_FILE_FINGERPRINT, TEST_VIRUS_FINGERPRINT};

/// Source of file fingerprints.
///
/// Implementations decide which fixed signature a file resolves to, or
/// mint a fresh token no signature will ever match. Fingerprints carry no
/// cryptographic meaning and uniqueness of "clean" tokens is best-effort
/// only.
pub trait FingerprintSource: Send {
    /// Produce the fingerprint for a file
    fn fingerprint(&mut self, file: &FileDescriptor) -> String;
}

/// The default fingerprint source.
///
/// Zero-length files always resolve to the empty-file signature. Any
/// other file resolves to the test-virus signature with the configured
/// probability, and otherwise to a fresh `clean_` token.
#[derive(Debug)]
pub struct RandomFingerprinter {
    infection_probability: f64,
    rng: StdRng,
    minted: u64,
}

impl RandomFingerprinter {
    /// Create a source drawing from OS entropy
    #[must_use]
    pub fn new(infection_probability: f64) -> Self {
        Self::with_rng(infection_probability, StdRng::from_entropy())
    }

    /// Create a reproducible source from a fixed seed
    #[must_use]
    pub fn seeded(infection_probability: f64, seed: u64) -> Self {
        Self::with_rng(infection_probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(infection_probability: f64, rng: StdRng) -> Self {
        Self {
            infection_probability: infection_probability.clamp(0.0, 1.0),
            rng,
            minted: 0,
        }
    }

    /// Mint a token that cannot collide with any signature fingerprint
    /// (signatures are bare digests, these carry a `clean_` prefix) and
    /// that this source never repeats, thanks to the mint counter.
    fn clean_token(&mut self) -> String {
        let raw: u64 = self.rng.gen();
        self.minted += 1;
        format!("clean_{raw:016x}_{}", self.minted)
    }
}

impl FingerprintSource for RandomFingerprinter {
    fn fingerprint(&mut self, file: &FileDescriptor) -> String {
        if file.is_empty() {
            EMPTY_FILE_FINGERPRINT.to_string()
        } else if self.rng.gen_bool(self.infection_probability) {
            TEST_VIRUS_FINGERPRINT.to_string()
        } else {
            self.clean_token()
        }
    }
}
