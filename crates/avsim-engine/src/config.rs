//! Engine configuration types.

use std::time::Duration;

/// Tunables for a [`ScanEngine`](crate::ScanEngine).
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Simulated processing time per file
    pub per_file_latency: Duration,

    /// Probability in `[0, 1]` that a non-empty file resolves to the
    /// test-virus signature
    pub infection_probability: f64,

    /// Buffer capacity of the event channel; subscribers that fall
    /// further behind than this lose events rather than stall the scan
    pub event_capacity: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfig {
    /// Create a configuration with the default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            per_file_latency: Duration::from_millis(800),
            infection_probability: 0.15,
            event_capacity: 256,
        }
    }

    /// Set the simulated per-file latency
    #[must_use]
    pub const fn per_file_latency(mut self, latency: Duration) -> Self {
        self.per_file_latency = latency;
        self
    }

    /// Set the infection probability, clamped to `[0, 1]`
    #[must_use]
    pub fn infection_probability(mut self, probability: f64) -> Self {
        self.infection_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Set the event channel capacity (minimum 1)
    #[must_use]
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::new();
        assert_eq!(config.per_file_latency, Duration::from_millis(800));
        assert!((config.infection_probability - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn test_probability_clamped() {
        let config = ScanConfig::new().infection_probability(1.7);
        assert!((config.infection_probability - 1.0).abs() < f64::EPSILON);

        let config = ScanConfig::new().infection_probability(-0.2);
        assert!(config.infection_probability.abs() < f64::EPSILON);
    }

    #[test]
    fn test_capacity_floor() {
        let config = ScanConfig::new().event_capacity(0);
        assert_eq!(config.event_capacity, 1);
    }
}
