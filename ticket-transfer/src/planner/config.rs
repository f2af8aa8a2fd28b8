//! Layover window configuration.

use chrono::Duration;

/// Default minimum layover, in minutes.
pub const DEFAULT_MIN_GAP_MINS: i32 = 25;

/// Default maximum layover, in minutes.
pub const DEFAULT_MAX_GAP_MINS: i32 = 60;

/// Parameters for transfer matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferConfig {
    /// Minimum time between arrival and the next departure (inclusive).
    pub min_gap_mins: i32,

    /// Maximum time between arrival and the next departure (inclusive).
    pub max_gap_mins: i32,

    /// Skip pairs where either time fails to parse, instead of counting
    /// the bad time as 00:00.
    pub skip_unknown_times: bool,
}

impl TransferConfig {
    /// Create a configuration with the given window.
    pub fn new(min_gap_mins: i32, max_gap_mins: i32) -> Self {
        Self {
            min_gap_mins,
            max_gap_mins,
            skip_unknown_times: false,
        }
    }

    pub fn with_skip_unknown_times(mut self, skip: bool) -> Self {
        self.skip_unknown_times = skip;
        self
    }

    /// Whether `gap` falls inside the window.
    pub fn admits(&self, gap: i32) -> bool {
        self.min_gap_mins <= gap && gap <= self.max_gap_mins
    }

    /// Whether any gap can satisfy the window.
    pub fn is_satisfiable(&self) -> bool {
        self.min_gap_mins <= self.max_gap_mins
    }

    pub fn min_gap(&self) -> Duration {
        Duration::minutes(i64::from(self.min_gap_mins))
    }

    pub fn max_gap(&self) -> Duration {
        Duration::minutes(i64::from(self.max_gap_mins))
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_GAP_MINS, DEFAULT_MAX_GAP_MINS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TransferConfig::default();
        assert_eq!(config.min_gap_mins, 25);
        assert_eq!(config.max_gap_mins, 60);
        assert!(!config.skip_unknown_times);
    }

    #[test]
    fn duration_methods() {
        let config = TransferConfig::default();
        assert_eq!(config.min_gap(), Duration::minutes(25));
        assert_eq!(config.max_gap(), Duration::minutes(60));
    }

    #[test]
    fn window_is_inclusive() {
        let config = TransferConfig::new(25, 60);
        assert!(!config.admits(24));
        assert!(config.admits(25));
        assert!(config.admits(60));
        assert!(!config.admits(61));
    }

    #[test]
    fn inverted_window_admits_nothing() {
        let config = TransferConfig::new(60, 25);
        assert!(!config.is_satisfiable());
        assert!((-100..200).all(|g| !config.admits(g)));
    }

    #[test]
    fn builder() {
        let config = TransferConfig::new(10, 20).with_skip_unknown_times(true);
        assert!(config.skip_unknown_times);
    }
}
