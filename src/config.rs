//! Engine configuration.

/// Default number of group pairs before parallel matching is worth it
pub const DEFAULT_MIN_PARALLEL_PARTITIONS: usize = 4;

/// Settings for a [`SwapMatcher`](crate::engine::SwapMatcher).
///
/// The output never depends on these settings, only how the work is
/// scheduled.
///
/// ## Example
///
/// ```
/// use swap_pairing::EngineConfig;
///
/// let config = EngineConfig::default().with_parallel(true).with_min_parallel_partitions(2);
/// assert!(config.parallel);
/// assert!(config.runs_parallel(2));
/// assert!(!config.runs_parallel(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Match independent group pairs on the rayon thread pool
    pub parallel: bool,

    /// Below this many group pairs, match sequentially even if `parallel` is set
    pub min_parallel_partitions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_partitions: DEFAULT_MIN_PARALLEL_PARTITIONS,
        }
    }
}

impl EngineConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_parallel_partitions(mut self, min: usize) -> Self {
        self.min_parallel_partitions = min;
        self
    }

    /// Whether `partitions` group pairs should be matched in parallel
    #[inline]
    pub fn runs_parallel(&self, partitions: usize) -> bool {
        self.parallel && partitions >= self.min_parallel_partitions.max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let config = EngineConfig::default();
        assert!(!config.parallel);
        assert!(!config.runs_parallel(1_000));
    }

    #[test]
    fn test_single_partition_never_parallel() {
        let config = EngineConfig::default()
            .with_parallel(true)
            .with_min_parallel_partitions(0);
        assert!(!config.runs_parallel(1));
        assert!(config.runs_parallel(2));
    }
}
