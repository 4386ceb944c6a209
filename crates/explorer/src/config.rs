//! Explorer configuration.
//!
//! The defaults reproduce the dashboard's fixed behavior; the builder
//! methods exist so tests and the CLI can tweak them.

use posters::DEFAULT_FETCH_TIMEOUT;
use sampler::{DEFAULT_GRID_COLUMNS, DEFAULT_SAMPLE_SIZE};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Movies drawn per cluster, and per recommendation
    pub sample_size: usize,
    /// Columns of every poster grid
    pub grid_columns: usize,
    /// Bound on each poster download
    pub fetch_timeout: Duration,
}

impl ExplorerConfig {
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_grid_columns(mut self, grid_columns: usize) -> Self {
        self.grid_columns = grid_columns;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            grid_columns: DEFAULT_GRID_COLUMNS,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();

        assert_eq!(config.sample_size, 6);
        assert_eq!(config.grid_columns, 3);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }
}
