//! Filter to keep only rows of one cluster.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{ClusterLabel, EmbeddingRecord};

/// Keeps rows assigned to the selected cluster label.
///
/// The noise label is an ordinary value here.
pub struct ClusterFilter {
    cluster: ClusterLabel,
}

impl ClusterFilter {
    pub fn new(cluster: ClusterLabel) -> Self {
        Self { cluster }
    }
}

impl Filter for ClusterFilter {
    fn name(&self) -> &str {
        "ClusterFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a EmbeddingRecord>) -> Result<Vec<&'a EmbeddingRecord>> {
        Ok(rows
            .into_iter()
            .filter(|row| row.cluster == self.cluster)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::NOISE_CLUSTER;

    fn record(entity_id: i64, cluster: ClusterLabel) -> EmbeddingRecord {
        EmbeddingRecord {
            entity_id,
            x: 0.0,
            y: 0.0,
            genre: None,
            cluster,
        }
    }

    #[test]
    fn test_cluster_filter() {
        let rows = vec![record(11, 0), record(22, 0), record(33, 1)];

        let filtered = ClusterFilter::new(1).apply(rows.iter().collect()).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].entity_id, 33);
    }

    #[test]
    fn test_noise_is_a_regular_cluster() {
        let rows = vec![record(1, NOISE_CLUSTER), record(2, 0), record(3, NOISE_CLUSTER)];

        let filtered = ClusterFilter::new(NOISE_CLUSTER)
            .apply(rows.iter().collect())
            .unwrap();

        let ids: Vec<_> = filtered.iter().map(|r| r.entity_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
