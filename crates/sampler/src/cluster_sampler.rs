//! Cluster Sampler - representative rows per cluster
//!
//! ## Algorithm
//! 1. Partition the filtered rows by cluster label (ascending order)
//! 2. For each cluster draw `min(sample_size, members)` rows without
//!    replacement
//! 3. A cluster without members yields an explicit empty result

use crate::types::{ClusterPicks, ClusterSample};
use data_loader::{ClusterLabel, EmbeddingRecord};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Rows drawn per cluster unless configured otherwise
pub const DEFAULT_SAMPLE_SIZE: usize = 6;

/// Draws a bounded random sample from every cluster of a filtered view
#[derive(Debug, Clone)]
pub struct ClusterSampler {
    sample_size: usize,
}

impl ClusterSampler {
    pub fn new() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Configure the per-cluster sample size (default: 6)
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Sample every cluster present in `rows`, in ascending label order
    #[instrument(skip(self, rows, rng), fields(rows = rows.len()))]
    pub fn sample_all<R: Rng + ?Sized>(
        &self,
        rows: &[&EmbeddingRecord],
        rng: &mut R,
    ) -> Vec<ClusterSample> {
        let mut partitions: BTreeMap<ClusterLabel, Vec<&EmbeddingRecord>> = BTreeMap::new();
        for &row in rows {
            partitions.entry(row.cluster).or_default().push(row);
        }
        debug!("Partitioned filtered view into {} clusters", partitions.len());

        partitions
            .into_iter()
            .map(|(cluster, members)| self.sample_cluster(cluster, &members, rng))
            .collect()
    }

    /// Sample one cluster's members without replacement
    pub fn sample_cluster<R: Rng + ?Sized>(
        &self,
        cluster: ClusterLabel,
        members: &[&EmbeddingRecord],
        rng: &mut R,
    ) -> ClusterSample {
        if members.is_empty() {
            return ClusterSample {
                cluster,
                member_count: 0,
                picks: ClusterPicks::Empty,
            };
        }

        let amount = self.sample_size.min(members.len());
        let picks = members
            .choose_multiple(rng, amount)
            .map(|&row| row.clone())
            .collect();

        ClusterSample {
            cluster,
            member_count: members.len(),
            picks: ClusterPicks::Rows(picks),
        }
    }
}

impl Default for ClusterSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

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
    fn test_single_member_cluster() {
        let table = vec![record(11, 0), record(22, 0), record(33, 1)];
        let only_cluster_one: Vec<&EmbeddingRecord> =
            table.iter().filter(|r| r.cluster == 1).collect();

        let mut rng = StdRng::seed_from_u64(7);
        let samples = ClusterSampler::new().sample_all(&only_cluster_one, &mut rng);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].cluster, 1);
        assert_eq!(samples[0].picks.rows(), &[record(33, 1)]);
    }

    #[test]
    fn test_sample_size_is_bounded() {
        let table: Vec<EmbeddingRecord> = (0..20)
            .map(|i| record(i, if i < 4 { 0 } else { 1 }))
            .collect();
        let rows: Vec<&EmbeddingRecord> = table.iter().collect();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let samples = ClusterSampler::new().sample_all(&rows, &mut rng);

            assert_eq!(samples.len(), 2);
            assert_eq!(samples[0].picks.rows().len(), 4);
            assert_eq!(samples[1].picks.rows().len(), DEFAULT_SAMPLE_SIZE);
            assert_eq!(samples[1].member_count, 16);
        }
    }

    #[test]
    fn test_no_duplicates_and_members_only() {
        let table: Vec<EmbeddingRecord> = (0..30).map(|i| record(i, (i % 3) as i32 - 1)).collect();
        let rows: Vec<&EmbeddingRecord> = table.iter().collect();

        let mut rng = StdRng::seed_from_u64(1);
        for sample in ClusterSampler::new().sample_all(&rows, &mut rng) {
            let ids: HashSet<i64> = sample.picks.rows().iter().map(|r| r.entity_id).collect();
            assert_eq!(ids.len(), sample.picks.rows().len());
            assert!(sample.picks.rows().iter().all(|r| r.cluster == sample.cluster));
        }
    }

    #[test]
    fn test_clusters_in_ascending_order() {
        let table = vec![record(1, 5), record(2, -1), record(3, 2), record(4, 5)];
        let rows: Vec<&EmbeddingRecord> = table.iter().collect();

        let mut rng = StdRng::seed_from_u64(3);
        let clusters: Vec<_> = ClusterSampler::new()
            .sample_all(&rows, &mut rng)
            .iter()
            .map(|s| s.cluster)
            .collect();

        assert_eq!(clusters, vec![-1, 2, 5]);
    }

    #[test]
    fn test_empty_cluster_is_explicit() {
        let mut rng = StdRng::seed_from_u64(0);
        let sample = ClusterSampler::new().sample_cluster(9, &[], &mut rng);

        assert_eq!(sample.picks, ClusterPicks::Empty);
        assert_eq!(sample.member_count, 0);
    }

    #[test]
    fn test_empty_view_has_no_clusters() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ClusterSampler::new().sample_all(&[], &mut rng).is_empty());
    }
}
