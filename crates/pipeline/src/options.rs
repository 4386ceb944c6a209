//! Selector options offered to the user.
//!
//! Options are always derived from the UNFILTERED table, so picking a
//! genre never shrinks the cluster list and vice versa.

use crate::selection::ALL_LABEL;
use data_loader::{ClusterLabel, EmbeddingRecord, EntityId};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Values for the genre, cluster and movie selectors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOptions {
    /// Sorted distinct non-missing genres
    pub genres: Vec<String>,
    /// Sorted distinct cluster labels
    pub clusters: Vec<ClusterLabel>,
    /// Distinct entity ids in first-appearance order
    pub entity_ids: Vec<EntityId>,
}

impl SelectorOptions {
    pub fn from_records(table: &[EmbeddingRecord]) -> Self {
        let genres: BTreeSet<&str> = table
            .iter()
            .filter_map(|record| record.genre.as_deref())
            .collect();
        let clusters: BTreeSet<ClusterLabel> = table.iter().map(|record| record.cluster).collect();

        let mut seen = HashSet::new();
        let entity_ids = table
            .iter()
            .map(|record| record.entity_id)
            .filter(|id| seen.insert(*id))
            .collect();

        Self {
            genres: genres.into_iter().map(str::to_string).collect(),
            clusters: clusters.into_iter().collect(),
            entity_ids,
        }
    }

    /// Genre selector entries: "All" followed by the genres
    pub fn genre_labels(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL.to_string())
            .chain(self.genres.iter().cloned())
            .collect()
    }

    /// Cluster selector entries: "All" followed by the labels as text
    pub fn cluster_labels(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL.to_string())
            .chain(self.clusters.iter().map(|c| c.to_string()))
            .collect()
    }
}
