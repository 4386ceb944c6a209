//! Result types shared by the cluster sampler and the recommender.

use data_loader::{ClusterLabel, EmbeddingRecord};

/// What was drawn from one cluster
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterPicks {
    /// The cluster had no members in the current view
    Empty,
    /// Sampled rows in draw order
    Rows(Vec<EmbeddingRecord>),
}

impl ClusterPicks {
    pub fn rows(&self) -> &[EmbeddingRecord] {
        match self {
            ClusterPicks::Empty => &[],
            ClusterPicks::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Sample drawn for one cluster of the filtered view
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSample {
    pub cluster: ClusterLabel,
    /// Members of this cluster in the filtered view
    pub member_count: usize,
    pub picks: ClusterPicks,
}

/// Rows sharing the reference entity's cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// First embedding row of the selected entity
    pub reference: EmbeddingRecord,
    pub cluster: ClusterLabel,
    /// Drawn with replacement, so ids may repeat
    pub picks: Vec<EmbeddingRecord>,
}
