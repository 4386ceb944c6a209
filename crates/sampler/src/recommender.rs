//! Similarity Recommender - "more like this" by cluster membership
//!
//! ## Algorithm
//! 1. Find the first embedding row of the selected entity
//! 2. Read its cluster label
//! 3. Draw rows WITH replacement from all unfiltered rows of that cluster
//!
//! "Similar" means nothing more than "same DBSCAN cluster": there is no
//! distance ranking inside the cluster and repeated picks are kept.
//!
//! The number of draws is `min(sample_size, total rows in the table)`,
//! bounded by the whole table and not by the cluster, so small clusters
//! show the same movie several times.

use crate::cluster_sampler::DEFAULT_SAMPLE_SIZE;
use crate::types::Recommendation;
use data_loader::{DataStore, EntityId};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Entity {0} not found in the embedding table")]
    UnknownEntity(EntityId),
}

/// Recommends movies that share the selected movie's cluster
#[derive(Clone)]
pub struct SimilarityRecommender {
    /// Shared reference to the store (read-only, so no Mutex needed)
    store: Arc<DataStore>,
    sample_size: usize,
}

impl SimilarityRecommender {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Configure the number of draws before the table-size bound (default: 6)
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    #[instrument(skip(self, rng))]
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        entity_id: EntityId,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendError> {
        let reference = self
            .store
            .find_embedding(entity_id)
            .ok_or(RecommendError::UnknownEntity(entity_id))?;

        let members = self.store.cluster_members(reference.cluster);
        let draws = self.sample_size.min(self.store.embeddings().len());

        let mut picks = Vec::with_capacity(draws);
        for _ in 0..draws {
            // Never empty: the reference row is itself a member
            if let Some(&row) = members.choose(rng) {
                picks.push(row.clone());
            }
        }

        debug!(
            "Drew {} picks from cluster {} ({} members)",
            picks.len(),
            reference.cluster,
            members.len()
        );

        Ok(Recommendation {
            reference: reference.clone(),
            cluster: reference.cluster,
            picks,
        })
    }
}
