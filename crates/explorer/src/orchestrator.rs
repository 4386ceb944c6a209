//! # Cluster Explorer Orchestrator
//!
//! This module coordinates one user interaction end to end:
//! 1. Turn the selector values into a filter pipeline
//! 2. Filter the cached embedding table
//! 3. Sample clusters (or the selected movie's cluster)
//! 4. Resolve every pick to a poster, one download at a time
//! 5. Deal the posters into a 3-column grid
//!
//! Nothing survives between calls except the shared, read-only store, so
//! every call re-samples and re-downloads.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::{ClusterLabel, DataStore, EmbeddingRecord, EntityId};
use pipeline::{scatter_points, FilterPipeline, ScatterPoint, Selection, SelectorOptions};
use posters::{HttpImageSource, ImageSource, Poster, PosterOutcome, PosterResolver, SkipReason};
use sampler::{ClusterPicks, ClusterSampler, PosterGrid, SimilarityRecommender};

use crate::config::ExplorerConfig;
use crate::upload::{self, UploadError, UploadPreview};

/// Shown in place of a grid when a cluster has no members
pub const EMPTY_CLUSTER_MESSAGE: &str = "No movies in this cluster.";

/// A sampled row whose poster could not be shown
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoster {
    pub entity_id: EntityId,
    pub reason: SkipReason,
}

/// Posters for one set of picks, laid out in a grid
#[derive(Debug, Clone, PartialEq)]
pub struct PosterGallery {
    pub grid: PosterGrid<Poster>,
    /// Entity ids in draw order, skipped ones included
    pub picks: Vec<EntityId>,
    pub skipped: Vec<SkippedPoster>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryContent {
    /// Rendered as [`EMPTY_CLUSTER_MESSAGE`]
    Empty,
    Posters(PosterGallery),
}

/// Representative posters of one cluster of the filtered view
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterGallery {
    pub cluster: ClusterLabel,
    pub member_count: usize,
    pub content: GalleryContent,
}

/// Posters of movies sharing the selected movie's cluster
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarGallery {
    pub reference: EntityId,
    pub cluster: ClusterLabel,
    pub gallery: PosterGallery,
}

/// Main orchestrator behind every explorer view
pub struct ClusterExplorer<S = HttpImageSource> {
    store: Arc<DataStore>,
    options: SelectorOptions,
    sampler: ClusterSampler,
    recommender: SimilarityRecommender,
    resolver: PosterResolver<S>,
    config: ExplorerConfig,
}

impl ClusterExplorer<HttpImageSource> {
    /// Create an explorer that downloads posters over HTTP
    pub fn new(store: Arc<DataStore>, config: ExplorerConfig) -> Result<Self> {
        let source = HttpImageSource::new(config.fetch_timeout)
            .context("Failed to create poster HTTP client")?;
        Ok(Self::with_source(store, config, source))
    }
}

impl<S: ImageSource> ClusterExplorer<S> {
    /// Create an explorer over any image source
    pub fn with_source(store: Arc<DataStore>, config: ExplorerConfig, source: S) -> Self {
        let options = SelectorOptions::from_records(store.embeddings());
        let sampler = ClusterSampler::new().with_sample_size(config.sample_size);
        let recommender =
            SimilarityRecommender::new(store.clone()).with_sample_size(config.sample_size);
        let resolver = PosterResolver::new(store.clone(), source);

        Self {
            store,
            options,
            sampler,
            recommender,
            resolver,
            config,
        }
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        self.resolver.source()
    }

    /// Selector options, derived once from the unfiltered table
    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    /// Rows matching every supplied predicate
    pub fn filter(
        &self,
        genre: &Selection<String>,
        cluster: &Selection<ClusterLabel>,
    ) -> Result<Vec<&EmbeddingRecord>> {
        let filtered = FilterPipeline::for_selection(genre, cluster)
            .apply_to(self.store.embeddings())
            .context("Failed to apply filters")?;
        info!(
            "Filtered genre={} cluster={}: {} of {} rows",
            genre,
            cluster,
            filtered.len(),
            self.store.embeddings().len()
        );
        Ok(filtered)
    }

    /// Scatter points of the filtered view
    pub fn scatter(
        &self,
        genre: &Selection<String>,
        cluster: &Selection<ClusterLabel>,
    ) -> Result<Vec<ScatterPoint>> {
        let filtered = self.filter(genre, cluster)?;
        Ok(scatter_points(&filtered))
    }

    /// Up to `sample_size` posters for every cluster of the filtered view
    pub async fn representative_posters(
        &self,
        genre: &Selection<String>,
        cluster: &Selection<ClusterLabel>,
    ) -> Result<Vec<ClusterGallery>> {
        let start_time = Instant::now();

        let filtered = self.filter(genre, cluster)?;
        let samples = {
            let mut rng = rand::rng();
            self.sampler.sample_all(&filtered, &mut rng)
        };

        let mut galleries = Vec::with_capacity(samples.len());
        for sample in samples {
            let content = match &sample.picks {
                ClusterPicks::Empty => GalleryContent::Empty,
                ClusterPicks::Rows(rows) => GalleryContent::Posters(self.build_gallery(rows).await),
            };
            galleries.push(ClusterGallery {
                cluster: sample.cluster,
                member_count: sample.member_count,
                content,
            });
        }

        info!(
            "Built {} cluster galleries in {:.2?}",
            galleries.len(),
            start_time.elapsed()
        );
        Ok(galleries)
    }

    /// Posters of movies sharing `entity_id`'s cluster
    pub async fn similar_posters(&self, entity_id: EntityId) -> Result<SimilarGallery> {
        let start_time = Instant::now();

        let recommendation = {
            let mut rng = rand::rng();
            self.recommender.recommend(entity_id, &mut rng)
        }
        .context("Failed to find similar movies")?;

        let gallery = self.build_gallery(&recommendation.picks).await;
        info!(
            "Found {} similar picks for {} (cluster {}) in {:.2?}",
            gallery.picks.len(),
            entity_id,
            recommendation.cluster,
            start_time.elapsed()
        );

        Ok(SimilarGallery {
            reference: recommendation.reference.entity_id,
            cluster: recommendation.cluster,
            gallery,
        })
    }

    /// Preview an uploaded poster (no search behind it)
    pub fn preview_upload(&self, path: &std::path::Path) -> Result<UploadPreview, UploadError> {
        upload::preview_upload(path)
    }

    /// Resolve picks in order and deal them into the grid
    async fn build_gallery(&self, picks: &[EmbeddingRecord]) -> PosterGallery {
        let outcomes = self.resolver.resolve_all(picks).await;

        let mut skipped = Vec::new();
        let mut slots = Vec::with_capacity(picks.len());
        for (row, outcome) in picks.iter().zip(outcomes) {
            match outcome {
                PosterOutcome::Resolved(poster) => slots.push(Some(poster)),
                PosterOutcome::Skipped(reason) => {
                    skipped.push(SkippedPoster {
                        entity_id: row.entity_id,
                        reason,
                    });
                    slots.push(None);
                }
            }
        }

        PosterGallery {
            grid: PosterGrid::arrange(self.config.grid_columns, slots),
            picks: picks.iter().map(|row| row.entity_id).collect(),
            skipped,
        }
    }
}
