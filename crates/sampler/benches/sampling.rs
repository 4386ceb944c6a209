//! Benchmarks for filtering and sampling
//!
//! Run with: cargo bench --package sampler
//!
//! Uses a synthetic table shaped like a real UMAP + DBSCAN export
//! (~40k rows, a few hundred clusters, a noise bucket).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{DataStore, EmbeddingRecord};
use pipeline::{FilterPipeline, Selection};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sampler::{ClusterSampler, SimilarityRecommender};
use std::sync::Arc;

const GENRES: [&str; 5] = ["Drama", "Comedy", "Action", "Horror", "Documentary"];

fn synthetic_store() -> Arc<DataStore> {
    let embeddings = (0..40_000i64)
        .map(|id| EmbeddingRecord {
            entity_id: 100_000 + id,
            x: (id % 200) as f64 * 0.1,
            y: (id / 200) as f64 * 0.1,
            genre: Some(GENRES[(id % 5) as usize].to_string()),
            cluster: (id % 301) as i32 - 1,
        })
        .collect();
    Arc::new(DataStore::new(embeddings, Vec::new()))
}

fn bench_filter_and_sample(c: &mut Criterion) {
    let store = synthetic_store();
    let sampler = ClusterSampler::new();
    let pipeline = FilterPipeline::for_selection(&Selection::genre("Drama"), &Selection::All);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("filter_and_sample_clusters", |b| {
        b.iter(|| {
            let filtered = pipeline.apply_to(black_box(store.embeddings())).unwrap();
            let samples = sampler.sample_all(&filtered, &mut rng);
            black_box(samples)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let store = synthetic_store();
    let recommender = SimilarityRecommender::new(store.clone());
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("recommend_same_cluster", |b| {
        b.iter(|| {
            let rec = recommender.recommend(black_box(100_123), &mut rng).unwrap();
            black_box(rec)
        })
    });
}

criterion_group!(benches, bench_filter_and_sample, bench_recommend);
criterion_main!(benches);
