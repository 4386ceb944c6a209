//! Integration tests for the pipeline.
//!
//! These tests verify that selections, filters, options and the scatter
//! projection work together over a realistic store.

use data_loader::{DataStore, EmbeddingRecord};
use pipeline::{scatter_points, FilterPipeline, Selection, SelectorOptions};

fn create_test_store() -> DataStore {
    let rows = [
        (11, Some("Drama"), 0, 0.1, 0.2),
        (22, Some("Comedy"), 0, 0.3, 0.1),
        (33, Some("Drama"), 1, 5.0, 5.5),
        (44, None, -1, -3.0, 9.0),
        (55, Some("Horror"), 1, 5.2, 5.1),
        (66, Some("Drama"), 2, -7.0, 1.0),
    ];

    let embeddings = rows
        .iter()
        .map(|&(entity_id, genre, cluster, x, y)| EmbeddingRecord {
            entity_id,
            x,
            y,
            genre: genre.map(str::to_string),
            cluster,
        })
        .collect();

    DataStore::new(embeddings, Vec::new())
}

fn filtered_ids(store: &DataStore, genre: &str, cluster: &str) -> Vec<i64> {
    let pipeline = FilterPipeline::for_selection(
        &Selection::genre(genre),
        &Selection::cluster(cluster).unwrap(),
    );
    pipeline
        .apply_to(store.embeddings())
        .unwrap()
        .iter()
        .map(|r| r.entity_id)
        .collect()
}

#[test]
fn test_all_all_returns_full_table() {
    let store = create_test_store();

    assert_eq!(filtered_ids(&store, "All", "All"), vec![11, 22, 33, 44, 55, 66]);
}

#[test]
fn test_every_selection_is_exact_subset() {
    let store = create_test_store();
    let options = SelectorOptions::from_records(store.embeddings());

    for genre in options.genre_labels() {
        for cluster in options.cluster_labels() {
            let ids = filtered_ids(&store, &genre, &cluster);

            let expected: Vec<i64> = store
                .embeddings()
                .iter()
                .filter(|r| genre == "All" || r.genre.as_deref() == Some(genre.as_str()))
                .filter(|r| cluster == "All" || r.cluster.to_string() == cluster)
                .map(|r| r.entity_id)
                .collect();

            assert_eq!(ids, expected, "genre={genre} cluster={cluster}");
        }
    }
}

#[test]
fn test_options_ignore_current_filter() {
    let store = create_test_store();
    let options = SelectorOptions::from_records(store.embeddings());

    // Even when the view is narrowed, the selectors keep offering everything
    assert_eq!(filtered_ids(&store, "Horror", "All"), vec![55]);
    assert_eq!(options.clusters, vec![-1, 0, 1, 2]);
    assert_eq!(options.genres, vec!["Comedy", "Drama", "Horror"]);
}

#[test]
fn test_scatter_follows_filter() {
    let store = create_test_store();
    let pipeline = FilterPipeline::for_selection(&Selection::All, &Selection::Only(1));
    let filtered = pipeline.apply_to(store.embeddings()).unwrap();

    let points = scatter_points(&filtered);

    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p.cluster == "1"));
}
