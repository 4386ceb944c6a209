//! End-to-end tests: CSV files on disk -> store -> explorer views.
//!
//! Posters are served from memory so no test touches the network.

use data_loader::{DataPaths, DataStore};
use explorer::{ClusterExplorer, ExplorerConfig, GalleryContent, VISUAL_SEARCH_UNAVAILABLE};
use pipeline::Selection;
use posters::{test_png, MemoryImageSource, SkipReason};
use std::fs;
use std::sync::Arc;

/// Clusters {0: 11, 22; 1: 33}, cluster column spelled the alternate way,
/// metadata with a Latin-1 title and no row for 22.
fn write_dataset(dir: &std::path::Path) -> DataPaths {
    let paths = DataPaths::in_dir(dir);

    fs::write(
        &paths.embeddings,
        "imdbId,umap_x,umap_y,Genre,cluster_dbscan\n\
         11,0.1,0.2,Drama,0\n\
         22,0.3,0.1,Comedy,0\n\
         33,4.0,4.5,Drama,1\n",
    )
    .unwrap();

    let mut metadata = b"imdbId,Imdb Link,Title,IMDB Score,Genre,Poster\n".to_vec();
    metadata.extend_from_slice(b"11,http://imdb/11,\"Caf");
    metadata.push(0xE9); // 'é' in ISO-8859-1
    metadata.extend_from_slice(b" Society, The (1999)\",7.1,Drama,http://posters/11.png\n");
    metadata.extend_from_slice(b"33,http://imdb/33,Third (2001),6.0,Drama,http://posters/33.png\n");
    fs::write(&paths.metadata, metadata).unwrap();

    paths
}

fn build_explorer(paths: &DataPaths) -> ClusterExplorer<MemoryImageSource> {
    let store = Arc::new(DataStore::load_from_files(paths).unwrap());
    let source = MemoryImageSource::new()
        .with_image("http://posters/11.png", test_png(10, 15).unwrap())
        .with_image("http://posters/33.png", test_png(10, 15).unwrap());
    ClusterExplorer::with_source(store, ExplorerConfig::default(), source)
}

#[tokio::test]
async fn test_cluster_one_has_exactly_one_poster() {
    let dir = tempfile::tempdir().unwrap();
    let explorer = build_explorer(&write_dataset(dir.path()));

    let galleries = explorer
        .representative_posters(&Selection::All, &Selection::cluster("1").unwrap())
        .await
        .unwrap();

    assert_eq!(galleries.len(), 1);
    let GalleryContent::Posters(posters) = &galleries[0].content else {
        panic!("cluster 1 should have posters");
    };
    assert_eq!(posters.picks, vec![33]);
    assert_eq!(posters.grid.columns()[0][0].caption, "Drama");
}

#[tokio::test]
async fn test_similar_to_eleven() {
    let dir = tempfile::tempdir().unwrap();
    let explorer = build_explorer(&write_dataset(dir.path()));

    let similar = explorer.similar_posters(11).await.unwrap();

    assert_eq!(similar.cluster, 0);
    // min(6, 3 rows), drawn with replacement from {11, 22}
    assert_eq!(similar.gallery.picks.len(), 3);
    assert!(similar.gallery.picks.iter().all(|id| [11, 22].contains(id)));
    assert!(similar
        .gallery
        .skipped
        .iter()
        .all(|skip| skip.entity_id == 22 && skip.reason == SkipReason::NoMetadata));
}

#[tokio::test]
async fn test_options_and_latin1_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let explorer = build_explorer(&write_dataset(dir.path()));

    let options = explorer.options();
    assert_eq!(options.genre_labels(), vec!["All", "Comedy", "Drama"]);
    assert_eq!(options.cluster_labels(), vec!["All", "0", "1"]);
    assert_eq!(options.entity_ids, vec![11, 22, 33]);

    let title = explorer.store().find_metadata(11).unwrap().title.clone();
    assert_eq!(title.as_deref(), Some("Café Society, The (1999)"));
}

#[tokio::test]
async fn test_upload_stub_message() {
    let dir = tempfile::tempdir().unwrap();
    let explorer = build_explorer(&write_dataset(dir.path()));
    let upload = dir.path().join("mine.PNG");
    fs::write(&upload, test_png(2, 2).unwrap()).unwrap();

    let preview = explorer.preview_upload(&upload).unwrap();

    assert_eq!(preview.message, VISUAL_SEARCH_UNAVAILABLE);
}
