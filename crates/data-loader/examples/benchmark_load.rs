use data_loader::{DataPaths, DataStore};
use std::time::Instant;

fn main() {
    let paths = DataPaths::in_dir(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));

    println!("Loading explorer dataset...\n");

    let start = Instant::now();
    let store = DataStore::load_from_files(&paths)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (embeddings, metadata) = store.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Embedding rows: {}", embeddings);
    println!("Metadata rows: {}", metadata);
    println!("\nPerformance: {:.0} rows/second",
             (embeddings + metadata) as f64 / elapsed.as_secs_f64());
}
