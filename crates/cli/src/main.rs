use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataPaths, DataStore, EntityId};
use explorer::{
    ClusterExplorer, ExplorerConfig, GalleryContent, PosterGallery, EMPTY_CLUSTER_MESSAGE,
};
use pipeline::Selection;
use std::path::PathBuf;
use std::time::Instant;

/// Cluster Explorer - browse UMAP + DBSCAN movie poster clusters
#[derive(Parser)]
#[command(name = "cluster-explorer")]
#[command(about = "Explore movie poster clusters from precomputed UMAP + DBSCAN results", long_about = None)]
struct Cli {
    /// Directory holding umap_dbscan_resultados.csv and MovieGenre.csv
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Override the embedding/cluster results file
    #[arg(long)]
    embeddings: Option<PathBuf>,

    /// Override the movie metadata file
    #[arg(long)]
    metadata: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the genre, cluster and movie selector options
    Options,

    /// Print the filtered 2D scatter points as JSON
    Scatter {
        /// Genre to keep, or "All"
        #[arg(long, default_value = "All")]
        genre: String,

        /// Cluster label to keep, or "All"
        #[arg(long, default_value = "All", allow_hyphen_values = true)]
        cluster: String,
    },

    /// Show representative posters for each cluster
    Clusters {
        /// Genre to keep, or "All"
        #[arg(long, default_value = "All")]
        genre: String,

        /// Cluster label to keep, or "All"
        #[arg(long, default_value = "All", allow_hyphen_values = true)]
        cluster: String,
    },

    /// Show movies from the same cluster as the given movie
    Similar {
        /// imdbId of the reference movie
        #[arg(long)]
        entity_id: EntityId,
    },

    /// Preview a poster image (visual search is not available)
    Upload {
        /// jpg, jpeg or png file
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut paths = DataPaths::in_dir(&cli.data_dir);
    if let Some(embeddings) = cli.embeddings {
        paths = paths.with_embeddings(embeddings);
    }
    if let Some(metadata) = cli.metadata {
        paths = paths.with_metadata(metadata);
    }

    // Without both tables there is nothing to explore
    let start = Instant::now();
    let store = DataStore::shared(&paths).context("Failed to load explorer dataset")?;
    eprintln!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let explorer = ClusterExplorer::new(store, ExplorerConfig::default())?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Options => handle_options(&explorer),
        Commands::Scatter { genre, cluster } => handle_scatter(&explorer, &genre, &cluster)?,
        Commands::Clusters { genre, cluster } => {
            handle_clusters(&explorer, &genre, &cluster).await?
        }
        Commands::Similar { entity_id } => handle_similar(&explorer, entity_id).await?,
        Commands::Upload { file } => handle_upload(&explorer, file)?,
    }

    Ok(())
}

fn parse_selection(genre: &str, cluster: &str) -> Result<(Selection<String>, Selection<i32>)> {
    let genre = Selection::genre(genre);
    let cluster = Selection::cluster(cluster)?;
    Ok((genre, cluster))
}

/// Handle the 'options' command
fn handle_options(explorer: &ClusterExplorer) {
    let options = explorer.options();

    println!("{}", "Genre:".bold().blue());
    println!("  {}", options.genre_labels().join(", "));
    println!("{}", "Cluster:".bold().blue());
    println!("  {}", options.cluster_labels().join(", "));
    println!("{}", "Movies (imdbId):".bold().blue());
    println!("  {} selectable ids", options.entity_ids.len());
}

/// Handle the 'scatter' command
fn handle_scatter(explorer: &ClusterExplorer, genre: &str, cluster: &str) -> Result<()> {
    let (genre, cluster) = parse_selection(genre, cluster)?;
    let points = explorer.scatter(&genre, &cluster)?;

    let json = serde_json::to_string_pretty(&points).context("Failed to serialize scatter points")?;
    println!("{}", json);
    Ok(())
}

/// Handle the 'clusters' command
async fn handle_clusters(explorer: &ClusterExplorer, genre: &str, cluster: &str) -> Result<()> {
    let (genre, cluster) = parse_selection(genre, cluster)?;
    let galleries = explorer.representative_posters(&genre, &cluster).await?;

    println!("{}", "Representative movies of each cluster".bold().blue());
    if galleries.is_empty() {
        println!("No movies match the current filters.");
    }
    for gallery in &galleries {
        println!(
            "\n{} ({} movies)",
            format!("Cluster {}", gallery.cluster).bold(),
            gallery.member_count
        );
        match &gallery.content {
            GalleryContent::Empty => println!("  {}", EMPTY_CLUSTER_MESSAGE),
            GalleryContent::Posters(posters) => print_gallery(posters),
        }
    }
    Ok(())
}

/// Handle the 'similar' command
async fn handle_similar(explorer: &ClusterExplorer, entity_id: EntityId) -> Result<()> {
    let similar = explorer.similar_posters(entity_id).await?;

    println!(
        "{}",
        format!("Similar movies (same cluster = {}):", similar.cluster)
            .bold()
            .blue()
    );
    print_gallery(&similar.gallery);
    Ok(())
}

/// Handle the 'upload' command
fn handle_upload(explorer: &ClusterExplorer, file: PathBuf) -> Result<()> {
    let preview = explorer
        .preview_upload(&file)
        .with_context(|| format!("Failed to preview {}", file.display()))?;

    println!(
        "{} {} ({}x{})",
        "Uploaded image:".bold(),
        preview.file_name,
        preview.width,
        preview.height
    );
    println!("{} {}", "ℹ".cyan(), preview.message);
    Ok(())
}

/// Helper function to print a poster grid column by column
fn print_gallery(gallery: &PosterGallery) {
    for (index, column) in gallery.grid.columns().iter().enumerate() {
        println!("  {}", format!("Column {}", index + 1).green());
        for poster in column {
            println!(
                "    {} [{}] {}x{} {}",
                poster.entity_id,
                poster.caption,
                poster.width,
                poster.height,
                poster.url
            );
        }
    }
    if !gallery.skipped.is_empty() {
        tracing::debug!("{} posters skipped", gallery.skipped.len());
    }
}
