//! 2D scatter projection of the filtered rows.
//!
//! The charting itself happens elsewhere; this module only shapes the
//! points. The cluster label is exposed as text because it is used as a
//! categorical color key, not a numeric axis.

use data_loader::{EmbeddingRecord, EntityId};
use serde::Serialize;

/// One point of the embedding scatter plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub entity_id: EntityId,
    pub x: f64,
    pub y: f64,
    /// Color key
    pub cluster: String,
    /// Hover data
    pub genre: Option<String>,
}

impl From<&EmbeddingRecord> for ScatterPoint {
    fn from(record: &EmbeddingRecord) -> Self {
        Self {
            entity_id: record.entity_id,
            x: record.x,
            y: record.y,
            cluster: record.cluster.to_string(),
            genre: record.genre.clone(),
        }
    }
}

/// Project filtered rows into scatter points, keeping row order
pub fn scatter_points(rows: &[&EmbeddingRecord]) -> Vec<ScatterPoint> {
    rows.iter().map(|&record| ScatterPoint::from(record)).collect()
}
