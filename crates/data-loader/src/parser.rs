//! Parser for the two CSV inputs.
//!
//! - umap_dbscan_resultados.csv: imdbId, umap_x, umap_y, Genre, Cluster_DBSCAN (UTF-8)
//! - MovieGenre.csv: imdbId, Title, Genre, Poster, ... (ISO-8859-1)
//!
//! Header names are resolved once per file into a fixed schema
//! ([`EmbeddingSchema`], [`MetadataSchema`]) so row parsing never has to care
//! which spelling of the cluster column the upstream tool wrote.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Canonical name of the cluster-label column
pub const CLUSTER_COLUMN: &str = "Cluster_DBSCAN";

/// Spelling some exports use instead of [`CLUSTER_COLUMN`]
pub const CLUSTER_COLUMN_ALT: &str = "cluster_dbscan";

const ID_COLUMN: &str = "imdbId";
const GENRE_COLUMN: &str = "Genre";

/// Cell values a dataframe tool would read back as missing
const MISSING_MARKERS: [&str; 6] = ["", "NA", "N/A", "NaN", "nan", "null"];

/// Helper function to read a file with ISO-8859-1 encoding (Latin-1)
///
/// Each byte maps directly to the Unicode code point of the same value, so
/// this never fails on stray non-UTF-8 bytes.
fn read_latin1(path: &Path) -> Result<String> {
    let mut file = open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Read a UTF-8 file, dropping a leading byte-order mark if present
fn read_utf8(path: &Path) -> Result<String> {
    let mut file = open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content = String::from_utf8(bytes).map_err(|_| DataLoadError::InvalidEncoding {
        file: file_label(path),
    })?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Schema normalization
// =============================================================================

/// Column positions of the embedding file, after name normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingSchema {
    pub entity_id: usize,
    pub x: usize,
    pub y: usize,
    pub genre: usize,
    pub cluster: usize,
}

impl EmbeddingSchema {
    /// Map header names to positions.
    ///
    /// `Cluster_DBSCAN` is preferred; `cluster_dbscan` is accepted only when
    /// the canonical name is absent.
    pub fn resolve(headers: &StringRecord, file: &str) -> Result<Self> {
        let cluster = column_position(headers, CLUSTER_COLUMN)
            .or_else(|| column_position(headers, CLUSTER_COLUMN_ALT))
            .ok_or_else(|| missing_column(file, CLUSTER_COLUMN))?;

        Ok(Self {
            entity_id: require_column(headers, ID_COLUMN, file)?,
            x: require_column(headers, "umap_x", file)?,
            y: require_column(headers, "umap_y", file)?,
            genre: require_column(headers, GENRE_COLUMN, file)?,
            cluster,
        })
    }
}

/// Column positions of the metadata file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSchema {
    pub entity_id: usize,
    pub poster: usize,
    pub title: Option<usize>,
    pub genre: Option<usize>,
}

impl MetadataSchema {
    pub fn resolve(headers: &StringRecord, file: &str) -> Result<Self> {
        Ok(Self {
            entity_id: require_column(headers, ID_COLUMN, file)?,
            poster: require_column(headers, "Poster", file)?,
            title: column_position(headers, "Title"),
            genre: column_position(headers, GENRE_COLUMN),
        })
    }
}

fn column_position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn require_column(headers: &StringRecord, name: &str, file: &str) -> Result<usize> {
    column_position(headers, name).ok_or_else(|| missing_column(file, name))
}

fn missing_column(file: &str, column: &str) -> DataLoadError {
    DataLoadError::MissingColumn {
        file: file.to_string(),
        column: column.to_string(),
    }
}

// =============================================================================
// Row parsing
// =============================================================================

/// Parse the embedding file at `path`
pub fn parse_embeddings(path: &Path) -> Result<Vec<EmbeddingRecord>> {
    let content = read_utf8(path)?;
    parse_embeddings_str(&content, &file_label(path))
}

/// Parse the Latin-1 metadata file at `path`
pub fn parse_metadata(path: &Path) -> Result<Vec<MovieMetadata>> {
    let content = read_latin1(path)?;
    parse_metadata_str(&content, &file_label(path))
}

/// Parse embedding CSV text; `file` is only used in error messages
pub fn parse_embeddings_str(content: &str, file: &str) -> Result<Vec<EmbeddingRecord>> {
    let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader.headers().map_err(|e| csv_error(file, e))?.clone();
    let schema = EmbeddingSchema::resolve(&headers, file)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(file, e))?;
        let cells = RowCells::new(&row, file);

        let cluster = cells.integer(schema.cluster, CLUSTER_COLUMN)?;
        records.push(EmbeddingRecord {
            entity_id: cells.integer(schema.entity_id, ID_COLUMN)?,
            x: cells.float(schema.x, "umap_x")?,
            y: cells.float(schema.y, "umap_y")?,
            genre: cells.optional_text(schema.genre),
            cluster: ClusterLabel::try_from(cluster)
                .map_err(|_| cells.error(format!("Cluster label out of range: {}", cluster)))?,
        });
    }

    Ok(records)
}

/// Parse metadata CSV text (already decoded from Latin-1)
pub fn parse_metadata_str(content: &str, file: &str) -> Result<Vec<MovieMetadata>> {
    let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader.headers().map_err(|e| csv_error(file, e))?.clone();
    let schema = MetadataSchema::resolve(&headers, file)?;

    let mut movies = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(file, e))?;
        let cells = RowCells::new(&row, file);

        movies.push(MovieMetadata {
            entity_id: cells.integer(schema.entity_id, ID_COLUMN)?,
            title: schema.title.and_then(|pos| cells.optional_text(pos)),
            genre: schema.genre.and_then(|pos| cells.optional_text(pos)),
            poster_url: cells.optional_text(schema.poster),
        });
    }

    Ok(movies)
}

fn csv_error(file: &str, source: csv::Error) -> DataLoadError {
    DataLoadError::CsvError {
        file: file.to_string(),
        source,
    }
}

/// One CSV row plus enough context to report where a bad cell sits
struct RowCells<'a> {
    row: &'a StringRecord,
    file: &'a str,
    line: usize,
}

impl<'a> RowCells<'a> {
    fn new(row: &'a StringRecord, file: &'a str) -> Self {
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
        Self { row, file, line }
    }

    /// Raw cell text, surrounding whitespace included
    fn cell(&self, pos: usize) -> &'a str {
        self.row.get(pos).unwrap_or("")
    }

    fn error(&self, reason: String) -> DataLoadError {
        DataLoadError::ParseError {
            file: self.file.to_string(),
            line: self.line,
            reason,
        }
    }

    fn integer(&self, pos: usize, column: &str) -> Result<i64> {
        let cell = self.cell(pos).trim();
        parse_integer(cell).ok_or_else(|| self.error(format!("Invalid {}: {:?}", column, cell)))
    }

    fn float(&self, pos: usize, column: &str) -> Result<f64> {
        let cell = self.cell(pos).trim();
        cell.parse()
            .map_err(|e| self.error(format!("Invalid {}: {:?} ({})", column, cell, e)))
    }

    /// Text cells are kept verbatim so "Drama" and "Drama " stay distinct
    fn optional_text(&self, pos: usize) -> Option<String> {
        let cell = self.cell(pos);
        if MISSING_MARKERS.contains(&cell) {
            None
        } else {
            Some(cell.to_string())
        }
    }
}

/// Parse an integer cell, also accepting integral floats like `"12.0"`
///
/// Floats outside the `i64` range are rejected rather than saturated.
fn parse_integer(cell: &str) -> Option<i64> {
    cell.parse::<i64>().ok().or_else(|| {
        let value: f64 = cell.parse().ok()?;
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
    })
}
