//! Filter to keep only rows of one genre.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::EmbeddingRecord;

/// Keeps rows whose genre equals the selected genre exactly.
///
/// Rows without a genre never match. No case folding or trimming happens
/// here; the selector only offers values taken from the table itself.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a EmbeddingRecord>) -> Result<Vec<&'a EmbeddingRecord>> {
        let filtered = rows
            .into_iter()
            .filter(|row| row.genre.as_deref() == Some(self.genre.as_str()))
            .collect();
        Ok(filtered)
    }
}
