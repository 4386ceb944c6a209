//! Selector values as chosen in the UI.
//!
//! Every selector offers an "All" entry on top of the real values. Rather
//! than passing that sentinel string around, selections are parsed into
//! [`Selection::All`] or [`Selection::Only`] right at the edge.

use data_loader::ClusterLabel;
use std::fmt;
use thiserror::Error;

/// Text of the "no restriction" entry in every selector
pub const ALL_LABEL: &str = "All";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid cluster selection: {0:?} (expected \"All\" or an integer)")]
    InvalidCluster(String),
}

/// A selector value: either no restriction or one exact value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    /// The selected value, `None` for "All"
    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl Selection<String> {
    /// Parse a genre selector value. Anything but "All" is taken verbatim.
    pub fn genre(text: &str) -> Self {
        if text == ALL_LABEL {
            Selection::All
        } else {
            Selection::Only(text.to_string())
        }
    }
}

impl Selection<ClusterLabel> {
    /// Parse a cluster selector value ("All" or the label rendered as text)
    pub fn cluster(text: &str) -> Result<Self, SelectionError> {
        if text == ALL_LABEL {
            return Ok(Selection::All);
        }
        text.trim()
            .parse()
            .map(Selection::Only)
            .map_err(|_| SelectionError::InvalidCluster(text.to_string()))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}
