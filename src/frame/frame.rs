//! The column-ordered frame container.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::error::FrameError;

/// An ordered collection of named columns with a uniform row count.
///
/// This is the input and output container for one-hot expansion and
/// encoding. Column names are unique; column order is preserved and
/// observable through [`DataFrame::columns`].
///
/// # Example
///
/// ```
/// use onehot::frame::{Column, DataFrame};
///
/// let df = DataFrame::from_columns([
///     ("age".to_string(), Column::numeric(vec![25.0, 30.0])),
///     ("color".to_string(), Column::categorical(["red", "blue"])),
/// ])
/// .unwrap();
///
/// assert_eq!(df.n_rows(), 2);
/// assert_eq!(df.n_columns(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<(String, Column)>,

    /// Row count; `None` until fixed by `with_rows` or the first column.
    n_rows: Option<usize>,
}

impl DataFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame with a fixed row count.
    ///
    /// Useful when columns may all be dropped but the row count must
    /// survive for later appends.
    pub fn with_rows(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            n_rows: Some(n_rows),
        }
    }

    /// Build a frame from `(name, column)` pairs.
    pub fn from_columns<I>(columns: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = (String, Column)>,
    {
        let mut frame = Self::new();
        for (name, column) in columns {
            frame.push(name, column)?;
        }
        Ok(frame)
    }

    /// Append a column.
    ///
    /// The first column fixes the row count (unless already fixed via
    /// [`DataFrame::with_rows`]); later columns must match it. Duplicate
    /// names are rejected.
    pub fn push(&mut self, name: impl Into<String>, column: Column) -> Result<(), FrameError> {
        let name = name.into();
        if self.columns.iter().any(|(n, _)| *n == name) {
            return Err(FrameError::DuplicateColumn { name });
        }
        match self.n_rows {
            None => self.n_rows = Some(column.len()),
            Some(expected) => {
                if column.len() != expected {
                    return Err(FrameError::InconsistentRows {
                        column: name,
                        expected,
                        got: column.len(),
                    });
                }
            }
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows.unwrap_or(0)
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Iterate `(name, column)` pairs in frame order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Iterate column names in frame order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// The column names as a set (membership semantics only).
    pub fn column_set(&self) -> HashSet<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }
}
