//! Column storage types.
//!
//! This module defines [`Column`] for the three kinds of data a frame can
//! hold, and [`IndicatorColumn`] / [`SparseIndicator`] for 0/1 indicator
//! storage in dense or sparse form.

use serde::{Deserialize, Serialize};

/// A single named-frame column.
///
/// Numeric values are stored as `f32`. Categorical values are string labels
/// drawn from a finite set. Indicator columns hold 0/1 values produced by
/// one-hot expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Continuous numeric values (one per row).
    Numeric(Vec<f32>),

    /// Categorical labels (one per row).
    Categorical(Vec<String>),

    /// 0/1 indicator values (one per row).
    Indicator(IndicatorColumn),
}

impl Column {
    /// Create a numeric column from values.
    pub fn numeric(values: impl Into<Vec<f32>>) -> Self {
        Self::Numeric(values.into())
    }

    /// Create a categorical column from string-like labels.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
            Column::Indicator(c) => c.len(),
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this is a categorical column.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Column::Categorical(_))
    }

    /// Numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[f32]> {
        match self {
            Column::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Categorical labels, if this is a categorical column.
    pub fn as_categorical(&self) -> Option<&[String]> {
        match self {
            Column::Categorical(v) => Some(v),
            _ => None,
        }
    }

    /// Indicator storage, if this is an indicator column.
    pub fn as_indicator(&self) -> Option<&IndicatorColumn> {
        match self {
            Column::Indicator(c) => Some(c),
            _ => None,
        }
    }
}

/// Storage for a single 0/1 indicator column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndicatorColumn {
    /// Dense array of 0/1 values.
    Dense(Vec<u8>),

    /// Sparse storage holding only the positions of the 1-entries.
    Sparse(SparseIndicator),
}

impl IndicatorColumn {
    /// Create an all-zero indicator column with the requested storage.
    pub fn zeros(n_rows: usize, sparse: bool) -> Self {
        if sparse {
            Self::Sparse(SparseIndicator::new(Vec::new(), n_rows))
        } else {
            Self::Dense(vec![0; n_rows])
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            IndicatorColumn::Dense(v) => v.len(),
            IndicatorColumn::Sparse(s) => s.n_rows,
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this column uses sparse storage.
    pub fn is_sparse(&self) -> bool {
        matches!(self, IndicatorColumn::Sparse(_))
    }

    /// Value at a row index (0 or 1).
    pub fn get(&self, idx: usize) -> u8 {
        match self {
            IndicatorColumn::Dense(v) => v[idx],
            IndicatorColumn::Sparse(s) => s.get(idx),
        }
    }

    /// Number of 1-entries.
    pub fn n_ones(&self) -> usize {
        match self {
            IndicatorColumn::Dense(v) => v.iter().filter(|&&b| b != 0).count(),
            IndicatorColumn::Sparse(s) => s.ones.len(),
        }
    }

    /// Materialize as a dense 0/1 vector.
    pub fn to_dense(&self) -> Vec<u8> {
        match self {
            IndicatorColumn::Dense(v) => v.clone(),
            IndicatorColumn::Sparse(s) => s.to_dense(),
        }
    }
}

/// Sparse indicator storage.
///
/// Stores the sorted row indices of the 1-entries. All other rows are 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseIndicator {
    /// Row indices of the 1-entries (sorted, no duplicates).
    pub ones: Vec<u32>,

    /// Total number of rows.
    pub n_rows: usize,
}

impl SparseIndicator {
    /// Create sparse indicator storage.
    ///
    /// `ones` must be sorted, duplicate-free, and within `0..n_rows`.
    pub fn new(ones: Vec<u32>, n_rows: usize) -> Self {
        debug_assert!(ones.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(ones.last().map_or(true, |&i| (i as usize) < n_rows));
        Self { ones, n_rows }
    }

    /// Value at a row index (0 or 1).
    pub fn get(&self, idx: usize) -> u8 {
        match self.ones.binary_search(&(idx as u32)) {
            Ok(_) => 1,
            Err(_) => 0,
        }
    }

    /// Materialize as a dense 0/1 vector.
    pub fn to_dense(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.n_rows];
        for &i in &self.ones {
            out[i as usize] = 1;
        }
        out
    }
}
