//! ndarray export for frames.
//!
//! Encoded frames hold only numeric and indicator columns, so they can be
//! handed to downstream models as a dense sample-major matrix. All values
//! are exported as `f32` regardless of storage type.

use ndarray::Array2;

use super::column::Column;
use super::error::FrameError;
use super::frame::DataFrame;

impl DataFrame {
    /// Export the frame as a sample-major `[n_rows, n_columns]` matrix.
    ///
    /// Indicator values are exported as `0.0`/`1.0`. Categorical columns
    /// cannot be exported and produce [`FrameError::NotNumeric`].
    ///
    /// # Example
    ///
    /// ```
    /// use onehot::frame::{Column, DataFrame};
    ///
    /// let df = DataFrame::from_columns([
    ///     ("a".to_string(), Column::numeric(vec![1.0, 2.0])),
    ///     ("b".to_string(), Column::numeric(vec![3.0, 4.0])),
    /// ])
    /// .unwrap();
    ///
    /// let m = df.to_ndarray().unwrap();
    /// assert_eq!(m.shape(), &[2, 2]);
    /// assert_eq!(m[[1, 0]], 2.0);
    /// ```
    pub fn to_ndarray(&self) -> Result<Array2<f32>, FrameError> {
        let n_rows = self.n_rows();
        let n_cols = self.n_columns();

        let mut out = Array2::<f32>::zeros((n_rows, n_cols));
        for (col_idx, (name, column)) in self.columns().enumerate() {
            match column {
                Column::Numeric(values) => {
                    for (row, &v) in values.iter().enumerate() {
                        out[[row, col_idx]] = v;
                    }
                }
                Column::Indicator(ind) => {
                    for row in 0..n_rows {
                        out[[row, col_idx]] = f32::from(ind.get(row));
                    }
                }
                Column::Categorical(_) => {
                    return Err(FrameError::NotNumeric {
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(out)
    }
}
