//! Indicator expansion.
//!
//! [`expand_indicators`] replaces every categorical column with one 0/1
//! indicator column per observed distinct value, named
//! `<column>_<value>`. Non-categorical columns pass through unchanged.

use std::collections::BTreeSet;

use crate::frame::{Column, DataFrame, FrameError, IndicatorColumn, SparseIndicator};

/// Expand categorical columns into indicator columns.
///
/// Each categorical column `C` with observed distinct values `v1 < v2 < ...`
/// is replaced, at its position in the frame, by columns `C_v1`, `C_v2`, ...
/// holding 1 where the row's value equals the column's value and 0
/// elsewhere. Distinct values are ordered ascending, so the produced column
/// order is stable across calls. Numeric and indicator columns are copied
/// through unchanged in name, content, and relative position.
///
/// `sparse` selects sparse indicator storage; dense `u8` storage otherwise.
///
/// Output-name collisions (for example a column `a` with value `b_c` next to
/// a column `a_b` with value `c`) surface as [`FrameError::DuplicateColumn`].
pub fn expand_indicators(frame: &DataFrame, sparse: bool) -> Result<DataFrame, FrameError> {
    let mut out = DataFrame::with_rows(frame.n_rows());

    for (name, column) in frame.columns() {
        match column {
            Column::Categorical(values) => {
                let distinct: BTreeSet<&String> = values.iter().collect();
                for value in distinct {
                    let indicator = build_indicator(values, value, sparse);
                    out.push(format!("{name}_{value}"), Column::Indicator(indicator))?;
                }
            }
            other => out.push(name, other.clone())?,
        }
    }

    Ok(out)
}

fn build_indicator(values: &[String], value: &str, sparse: bool) -> IndicatorColumn {
    if sparse {
        let ones: Vec<u32> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(i, _)| i as u32)
            .collect();
        IndicatorColumn::Sparse(SparseIndicator::new(ones, values.len()))
    } else {
        let dense: Vec<u8> = values.iter().map(|v| u8::from(v.as_str() == value)).collect();
        IndicatorColumn::Dense(dense)
    }
}
