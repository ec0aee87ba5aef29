//! Stateful one-hot encoder with fit/transform column reconciliation.
//!
//! [`OneHotEncoder`] learns the indicator column set produced by expanding a
//! training frame, then reproduces exactly that column set on new data.
//! Columns appearing at transform time but unseen at fit time are handled
//! according to [`HandleUnknown`]; fit-time columns absent at transform time
//! are restored as all-zero indicator columns under
//! [`HandleUnknown::Ignore`].

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::error::EncodeError;
use super::expand::expand_indicators;
use crate::frame::{Column, DataFrame, IndicatorColumn};

// =============================================================================
// Configuration
// =============================================================================

/// Policy for columns produced at transform time but unseen during fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleUnknown {
    /// Fail the transform, naming the offending columns.
    #[default]
    Error,

    /// Silently drop unseen columns and restore missing fit-time columns
    /// as all-zero indicators.
    Ignore,
}

impl FromStr for HandleUnknown {
    type Err = Infallible;

    /// Permissive parse: `"error"` maps to [`HandleUnknown::Error`], any
    /// other string to [`HandleUnknown::Ignore`].
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(if s == "error" {
            HandleUnknown::Error
        } else {
            HandleUnknown::Ignore
        })
    }
}

/// Requested storage type for indicator values.
///
/// Recorded on the encoder for pipeline compatibility; indicator columns
/// are currently always materialized as `u8` and the missing-column restore
/// path does not cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorDtype {
    /// Unsigned 8-bit integers (the default).
    #[default]
    U8,
    /// 32-bit integers.
    I32,
    /// 32-bit floats.
    F32,
}

/// Encoder configuration, fixed at construction.
///
/// # Example
///
/// ```
/// use onehot::encode::{HandleUnknown, OneHotConfig};
///
/// // All defaults: dense output, u8 indicators, error on unknown columns.
/// let config = OneHotConfig::default();
/// assert!(!config.sparse);
///
/// let config = OneHotConfig::builder()
///     .sparse(true)
///     .handle_unknown(HandleUnknown::Ignore)
///     .build();
/// assert_eq!(config.handle_unknown, HandleUnknown::Ignore);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
pub struct OneHotConfig {
    /// Request sparse indicator storage from expansion. Default: `false`.
    #[builder(default)]
    pub sparse: bool,

    /// Storage type for indicator values. Default: [`IndicatorDtype::U8`].
    #[builder(default)]
    pub dtype: IndicatorDtype,

    /// Unknown-column policy. Default: [`HandleUnknown::Error`].
    #[builder(default)]
    pub handle_unknown: HandleUnknown,
}

// =============================================================================
// OneHotEncoder
// =============================================================================

/// A stateful transformer converting categorical columns into one-hot
/// indicator columns.
///
/// `fit` learns the column set produced by expanding the training frame;
/// `transform` expands new data and reconciles the result against that set.
///
/// # Example
///
/// ```
/// use onehot::encode::{HandleUnknown, OneHotConfig, OneHotEncoder};
/// use onehot::frame::{Column, DataFrame};
///
/// let train = DataFrame::from_columns([(
///     "color".to_string(),
///     Column::categorical(["red", "blue"]),
/// )])
/// .unwrap();
///
/// let config = OneHotConfig::builder()
///     .handle_unknown(HandleUnknown::Ignore)
///     .build();
/// let mut encoder = OneHotEncoder::new(config);
/// let encoded = encoder.fit_transform(&train).unwrap();
///
/// assert!(encoded.column("color_red").is_some());
/// assert!(encoded.column("color_blue").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OneHotEncoder {
    config: OneHotConfig,

    /// Output column set of the most recent fit. `None` until fitted.
    fitted_columns: Option<HashSet<String>>,
}

impl OneHotEncoder {
    /// Create an unfitted encoder with the given configuration.
    pub fn new(config: OneHotConfig) -> Self {
        Self {
            config,
            fitted_columns: None,
        }
    }

    /// The encoder configuration.
    pub fn config(&self) -> &OneHotConfig {
        &self.config
    }

    /// The learned column set, if fitted.
    pub fn fitted_columns(&self) -> Option<&HashSet<String>> {
        self.fitted_columns.as_ref()
    }

    /// Returns true once `fit` or `fit_transform` has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.fitted_columns.is_some()
    }

    /// Learn the indicator column set from a training frame.
    ///
    /// Expansion here is always dense; only [`OneHotEncoder::fit_transform`]
    /// and [`OneHotEncoder::transform`] honor the configured `sparse` flag
    /// (upstream behavior, kept for compatibility). Any previously learned
    /// column set is overwritten. Returns `&mut Self` for chaining.
    pub fn fit(&mut self, x: &DataFrame) -> Result<&mut Self, EncodeError> {
        let expanded = expand_indicators(x, false)?;
        self.fitted_columns = Some(expanded.column_set());
        Ok(self)
    }

    /// Learn the column set and return the expanded training frame.
    ///
    /// Unlike [`OneHotEncoder::fit`], expansion honors the configured
    /// `sparse` flag. The returned frame is the raw expansion; it is not
    /// re-reconciled against the (identical) learned column set.
    pub fn fit_transform(&mut self, x: &DataFrame) -> Result<DataFrame, EncodeError> {
        let expanded = expand_indicators(x, self.config.sparse)?;
        self.fitted_columns = Some(expanded.column_set());
        Ok(expanded)
    }

    /// Encode a frame against the learned column set.
    ///
    /// Under [`HandleUnknown::Error`], any expansion column absent from the
    /// learned set fails the call with [`EncodeError::UnknownColumns`]; when
    /// no such column exists the expansion passes through as-is, and
    /// fit-time columns missing from it are NOT restored. Under
    /// [`HandleUnknown::Ignore`], unseen columns are dropped and missing
    /// fit-time columns are appended as all-zero indicators, so the output
    /// column set always equals the learned set.
    ///
    /// Returns [`EncodeError::NotFitted`] if called before a successful
    /// `fit`/`fit_transform`. Never mutates encoder state.
    pub fn transform(&self, x: &DataFrame) -> Result<DataFrame, EncodeError> {
        let fitted = self.fitted_columns.as_ref().ok_or(EncodeError::NotFitted)?;
        let expanded = expand_indicators(x, self.config.sparse)?;

        match self.config.handle_unknown {
            HandleUnknown::Error => {
                let mut extra: Vec<String> = expanded
                    .column_names()
                    .filter(|name| !fitted.contains(*name))
                    .map(String::from)
                    .collect();
                if !extra.is_empty() {
                    extra.sort();
                    return Err(EncodeError::UnknownColumns { columns: extra });
                }
                // Missing fit-time columns deliberately pass unchecked here.
                Ok(expanded)
            }
            HandleUnknown::Ignore => {
                let n_rows = expanded.n_rows();
                let mut out = DataFrame::with_rows(n_rows);

                // Keep surviving columns in expansion order.
                for (name, column) in expanded.columns() {
                    if fitted.contains(name) {
                        out.push(name, column.clone())?;
                    }
                }

                // Restore missing fit-time columns as all-zero indicators,
                // in set-iteration order.
                for name in fitted {
                    if out.column(name).is_none() {
                        let zeros = IndicatorColumn::zeros(n_rows, self.config.sparse);
                        out.push(name.as_str(), Column::Indicator(zeros))?;
                    }
                }

                Ok(out)
            }
        }
    }
}
