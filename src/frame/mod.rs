//! Frame container and column storage.
//!
//! # Key Types
//!
//! - [`DataFrame`]: Ordered named columns with a uniform row count
//! - [`Column`]: Numeric, categorical, or indicator storage
//! - [`IndicatorColumn`] / [`SparseIndicator`]: Dense or sparse 0/1 storage
//!
//! Encoded frames (numeric + indicator columns only) can be exported to a
//! dense `ndarray` matrix via [`DataFrame::to_ndarray`].

mod column;
mod error;
mod frame;
mod ndarray;

pub use column::{Column, IndicatorColumn, SparseIndicator};
pub use error::FrameError;
pub use frame::DataFrame;
