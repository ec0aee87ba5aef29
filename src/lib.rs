//! onehot: stateful one-hot encoding for categorical features.
//!
//! This crate learns the set of indicator columns produced from the
//! categorical features of a training frame, then reproduces exactly that
//! column set when transforming new data. Columns unseen at fit time and
//! columns missing at transform time are reconciled according to a
//! configurable policy.
//!
//! # Key Types
//!
//! - [`OneHotEncoder`] / [`OneHotConfig`] - The encoder and its builder
//! - [`HandleUnknown`] - Unknown-column policy (`Error` or `Ignore`)
//! - [`DataFrame`] / [`Column`] - Named-column input/output container
//! - [`Transformer`] - Fit/transform seam for pipeline callers
//!
//! # Example
//!
//! ```
//! use onehot::{Column, DataFrame, HandleUnknown, OneHotConfig, OneHotEncoder};
//!
//! let train = DataFrame::from_columns([(
//!     "color".to_string(),
//!     Column::categorical(["red", "blue"]),
//! )])
//! .unwrap();
//! let test = DataFrame::from_columns([(
//!     "color".to_string(),
//!     Column::categorical(["red", "green"]),
//! )])
//! .unwrap();
//!
//! let config = OneHotConfig::builder()
//!     .handle_unknown(HandleUnknown::Ignore)
//!     .build();
//! let mut encoder = OneHotEncoder::new(config);
//!
//! encoder.fit(&train).unwrap();
//! let encoded = encoder.transform(&test).unwrap();
//!
//! // The unseen "green" category is dropped; the output column set is
//! // exactly the fitted one.
//! assert_eq!(encoded.n_columns(), 2);
//! assert!(encoded.column("color_red").is_some());
//! assert!(encoded.column("color_blue").is_some());
//! assert!(encoded.column("color_green").is_none());
//! ```

pub mod encode;
pub mod frame;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use encode::{
    expand_indicators, EncodeError, HandleUnknown, IndicatorDtype, OneHotConfig, OneHotEncoder,
    Transformer,
};
pub use frame::{Column, DataFrame, FrameError, IndicatorColumn, SparseIndicator};
