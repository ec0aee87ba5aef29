//! One-hot expansion and the stateful encoder.
//!
//! # Key Types
//!
//! - [`OneHotEncoder`]: Learns a column set at fit time, reconciles against
//!   it at transform time
//! - [`OneHotConfig`]: Configuration builder (`sparse`, `dtype`,
//!   `handle_unknown`)
//! - [`expand_indicators`]: The underlying expansion routine
//! - [`Transformer`]: Object-safe fit/transform seam for pipeline callers

mod error;
mod expand;
mod one_hot;

pub use error::EncodeError;
pub use expand::expand_indicators;
pub use one_hot::{HandleUnknown, IndicatorDtype, OneHotConfig, OneHotEncoder};

use crate::frame::DataFrame;

/// Fit/transform-shaped pipeline component.
///
/// Pipeline orchestration code can hold stages behind `&mut dyn Transformer`
/// without knowing the concrete encoder type.
pub trait Transformer {
    /// Learn state from a training frame.
    fn fit(&mut self, x: &DataFrame) -> Result<(), EncodeError>;

    /// Apply learned state to a frame.
    fn transform(&self, x: &DataFrame) -> Result<DataFrame, EncodeError>;

    /// Learn state and return the transformed training frame.
    fn fit_transform(&mut self, x: &DataFrame) -> Result<DataFrame, EncodeError>;
}

impl Transformer for OneHotEncoder {
    fn fit(&mut self, x: &DataFrame) -> Result<(), EncodeError> {
        OneHotEncoder::fit(self, x)?;
        Ok(())
    }

    fn transform(&self, x: &DataFrame) -> Result<DataFrame, EncodeError> {
        OneHotEncoder::transform(self, x)
    }

    fn fit_transform(&mut self, x: &DataFrame) -> Result<DataFrame, EncodeError> {
        OneHotEncoder::fit_transform(self, x)
    }
}
