//! Encoding errors.

use crate::frame::FrameError;

/// Errors raised by [`crate::encode::OneHotEncoder`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// Transform-time expansion produced columns never seen during fit.
    ///
    /// Raised only under [`crate::encode::HandleUnknown::Error`]. Column
    /// names are sorted so messages are deterministic.
    #[error("columns not present in the fitted schema: {}", columns.join(", "))]
    UnknownColumns { columns: Vec<String> },

    /// `transform` was called before any successful `fit`/`fit_transform`.
    #[error("transform called before fit")]
    NotFitted,

    /// Expansion or frame-construction failure, propagated unchanged.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
