//! Frame validation errors.

/// Errors raised while building or converting a [`crate::frame::DataFrame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("inconsistent number of rows: column '{column}' expected {expected}, got {got}")]
    InconsistentRows {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    #[error("column '{name}' is categorical and cannot be exported as a numeric matrix")]
    NotNumeric { name: String },
}
