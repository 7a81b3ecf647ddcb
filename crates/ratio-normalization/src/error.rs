//! Error types for ratio normalization.

use polars::prelude::PolarsError;
use ratio_model::{Axis, ModelError};
use thiserror::Error;

/// Two input tables do not share the same period and entity indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("shape mismatch: left is {left:?} (periods, entities), right is {right:?}")]
    Shape {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("{axis} index differs at position {position}: `{left}` vs `{right}`")]
    Labels {
        axis: Axis,
        position: usize,
        left: String,
        right: String,
    },
}

/// Errors from the normalization operations.
///
/// Division by zero is not an error: it surfaces as an infinite or missing
/// cell in the output.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    #[error("invalid table: {0}")]
    Model(#[from] ModelError),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("column `{0}` not found in frame")]
    MissingColumn(String),

    #[error("entity column `{column}` has non-numeric type {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    #[error("null period label in column `{column}` at row {row}")]
    NullPeriod { column: String, row: usize },

    #[error("{kind} takes {expected} input table(s), got {found}")]
    InputArity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
