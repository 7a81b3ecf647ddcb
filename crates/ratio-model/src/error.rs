use thiserror::Error;

use crate::Axis;

/// Errors raised while constructing a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{axis} label must not be empty")]
    EmptyLabel { axis: Axis },
    #[error("duplicate {axis} label `{label}`")]
    DuplicateLabel { axis: Axis, label: String },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("table has {rows} rows for {periods} periods")]
    RowCountMismatch { periods: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
