//! Zero-max normalized financial ratios.
//!
//! For a panel of companies over time, each raw ratio is divided by the
//! largest value observed across companies in the same period. The leader of
//! every period scores `1.0` and the others score relative to it.
//!
//! # Overview
//!
//! - **ratio**: index alignment checks and elementwise raw ratios
//! - **rows**: per-period maximum, row normalization and row diagnostics
//! - **zero_max**: the five zero-max ratios and the [`RatioKind`] dispatcher
//! - **frame**: conversion to and from wide Polars DataFrames
//!
//! # Edge cases
//!
//! - A row whose maximum is zero comes back entirely missing.
//! - A row whose maximum is negative is divided anyway unless
//!   [`NegativeMaxPolicy::Mask`] is selected.
//! - Missing cells stay missing and are skipped when finding the maximum,
//!   unless [`MissingPolicy::Propagate`] is selected.
//! - A zero denominator gives an infinite raw ratio that can lead its row:
//!   that cell normalizes to `1.0` and finite cells to `0.0`.
//!
//! All operations are pure: inputs are borrowed and never modified.

pub mod error;
pub mod frame;
pub mod ratio;
pub mod rows;
pub mod zero_max;

pub use error::{AlignmentError, NormalizationError, Result};
pub use frame::{table_from_frame, table_to_frame, zero_max_frame};
pub use ratio::{divide_cells, ensure_aligned, raw_ratio};
pub use rows::{RowStatus, RowSummary, normalize_rows, row_max, summarize_rows};
pub use zero_max::{
    RatioInputs, RatioKind, zero_max, zero_max_dividend_yield, zero_max_dividend_yield_with,
    zero_max_earnings_yield, zero_max_earnings_yield_with, zero_max_free_cash_flow_yield,
    zero_max_free_cash_flow_yield_with, zero_max_revenue, zero_max_revenue_with,
    zero_max_shares_outstanding, zero_max_shares_outstanding_with,
};

pub use ratio_model::{
    Cell, Entity, MissingPolicy, NegativeMaxPolicy, NormalizationOptions, Period, Table,
};
