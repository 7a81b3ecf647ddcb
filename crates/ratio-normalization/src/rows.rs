//! Row-wise (per-period) normalization by the cross-entity maximum.
//!
//! Every period is handled on its own: the maximum of one row never
//! influences another row.

use ratio_model::{
    Cell, Entity, MissingPolicy, NegativeMaxPolicy, NormalizationOptions, Period, Table,
    canonical, is_missing,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;

/// Outcome of normalizing a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    /// Positive maximum; the row is scaled into `(-inf, 1]`.
    Normalized,
    /// No usable cell in the row.
    AllMissing,
    /// A missing cell under [`MissingPolicy::Propagate`].
    PropagatedMissing,
    /// Maximum is zero; the row is undefined and emitted as missing.
    ZeroMax,
    /// Maximum is negative and the row was divided anyway.
    NegativeMax,
    /// Maximum is negative and the row was masked.
    NegativeMaxMasked,
}

impl RowStatus {
    /// Returns true when the output row carries values.
    pub fn has_values(self) -> bool {
        matches!(self, RowStatus::Normalized | RowStatus::NegativeMax)
    }
}

/// Per-period diagnostics for a raw ratio table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    pub period: Period,
    /// Row maximum, if any.
    pub max: Option<f64>,
    /// Entities whose raw value equals the maximum.
    pub leaders: Vec<Entity>,
    /// Number of missing cells in the raw row.
    pub missing: usize,
    pub status: RowStatus,
}

/// Maximum over the row's non-missing cells.
///
/// `+inf` takes part like any other value. Returns `None` when no cell is
/// usable, or under [`MissingPolicy::Propagate`] when any cell is missing.
pub fn row_max(cells: &[Cell], policy: MissingPolicy) -> Option<f64> {
    let mut max: Option<f64> = None;
    for &cell in cells {
        match canonical(cell) {
            Some(value) => max = Some(max.map_or(value, |m| m.max(value))),
            None if policy == MissingPolicy::Propagate => return None,
            None => {}
        }
    }
    max
}

fn classify(cells: &[Cell], options: &NormalizationOptions) -> (Option<f64>, RowStatus) {
    let missing = cells.iter().copied().filter(|&c| is_missing(c)).count();
    if missing == cells.len() {
        return (None, RowStatus::AllMissing);
    }
    match row_max(cells, options.missing) {
        None => (None, RowStatus::PropagatedMissing),
        Some(max) if max == 0.0 => (Some(max), RowStatus::ZeroMax),
        Some(max) if max < 0.0 => match options.negative_max {
            NegativeMaxPolicy::Divide => (Some(max), RowStatus::NegativeMax),
            NegativeMaxPolicy::Mask => (Some(max), RowStatus::NegativeMaxMasked),
        },
        Some(max) => (Some(max), RowStatus::Normalized),
    }
}

/// Divide one cell by the row maximum. The maximum itself maps to exactly 1.
fn scale(cell: Cell, max: f64) -> Cell {
    let value = canonical(cell)?;
    if value == max {
        return Some(1.0);
    }
    canonical(Some(value / max))
}

fn normalize_row(cells: &[Cell], max: Option<f64>, status: RowStatus) -> Vec<Cell> {
    match max {
        Some(max) if status.has_values() => cells.iter().map(|&c| scale(c, max)).collect(),
        _ => vec![None; cells.len()],
    }
}

/// Divide every row by its own maximum.
///
/// Rows with a zero maximum, with no usable value, or masked by `options`
/// come back entirely missing. The result always has the input's shape.
pub fn normalize_rows(table: &Table, options: &NormalizationOptions) -> Result<Table> {
    debug!(
        periods = table.height(),
        entities = table.width(),
        "normalizing rows by maximum"
    );
    let mut degenerate = 0usize;
    let normalized = table.map_rows(|idx, cells| {
        let (max, status) = classify(cells, options);
        if status != RowStatus::Normalized {
            degenerate += 1;
            trace!(row = idx, ?status, ?max, "degenerate row maximum");
        }
        normalize_row(cells, max, status)
    })?;
    if degenerate > 0 {
        debug!(degenerate, "rows without a positive maximum");
    }
    Ok(normalized)
}

/// Describe, for each period, how [`normalize_rows`] will treat the row.
pub fn summarize_rows(raw: &Table, options: &NormalizationOptions) -> Vec<RowSummary> {
    raw.periods()
        .iter()
        .zip(raw.rows())
        .map(|(period, cells)| {
            let (max, status) = classify(cells, options);
            let leaders = match max {
                Some(max) => raw
                    .entities()
                    .iter()
                    .zip(cells)
                    .filter(|(_, cell)| canonical(**cell) == Some(max))
                    .map(|(entity, _)| entity.clone())
                    .collect(),
                None => Vec::new(),
            };
            RowSummary {
                period: period.clone(),
                max,
                leaders,
                missing: cells.iter().copied().filter(|&c| is_missing(c)).count(),
                status,
            }
        })
        .collect()
}
