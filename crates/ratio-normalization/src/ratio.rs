//! Raw ratio computation over aligned tables.

use ratio_model::{Axis, Cell, Table, canonical};

use crate::error::{AlignmentError, Result};

/// Check that two tables share the same periods and entities, in order.
///
/// Shapes are compared first, then labels position by position. Tables
/// holding the same labels in a different order do not align.
pub fn ensure_aligned(left: &Table, right: &Table) -> std::result::Result<(), AlignmentError> {
    if left.shape() != right.shape() {
        return Err(AlignmentError::Shape {
            left: left.shape(),
            right: right.shape(),
        });
    }
    let periods = left.periods().iter().zip(right.periods());
    for (position, (l, r)) in periods.enumerate() {
        if l != r {
            return Err(label_mismatch(Axis::Periods, position, l.as_str(), r.as_str()));
        }
    }
    let entities = left.entities().iter().zip(right.entities());
    for (position, (l, r)) in entities.enumerate() {
        if l != r {
            return Err(label_mismatch(Axis::Entities, position, l.as_str(), r.as_str()));
        }
    }
    Ok(())
}

fn label_mismatch(axis: Axis, position: usize, left: &str, right: &str) -> AlignmentError {
    AlignmentError::Labels {
        axis,
        position,
        left: left.to_string(),
        right: right.to_string(),
    }
}

/// Divide two cells. Missing in either operand gives missing, `0 / 0` too.
pub fn divide_cells(numerator: Cell, denominator: Cell) -> Cell {
    canonical(Some(numerator? / denominator?))
}

/// Elementwise `numerator / denominator`.
///
/// A zero denominator yields `±inf` for a non-zero numerator, which then
/// competes for the row maximum like any other value.
pub fn raw_ratio(numerator: &Table, denominator: &Table) -> Result<Table> {
    ensure_aligned(numerator, denominator)?;
    let mut denominators = denominator.rows();
    let ratio = numerator.map_rows(|_, cells| {
        let divisors = denominators.next().unwrap_or_default();
        cells
            .iter()
            .zip(divisors)
            .map(|(&n, &d)| divide_cells(n, d))
            .collect()
    })?;
    Ok(ratio)
}
