//! Conversion between [`Table`] and wide Polars DataFrames.
//!
//! A wide frame holds one label column for the periods and one numeric
//! column per entity:
//!
//! | period | AAPL | MSFT |
//! |--------|------|------|
//! | 2023   | 6.1  | 9.7  |
//!
//! Entity columns must be numeric (or all-null) and are cast to `Float64`;
//! nulls and NaN become missing cells.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use ratio_model::{Cell, Entity, NormalizationOptions, Period, Table, canonical};
use tracing::debug;

use crate::error::{NormalizationError, Result};
use crate::zero_max::{RatioInputs, RatioKind, zero_max};

/// Read a wide DataFrame into a [`Table`].
///
/// `period_column` supplies the row labels; every other column, in frame
/// order, becomes an entity.
pub fn table_from_frame(df: &DataFrame, period_column: &str) -> Result<Table> {
    let label_column = df
        .column(period_column)
        .map_err(|_| NormalizationError::MissingColumn(period_column.to_string()))?;
    let labels = label_column.cast(&DataType::String)?;
    let mut periods = Vec::with_capacity(df.height());
    for (row, label) in labels.str()?.into_iter().enumerate() {
        let label = label.ok_or_else(|| NormalizationError::NullPeriod {
            column: period_column.to_string(),
            row,
        })?;
        periods.push(Period::new(label)?);
    }

    let mut entities = Vec::new();
    let mut columns: Vec<Vec<Cell>> = Vec::new();
    for name in df.get_column_names() {
        if name.as_str() == period_column {
            continue;
        }
        entities.push(Entity::new(name.as_str())?);
        let column = df.column(name.as_str())?;
        let dtype = column.dtype();
        if !(dtype.is_primitive_numeric() || matches!(dtype, DataType::Null)) {
            return Err(NormalizationError::NonNumericColumn {
                column: name.to_string(),
                dtype: dtype.to_string(),
            });
        }
        let values = column.cast(&DataType::Float64)?;
        columns.push(values.f64()?.into_iter().map(canonical).collect());
    }

    let rows = (0..periods.len())
        .map(|row| columns.iter().map(|column| column[row]).collect())
        .collect();
    debug!(
        periods = periods.len(),
        entities = entities.len(),
        "read table from frame"
    );
    Ok(Table::new(periods, entities, rows)?)
}

/// Write a [`Table`] as a wide DataFrame with the periods in `period_column`.
pub fn table_to_frame(table: &Table, period_column: &str) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.width() + 1);
    let labels: Vec<&str> = table.periods().iter().map(Period::as_str).collect();
    columns.push(Series::new(period_column.into(), labels).into_column());
    for (idx, entity) in table.entities().iter().enumerate() {
        let values: Vec<Option<f64>> = table.rows().map(|cells| cells[idx]).collect();
        columns.push(Series::new(entity.as_str().into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Run a zero-max ratio end to end on wide DataFrames.
///
/// Two-input ratios take `[numerator, denominator]`; the others take a
/// single frame.
pub fn zero_max_frame(
    kind: RatioKind,
    frames: &[&DataFrame],
    period_column: &str,
    options: &NormalizationOptions,
) -> Result<DataFrame> {
    let tables = frames
        .iter()
        .map(|df| table_from_frame(df, period_column))
        .collect::<Result<Vec<_>>>()?;
    let inputs = match tables.as_slice() {
        [table] => RatioInputs::Single(table),
        [numerator, denominator] => RatioInputs::Pair {
            numerator,
            denominator,
        },
        _ => {
            return Err(NormalizationError::InputArity {
                kind: kind.name(),
                expected: kind.input_count(),
                found: tables.len(),
            });
        }
    };
    let normalized = zero_max(kind, inputs, options)?;
    table_to_frame(&normalized, period_column)
}
