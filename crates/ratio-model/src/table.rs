#![deny(unsafe_code)]

//! Period-by-entity tables of nullable ratio values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Axis, Entity, ModelError, Period, Result};

/// A single table cell. `None` and `Some(NaN)` both count as missing.
pub type Cell = Option<f64>;

/// Returns true when the cell carries no usable value.
pub fn is_missing(cell: Cell) -> bool {
    cell.is_none_or(f64::is_nan)
}

/// Collapses `Some(NaN)` into `None`.
pub fn canonical(cell: Cell) -> Cell {
    cell.filter(|value| !value.is_nan())
}

/// Two-dimensional table indexed by (period, entity).
///
/// Rows are ordered periods and columns are ordered entities. Construction
/// checks that every row has one cell per entity and that neither index
/// contains duplicates, so a `Table` is always rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr")]
pub struct Table {
    periods: Vec<Period>,
    entities: Vec<Entity>,
    #[serde(serialize_with = "cell_serde::serialize")]
    values: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct TableRepr {
    periods: Vec<Period>,
    entities: Vec<Entity>,
    #[serde(deserialize_with = "cell_serde::deserialize")]
    values: Vec<Vec<Cell>>,
}

/// Cell encoding: missing as `null`, finite values as numbers and
/// infinities as the strings `"inf"` / `"-inf"`.
mod cell_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Cell, canonical};

    const POS_INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum CellRepr {
        Number(f64),
        Text(String),
    }

    fn encode(cell: Cell) -> Option<CellRepr> {
        canonical(cell).map(|value| {
            if value == f64::INFINITY {
                CellRepr::Text(POS_INF.to_string())
            } else if value == f64::NEG_INFINITY {
                CellRepr::Text(NEG_INF.to_string())
            } else {
                CellRepr::Number(value)
            }
        })
    }

    fn decode(repr: Option<CellRepr>) -> Result<Cell, String> {
        match repr {
            None => Ok(None),
            Some(CellRepr::Number(value)) => Ok(canonical(Some(value))),
            Some(CellRepr::Text(text)) => match text.as_str() {
                POS_INF => Ok(Some(f64::INFINITY)),
                NEG_INF => Ok(Some(f64::NEG_INFINITY)),
                other => Err(format!("invalid cell value `{other}`")),
            },
        }
    }

    pub(super) fn serialize<S: Serializer>(
        values: &[Vec<Cell>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let encoded: Vec<Vec<Option<CellRepr>>> = values
            .iter()
            .map(|cells| cells.iter().copied().map(encode).collect())
            .collect();
        encoded.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Cell>>, D::Error> {
        let raw = Vec::<Vec<Option<CellRepr>>>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|cells| cells.into_iter().map(decode).collect())
            .collect::<Result<Vec<Vec<Cell>>, String>>()
            .map_err(D::Error::custom)
    }
}

impl TryFrom<TableRepr> for Table {
    type Error = ModelError;

    fn try_from(repr: TableRepr) -> Result<Self> {
        Table::new(repr.periods, repr.entities, repr.values)
    }
}

impl Table {
    pub fn new(
        periods: Vec<Period>,
        entities: Vec<Entity>,
        values: Vec<Vec<Cell>>,
    ) -> Result<Self> {
        check_unique(&periods, Axis::Periods, Period::as_str)?;
        check_unique(&entities, Axis::Entities, Entity::as_str)?;
        if values.len() != periods.len() {
            return Err(ModelError::RowCountMismatch {
                periods: periods.len(),
                rows: values.len(),
            });
        }
        for (row, cells) in values.iter().enumerate() {
            if cells.len() != entities.len() {
                return Err(ModelError::RaggedRow {
                    row,
                    expected: entities.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            periods,
            entities,
            values,
        })
    }

    /// Build a table from plain string labels.
    ///
    /// ```
    /// use ratio_model::Table;
    ///
    /// let eps = Table::from_rows(["2023"], ["A", "B"], vec![vec![Some(2.0), Some(4.0)]]).unwrap();
    /// assert_eq!(eps.shape(), (1, 2));
    /// assert_eq!(eps.get("2023", "B"), Some(Some(4.0)));
    /// ```
    pub fn from_rows<P, E>(
        periods: impl IntoIterator<Item = P>,
        entities: impl IntoIterator<Item = E>,
        values: Vec<Vec<Cell>>,
    ) -> Result<Self>
    where
        P: Into<String>,
        E: Into<String>,
    {
        let periods = periods
            .into_iter()
            .map(Period::new)
            .collect::<Result<Vec<_>>>()?;
        let entities = entities
            .into_iter()
            .map(Entity::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(periods, entities, values)
    }

    /// Build a table where every cell holds `value`.
    pub fn filled(periods: Vec<Period>, entities: Vec<Entity>, value: Cell) -> Result<Self> {
        let values = vec![vec![value; entities.len()]; periods.len()];
        Self::new(periods, entities, values)
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of periods.
    pub fn height(&self) -> usize {
        self.periods.len()
    }

    /// Number of entities.
    pub fn width(&self) -> usize {
        self.entities.len()
    }

    /// `(periods, entities)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() || self.entities.is_empty()
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.values.iter().map(Vec::as_slice)
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.values.get(index).map(Vec::as_slice)
    }

    pub fn period_position(&self, period: &str) -> Option<usize> {
        self.periods.iter().position(|p| p.as_str() == period)
    }

    pub fn entity_position(&self, entity: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.as_str() == entity)
    }

    /// Look up a cell by labels. The outer `None` means an unknown label.
    pub fn get(&self, period: &str, entity: &str) -> Option<Cell> {
        let row = self.period_position(period)?;
        let col = self.entity_position(entity)?;
        Some(self.values[row][col])
    }

    /// Returns true when every cell of the row is missing.
    pub fn row_is_missing(&self, index: usize) -> bool {
        self.row(index)
            .is_some_and(|cells| cells.iter().copied().all(is_missing))
    }

    /// Apply `f` to every cell, keeping both indices.
    pub fn map_values(&self, mut f: impl FnMut(Cell) -> Cell) -> Table {
        let values = self
            .values
            .iter()
            .map(|cells| cells.iter().copied().map(&mut f).collect())
            .collect();
        Table {
            periods: self.periods.clone(),
            entities: self.entities.clone(),
            values,
        }
    }

    /// Replace every row with the output of `f`, keeping both indices.
    ///
    /// Fails with [`ModelError::RaggedRow`] if `f` changes a row's length.
    pub fn map_rows(&self, mut f: impl FnMut(usize, &[Cell]) -> Vec<Cell>) -> Result<Table> {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(idx, cells)| f(idx, cells))
            .collect();
        Table::new(self.periods.clone(), self.entities.clone(), values)
    }

    pub fn into_values(self) -> Vec<Vec<Cell>> {
        self.values
    }
}

fn check_unique<T>(labels: &[T], axis: Axis, as_str: fn(&T) -> &str) -> Result<()> {
    let mut seen = BTreeSet::new();
    for label in labels {
        let label = as_str(label);
        if !seen.insert(label) {
            return Err(ModelError::DuplicateLabel {
                axis,
                label: label.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_counts_as_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some(f64::NAN)));
        assert!(!is_missing(Some(f64::INFINITY)));
        assert!(!is_missing(Some(0.0)));
        assert_eq!(canonical(Some(f64::NAN)), None);
        assert_eq!(canonical(Some(1.5)), Some(1.5));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Table::from_rows(
            ["2022", "2023"],
            ["A", "B"],
            vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0)]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn row_count_must_match_periods() {
        let err = Table::from_rows(["2022", "2023"], ["A"], vec![vec![Some(1.0)]]).unwrap_err();
        assert_eq!(err, ModelError::RowCountMismatch { periods: 2, rows: 1 });
    }

    #[test]
    fn duplicate_entities_are_rejected() {
        let err = Table::from_rows(["2023"], ["A", "A"], vec![vec![None, None]]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateLabel {
                axis: Axis::Entities,
                label: "A".to_string()
            }
        );
    }

    #[test]
    fn map_rows_rejects_length_changes() {
        let table =
            Table::from_rows(["2023"], ["A", "B"], vec![vec![Some(1.0), Some(2.0)]]).unwrap();
        let err = table.map_rows(|_, cells| cells[..1].to_vec()).unwrap_err();
        assert!(matches!(err, ModelError::RaggedRow { row: 0, .. }));
    }

    #[test]
    fn missing_rows_are_detected() {
        let table = Table::from_rows(
            ["2022", "2023"],
            ["A", "B"],
            vec![vec![None, Some(f64::NAN)], vec![None, Some(1.0)]],
        )
        .unwrap();
        assert!(table.row_is_missing(0));
        assert!(!table.row_is_missing(1));
        assert!(!table.row_is_missing(7));
    }
}
