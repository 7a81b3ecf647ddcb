#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Label of a table row: one time snapshot (a date, a fiscal quarter).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyLabel { axis: Axis::Periods });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of a table column: a company, usually its ticker.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Entity(String);

impl Entity {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyLabel {
                axis: Axis::Entities,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two indices of a [`Table`](crate::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Row index.
    Periods,
    /// Column index.
    Entities,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Periods => f.write_str("period"),
            Axis::Entities => f.write_str("entity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_trimmed() {
        let period = Period::new("  2023-Q4 ").unwrap();
        assert_eq!(period.as_str(), "2023-Q4");
        let entity = Entity::new("AAPL\t").unwrap();
        assert_eq!(entity.to_string(), "AAPL");
    }

    #[test]
    fn blank_labels_are_rejected() {
        assert_eq!(
            Period::new("   "),
            Err(ModelError::EmptyLabel { axis: Axis::Periods })
        );
        assert_eq!(
            Entity::new(""),
            Err(ModelError::EmptyLabel {
                axis: Axis::Entities
            })
        );
    }
}
