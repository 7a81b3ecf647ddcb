//! Configuration options for zero-max normalization.

use serde::{Deserialize, Serialize};

/// How missing cells take part in the row maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Ignore missing cells when computing the row maximum.
    #[default]
    Skip,
    /// A single missing cell makes the row maximum, and so the whole
    /// output row, missing.
    Propagate,
}

/// What to do with a row whose maximum is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NegativeMaxPolicy {
    /// Divide anyway. Signs invert and magnitudes may exceed 1.
    #[default]
    Divide,
    /// Treat the row as undefined and emit missing cells.
    Mask,
}

/// Options for row normalization.
///
/// A zero row maximum always yields a missing row; only the negative and
/// missing cases are configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Missing-value handling during the max computation.
    pub missing: MissingPolicy,

    /// Handling of rows where every value is negative.
    pub negative_max: NegativeMaxPolicy,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    pub fn with_negative_max(mut self, policy: NegativeMaxPolicy) -> Self {
        self.negative_max = policy;
        self
    }

    /// Options that only keep rows with a strictly positive, fully observed
    /// maximum.
    pub fn strict() -> Self {
        Self {
            missing: MissingPolicy::Propagate,
            negative_max: NegativeMaxPolicy::Mask,
        }
    }
}
