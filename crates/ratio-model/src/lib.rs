//! Data model for zero-max ratio normalization.
//!
//! - **ids**: [`Period`] and [`Entity`] labels
//! - **table**: the period-by-entity [`Table`] of nullable values
//! - **options**: [`NormalizationOptions`] and its policies

pub mod error;
pub mod ids;
pub mod options;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{Axis, Entity, Period};
pub use options::{MissingPolicy, NegativeMaxPolicy, NormalizationOptions};
pub use table::{Cell, Table, canonical, is_missing};
