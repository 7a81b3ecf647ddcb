//! Zero-max normalized financial ratios.
//!
//! Each operation computes a raw ratio and then divides every period's row
//! by its cross-entity maximum, so the leading company in each period
//! scores exactly `1.0`.
//!
//! # Example
//!
//! ```
//! use ratio_model::Table;
//! use ratio_normalization::zero_max_earnings_yield;
//!
//! let eps = Table::from_rows(["2023"], ["A", "B"], vec![vec![Some(2.0), Some(4.0)]]).unwrap();
//! let price = Table::from_rows(["2023"], ["A", "B"], vec![vec![Some(10.0), Some(10.0)]]).unwrap();
//!
//! let normalized = zero_max_earnings_yield(&eps, &price).unwrap();
//! assert_eq!(normalized.row(0), Some(&[Some(0.5), Some(1.0)][..]));
//! ```

use std::fmt;

use ratio_model::{NormalizationOptions, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NormalizationError, Result};
use crate::ratio::raw_ratio;
use crate::rows::normalize_rows;

/// The zero-max ratios this crate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioKind {
    EarningsYield,
    FreeCashFlowYield,
    DividendYield,
    SharesOutstanding,
    Revenue,
}

impl RatioKind {
    pub const ALL: [RatioKind; 5] = [
        RatioKind::EarningsYield,
        RatioKind::FreeCashFlowYield,
        RatioKind::DividendYield,
        RatioKind::SharesOutstanding,
        RatioKind::Revenue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RatioKind::EarningsYield => "zero_max_earnings_yield",
            RatioKind::FreeCashFlowYield => "zero_max_free_cash_flow_yield",
            RatioKind::DividendYield => "zero_max_dividend_yield",
            RatioKind::SharesOutstanding => "zero_max_shares_outstanding",
            RatioKind::Revenue => "zero_max_revenue",
        }
    }

    /// Raw ratio before row normalization.
    pub fn formula(self) -> &'static str {
        match self {
            RatioKind::EarningsYield => "earnings per share / market price per share",
            RatioKind::FreeCashFlowYield => "free cash flow / market capitalization",
            RatioKind::DividendYield => "dividends / stock price",
            RatioKind::SharesOutstanding => "shares outstanding",
            RatioKind::Revenue => "revenue",
        }
    }

    pub fn requires_denominator(self) -> bool {
        matches!(
            self,
            RatioKind::EarningsYield | RatioKind::FreeCashFlowYield | RatioKind::DividendYield
        )
    }

    pub fn input_count(self) -> usize {
        if self.requires_denominator() { 2 } else { 1 }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input tables for [`zero_max`].
#[derive(Debug, Clone, Copy)]
pub enum RatioInputs<'a> {
    Single(&'a Table),
    Pair {
        numerator: &'a Table,
        denominator: &'a Table,
    },
}

impl RatioInputs<'_> {
    pub fn table_count(&self) -> usize {
        match self {
            RatioInputs::Single(_) => 1,
            RatioInputs::Pair { .. } => 2,
        }
    }
}

/// Compute any zero-max ratio from its inputs.
pub fn zero_max(
    kind: RatioKind,
    inputs: RatioInputs<'_>,
    options: &NormalizationOptions,
) -> Result<Table> {
    match (kind.requires_denominator(), inputs) {
        (
            true,
            RatioInputs::Pair {
                numerator,
                denominator,
            },
        ) => normalized_ratio(kind, numerator, denominator, options),
        (false, RatioInputs::Single(table)) => normalized_identity(kind, table, options),
        _ => Err(NormalizationError::InputArity {
            kind: kind.name(),
            expected: kind.input_count(),
            found: inputs.table_count(),
        }),
    }
}

fn normalized_ratio(
    kind: RatioKind,
    numerator: &Table,
    denominator: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    debug!(
        ratio = %kind,
        periods = numerator.height(),
        entities = numerator.width(),
        "computing zero-max ratio"
    );
    let raw = raw_ratio(numerator, denominator)?;
    normalize_rows(&raw, options)
}

fn normalized_identity(
    kind: RatioKind,
    table: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    debug!(
        ratio = %kind,
        periods = table.height(),
        entities = table.width(),
        "computing zero-max ratio"
    );
    normalize_rows(table, options)
}

/// Zero-max earnings yield: `EPS / price`, divided by each period's maximum.
pub fn zero_max_earnings_yield(
    earnings_per_share: &Table,
    market_price_per_share: &Table,
) -> Result<Table> {
    zero_max_earnings_yield_with(
        earnings_per_share,
        market_price_per_share,
        &NormalizationOptions::default(),
    )
}

pub fn zero_max_earnings_yield_with(
    earnings_per_share: &Table,
    market_price_per_share: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    normalized_ratio(
        RatioKind::EarningsYield,
        earnings_per_share,
        market_price_per_share,
        options,
    )
}

/// Zero-max free cash flow yield: `FCF / market capitalization`, divided by
/// each period's maximum.
pub fn zero_max_free_cash_flow_yield(
    free_cash_flow: &Table,
    market_capitalization: &Table,
) -> Result<Table> {
    zero_max_free_cash_flow_yield_with(
        free_cash_flow,
        market_capitalization,
        &NormalizationOptions::default(),
    )
}

pub fn zero_max_free_cash_flow_yield_with(
    free_cash_flow: &Table,
    market_capitalization: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    normalized_ratio(
        RatioKind::FreeCashFlowYield,
        free_cash_flow,
        market_capitalization,
        options,
    )
}

/// Zero-max dividend yield: `dividends / stock price`, divided by each
/// period's maximum.
pub fn zero_max_dividend_yield(dividends: &Table, stock_price: &Table) -> Result<Table> {
    zero_max_dividend_yield_with(dividends, stock_price, &NormalizationOptions::default())
}

pub fn zero_max_dividend_yield_with(
    dividends: &Table,
    stock_price: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    normalized_ratio(RatioKind::DividendYield, dividends, stock_price, options)
}

/// Shares outstanding relative to the largest count in each period.
pub fn zero_max_shares_outstanding(shares_outstanding: &Table) -> Result<Table> {
    zero_max_shares_outstanding_with(shares_outstanding, &NormalizationOptions::default())
}

pub fn zero_max_shares_outstanding_with(
    shares_outstanding: &Table,
    options: &NormalizationOptions,
) -> Result<Table> {
    normalized_identity(RatioKind::SharesOutstanding, shares_outstanding, options)
}

/// Revenue relative to the largest revenue in each period.
pub fn zero_max_revenue(revenue: &Table) -> Result<Table> {
    zero_max_revenue_with(revenue, &NormalizationOptions::default())
}

pub fn zero_max_revenue_with(revenue: &Table, options: &NormalizationOptions) -> Result<Table> {
    normalized_identity(RatioKind::Revenue, revenue, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_report_arity() {
        let pairs: Vec<_> = RatioKind::ALL
            .iter()
            .filter(|k| k.requires_denominator())
            .collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(RatioKind::Revenue.input_count(), 1);
        assert_eq!(RatioKind::DividendYield.to_string(), "zero_max_dividend_yield");
        assert_eq!(
            RatioKind::FreeCashFlowYield.formula(),
            "free cash flow / market capitalization"
        );
        assert_eq!(RatioKind::Revenue.formula(), "revenue");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let table = Table::from_rows(["2023"], ["A"], vec![vec![Some(1.0)]]).unwrap();
        let err = zero_max(
            RatioKind::EarningsYield,
            RatioInputs::Single(&table),
            &NormalizationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NormalizationError::InputArity {
                expected: 2,
                found: 1,
                ..
            }
        ));

        let err = zero_max(
            RatioKind::Revenue,
            RatioInputs::Pair {
                numerator: &table,
                denominator: &table,
            },
            &NormalizationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, NormalizationError::InputArity { expected: 1, found: 2, .. }));
    }
}
