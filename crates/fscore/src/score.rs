//! Score aggregation.
//!
//! [`compute_score`] is the engine's single entry point: align the three
//! statements on their common reporting periods, evaluate the nine criteria
//! over the two most recent, and package the result with full provenance.

use crate::align::{PeriodPair, common_periods};
use crate::criteria::{self, CriterionId};
use crate::error::{Result, ScoreError};
use crate::statement::{FinancialTable, StatementSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// The outcome of one scoring invocation.
///
/// Immutable once constructed. `total` is always the sum of the nine values
/// in `criteria` and lies in `0..=9`. Persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// The (current, previous) periods the score was computed over.
    pub period_pair: PeriodPair,
    /// Per-criterion 0/1 outcomes, in conventional 1..9 order.
    pub criteria: BTreeMap<CriterionId, u8>,
    /// The F-Score: sum of the nine criterion values.
    pub total: u8,
}

/// Computes the Piotroski F-Score from the three financial statements.
///
/// The score is taken over the two most recent periods present in all three
/// statements, which are not necessarily adjacent calendar periods if one statement
/// is missing an intermediate one. Fewer than two common periods is the only
/// error condition; missing line items degrade the affected criterion to its
/// fallback value instead.
///
/// Pure and deterministic: identical inputs always yield an identical
/// breakdown, and concurrent calls for different tickers need no
/// coordination.
///
/// # Errors
///
/// [`ScoreError::InsufficientPeriods`] when the three statements share fewer
/// than two reporting periods.
pub fn compute_score(
    income: &FinancialTable,
    balance: &FinancialTable,
    cashflow: &FinancialTable,
) -> Result<ScoreBreakdown> {
    let common = common_periods(income, balance, cashflow);
    let pair = PeriodPair::most_recent(&common).ok_or(ScoreError::InsufficientPeriods {
        available: common.len(),
    })?;

    let statements = StatementSet {
        income,
        balance,
        cashflow,
    };

    let mut criteria = BTreeMap::new();
    let mut total = 0u8;
    for criterion in criteria::all() {
        let value = criterion.evaluate(&statements, &pair);
        total += value;
        criteria.insert(criterion.id(), value);
    }

    Ok(ScoreBreakdown {
        period_pair: pair,
        criteria,
        total,
    })
}
