//! Period alignment across the three financial statements.
//!
//! Providers do not always report the three statements over identical period
//! sets, so scoring only ever compares periods present in all three. The two
//! most recent of those form the [`PeriodPair`] a score is computed over.

use crate::statement::{FinancialTable, Period};
use serde::{Deserialize, Serialize};

/// Returns the reporting periods present in all three statements, sorted
/// descending (most recent first).
///
/// Pure set intersection with no side effects. If the statements use
/// incompatible period-identifier schemes (say, different date formats), the
/// intersection is simply smaller or empty; normalizing formats is the
/// producer's job, not this function's.
///
/// Known limitation: sortable identifiers are assumed to mean the same fiscal
/// calendar in all three statements. A provider that reports misaligned
/// fiscal years will have non-corresponding periods compared silently.
pub fn common_periods(
    income: &FinancialTable,
    balance: &FinancialTable,
    cashflow: &FinancialTable,
) -> Vec<Period> {
    let mut common: Vec<Period> = income
        .periods()
        .iter()
        .filter(|p| balance.periods().contains(*p) && cashflow.periods().contains(*p))
        .cloned()
        .collect();
    common.sort_unstable_by(|a, b| b.cmp(a));
    common
}

/// The two most recent common reporting periods, `current > previous`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPair {
    /// Most recent common period.
    pub current: Period,
    /// Second most recent common period. Not necessarily temporally adjacent
    /// to `current` if an intermediate period is missing from one statement.
    pub previous: Period,
}

impl PeriodPair {
    /// Picks the pair from a descending-sorted common-period sequence.
    /// `None` when fewer than two periods are available.
    pub fn most_recent(common: &[Period]) -> Option<Self> {
        match common {
            [current, previous, ..] => Some(Self {
                current: current.clone(),
                previous: previous.clone(),
            }),
            _ => None,
        }
    }
}
