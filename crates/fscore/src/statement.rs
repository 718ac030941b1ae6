//! Financial statement tables and period identifiers.
//!
//! A [`FinancialTable`] is the input contract of the engine: a plain mapping
//! from `(line-item label, period)` to a numeric value, one instance per
//! statement (income statement, balance sheet, cash-flow statement). Data
//! retrieval collaborators are responsible for building these and for mapping
//! provider-specific row naming onto the canonical labels in [`line_items`].

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Canonical line-item labels understood by the criterion evaluators.
///
/// Producers must rename provider-specific rows (e.g. yfinance's
/// `Total Cash From Operating Activities`) onto these before scoring.
pub mod line_items {
    /// Net income (income statement).
    pub const NET_INCOME: &str = "Net Income";
    /// Total revenue (income statement).
    pub const TOTAL_REVENUE: &str = "Total Revenue";
    /// Cost of revenue (income statement).
    pub const COST_OF_REVENUE: &str = "Cost Of Revenue";
    /// Total assets (balance sheet).
    pub const TOTAL_ASSETS: &str = "Total Assets";
    /// Long-term debt (balance sheet).
    pub const LONG_TERM_DEBT: &str = "Long Term Debt";
    /// Current assets (balance sheet).
    pub const CURRENT_ASSETS: &str = "Current Assets";
    /// Current liabilities (balance sheet).
    pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
    /// Shares outstanding (balance sheet).
    pub const SHARES_OUTSTANDING: &str = "Shares Outstanding";
    /// Operating cash flow (cash-flow statement).
    pub const OPERATING_CASH_FLOW: &str = "Operating Cash Flow";
}

/// An opaque, totally-orderable reporting-period identifier.
///
/// Ordering is lexicographic over the underlying token, so ISO dates
/// (`2023-12-31`) and zero-padded fiscal labels sort chronologically.
/// The ordering must mean the same thing in all three statements for
/// "most recent" to be well-defined; see [`crate::common_periods`].
#[derive(
    Debug, Display, Clone, From, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period(String);

impl Period {
    /// Returns the period token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Period {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// One financial statement: a mapping from `(line-item label, period)` to a
/// numeric value.
///
/// Lookups are defensive: [`FinancialTable::get`] returns `None` for any
/// absent label/period combination and never panics. Values are whatever the
/// producer supplied; no economic validation is performed.
#[derive(Debug, Clone, Default)]
pub struct FinancialTable {
    rows: HashMap<String, BTreeMap<Period, f64>>,
    periods: BTreeSet<Period>,
}

impl FinancialTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for a line item in a period, replacing any previous
    /// value for the same pair.
    pub fn insert(&mut self, label: impl Into<String>, period: impl Into<Period>, value: f64) {
        let period = period.into();
        self.periods.insert(period.clone());
        self.rows.entry(label.into()).or_default().insert(period, value);
    }

    /// Looks up a line item in a period. `None` if either the label or the
    /// period is absent.
    pub fn get(&self, label: &str, period: &Period) -> Option<f64> {
        self.rows.get(label)?.get(period).copied()
    }

    /// The set of reporting periods present in this table, ascending.
    pub const fn periods(&self) -> &BTreeSet<Period> {
        &self.periods
    }

    /// Number of `(label, period)` entries in the table.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Borrowed bundle of the three statements handed to every criterion.
#[derive(Debug, Clone, Copy)]
pub struct StatementSet<'a> {
    /// Income statement.
    pub income: &'a FinancialTable,
    /// Balance sheet.
    pub balance: &'a FinancialTable,
    /// Cash-flow statement.
    pub cashflow: &'a FinancialTable,
}
