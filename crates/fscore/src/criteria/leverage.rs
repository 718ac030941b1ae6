//! Leverage and liquidity criteria (5–7).
//!
//! Three points for the balance sheet: deleveraging, improving short-term
//! liquidity, and not diluting shareholders.

use super::{Criterion, CriterionFamily, CriterionId, ratio};
use crate::align::PeriodPair;
use crate::statement::{StatementSet, line_items};

/// Criterion 5: Leverage Improvement.
///
/// Favorable when `Long Term Debt / Total Assets` is strictly lower in the
/// current period than in the prior one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeverageImprovement;

impl Criterion for LeverageImprovement {
    fn id(&self) -> CriterionId {
        CriterionId::LeverageImprovement
    }

    fn description(&self) -> &str {
        "Long-term debt to total assets declined versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::LeverageLiquidity
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::LONG_TERM_DEBT, line_items::TOTAL_ASSETS]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(ltd_curr), Some(ta_curr), Some(ltd_prev), Some(ta_prev)) = (
            statements.balance.get(line_items::LONG_TERM_DEBT, &pair.current),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.current),
            statements.balance.get(line_items::LONG_TERM_DEBT, &pair.previous),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.previous),
        ) else {
            return 0;
        };
        u8::from(ratio(ltd_curr, ta_curr) < ratio(ltd_prev, ta_prev))
    }
}

/// Criterion 6: Liquidity Improvement.
///
/// Favorable when the current ratio (`Current Assets / Current Liabilities`)
/// is strictly higher in the current period than in the prior one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityImprovement;

impl Criterion for LiquidityImprovement {
    fn id(&self) -> CriterionId {
        CriterionId::LiquidityImprovement
    }

    fn description(&self) -> &str {
        "Current ratio improved versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::LeverageLiquidity
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::CURRENT_ASSETS, line_items::CURRENT_LIABILITIES]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(ca_curr), Some(cl_curr), Some(ca_prev), Some(cl_prev)) = (
            statements.balance.get(line_items::CURRENT_ASSETS, &pair.current),
            statements
                .balance
                .get(line_items::CURRENT_LIABILITIES, &pair.current),
            statements.balance.get(line_items::CURRENT_ASSETS, &pair.previous),
            statements
                .balance
                .get(line_items::CURRENT_LIABILITIES, &pair.previous),
        ) else {
            return 0;
        };
        u8::from(ratio(ca_curr, cl_curr) > ratio(ca_prev, cl_prev))
    }
}

/// Criterion 7: No Dilution.
///
/// Favorable when shares outstanding did not increase (`curr <= prev`, the
/// only non-strict comparison among the nine).
///
/// Counter-intuitively, missing share data resolves to 1, not 0: dilution
/// cannot be proven from absent data, so the company gets the benefit of the
/// doubt. This asymmetry with the other eight criteria is a deliberate
/// business rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDilution;

impl Criterion for NoDilution {
    fn id(&self) -> CriterionId {
        CriterionId::NoDilution
    }

    fn description(&self) -> &str {
        "Shares outstanding did not increase versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::LeverageLiquidity
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::SHARES_OUTSTANDING]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(shares_curr), Some(shares_prev)) = (
            statements
                .balance
                .get(line_items::SHARES_OUTSTANDING, &pair.current),
            statements
                .balance
                .get(line_items::SHARES_OUTSTANDING, &pair.previous),
        ) else {
            return 1;
        };
        u8::from(shares_curr <= shares_prev)
    }
}
