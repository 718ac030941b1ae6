//! Profitability criteria (1–4).
//!
//! Four points for making money: positive return on assets, positive
//! operating cash flow, an improving ROA trend, and cash earnings backing
//! accounting earnings.

use super::{Criterion, CriterionFamily, CriterionId, ratio};
use crate::align::PeriodPair;
use crate::statement::{StatementSet, line_items};

/// Criterion 1: ROA Positive.
///
/// Favorable when `Net Income / Total Assets` is positive in the current
/// period. Zero total assets makes the ROA 0, which is unfavorable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoaPositive;

impl Criterion for RoaPositive {
    fn id(&self) -> CriterionId {
        CriterionId::RoaPositive
    }

    fn description(&self) -> &str {
        "Return on assets is positive in the current period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::Profitability
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::NET_INCOME, line_items::TOTAL_ASSETS]
    }

    fn lookback(&self) -> usize {
        1
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(net_income), Some(total_assets)) = (
            statements.income.get(line_items::NET_INCOME, &pair.current),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.current),
        ) else {
            return 0;
        };
        u8::from(ratio(net_income, total_assets) > 0.0)
    }
}

/// Criterion 2: OCF Positive.
///
/// Favorable when operating cash flow is positive in the current period.
#[derive(Debug, Clone, Copy, Default)]
pub struct OcfPositive;

impl Criterion for OcfPositive {
    fn id(&self) -> CriterionId {
        CriterionId::OcfPositive
    }

    fn description(&self) -> &str {
        "Operating cash flow is positive in the current period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::Profitability
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::OPERATING_CASH_FLOW]
    }

    fn lookback(&self) -> usize {
        1
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let Some(ocf) = statements
            .cashflow
            .get(line_items::OPERATING_CASH_FLOW, &pair.current)
        else {
            return 0;
        };
        u8::from(ocf > 0.0)
    }
}

/// Criterion 3: ROA Improvement.
///
/// Favorable when current-period ROA strictly exceeds prior-period ROA.
/// A zero-asset period contributes an ROA of 0 to the comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoaImprovement;

impl Criterion for RoaImprovement {
    fn id(&self) -> CriterionId {
        CriterionId::RoaImprovement
    }

    fn description(&self) -> &str {
        "Return on assets improved versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::Profitability
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::NET_INCOME, line_items::TOTAL_ASSETS]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(ni_curr), Some(ta_curr), Some(ni_prev), Some(ta_prev)) = (
            statements.income.get(line_items::NET_INCOME, &pair.current),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.current),
            statements.income.get(line_items::NET_INCOME, &pair.previous),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.previous),
        ) else {
            return 0;
        };
        u8::from(ratio(ni_curr, ta_curr) > ratio(ni_prev, ta_prev))
    }
}

/// Criterion 4: Quality of Earnings.
///
/// Favorable when operating cash flow strictly exceeds net income in the
/// current period, meaning earnings are backed by cash rather than accruals.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityOfEarnings;

impl Criterion for QualityOfEarnings {
    fn id(&self) -> CriterionId {
        CriterionId::QualityOfEarnings
    }

    fn description(&self) -> &str {
        "Operating cash flow exceeds net income in the current period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::Profitability
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::OPERATING_CASH_FLOW, line_items::NET_INCOME]
    }

    fn lookback(&self) -> usize {
        1
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(ocf), Some(net_income)) = (
            statements
                .cashflow
                .get(line_items::OPERATING_CASH_FLOW, &pair.current),
            statements.income.get(line_items::NET_INCOME, &pair.current),
        ) else {
            return 0;
        };
        u8::from(ocf > net_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::FinancialTable;
    use rstest::rstest;

    const CURR: &str = "2023-12-31";
    const PREV: &str = "2022-12-31";

    fn pair() -> PeriodPair {
        PeriodPair {
            current: CURR.into(),
            previous: PREV.into(),
        }
    }

    fn two_period_table(label: &str, curr: f64, prev: f64) -> FinancialTable {
        let mut table = FinancialTable::new();
        table.insert(label, CURR, curr);
        table.insert(label, PREV, prev);
        table
    }

    #[test]
    fn test_roa_positive_favorable() {
        let income = two_period_table(line_items::NET_INCOME, 100.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaPositive.evaluate(&statements, &pair()), 1);
    }

    #[test]
    fn test_roa_positive_negative_income() {
        let income = two_period_table(line_items::NET_INCOME, -100.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaPositive.evaluate(&statements, &pair()), 0);
    }

    #[test]
    fn test_roa_positive_missing_line_items_fall_back_to_zero() {
        let empty = FinancialTable::new();
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let statements = StatementSet {
            income: &empty,
            balance: &balance,
            cashflow: &empty,
        };

        assert_eq!(RoaPositive.evaluate(&statements, &pair()), 0);
    }

    #[test]
    fn test_roa_positive_zero_assets_does_not_divide() {
        let income = two_period_table(line_items::NET_INCOME, 100.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 0.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaPositive.evaluate(&statements, &pair()), 0);
    }

    #[rstest]
    #[case(120.0, 1)]
    #[case(0.0, 0)]
    #[case(-30.0, 0)]
    fn test_ocf_positive(#[case] ocf: f64, #[case] expected: u8) {
        let income = FinancialTable::new();
        let balance = FinancialTable::new();
        let cashflow = two_period_table(line_items::OPERATING_CASH_FLOW, ocf, 100.0);
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(OcfPositive.evaluate(&statements, &pair()), expected);
    }

    #[test]
    fn test_ocf_positive_missing_falls_back_to_zero() {
        let empty = FinancialTable::new();
        let statements = StatementSet {
            income: &empty,
            balance: &empty,
            cashflow: &empty,
        };

        assert_eq!(OcfPositive.evaluate(&statements, &pair()), 0);
    }

    #[test]
    fn test_roa_improvement_favorable() {
        // ROA 100/5000 = 0.02 vs 80/4800 ≈ 0.0167
        let income = two_period_table(line_items::NET_INCOME, 100.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaImprovement.evaluate(&statements, &pair()), 1);
    }

    #[test]
    fn test_roa_improvement_declining() {
        let income = two_period_table(line_items::NET_INCOME, 50.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaImprovement.evaluate(&statements, &pair()), 0);
    }

    #[test]
    fn test_roa_improvement_zero_current_assets_means_zero_roa() {
        // Current ROA degrades to 0, prior ROA is positive, so no improvement.
        let income = two_period_table(line_items::NET_INCOME, 100.0, 80.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 0.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaImprovement.evaluate(&statements, &pair()), 0);
    }

    #[test]
    fn test_roa_improvement_missing_prior_period_falls_back_to_zero() {
        let mut income = FinancialTable::new();
        income.insert(line_items::NET_INCOME, CURR, 100.0);
        let balance = two_period_table(line_items::TOTAL_ASSETS, 5000.0, 4800.0);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(RoaImprovement.evaluate(&statements, &pair()), 0);
    }

    #[rstest]
    #[case(120.0, 100.0, 1)]
    #[case(100.0, 100.0, 0)]
    #[case(80.0, 100.0, 0)]
    fn test_quality_of_earnings(#[case] ocf: f64, #[case] net_income: f64, #[case] expected: u8) {
        let income = two_period_table(line_items::NET_INCOME, net_income, 90.0);
        let balance = FinancialTable::new();
        let cashflow = two_period_table(line_items::OPERATING_CASH_FLOW, ocf, 95.0);
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(QualityOfEarnings.evaluate(&statements, &pair()), expected);
    }
}
