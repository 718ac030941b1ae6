//! Operating efficiency criteria (8–9).
//!
//! Two points for doing more with the asset base: widening gross margin and
//! rising asset turnover.

use super::{Criterion, CriterionFamily, CriterionId, ratio};
use crate::align::PeriodPair;
use crate::statement::{StatementSet, line_items};

/// Criterion 8: Gross Margin Improvement.
///
/// Gross margin is `(Total Revenue - Cost Of Revenue) / Total Revenue`;
/// favorable when it is strictly higher in the current period. A zero-revenue
/// period contributes a margin of 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrossMarginImprovement;

impl Criterion for GrossMarginImprovement {
    fn id(&self) -> CriterionId {
        CriterionId::GrossMarginImprovement
    }

    fn description(&self) -> &str {
        "Gross margin improved versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::OperatingEfficiency
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::TOTAL_REVENUE, line_items::COST_OF_REVENUE]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(rev_curr), Some(cogs_curr), Some(rev_prev), Some(cogs_prev)) = (
            statements.income.get(line_items::TOTAL_REVENUE, &pair.current),
            statements.income.get(line_items::COST_OF_REVENUE, &pair.current),
            statements.income.get(line_items::TOTAL_REVENUE, &pair.previous),
            statements.income.get(line_items::COST_OF_REVENUE, &pair.previous),
        ) else {
            return 0;
        };
        let gm_curr = ratio(rev_curr - cogs_curr, rev_curr);
        let gm_prev = ratio(rev_prev - cogs_prev, rev_prev);
        u8::from(gm_curr > gm_prev)
    }
}

/// Criterion 9: Asset Turnover Improvement.
///
/// Asset turnover is `Total Revenue / Total Assets`; favorable when it is
/// strictly higher in the current period.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTurnoverImprovement;

impl Criterion for AssetTurnoverImprovement {
    fn id(&self) -> CriterionId {
        CriterionId::AssetTurnoverImprovement
    }

    fn description(&self) -> &str {
        "Asset turnover improved versus the prior period"
    }

    fn family(&self) -> CriterionFamily {
        CriterionFamily::OperatingEfficiency
    }

    fn required_items(&self) -> &[&str] {
        &[line_items::TOTAL_REVENUE, line_items::TOTAL_ASSETS]
    }

    fn lookback(&self) -> usize {
        2
    }

    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8 {
        let (Some(rev_curr), Some(rev_prev), Some(ta_curr), Some(ta_prev)) = (
            statements.income.get(line_items::TOTAL_REVENUE, &pair.current),
            statements.income.get(line_items::TOTAL_REVENUE, &pair.previous),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.current),
            statements.balance.get(line_items::TOTAL_ASSETS, &pair.previous),
        ) else {
            return 0;
        };
        u8::from(ratio(rev_curr, ta_curr) > ratio(rev_prev, ta_prev))
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

    fn table(rows: &[(&str, f64, f64)]) -> FinancialTable {
        let mut table = FinancialTable::new();
        for (label, curr, prev) in rows {
            table.insert(*label, CURR, *curr);
            table.insert(*label, PREV, *prev);
        }
        table
    }

    #[rstest]
    #[case(1000.0, 600.0, 900.0, 550.0, 1)] // 0.40 > ~0.389
    #[case(900.0, 600.0, 1000.0, 600.0, 0)] // ~0.333 < 0.40
    #[case(0.0, 600.0, 900.0, 550.0, 0)] // zero revenue degrades margin to 0
    fn test_gross_margin_improvement(
        #[case] rev_curr: f64,
        #[case] cogs_curr: f64,
        #[case] rev_prev: f64,
        #[case] cogs_prev: f64,
        #[case] expected: u8,
    ) {
        let income = table(&[
            (line_items::TOTAL_REVENUE, rev_curr, rev_prev),
            (line_items::COST_OF_REVENUE, cogs_curr, cogs_prev),
        ]);
        let balance = FinancialTable::new();
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(
            GrossMarginImprovement.evaluate(&statements, &pair()),
            expected
        );
    }

    #[test]
    fn test_gross_margin_missing_cogs_falls_back_to_zero() {
        let income = table(&[(line_items::TOTAL_REVENUE, 1000.0, 900.0)]);
        let empty = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &empty,
            cashflow: &empty,
        };

        assert_eq!(GrossMarginImprovement.evaluate(&statements, &pair()), 0);
    }

    #[rstest]
    #[case(1000.0, 900.0, 5000.0, 4800.0, 1)] // 0.2 > 0.1875
    #[case(900.0, 1000.0, 5000.0, 4800.0, 0)] // turnover fell
    #[case(1000.0, 900.0, 0.0, 4800.0, 0)] // zero assets degrade turnover to 0
    fn test_asset_turnover_improvement(
        #[case] rev_curr: f64,
        #[case] rev_prev: f64,
        #[case] ta_curr: f64,
        #[case] ta_prev: f64,
        #[case] expected: u8,
    ) {
        let income = table(&[(line_items::TOTAL_REVENUE, rev_curr, rev_prev)]);
        let balance = table(&[(line_items::TOTAL_ASSETS, ta_curr, ta_prev)]);
        let cashflow = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &balance,
            cashflow: &cashflow,
        };

        assert_eq!(
            AssetTurnoverImprovement.evaluate(&statements, &pair()),
            expected
        );
    }

    #[test]
    fn test_asset_turnover_missing_assets_falls_back_to_zero() {
        let income = table(&[(line_items::TOTAL_REVENUE, 1000.0, 900.0)]);
        let empty = FinancialTable::new();
        let statements = StatementSet {
            income: &income,
            balance: &empty,
            cashflow: &empty,
        };

        assert_eq!(AssetTurnoverImprovement.evaluate(&statements, &pair()), 0);
    }
}
