//! The nine Piotroski criteria.
//!
//! Each criterion is an independent, stateless evaluator over the three
//! statements and a [`PeriodPair`], returning exactly 0 or 1. The grouping
//! follows Piotroski's paper:
//!
//! **Profitability (4 points):** ROA positive, OCF positive, ROA improvement,
//! quality of earnings.
//!
//! **Leverage/Liquidity (3 points):** leverage improvement, liquidity
//! improvement, no dilution.
//!
//! **Operating efficiency (2 points):** gross margin improvement, asset
//! turnover improvement.
//!
//! All evaluators share one failure policy: a missing line item or period key
//! resolves the criterion to 0, except [`NoDilution`], which resolves to 1
//! because dilution cannot be proven from missing data. A zero or absent
//! denominator makes the affected ratio 0 via [`ratio`]; no evaluator ever
//! divides by zero or panics.

mod efficiency;
mod leverage;
mod profitability;

pub use efficiency::{AssetTurnoverImprovement, GrossMarginImprovement};
pub use leverage::{LeverageImprovement, LiquidityImprovement, NoDilution};
pub use profitability::{OcfPositive, QualityOfEarnings, RoaImprovement, RoaPositive};

use crate::align::PeriodPair;
use crate::statement::StatementSet;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Piotroski's three signal families, for grouping and display.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionFamily {
    /// Profitability signals (criteria 1-4).
    Profitability,
    /// Leverage and liquidity signals (criteria 5-7).
    #[display("Leverage/Liquidity")]
    LeverageLiquidity,
    /// Operating efficiency signals (criteria 8-9).
    #[display("Operating Efficiency")]
    OperatingEfficiency,
}

/// Identifier for one of the nine criteria, ordered 1 through 9.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CriterionId {
    /// 1: net income over total assets is positive.
    #[display("roa_positive")]
    RoaPositive,
    /// 2: operating cash flow is positive.
    #[display("ocf_positive")]
    OcfPositive,
    /// 3: return on assets improved versus the prior period.
    #[display("roa_improvement")]
    RoaImprovement,
    /// 4: operating cash flow exceeds net income.
    #[display("quality_of_earnings")]
    QualityOfEarnings,
    /// 5: long-term debt to total assets declined.
    #[display("leverage_improvement")]
    LeverageImprovement,
    /// 6: current ratio improved.
    #[display("liquidity_improvement")]
    LiquidityImprovement,
    /// 7: shares outstanding did not increase.
    #[display("no_dilution")]
    NoDilution,
    /// 8: gross margin improved.
    #[display("gross_margin_improvement")]
    GrossMarginImprovement,
    /// 9: asset turnover improved.
    #[display("asset_turnover_improvement")]
    AssetTurnoverImprovement,
}

impl CriterionId {
    /// The criterion's conventional 1-based number.
    pub const fn number(self) -> u8 {
        match self {
            Self::RoaPositive => 1,
            Self::OcfPositive => 2,
            Self::RoaImprovement => 3,
            Self::QualityOfEarnings => 4,
            Self::LeverageImprovement => 5,
            Self::LiquidityImprovement => 6,
            Self::NoDilution => 7,
            Self::GrossMarginImprovement => 8,
            Self::AssetTurnoverImprovement => 9,
        }
    }
}

/// One binary scoring criterion.
///
/// Criteria are stateless and order-independent; [`evaluate`] is a pure
/// function of the statements and the period pair and always returns 0 or 1.
/// Indeterminate data resolves to the criterion's defined fallback rather
/// than an error.
///
/// [`evaluate`]: Criterion::evaluate
pub trait Criterion: Send + Sync + std::fmt::Debug {
    /// Stable identifier for this criterion.
    fn id(&self) -> CriterionId;

    /// Human-readable description of the favorable condition.
    fn description(&self) -> &str;

    /// The signal family this criterion belongs to.
    fn family(&self) -> CriterionFamily;

    /// Canonical line-item labels this criterion reads.
    fn required_items(&self) -> &[&str];

    /// Number of reporting periods the rule compares (1 or 2).
    fn lookback(&self) -> usize;

    /// Evaluates the criterion: 1 favorable, 0 unfavorable or indeterminate.
    fn evaluate(&self, statements: &StatementSet<'_>, pair: &PeriodPair) -> u8;
}

/// The nine criteria in conventional order.
pub fn all() -> [&'static dyn Criterion; 9] {
    [
        &RoaPositive,
        &OcfPositive,
        &RoaImprovement,
        &QualityOfEarnings,
        &LeverageImprovement,
        &LiquidityImprovement,
        &NoDilution,
        &GrossMarginImprovement,
        &AssetTurnoverImprovement,
    ]
}

/// Short-circuit ratio: 0.0 whenever the denominator is 0.0.
///
/// Every per-criterion ratio (ROA, leverage, current ratio, gross margin,
/// asset turnover) goes through this, so a degenerate denominator degrades
/// the ratio instead of raising a division fault.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
