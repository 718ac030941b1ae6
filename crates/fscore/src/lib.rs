#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod criteria;
pub mod error;
pub mod score;
pub mod statement;

// Re-export core types
pub use align::{PeriodPair, common_periods};
pub use criteria::{Criterion, CriterionFamily, CriterionId};
pub use error::{Result, ScoreError};
pub use score::{ScoreBreakdown, compute_score};
pub use statement::{FinancialTable, Period, StatementSet, line_items};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
