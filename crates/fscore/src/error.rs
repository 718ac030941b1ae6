//! Error types for F-Score computation.
//!
//! Only one condition is fatal to a scoring call: fewer than two common
//! reporting periods across the three statements. A missing line item or a
//! zero denominator is recovered locally inside the affected criterion (it
//! resolves to its defined fallback value) and never surfaces here.

use thiserror::Error;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur while computing a score.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Fewer than two reporting periods are shared by all three statements
    #[error("insufficient common periods: need 2, got {available}")]
    InsufficientPeriods {
        /// Number of periods present in all three statements
        available: usize,
    },
}
