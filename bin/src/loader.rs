//! Statement CSV ingestion.
//!
//! Reads the CSV layout produced by dumping a provider statement DataFrame:
//! the first column holds line-item labels, every remaining column is one
//! reporting period. Provider-specific row labels are renamed onto the
//! canonical [`fscore::line_items`] labels before scoring; null cells are
//! skipped, not zeroed, so missing data stays missing.

use fscore::{FinancialTable, line_items};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a statement CSV.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The CSV could not be read or a period column was not numeric
    #[error("failed to read statement CSV: {0}")]
    Csv(#[from] PolarsError),

    /// The CSV has no label column or no period columns
    #[error("{path}: expected a label column followed by period columns")]
    MalformedStatement {
        /// Path of the offending file
        path: String,
    },
}

/// Provider row labels renamed onto canonical income-statement labels.
/// Labels not listed here pass through unchanged.
pub const INCOME_ROW_MAP: &[(&str, &str)] = &[
    ("Net Income Common Stockholders", line_items::NET_INCOME),
    ("Cost Of Goods Sold", line_items::COST_OF_REVENUE),
];

/// Provider row labels renamed onto canonical balance-sheet labels.
pub const BALANCE_ROW_MAP: &[(&str, &str)] = &[
    ("Total Current Assets", line_items::CURRENT_ASSETS),
    ("Total Current Liabilities", line_items::CURRENT_LIABILITIES),
    ("Ordinary Shares Number", line_items::SHARES_OUTSTANDING),
];

/// Provider row labels renamed onto canonical cash-flow labels.
pub const CASHFLOW_ROW_MAP: &[(&str, &str)] = &[
    (
        "Total Cash From Operating Activities",
        line_items::OPERATING_CASH_FLOW,
    ),
    (
        "Cash Flow From Continuing Operating Activities",
        line_items::OPERATING_CASH_FLOW,
    ),
];

/// Loads one statement CSV into a [`FinancialTable`], applying `row_map` to
/// rename provider labels onto canonical ones.
pub fn load_statement(path: &Path, row_map: &[(&str, &str)]) -> Result<FinancialTable, LoaderError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let [label_column, period_columns @ ..] = names.as_slice() else {
        return Err(LoaderError::MalformedStatement {
            path: path.display().to_string(),
        });
    };
    if period_columns.is_empty() {
        return Err(LoaderError::MalformedStatement {
            path: path.display().to_string(),
        });
    }

    let labels = df.column(label_column)?.as_materialized_series().clone();
    let labels = labels.str()?;

    let mut table = FinancialTable::new();
    for period in period_columns {
        let values = df
            .column(period)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let values = values.f64()?;

        for (row, label) in labels.into_iter().enumerate() {
            let (Some(label), Some(value)) = (label, values.get(row)) else {
                continue;
            };
            table.insert(canonical_label(label, row_map), period.as_str(), value);
        }
    }
    Ok(table)
}

fn canonical_label(label: &str, row_map: &[(&str, &str)]) -> String {
    row_map
        .iter()
        .find(|(provider, _)| *provider == label)
        .map_or(label, |(_, canonical)| *canonical)
        .to_string()
}
