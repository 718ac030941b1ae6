//! CLI for the fscore Piotroski F-Score engine.
//!
//! Wraps the pure scoring core with the collaborator concerns it deliberately
//! excludes: loading statement CSVs, mapping provider row labels onto the
//! canonical ones, and batch-scanning a directory of per-ticker statements.

mod loader;

use clap::{Parser, Subcommand};
use fscore::{Criterion, CriterionFamily, ScoreBreakdown, ScoreError, compute_score, criteria};
use loader::{BALANCE_ROW_MAP, CASHFLOW_ROW_MAP, INCOME_ROW_MAP, LoaderError, load_statement};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fscore")]
#[command(about = "Piotroski F-Score over financial statement CSVs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the nine criteria
    List,
    /// Show information about one criterion, by number or name
    Info {
        /// Criterion number (1-9) or snake_case name
        criterion: String,
    },
    /// Score one company from its three statement CSVs
    Score {
        /// Income statement CSV
        #[arg(long)]
        income: PathBuf,
        /// Balance sheet CSV
        #[arg(long)]
        balance: PathBuf,
        /// Cash-flow statement CSV
        #[arg(long)]
        cashflow: PathBuf,
        /// Emit the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every ticker with statement CSVs in a directory
    Scan {
        /// Directory holding <ticker>_income_statement.csv,
        /// <ticker>_balance_sheet.csv and <ticker>_cashflow.csv files
        dir: PathBuf,
        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("failed to read directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => {
            list_criteria();
            Ok(())
        }
        Commands::Info { criterion } => {
            show_criterion_info(&criterion);
            Ok(())
        }
        Commands::Score {
            income,
            balance,
            cashflow,
            json,
        } => score_company(&income, &balance, &cashflow, json),
        Commands::Scan { dir, json } => scan_directory(&dir, json),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// List all nine criteria grouped by signal family.
fn list_criteria() {
    println!("Piotroski F-Score criteria (9 points)\n");
    for family in [
        CriterionFamily::Profitability,
        CriterionFamily::LeverageLiquidity,
        CriterionFamily::OperatingEfficiency,
    ] {
        println!("{family}:");
        for criterion in criteria::all() {
            if criterion.family() == family {
                println!(
                    "  {}. {} - {}",
                    criterion.id().number(),
                    criterion.id(),
                    criterion.description()
                );
            }
        }
        println!();
    }
}

/// Show detailed information about a single criterion.
fn show_criterion_info(wanted: &str) {
    let criterion = criteria::all()
        .into_iter()
        .find(|c| c.id().to_string() == wanted || c.id().number().to_string() == wanted)
        .unwrap_or_else(|| {
            eprintln!("Error: criterion '{wanted}' not found");
            eprintln!("\nAvailable criteria:");
            for criterion in criteria::all() {
                eprintln!("  {}. {}", criterion.id().number(), criterion.id());
            }
            std::process::exit(1);
        });

    println!("Criterion: {} (#{})", criterion.id(), criterion.id().number());
    println!("Family: {}", criterion.family());
    println!("Description: {}", criterion.description());
    println!("Lookback: {} period(s)", criterion.lookback());
    println!("Required line items:");
    for item in criterion.required_items() {
        println!("  - {item}");
    }
}

/// Score one company and print the breakdown.
fn score_company(
    income: &Path,
    balance: &Path,
    cashflow: &Path,
    json: bool,
) -> Result<(), CliError> {
    let income = load_statement(income, INCOME_ROW_MAP)?;
    let balance = load_statement(balance, BALANCE_ROW_MAP)?;
    let cashflow = load_statement(cashflow, CASHFLOW_ROW_MAP)?;

    let breakdown = compute_score(&income, &balance, &cashflow)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print_breakdown(&breakdown);
    }
    Ok(())
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "F-Score: {}/9  ({} vs {})\n",
        breakdown.total, breakdown.period_pair.current, breakdown.period_pair.previous
    );
    for criterion in criteria::all() {
        let value = breakdown.criteria.get(&criterion.id()).copied().unwrap_or(0);
        println!(
            "  {}. {:<27} {}",
            criterion.id().number(),
            criterion.id().to_string(),
            value
        );
    }
}

/// One row of `scan` output.
#[derive(Debug, Serialize)]
struct ScanResult {
    ticker: String,
    #[serde(flatten)]
    breakdown: ScoreBreakdown,
}

/// Score every ticker in a directory of statement CSVs.
///
/// Tickers are discovered from `<ticker>_income_statement.csv` files, the
/// naming the batch data dumps use. Tickers missing a sibling statement or
/// without two common periods are reported and skipped, never fatal.
fn scan_directory(dir: &Path, json: bool) -> Result<(), CliError> {
    let mut tickers: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let name = entry.ok()?.file_name().into_string().ok()?;
            Some(name.strip_suffix("_income_statement.csv")?.to_string())
        })
        .collect();
    tickers.sort_unstable();

    let mut results = Vec::new();
    for ticker in tickers {
        let income_path = dir.join(format!("{ticker}_income_statement.csv"));
        let balance_path = dir.join(format!("{ticker}_balance_sheet.csv"));
        let cashflow_path = dir.join(format!("{ticker}_cashflow.csv"));
        if !balance_path.exists() || !cashflow_path.exists() {
            eprintln!("{ticker}: missing statement file(s), skipping");
            continue;
        }

        let income = load_statement(&income_path, INCOME_ROW_MAP)?;
        let balance = load_statement(&balance_path, BALANCE_ROW_MAP)?;
        let cashflow = load_statement(&cashflow_path, CASHFLOW_ROW_MAP)?;
        match compute_score(&income, &balance, &cashflow) {
            Ok(breakdown) => results.push(ScanResult { ticker, breakdown }),
            Err(err @ ScoreError::InsufficientPeriods { .. }) => {
                eprintln!("{ticker}: {err}, skipping");
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No scores computed.");
        return Ok(());
    }
    println!("{:<10} {:>7}  {:<12} {:<12}", "TICKER", "FSCORE", "CURRENT", "PREVIOUS");
    for result in &results {
        println!(
            "{:<10} {:>7}  {:<12} {:<12}",
            result.ticker,
            format!("{}/9", result.breakdown.total),
            result.breakdown.period_pair.current,
            result.breakdown.period_pair.previous
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_every_criterion_is_findable_by_number_and_name() {
        for criterion in criteria::all() {
            let by_number = criterion.id().number().to_string();
            let by_name = criterion.id().to_string();
            for wanted in [by_number, by_name] {
                assert!(
                    criteria::all()
                        .into_iter()
                        .any(|c| c.id().to_string() == wanted
                            || c.id().number().to_string() == wanted),
                    "criterion lookup failed for '{wanted}'"
                );
            }
        }
    }

    #[test]
    fn test_scan_scores_a_ticker_directory() {
        let dir = std::env::temp_dir().join(format!("fscore-scan-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let write = |name: &str, contents: &str| {
            let mut file = std::fs::File::create(dir.join(name)).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
        };
        write(
            "ACME_income_statement.csv",
            "item,2023-12-31,2022-12-31\nNet Income,100,80\nTotal Revenue,1000,900\nCost Of Revenue,600,550\n",
        );
        write(
            "ACME_balance_sheet.csv",
            "item,2023-12-31,2022-12-31\nTotal Assets,5000,4800\nLong Term Debt,1000,1100\nCurrent Assets,1500,1400\nCurrent Liabilities,800,850\nShares Outstanding,200,210\n",
        );
        write(
            "ACME_cashflow.csv",
            "item,2023-12-31,2022-12-31\nOperating Cash Flow,120,100\n",
        );
        // A ticker with no sibling statements must be skipped, not fatal.
        write("LONE_income_statement.csv", "item,2023-12-31\nNet Income,1\n");

        assert!(scan_directory(&dir, false).is_ok());

        let income = load_statement(&dir.join("ACME_income_statement.csv"), INCOME_ROW_MAP).unwrap();
        let balance = load_statement(&dir.join("ACME_balance_sheet.csv"), BALANCE_ROW_MAP).unwrap();
        let cashflow = load_statement(&dir.join("ACME_cashflow.csv"), CASHFLOW_ROW_MAP).unwrap();
        let breakdown = compute_score(&income, &balance, &cashflow).unwrap();
        assert_eq!(breakdown.total, 8);
    }
}
