//! Expense records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXPENSE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Malformed `add` input. The display text doubles as the format hint
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseInputError {
    #[error("Expense has to be in <description>,<amount>,<YYYY-MM-DD> format")]
    Malformed,
    #[error("Amount has to be a number")]
    BadAmount,
    #[error("Date has to be in YYYY-MM-DD format")]
    BadDate,
}

/// Malformed expenses-file record
#[derive(Debug, Error)]
#[error("unrecognized expense record: {0}")]
pub struct ExpenseParseError(pub String);

/// An expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    /// Single-line list format, e.g. `lunch - $5.50 on 2019-10-21`
    pub fn list_format(&self) -> String {
        format!(
            "{} - ${:.2} on {}",
            self.description,
            self.amount,
            self.date.format(EXPENSE_DATE_FORMAT)
        )
    }
}

/// Parse user input of the form `{description},{amount},{YYYY-MM-DD}`
pub fn parse_input(input: &str) -> Result<Expense, ExpenseInputError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != 3 || fields[0].is_empty() {
        return Err(ExpenseInputError::Malformed);
    }

    let amount: f64 = fields[1].parse().map_err(|_| ExpenseInputError::BadAmount)?;
    let date = NaiveDate::parse_from_str(fields[2], EXPENSE_DATE_FORMAT)
        .map_err(|_| ExpenseInputError::BadDate)?;

    Ok(Expense::new(fields[0], amount, date))
}

/// Sum of all amounts
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Parse `{description}|{amount}|{YYYY-MM-DD}` file lines, skipping blanks
pub fn from_lines(lines: &[String]) -> Result<Vec<Expense>, ExpenseParseError> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() != 3 {
                return Err(ExpenseParseError(line.clone()));
            }
            let amount: f64 = fields[1]
                .parse()
                .map_err(|_| ExpenseParseError(line.clone()))?;
            let date = NaiveDate::parse_from_str(fields[2], EXPENSE_DATE_FORMAT)
                .map_err(|_| ExpenseParseError(line.clone()))?;
            Ok(Expense::new(fields[0], amount, date))
        })
        .collect()
}

/// Serialize to file lines, preserving list order
pub fn to_lines(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .map(|e| {
            format!(
                "{}|{}|{}",
                e.description,
                e.amount,
                e.date.format(EXPENSE_DATE_FORMAT)
            )
        })
        .collect()
}
