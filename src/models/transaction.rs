use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Storage format for transaction dates. Every path that reads or
/// writes a date goes through [`parse_date`] / [`format_date`] so the
/// format contract lives in one place.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::format::ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Income and Expense are the only categories counted in summaries.
/// Anything else is stored and loaded verbatim but never totaled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Income,
    Expense,
    Other(String),
}

impl Category {
    pub fn from_field(value: &str) -> Self {
        match value {
            "Income" => Category::Income,
            "Expense" => Category::Expense,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: String,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description,
        }
    }
}
