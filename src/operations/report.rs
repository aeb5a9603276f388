use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{format_date, Category, Transaction};
use crate::store::ledger::LedgerStore;

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
}

/// Records whose date falls in `[start, end]`, both ends inclusive,
/// in input order. An inverted range is not an error; it just matches
/// nothing.
pub fn filter_range<'a>(
    records: &'a [Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Transaction> {
    records
        .iter()
        .filter(|transaction| transaction.date >= start && transaction.date <= end)
        .collect()
}

/// Total up income and expenses. Categories outside the Income/Expense
/// pair count toward neither sum.
pub fn summarize(filtered: &[&Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for transaction in filtered {
        match transaction.category {
            Category::Income => total_income += transaction.amount,
            Category::Expense => total_expense += transaction.amount,
            Category::Other(_) => {}
        }
    }

    Summary {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
    }
}

pub fn run_view(
    store: &LedgerStore,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), LedgerError> {
    let records = store.load_all()?;
    let filtered = filter_range(&records, start_date, end_date);

    if filtered.is_empty() {
        println!("No transactions found in the given interval");
    }

    let summary = summarize(&filtered);
    println!("\nSummary:");
    println!("Total Income: {:.2}", summary.total_income);
    println!("Total Expense: {:.2}", summary.total_expense);
    println!("Net Savings: {:.2}", summary.net_savings);

    if !filtered.is_empty() {
        println!(
            "\nTransactions from {} to {}:",
            format_date(start_date),
            format_date(end_date)
        );
        println!(
            "{:<12} {:>12}  {:<10} {}",
            "date", "amount", "category", "description"
        );
        for transaction in &filtered {
            println!(
                "{:<12} {:>12}  {:<10} {}",
                format_date(transaction.date),
                format!("{:.2}", transaction.amount),
                transaction.category,
                transaction.description
            );
        }
    }

    Ok(())
}
