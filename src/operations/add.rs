use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{parse_date, Category, Transaction};
use crate::store::ledger::LedgerStore;

pub fn add_transaction_to_store(
    store: &LedgerStore,
    input: &str,
) -> Result<Transaction, LedgerError> {
    let transaction = create_transaction(input)?;
    store.append(&transaction)?;
    Ok(transaction)
}

/// Parse one submitted line in the form
/// `date, amount, category, description` into a transaction.
pub fn create_transaction(input: &str) -> Result<Transaction, LedgerError> {
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if parts.len() != 4 {
        return Err(LedgerError::InvalidInput(format!(
            "Expected 4 details separated by commas but got {}",
            parts.len()
        )));
    }

    let date = parse_date(parts[0]).map_err(|_| {
        LedgerError::InvalidInput(format!(
            "Invalid date '{}'. Please use DD-MM-YYYY.",
            parts[0]
        ))
    })?;

    let amount = parts[1].parse::<Decimal>().map_err(|_| {
        LedgerError::InvalidInput(format!(
            "Invalid amount '{}'. Please provide a valid decimal number.",
            parts[1]
        ))
    })?;
    if amount < Decimal::ZERO {
        return Err(LedgerError::InvalidInput(
            "Amount cannot be negative.".to_string(),
        ));
    }

    if parts[2].len() > 50 {
        return Err(LedgerError::InvalidInput("Category too long".to_string()));
    }
    let category = Category::from_field(parts[2]);

    let description = parts[3].to_string();
    if description.len() > 255 {
        return Err(LedgerError::InvalidInput(
            "Description too long".to_string(),
        ));
    }

    Ok(Transaction::new(date, amount, category, description))
}
