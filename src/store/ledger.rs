use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{format_date, parse_date, Category, Transaction};

/// Fixed column order of the ledger file. The first row of the file is
/// always exactly these names.
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Append-only CSV ledger. The backing path is explicit configuration
/// handed in at construction; there is no process-wide default.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the backing file exists with the header row. Calling this
    /// when the file already exists is a no-op: no truncation, no
    /// duplicate header.
    pub fn initialize(&self) -> Result<(), LedgerError> {
        if self.path.exists() {
            return Ok(());
        }

        let file = File::create(&self.path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create ledger file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(COLUMNS)
            .map_err(|e| LedgerError::Io(format!("Failed to write ledger header: {}", e)))?;
        writer
            .flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush ledger file: {}", e)))?;
        Ok(())
    }

    /// Write one row to the end of the file in the fixed column order.
    /// No deduplication; duplicate rows are permitted.
    pub fn append(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to open ledger file '{}' for append: {}",
                    self.path.display(),
                    e
                ))
            })?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(&[
                format_date(transaction.date),
                transaction.amount.to_string(),
                transaction.category.to_string(),
                transaction.description.clone(),
            ])
            .map_err(|e| LedgerError::Io(format!("Failed to append transaction: {}", e)))?;
        writer
            .flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush ledger file: {}", e)))?;
        Ok(())
    }

    /// Read every row into memory in file order. The whole load fails on
    /// the first row that does not match the contract; there is no
    /// best-effort skipping.
    pub fn load_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        if !self.path.exists() {
            return Err(LedgerError::NotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to open ledger file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut transactions = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = index + 1;
            let record = result.map_err(|e| LedgerError::Parse {
                row,
                message: e.to_string(),
            })?;

            if record.len() != COLUMNS.len() {
                return Err(LedgerError::Parse {
                    row,
                    message: format!(
                        "expected {} columns, got {}",
                        COLUMNS.len(),
                        record.len()
                    ),
                });
            }

            let date_field = record.get(0).unwrap_or("");
            let date = parse_date(date_field).map_err(|_| LedgerError::Parse {
                row,
                message: format!("invalid date '{}', expected DD-MM-YYYY", date_field),
            })?;

            let amount_field = record.get(1).unwrap_or("");
            let amount = Decimal::from_str(amount_field).map_err(|_| LedgerError::Parse {
                row,
                message: format!("invalid amount '{}'", amount_field),
            })?;

            let category = Category::from_field(record.get(2).unwrap_or(""));
            let description = record.get(3).unwrap_or("").to_string();

            transactions.push(Transaction::new(date, amount, category, description));
        }

        Ok(transactions)
    }
}
