mod error;
mod models;
mod operations;
mod store;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use error::LedgerError;
use models::transaction::parse_date;
use operations::add::add_transaction_to_store;
use operations::plot::run_plot;
use operations::report::run_view;
use store::ledger::LedgerStore;

#[derive(Parser)]
#[command(name = "fintrack", about = "Track income and expenses in a CSV ledger")]
struct Args {
    /// Path to the ledger CSV file
    #[arg(long, default_value = "finance_data.csv")]
    file: PathBuf,
}

pub enum UserCommands {
    About,
    Add,
    View,
    Plot,
    Exit,
}

fn main() {
    let args = Args::parse();

    println!("Welcome to the finance tracker!");
    let store = LedgerStore::new(args.file);
    if let Err(e) = store.initialize() {
        println!("Error initializing ledger: {}", e);
        return;
    }
    println!("Using ledger file '{}'", store.path().display());

    loop {
        println!("Please enter a command (about, add, view, plot, exit):");

        // read user input
        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        let command = check_for_command(parts[0]);
        match command {
            UserCommands::About => {
                println!("Finance tracker keeps a CSV ledger of your income and expenses.");
                println!("Use 'add' to record a transaction, 'view' to see a summary for a");
                println!("date range, and 'plot' to chart daily income and expenses.");
            }
            UserCommands::Add => {
                println!("Add command selected. Please enter transaction details in the format:\ndate(DD-MM-YYYY), amount, category(Income/Expense), description");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match add_transaction_to_store(&store, &input) {
                    Ok(_) => {
                        println!("Transaction added successfully!");
                    }
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::View => {
                let (start_date, end_date) = match read_date_range() {
                    Ok(range) => range,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };
                if let Err(e) = run_view(&store, start_date, end_date) {
                    println!("Error viewing transactions: {}", e);
                }
            }
            UserCommands::Plot => {
                let (start_date, end_date) = match read_date_range() {
                    Ok(range) => range,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };
                if let Err(e) = run_plot(&store, start_date, end_date) {
                    println!("Error plotting transactions: {}", e);
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
        }
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn read_date_range() -> Result<(chrono::NaiveDate, chrono::NaiveDate), LedgerError> {
    println!("Start date (DD-MM-YYYY):");
    let start_input =
        read_user_input().map_err(LedgerError::InvalidInput)?;
    let start_date = parse_date(&start_input).map_err(|_| {
        LedgerError::InvalidInput(format!(
            "Invalid date '{}'. Please use DD-MM-YYYY.",
            start_input
        ))
    })?;

    println!("End date (DD-MM-YYYY):");
    let end_input = read_user_input().map_err(LedgerError::InvalidInput)?;
    let end_date = parse_date(&end_input).map_err(|_| {
        LedgerError::InvalidInput(format!(
            "Invalid date '{}'. Please use DD-MM-YYYY.",
            end_input
        ))
    })?;

    Ok((start_date, end_date))
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "about" => UserCommands::About,
        "add" => UserCommands::Add,
        "view" => UserCommands::View,
        "plot" => UserCommands::Plot,
        "exit" => UserCommands::Exit,
        _ => {
            println!("No valid command found. Exiting.");
            UserCommands::Exit
        }
    }
}
