use std::collections::BTreeMap;
use std::io;

use chrono::{Duration, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{format_date, Category, Transaction};
use crate::operations::report::filter_range;
use crate::store::ledger::LedgerStore;

/// Per-day sums for one category over every calendar day between the
/// earliest and latest date in `filtered`. Days without a matching
/// record stay at zero so a plot draws a continuous line.
pub fn daily_series(
    filtered: &[&Transaction],
    category: &Category,
) -> BTreeMap<NaiveDate, Decimal> {
    let mut series = BTreeMap::new();

    let first = filtered.iter().map(|t| t.date).min();
    let last = filtered.iter().map(|t| t.date).max();
    let (Some(first), Some(last)) = (first, last) else {
        return series;
    };

    let mut day = first;
    while day <= last {
        series.insert(day, Decimal::ZERO);
        day = day + Duration::days(1);
    }

    for transaction in filtered {
        if transaction.category == *category {
            *series.entry(transaction.date).or_insert(Decimal::ZERO) += transaction.amount;
        }
    }

    series
}

pub fn run_plot(
    store: &LedgerStore,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), LedgerError> {
    let records = store.load_all()?;
    let filtered = filter_range(&records, start_date, end_date);

    if filtered.is_empty() {
        println!("No transactions found in the given interval");
        return Ok(());
    }

    let income = daily_series(&filtered, &Category::Income);
    let expense = daily_series(&filtered, &Category::Expense);

    let title = format!(
        "Income and Expenses {} - {}",
        format_date(start_date),
        format_date(end_date)
    );
    render_plot(&title, &income, &expense)
}

fn to_points(series: &BTreeMap<NaiveDate, Decimal>) -> Vec<(f64, f64)> {
    series
        .values()
        .enumerate()
        .map(|(i, amount)| (i as f64, amount.to_f64().unwrap_or(0.0)))
        .collect()
}

fn axis_labels(series: &BTreeMap<NaiveDate, Decimal>) -> Vec<String> {
    let dates: Vec<NaiveDate> = series.keys().copied().collect();
    match dates.len() {
        0 => Vec::new(),
        1 => vec![format_date(dates[0])],
        n => vec![
            format_date(dates[0]),
            format_date(dates[n / 2]),
            format_date(dates[n - 1]),
        ],
    }
}

fn render_plot(
    title: &str,
    income: &BTreeMap<NaiveDate, Decimal>,
    expense: &BTreeMap<NaiveDate, Decimal>,
) -> Result<(), LedgerError> {
    let income_points = to_points(income);
    let expense_points = to_points(expense);

    let max_amount = income_points
        .iter()
        .chain(expense_points.iter())
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let max_x = (income_points.len().saturating_sub(1)).max(1) as f64;
    let x_labels = axis_labels(income);
    let y_labels = vec![
        "0".to_string(),
        format!("{:.0}", max_amount / 2.0),
        format!("{:.0}", max_amount),
    ];

    enable_raw_mode().map_err(|e| LedgerError::Io(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| LedgerError::Io(format!("Failed to enter alternate screen: {}", e)))?;

    let result = (|| {
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)
            .map_err(|e| LedgerError::Io(format!("Failed to initialize terminal: {}", e)))?;

        loop {
            terminal
                .draw(|frame| {
                    let datasets = vec![
                        Dataset::default()
                            .name("Income")
                            .marker(Marker::Braille)
                            .graph_type(GraphType::Line)
                            .style(Style::default().fg(Color::Green))
                            .data(&income_points),
                        Dataset::default()
                            .name("Expense")
                            .marker(Marker::Braille)
                            .graph_type(GraphType::Line)
                            .style(Style::default().fg(Color::Red))
                            .data(&expense_points),
                    ];

                    let chart = Chart::new(datasets)
                        .block(
                            Block::default()
                                .title(format!("{}  (press q to exit)", title))
                                .borders(Borders::ALL),
                        )
                        .x_axis(
                            Axis::default()
                                .title("Date")
                                .style(Style::default().fg(Color::Gray))
                                .bounds([0.0, max_x])
                                .labels(x_labels.clone()),
                        )
                        .y_axis(
                            Axis::default()
                                .title("Amount")
                                .style(Style::default().fg(Color::Gray))
                                .bounds([0.0, max_amount])
                                .labels(y_labels.clone()),
                        );

                    frame.render_widget(chart, frame.area());
                })
                .map_err(|e| LedgerError::Io(format!("Failed to draw terminal UI: {}", e)))?;

            if event::poll(std::time::Duration::from_millis(250))
                .map_err(|e| LedgerError::Io(format!("Failed to poll input: {}", e)))?
            {
                match event::read()
                    .map_err(|e| LedgerError::Io(format!("Failed to read input: {}", e)))?
                {
                    Event::Key(key) if key.code == KeyCode::Char('q') => break,
                    Event::Key(key) if key.code == KeyCode::Esc => break,
                    Event::Resize(_, _) => continue,
                    _ => {}
                }
            }
        }

        Ok(())
    })();

    disable_raw_mode().map_err(|e| LedgerError::Io(format!("Failed to disable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
        .map_err(|e| LedgerError::Io(format!("Failed to leave alternate screen: {}", e)))?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(day: u32, amount: i64, category: Category) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            Decimal::new(amount, 0),
            category,
            "Test".to_string(),
        )
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_daily_series_is_dense_over_span() {
        let records = vec![
            transaction(1, 100, Category::Income),
            transaction(5, 200, Category::Income),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let series = daily_series(&filtered, &Category::Income);
        assert_eq!(series.len(), 5);
        assert_eq!(series[&day(1)], Decimal::new(100, 0));
        assert_eq!(series[&day(2)], Decimal::ZERO);
        assert_eq!(series[&day(3)], Decimal::ZERO);
        assert_eq!(series[&day(4)], Decimal::ZERO);
        assert_eq!(series[&day(5)], Decimal::new(200, 0));
    }

    #[test]
    fn test_daily_series_sums_same_day_amounts() {
        let records = vec![
            transaction(2, 100, Category::Expense),
            transaction(2, 50, Category::Expense),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let series = daily_series(&filtered, &Category::Expense);
        assert_eq!(series.len(), 1);
        assert_eq!(series[&day(2)], Decimal::new(150, 0));
    }

    #[test]
    fn test_daily_series_only_counts_requested_category() {
        let records = vec![
            transaction(1, 100, Category::Income),
            transaction(2, 40, Category::Expense),
            transaction(3, 10, Category::Other("Savings".to_string())),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let series = daily_series(&filtered, &Category::Expense);
        assert_eq!(series.len(), 3);
        assert_eq!(series[&day(1)], Decimal::ZERO);
        assert_eq!(series[&day(2)], Decimal::new(40, 0));
        assert_eq!(series[&day(3)], Decimal::ZERO);
    }

    #[test]
    fn test_daily_series_span_covers_all_filtered_dates() {
        // The span comes from the whole filtered set, not just the
        // records of the requested category.
        let records = vec![
            transaction(1, 100, Category::Expense),
            transaction(4, 200, Category::Income),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let series = daily_series(&filtered, &Category::Income);
        assert_eq!(series.len(), 4);
        assert_eq!(series[&day(1)], Decimal::ZERO);
        assert_eq!(series[&day(4)], Decimal::new(200, 0));
    }

    #[test]
    fn test_daily_series_empty_input() {
        let series = daily_series(&[], &Category::Income);
        assert!(series.is_empty());
    }

    #[test]
    fn test_daily_series_keys_are_in_date_order() {
        let records = vec![
            transaction(3, 10, Category::Income),
            transaction(1, 20, Category::Income),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let series = daily_series(&filtered, &Category::Income);
        let dates: Vec<NaiveDate> = series.keys().copied().collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn test_to_points_indexes_days_from_zero() {
        let records = vec![
            transaction(1, 100, Category::Income),
            transaction(3, 300, Category::Income),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let points = to_points(&daily_series(&filtered, &Category::Income));
        assert_eq!(points, vec![(0.0, 100.0), (1.0, 0.0), (2.0, 300.0)]);
    }

    #[test]
    fn test_axis_labels_first_middle_last() {
        let records = vec![
            transaction(1, 1, Category::Income),
            transaction(5, 1, Category::Income),
        ];
        let filtered: Vec<&Transaction> = records.iter().collect();

        let labels = axis_labels(&daily_series(&filtered, &Category::Income));
        assert_eq!(
            labels,
            vec![
                "01-03-2024".to_string(),
                "03-03-2024".to_string(),
                "05-03-2024".to_string()
            ]
        );
    }
}
