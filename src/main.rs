use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use spendbook::errors::Error;
use spendbook::{chart, io};

/// Reports spending totals by category, month, and location from a delimited
/// transactions file, and renders the category totals as a bar chart.
#[derive(Debug, Parser)]
#[command(name = "spendbook", version)]
struct Args {
    /// Path to the delimited transactions file
    filename: PathBuf,
    /// Field delimiter used by the transactions file
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Where to write the expenses bar chart
    #[arg(long, default_value = "expenses.png")]
    chart: PathBuf,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut bytes = value.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(byte), None) => Ok(byte),
        _ => Err("delimiter must be a single ASCII character".to_string()),
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("spendbook: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let store = io::load_records_from_path(&args.filename, args.delimiter)?;
    let totals = store.total_expenses()?;
    println!("Expenses by category: {}", format_totals(&totals));
    println!(
        "Analytics for January: {}",
        format_totals(&store.analytics_by_month("January")?)
    );
    println!(
        "Analytics for New York: {}",
        format_totals(&store.analytics_by_location("New York")?)
    );
    println!(
        "Spending in Home & Utilities category: ${}",
        store.spending_by_category("Home & Utilities")?
    );
    println!("Key recommendations: {}", store.recommendations()?);
    chart::render_expenses_chart(&totals, &args.chart)?;
    Ok(())
}

fn format_totals(totals: &BTreeMap<String, Decimal>) -> String {
    if totals.is_empty() {
        return "(none)".to_string();
    }
    totals
        .iter()
        .map(|(category, amount)| format!("{category}: ${amount}"))
        .collect::<Vec<_>>()
        .join(", ")
}
