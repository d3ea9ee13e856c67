use super::{format, ui};
use crate::core::config::AppConfig;
use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the overview: headline cards, the net-worth trend, the combined
/// monthly series, and the most recent transactions.
pub fn run(snapshot: &FinancialSnapshot, config: &AppConfig, options: &ui::ViewOptions) -> Result<()> {
    let currency = &config.currency;

    println!(
        "Dashboard for {}\n",
        ui::style_text(&snapshot.profile.name, ui::StyleType::Title)
    );

    let mut cards = ui::new_styled_table(options);
    cards.set_header(vec![
        ui::header_cell("Net Worth", options),
        ui::header_cell("Total Expenses", options),
        ui::header_cell("Total Savings", options),
        ui::header_cell("Total Investments", options),
    ]);
    cards.add_row(vec![
        ui::value_cell(format::currency(snapshot.summary.net_worth, currency)),
        ui::value_cell(format::currency(snapshot.summary.total_expenses, currency)),
        ui::value_cell(format::currency(snapshot.summary.total_savings, currency)),
        ui::value_cell(format::currency(
            snapshot.summary.total_investments,
            currency,
        )),
    ]);
    println!("{cards}");

    let net_worth: Vec<f64> = snapshot.monthly.iter().map(|m| m.net_worth).collect();
    if let (Some(first), Some(last)) = (net_worth.first(), net_worth.last()) {
        println!(
            "\n{}  {}  {} → {}",
            ui::style_text("Net Worth Trend", ui::StyleType::TotalLabel),
            ui::sparkline(&net_worth),
            ui::style_text(&format::abbreviate(*first), ui::StyleType::Subtle),
            ui::style_text(&format::abbreviate(*last), ui::StyleType::TotalValue),
        );
    }

    let mut monthly = ui::new_styled_table(options);
    monthly.set_header(vec![
        ui::header_cell("Month", options),
        ui::header_cell("Expenses", options),
        ui::header_cell("Investments", options),
        ui::header_cell("Savings", options),
        ui::header_cell("Net Worth", options),
    ]);
    for point in &snapshot.monthly {
        monthly.add_row(vec![
            Cell::new(&point.month),
            ui::value_cell(format::currency(point.expenses, currency)),
            ui::value_cell(format::currency(point.investments, currency)),
            ui::value_cell(format::currency(point.savings, currency)),
            ui::value_cell(format::currency(point.net_worth, currency)),
        ]);
    }
    println!("\n{monthly}");

    ui::print_separator();

    println!(
        "\n{}",
        ui::style_text("Recent Transactions", ui::StyleType::Title)
    );
    let mut recent = ui::new_styled_table(options);
    recent.set_header(vec![
        ui::header_cell("Date", options),
        ui::header_cell("Description", options),
        ui::header_cell("Category", options),
        ui::header_cell("Amount", options),
    ]);
    for tx in snapshot.transactions.iter().take(5) {
        recent.add_row(vec![
            Cell::new(format::date(&tx.date)),
            Cell::new(&tx.description),
            Cell::new(&tx.category),
            ui::change_cell(tx.amount, format::signed_currency(tx.amount, currency)),
        ]);
    }
    println!("{recent}");

    Ok(())
}
