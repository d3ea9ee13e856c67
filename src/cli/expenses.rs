use super::{format, ui};
use crate::core::config::AppConfig;
use crate::core::snapshot::{AllocationSlice, FinancialSnapshot};
use crate::core::transforms;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the expenses view: category breakdown, the monthly series with
/// threshold flags and a 3-month moving average, and the detail table.
/// `threshold_override` comes from `--threshold` and wins over the config.
pub fn run(
    snapshot: &FinancialSnapshot,
    config: &AppConfig,
    options: &ui::ViewOptions,
    threshold_override: Option<f64>,
) -> Result<()> {
    let currency = &config.currency;
    let threshold = threshold_override.unwrap_or(config.monthly_threshold);

    println!("{}\n", ui::style_text("Expenses", ui::StyleType::Title));

    let amounts: Vec<f64> = snapshot.expenses.monthly.iter().map(|m| m.amount).collect();
    let total: f64 = amounts.iter().sum();
    let average = if amounts.is_empty() {
        0.0
    } else {
        total / amounts.len() as f64
    };
    let highest = amounts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut cards = ui::new_styled_table(options);
    cards.set_header(vec![
        ui::header_cell("Total (12 months)", options),
        ui::header_cell("Monthly Average", options),
        ui::header_cell("Highest Month", options),
        ui::header_cell("Threshold", options),
    ]);
    cards.add_row(vec![
        ui::value_cell(format::currency(total, currency)),
        ui::value_cell(format::currency(average, currency)),
        ui::value_cell(format::currency(highest, currency)),
        ui::value_cell(format::currency(threshold, currency)),
    ]);
    println!("{cards}");

    let slices: Vec<AllocationSlice> = snapshot
        .expenses
        .categories
        .iter()
        .map(|c| AllocationSlice {
            kind: c.category.clone(),
            amount: c.amount,
            percentage: c.percentage,
        })
        .collect();
    let normalized = transforms::normalize_allocation(&slices);

    println!(
        "\n{}",
        ui::style_text("By Category", ui::StyleType::Title)
    );
    let mut categories = ui::new_styled_table(options);
    categories.set_header(vec![
        ui::header_cell("Category", options),
        ui::header_cell("Amount", options),
        ui::header_cell("Share", options),
        ui::header_cell("", options),
    ]);
    for slice in &normalized {
        categories.add_row(vec![
            Cell::new(&slice.kind),
            ui::value_cell(format::currency(slice.amount, currency)),
            ui::value_cell(format::percentage(slice.percentage)),
            Cell::new(ui::percent_bar(slice.percentage, 20)),
        ]);
    }
    println!("{categories}");

    let moving_avg = transforms::moving_average(&amounts);

    println!(
        "\n{}",
        ui::style_text("Monthly Trend", ui::StyleType::Title)
    );
    let mut monthly = ui::new_styled_table(options);
    monthly.set_header(vec![
        ui::header_cell("Month", options),
        ui::header_cell("Amount", options),
        ui::header_cell("3-Month Avg", options),
        ui::header_cell("Status", options),
    ]);
    for (point, avg) in snapshot.expenses.monthly.iter().zip(&moving_avg) {
        let status = if point.amount > threshold {
            Cell::new(ui::style_text("over threshold", ui::StyleType::Error))
        } else {
            Cell::new("")
        };
        monthly.add_row(vec![
            Cell::new(&point.month),
            ui::value_cell(format::currency(point.amount, currency)),
            ui::value_cell(format::currency(*avg, currency)),
            status,
        ]);
    }
    println!("{monthly}");

    println!("\n{}", ui::style_text("Details", ui::StyleType::Title));
    let mut details = ui::new_styled_table(options);
    details.set_header(vec![
        ui::header_cell("Date", options),
        ui::header_cell("Description", options),
        ui::header_cell("Category", options),
        ui::header_cell("Amount", options),
    ]);
    for detail in &snapshot.expenses.details {
        details.add_row(vec![
            Cell::new(format::date(&detail.date)),
            Cell::new(&detail.description),
            Cell::new(&detail.category),
            ui::value_cell(format::currency(detail.amount, currency)),
        ]);
    }
    println!("{details}");

    Ok(())
}
