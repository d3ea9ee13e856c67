use super::{format, ui};
use crate::core::config::AppConfig;
use crate::core::snapshot::FinancialSnapshot;
use crate::core::transforms;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the investments view: normalized allocation, yearly performance
/// with cumulative growth, and the holdings table.
pub fn run(snapshot: &FinancialSnapshot, config: &AppConfig, options: &ui::ViewOptions) -> Result<()> {
    let currency = &config.currency;
    let investments = &snapshot.investments;

    println!("{}\n", ui::style_text("Investments", ui::StyleType::Title));

    let top_holding = investments
        .holdings
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value));

    let mut cards = ui::new_styled_table(options);
    cards.set_header(vec![
        ui::header_cell("Total Value", options),
        ui::header_cell("Holdings", options),
        ui::header_cell("Top Holding", options),
    ]);
    cards.add_row(vec![
        ui::value_cell(format::currency(investments.total, currency)),
        ui::value_cell(investments.holdings.len().to_string()),
        Cell::new(top_holding.map_or("N/A", |h| h.name.as_str())),
    ]);
    println!("{cards}");

    let allocation = transforms::normalize_allocation(&investments.allocation);

    println!("\n{}", ui::style_text("Allocation", ui::StyleType::Title));
    let mut allocation_table = ui::new_styled_table(options);
    allocation_table.set_header(vec![
        ui::header_cell("Type", options),
        ui::header_cell("Amount", options),
        ui::header_cell("Allocation", options),
        ui::header_cell("", options),
    ]);
    for slice in &allocation {
        allocation_table.add_row(vec![
            Cell::new(&slice.kind),
            ui::value_cell(format::currency(slice.amount, currency)),
            ui::value_cell(format::percentage(slice.percentage)),
            Cell::new(ui::percent_bar(slice.percentage, 20)),
        ]);
    }
    println!("{allocation_table}");

    let returns: Vec<f64> = investments.performance.iter().map(|p| p.returns).collect();
    let growth = transforms::cumulative_growth(&returns);

    println!("\n{}", ui::style_text("Performance", ui::StyleType::Title));
    let mut performance = ui::new_styled_table(options);
    performance.set_header(vec![
        ui::header_cell("Year", options),
        ui::header_cell("Return", options),
        ui::header_cell("Cumulative Growth", options),
    ]);
    for (point, cumulative) in investments.performance.iter().zip(&growth) {
        performance.add_row(vec![
            Cell::new(point.year.to_string()),
            ui::change_cell(point.returns, format::percentage(point.returns)),
            ui::change_cell(*cumulative, format::percentage(*cumulative)),
        ]);
    }
    println!("{performance}");

    println!("\n{}", ui::style_text("Holdings", ui::StyleType::Title));
    let mut holdings = ui::new_styled_table(options);
    holdings.set_header(vec![
        ui::header_cell("Name", options),
        ui::header_cell("Value", options),
        ui::header_cell("Growth", options),
    ]);
    for holding in &investments.holdings {
        holdings.add_row(vec![
            Cell::new(&holding.name),
            ui::value_cell(format::currency(holding.value, currency)),
            ui::change_cell(holding.growth, format::percentage(holding.growth)),
        ]);
    }
    println!("{holdings}");

    Ok(())
}
