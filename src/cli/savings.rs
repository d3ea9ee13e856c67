use super::{format, ui};
use crate::core::config::AppConfig;
use crate::core::snapshot::FinancialSnapshot;
use crate::core::transforms;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the savings view: accounts, goal progress, growth history, and a
/// projected balance using the configured contribution and rate.
pub fn run(snapshot: &FinancialSnapshot, config: &AppConfig, options: &ui::ViewOptions) -> Result<()> {
    let currency = &config.currency;
    let savings = &snapshot.savings;

    println!("{}\n", ui::style_text("Savings", ui::StyleType::Title));

    println!(
        "{} {}",
        ui::style_text("Total Savings:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format::currency(savings.total, currency),
            ui::StyleType::TotalValue
        )
    );

    println!("\n{}", ui::style_text("Accounts", ui::StyleType::Title));
    let mut accounts = ui::new_styled_table(options);
    accounts.set_header(vec![
        ui::header_cell("Account", options),
        ui::header_cell("Balance", options),
        ui::header_cell("Interest Rate", options),
    ]);
    for account in &savings.accounts {
        accounts.add_row(vec![
            Cell::new(&account.name),
            ui::value_cell(format::currency(account.balance, currency)),
            ui::value_cell(format::percentage(account.interest_rate)),
        ]);
    }
    println!("{accounts}");

    println!("\n{}", ui::style_text("Goals", ui::StyleType::Title));
    let mut goals = ui::new_styled_table(options);
    goals.set_header(vec![
        ui::header_cell("Goal", options),
        ui::header_cell("Target", options),
        ui::header_cell("Current", options),
        ui::header_cell("Progress", options),
        ui::header_cell("", options),
    ]);
    for goal in &savings.goals {
        goals.add_row(vec![
            Cell::new(&goal.name),
            ui::value_cell(format::currency(goal.target, currency)),
            ui::value_cell(format::currency(goal.current, currency)),
            ui::value_cell(format::percentage(goal.percentage)),
            Cell::new(ui::percent_bar(goal.percentage, 20)),
        ]);
    }
    println!("{goals}");

    let history: Vec<f64> = savings.growth.iter().map(|g| g.amount).collect();
    println!(
        "\n{}  {}",
        ui::style_text("Growth", ui::StyleType::Title),
        ui::sparkline(&history)
    );
    let mut growth = ui::new_styled_table(options);
    growth.set_header(vec![
        ui::header_cell("Year", options),
        ui::header_cell("Amount", options),
    ]);
    for point in &savings.growth {
        growth.add_row(vec![
            Cell::new(point.year.to_string()),
            ui::value_cell(format::currency(point.amount, currency)),
        ]);
    }
    println!("{growth}");

    let projection = &config.projection;
    let months = projection.years * 12;
    let balances = transforms::project_balance(
        savings.total,
        projection.monthly_contribution,
        projection.interest_rate,
        months,
    );

    println!(
        "\n{} ({} contribution per month at {})",
        ui::style_text("Projection", ui::StyleType::Title),
        format::currency(projection.monthly_contribution, currency),
        format::percentage(projection.interest_rate),
    );
    let mut projected = ui::new_styled_table(options);
    projected.set_header(vec![
        ui::header_cell("Year", options),
        ui::header_cell("Projected Balance", options),
    ]);
    for year in 0..=projection.years {
        let balance = balances[(year * 12) as usize];
        let label = if year == 0 {
            "now".to_string()
        } else {
            format!("+{year}y")
        };
        projected.add_row(vec![
            Cell::new(label),
            ui::value_cell(format::currency(balance, currency)),
        ]);
    }
    println!("{projected}");

    Ok(())
}
