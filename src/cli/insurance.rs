use super::{format, ui};
use crate::core::config::AppConfig;
use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use comfy_table::Cell;
use console::style;

/// Renders the insurance view: life and medical policies plus the claims
/// history with totals.
pub fn run(snapshot: &FinancialSnapshot, config: &AppConfig, options: &ui::ViewOptions) -> Result<()> {
    let currency = &config.currency;
    let insurance = &snapshot.insurance;

    println!("{}\n", ui::style_text("Insurance", ui::StyleType::Title));

    let claims_total: f64 = insurance.claims.iter().map(|c| c.amount).sum();

    let mut cards = ui::new_styled_table(options);
    cards.set_header(vec![
        ui::header_cell("Life Coverage", options),
        ui::header_cell("Life Premium", options),
        ui::header_cell("Medical Premium", options),
        ui::header_cell("Claims Total", options),
    ]);
    cards.add_row(vec![
        ui::value_cell(format::currency(insurance.life.total_coverage, currency)),
        ui::value_cell(format::currency(insurance.life.annual_premium, currency)),
        ui::value_cell(format::currency(
            insurance.medical.total_annual_premium,
            currency,
        )),
        ui::value_cell(format::currency(claims_total, currency)),
    ]);
    println!("{cards}");

    println!(
        "\n{}",
        ui::style_text("Life Policies", ui::StyleType::Title)
    );
    let mut life = ui::new_styled_table(options);
    life.set_header(vec![
        ui::header_cell("Provider", options),
        ui::header_cell("Policy #", options),
        ui::header_cell("Coverage", options),
        ui::header_cell("Premium", options),
        ui::header_cell("Beneficiaries", options),
        ui::header_cell("Expires", options),
    ]);
    for policy in &insurance.life.policies {
        life.add_row(vec![
            Cell::new(&policy.provider),
            Cell::new(&policy.policy_number),
            ui::value_cell(format::currency(policy.coverage_amount, currency)),
            ui::value_cell(format::currency(policy.premium, currency)),
            Cell::new(policy.beneficiaries.join(", ")),
            Cell::new(format::date(&policy.expiry_date)),
        ]);
    }
    println!("{life}");

    println!(
        "\n{}",
        ui::style_text("Medical Policies", ui::StyleType::Title)
    );
    let mut medical = ui::new_styled_table(options);
    medical.set_header(vec![
        ui::header_cell("Provider", options),
        ui::header_cell("Policy #", options),
        ui::header_cell("Plan", options),
        ui::header_cell("Premium", options),
        ui::header_cell("Deductible", options),
        ui::header_cell("Expires", options),
    ]);
    for policy in &insurance.medical.policies {
        medical.add_row(vec![
            Cell::new(&policy.provider),
            Cell::new(&policy.policy_number),
            Cell::new(&policy.kind),
            ui::value_cell(format::currency(policy.premium, currency)),
            ui::value_cell(format::currency(policy.deductible, currency)),
            Cell::new(format::date(&policy.expiry_date)),
        ]);
    }
    println!("{medical}");

    println!("\n{}", ui::style_text("Claims", ui::StyleType::Title));
    let mut claims = ui::new_styled_table(options);
    claims.set_header(vec![
        ui::header_cell("Date", options),
        ui::header_cell("Type", options),
        ui::header_cell("Description", options),
        ui::header_cell("Amount", options),
        ui::header_cell("Status", options),
    ]);
    for claim in &insurance.claims {
        let status = if claim.status == "Approved" {
            style(claim.status.as_str()).green().to_string()
        } else {
            style(claim.status.as_str()).yellow().to_string()
        };
        claims.add_row(vec![
            Cell::new(format::date(&claim.date)),
            Cell::new(&claim.kind),
            Cell::new(&claim.description),
            ui::value_cell(format::currency(claim.amount, currency)),
            Cell::new(status),
        ]);
    }
    println!("{claims}");

    Ok(())
}
