//! Synthesizes a financial snapshot from extracted statement text.
//!
//! Real statement parsing is out of scope: the extracted text only feeds a
//! cosmetic keyword check, and every numeric field is drawn at random within
//! a fixed band. Two imports of the same file therefore produce different
//! snapshots.

use crate::core::snapshot::{
    AllocationSlice, ExpenseCategory, ExpenseDetail, Expenses, FinancialSnapshot, Holding,
    Insurance, InsuranceClaim, Investments, LifeInsurance, LifePolicy, MedicalInsurance,
    MedicalPolicy, MonthlyExpense, MonthlyPoint, Savings, SavingsAccount, SavingsGoal, Summary,
    Transaction, UserProfile, YearlyAmount, YearlyReturn,
};
use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

/// Number of times the `progress` callback fires during generation.
pub const SECTION_COUNT: u64 = 7;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EXPENSE_CATEGORIES: [&str; 8] = [
    "Housing",
    "Food",
    "Transportation",
    "Entertainment",
    "Healthcare",
    "Utilities",
    "Shopping",
    "Others",
];

/// Builds a fully-populated snapshot from statement text. The `progress`
/// callback fires once per generated section, so callers can drive a
/// progress bar.
pub fn parse_statement(text: &str, progress: &dyn Fn()) -> FinancialSnapshot {
    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();

    // The only influence the statement text has on the output.
    let name = if text.to_lowercase().contains("statement") {
        "Alex Johnson"
    } else {
        "Jane Smith"
    };
    debug!(%name, "Synthesizing snapshot from statement text");

    let summary = Summary {
        net_worth: perturb(&mut rng, 285_750.0, 10_000),
        total_expenses: perturb(&mut rng, 48_500.0, 5_000),
        total_investments: perturb(&mut rng, 175_000.0, 8_000),
        total_savings: perturb(&mut rng, 110_750.0, 6_000),
        liquid_assets: perturb(&mut rng, 65_750.0, 4_000),
    };
    progress();

    let monthly = monthly_series(&mut rng);
    progress();

    let expenses = Expenses {
        categories: expense_categories(&mut rng),
        monthly: monthly_expenses(&mut rng),
        details: expense_details(&mut rng, today),
    };
    progress();

    let investments = investment_data(&mut rng);
    progress();

    let savings = savings_data(&mut rng);
    progress();

    let insurance = insurance_data();
    progress();

    let transactions = transaction_data(&mut rng, today);
    progress();

    FinancialSnapshot {
        profile: UserProfile {
            name: name.to_string(),
            email: "user@example.com".to_string(),
            joined: today.format("%Y-%m-%d").to_string(),
        },
        summary,
        monthly,
        expenses,
        investments,
        savings,
        insurance,
        transactions,
    }
}

/// `base` plus a whole-number perturbation in `[0, band)`.
fn perturb(rng: &mut ThreadRng, base: f64, band: u32) -> f64 {
    base + rng.gen_range(0..band) as f64
}

fn monthly_series(rng: &mut ThreadRng) -> Vec<MonthlyPoint> {
    let mut net_worth = 260_000.0;
    MONTHS
        .iter()
        .map(|month| {
            let expenses = perturb(rng, 3_000.0, 2_500);
            let investments = perturb(rng, 2_000.0, 1_500);
            let savings = perturb(rng, 1_000.0, 1_500);
            net_worth += savings + investments - 500.0;

            MonthlyPoint {
                month: month.to_string(),
                expenses,
                investments,
                savings,
                net_worth,
            }
        })
        .collect()
}

fn expense_categories(rng: &mut ThreadRng) -> Vec<ExpenseCategory> {
    let bands: [(&str, f64, u32, f64); 8] = [
        ("Housing", 18_000.0, 1_000, 37.11),
        ("Food", 7_200.0, 500, 14.85),
        ("Transportation", 4_800.0, 300, 9.9),
        ("Entertainment", 3_600.0, 400, 7.42),
        ("Healthcare", 4_500.0, 500, 9.28),
        ("Utilities", 3_000.0, 200, 6.19),
        ("Shopping", 5_500.0, 600, 11.34),
        ("Others", 1_900.0, 200, 3.91),
    ];

    bands
        .iter()
        .map(|&(category, base, band, percentage)| ExpenseCategory {
            category: category.to_string(),
            amount: perturb(rng, base, band),
            percentage,
        })
        .collect()
}

fn monthly_expenses(rng: &mut ThreadRng) -> Vec<MonthlyExpense> {
    MONTHS
        .iter()
        .map(|month| MonthlyExpense {
            month: month.to_string(),
            amount: perturb(rng, 3_000.0, 2_500),
        })
        .collect()
}

fn expense_details(rng: &mut ThreadRng, today: NaiveDate) -> Vec<ExpenseDetail> {
    (1..=15)
        .map(|i| {
            let date = date_in_month(today, i * 2);
            let category = EXPENSE_CATEGORIES[rng.gen_range(0..EXPENSE_CATEGORIES.len())];

            let (description, amount) = match category {
                "Housing" => (
                    pick(rng, &["Rent", "Mortgage Payment", "Property Tax"]),
                    perturb(rng, 800.0, 1_200),
                ),
                "Food" => (
                    pick(rng, &["Grocery Shopping", "Restaurant", "Coffee Shop"]),
                    perturb(rng, 20.0, 200),
                ),
                "Transportation" => (
                    pick(rng, &["Gas", "Uber Rides", "Public Transit"]),
                    perturb(rng, 15.0, 100),
                ),
                _ => (format!("{category} Expense"), perturb(rng, 25.0, 200)),
            };

            ExpenseDetail {
                date,
                description,
                amount,
                category: category.to_string(),
            }
        })
        .collect()
}

fn investment_data(rng: &mut ThreadRng) -> Investments {
    let allocation_bands: [(&str, f64, u32, f64); 5] = [
        ("Stocks", 75_000.0, 5_000, 42.86),
        ("Bonds", 35_000.0, 2_000, 20.0),
        ("Real Estate", 45_000.0, 3_000, 25.71),
        ("Mutual Funds", 15_000.0, 1_000, 8.57),
        ("Crypto", 5_000.0, 500, 2.86),
    ];

    let holding_bands: [(&str, f64, u32, f64); 10] = [
        ("AAPL", 15_000.0, 1_000, 18.5),
        ("MSFT", 18_000.0, 1_000, 22.3),
        ("AMZN", 12_000.0, 1_000, 10.2),
        ("GOOG", 14_000.0, 1_000, 15.7),
        ("TSLA", 8_000.0, 1_000, -8.3),
        ("US Treasury Bond", 35_000.0, 2_000, 3.2),
        ("REIT Fund", 45_000.0, 2_000, 7.5),
        ("S&P 500 Index", 15_000.0, 1_000, 11.2),
        ("Bitcoin", 3_000.0, 500, 42.5),
        ("Ethereum", 2_000.0, 300, 28.7),
    ];

    Investments {
        total: perturb(rng, 175_000.0, 10_000),
        allocation: allocation_bands
            .iter()
            .map(|&(kind, base, band, percentage)| AllocationSlice {
                kind: kind.to_string(),
                amount: perturb(rng, base, band),
                percentage,
            })
            .collect(),
        performance: [
            (2019, 7.2),
            (2020, -2.1),
            (2021, 12.5),
            (2022, -5.3),
            (2023, 9.8),
        ]
        .iter()
        .map(|&(year, returns)| YearlyReturn { year, returns })
        .collect(),
        holdings: holding_bands
            .iter()
            .map(|&(name, base, band, growth)| Holding {
                name: name.to_string(),
                value: perturb(rng, base, band),
                growth,
            })
            .collect(),
    }
}

fn savings_data(rng: &mut ThreadRng) -> Savings {
    Savings {
        total: perturb(rng, 110_750.0, 5_000),
        accounts: vec![
            SavingsAccount {
                name: "Primary Savings".to_string(),
                balance: perturb(rng, 45_000.0, 2_000),
                interest_rate: 0.5,
            },
            SavingsAccount {
                name: "Emergency Fund".to_string(),
                balance: perturb(rng, 25_000.0, 1_000),
                interest_rate: 0.75,
            },
            SavingsAccount {
                name: "Vacation Fund".to_string(),
                balance: perturb(rng, 7_500.0, 500),
                interest_rate: 0.5,
            },
            SavingsAccount {
                name: "Home Down Payment".to_string(),
                balance: perturb(rng, 33_250.0, 1_500),
                interest_rate: 1.2,
            },
        ],
        goals: vec![
            SavingsGoal {
                name: "Emergency Fund".to_string(),
                target: 30_000.0,
                current: perturb(rng, 25_000.0, 1_000),
                percentage: 83.33,
            },
            SavingsGoal {
                name: "Vacation".to_string(),
                target: 10_000.0,
                current: perturb(rng, 7_500.0, 500),
                percentage: 75.0,
            },
            SavingsGoal {
                name: "Home Down Payment".to_string(),
                target: 50_000.0,
                current: perturb(rng, 33_250.0, 1_500),
                percentage: 66.5,
            },
        ],
        growth: [
            (2019, 78_000.0),
            (2020, 86_500.0),
            (2021, 92_000.0),
            (2022, 101_200.0),
        ]
        .iter()
        .map(|&(year, amount)| YearlyAmount { year, amount })
        .chain(std::iter::once(YearlyAmount {
            year: 2023,
            amount: perturb(rng, 110_750.0, 5_000),
        }))
        .collect(),
    }
}

fn insurance_data() -> Insurance {
    Insurance {
        life: LifeInsurance {
            policies: vec![LifePolicy {
                provider: "MetLife".to_string(),
                policy_number: "ML-123456".to_string(),
                coverage_amount: 500_000.0,
                premium: 1_200.0,
                beneficiaries: vec!["Jane Johnson".to_string(), "Emma Johnson".to_string()],
                expiry_date: "2045-06-15".to_string(),
            }],
            total_coverage: 500_000.0,
            annual_premium: 1_200.0,
        },
        medical: MedicalInsurance {
            policies: vec![MedicalPolicy {
                provider: "Blue Cross".to_string(),
                policy_number: "BC-789012".to_string(),
                kind: "Family Health Plan".to_string(),
                coverage_details: "Comprehensive health coverage including dental and vision"
                    .to_string(),
                premium: 4_800.0,
                deductible: 1_500.0,
                expiry_date: "2023-12-31".to_string(),
            }],
            total_annual_premium: 4_800.0,
            total_deductible: 1_500.0,
        },
        claims: vec![
            InsuranceClaim {
                date: "2023-03-12".to_string(),
                kind: "Medical".to_string(),
                description: "Hospital visit".to_string(),
                amount: 1_200.0,
                status: "Approved".to_string(),
            },
            InsuranceClaim {
                date: "2022-11-05".to_string(),
                kind: "Medical".to_string(),
                description: "Prescription medication".to_string(),
                amount: 350.0,
                status: "Approved".to_string(),
            },
            InsuranceClaim {
                date: "2022-08-21".to_string(),
                kind: "Medical".to_string(),
                description: "Specialist consultation".to_string(),
                amount: 500.0,
                status: "Processing".to_string(),
            },
        ],
    }
}

fn transaction_data(rng: &mut ThreadRng, today: NaiveDate) -> Vec<Transaction> {
    let spend_categories = [
        "Housing",
        "Food",
        "Transportation",
        "Entertainment",
        "Healthcare",
        "Utilities",
        "Shopping",
        "Investment",
        "Savings",
    ];

    let mut transactions: Vec<Transaction> = (1..=15)
        .map(|i| {
            let date = date_in_month(today, i * 2);
            let is_income = rng.gen_bool(0.25);

            let (category, description, amount) = if is_income {
                let description = pick(rng, &["Salary Deposit", "Client Payment"]);
                ("Income".to_string(), description, perturb(rng, 1_000.0, 5_000))
            } else {
                let category = spend_categories[rng.gen_range(0..spend_categories.len())];
                let (description, amount) = match category {
                    "Housing" => ("Rent Payment".to_string(), perturb(rng, 1_200.0, 800)),
                    "Food" => (
                        pick(rng, &["Grocery Shopping", "Restaurant"]),
                        perturb(rng, 50.0, 200),
                    ),
                    "Utilities" => (
                        pick(rng, &["Electric Bill", "Water Bill", "Internet Bill"]),
                        perturb(rng, 40.0, 120),
                    ),
                    "Investment" => ("Investment Transfer".to_string(), perturb(rng, 500.0, 2_000)),
                    "Savings" => ("Savings Transfer".to_string(), perturb(rng, 100.0, 500)),
                    _ => (format!("{category} Expense"), perturb(rng, 20.0, 150)),
                };
                (category.to_string(), description, -amount)
            };

            Transaction {
                date,
                description,
                amount,
                category,
            }
        })
        .collect();

    // Newest first.
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

fn pick(rng: &mut ThreadRng, options: &[&str]) -> String {
    options[rng.gen_range(0..options.len())].to_string()
}

/// ISO date for `day` of the current month, clamped to the month's last day.
fn date_in_month(today: NaiveDate, day: u32) -> String {
    let mut day = day;
    let date = loop {
        match NaiveDate::from_ymd_opt(today.year(), today.month(), day) {
            Some(date) => break date,
            None => day -= 1,
        }
    };
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_check_selects_profile_name() {
        let with_keyword = parse_statement("Monthly Bank Statement for March", &|| ());
        assert_eq!(with_keyword.profile.name, "Alex Johnson");

        let without_keyword = parse_statement("unrelated text", &|| ());
        assert_eq!(without_keyword.profile.name, "Jane Smith");
    }

    #[test]
    fn test_monthly_series_is_chronological_and_complete() {
        let snapshot = parse_statement("", &|| ());

        assert_eq!(snapshot.monthly.len(), 12);
        let months: Vec<&str> = snapshot.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, MONTHS.to_vec());
    }

    #[test]
    fn test_monthly_net_worth_follows_running_total() {
        let snapshot = parse_statement("", &|| ());

        let mut expected = 260_000.0;
        for point in &snapshot.monthly {
            expected += point.savings + point.investments - 500.0;
            assert_eq!(point.net_worth, expected);
        }
    }

    #[test]
    fn test_summary_fields_are_range_bounded() {
        let snapshot = parse_statement("", &|| ());
        let summary = &snapshot.summary;

        assert!(summary.net_worth >= 285_750.0 && summary.net_worth < 295_750.0);
        assert!(summary.total_expenses >= 48_500.0 && summary.total_expenses < 53_500.0);
        assert!(summary.total_investments >= 175_000.0 && summary.total_investments < 183_000.0);
        assert!(summary.total_savings >= 110_750.0 && summary.total_savings < 116_750.0);
        assert!(summary.liquid_assets >= 65_750.0 && summary.liquid_assets < 69_750.0);
    }

    #[test]
    fn test_expense_category_percentages_sum_to_hundred() {
        let snapshot = parse_statement("", &|| ());

        let total_pct: f64 = snapshot
            .expenses
            .categories
            .iter()
            .map(|c| c.percentage)
            .sum();
        assert!((total_pct - 100.0).abs() < 0.1);
        assert!(snapshot.expenses.categories.iter().all(|c| c.amount > 0.0));
    }

    #[test]
    fn test_transactions_are_newest_first_with_signed_amounts() {
        let snapshot = parse_statement("", &|| ());

        assert_eq!(snapshot.transactions.len(), 15);
        assert!(
            snapshot
                .transactions
                .windows(2)
                .all(|w| w[0].date >= w[1].date)
        );
        for tx in &snapshot.transactions {
            if tx.category == "Income" {
                assert!(tx.amount > 0.0);
            } else {
                assert!(tx.amount < 0.0);
            }
        }
    }

    #[test]
    fn test_progress_callback_fires_per_section() {
        use std::cell::Cell;

        let count = Cell::new(0u64);
        parse_statement("", &|| count.set(count.get() + 1));
        assert_eq!(count.get(), SECTION_COUNT);
    }

    #[test]
    fn test_expense_details_stay_in_current_month() {
        let snapshot = parse_statement("", &|| ());
        let prefix = Local::now().date_naive().format("%Y-%m-").to_string();

        assert_eq!(snapshot.expenses.details.len(), 15);
        for detail in &snapshot.expenses.details {
            assert!(detail.date.starts_with(&prefix));
            assert!(detail.amount > 0.0);
        }
    }
}
