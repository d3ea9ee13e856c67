//! The financial snapshot aggregate.
//!
//! One `FinancialSnapshot` describes everything the app knows about the
//! user's finances: headline totals, a year of monthly series data, and the
//! per-view breakdowns. It is produced by the statement import (or the demo
//! generator), lives in memory for the duration of a command, and is
//! mirrored to the local store between runs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// ISO date (YYYY-MM-DD) of the first import.
    pub joined: String,
}

/// Headline totals shown as cards on the dashboard.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Summary {
    pub net_worth: f64,
    pub total_expenses: f64,
    pub total_investments: f64,
    pub total_savings: f64,
    pub liquid_assets: f64,
}

/// One month of the combined series, chronological Jan..Dec.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonthlyPoint {
    pub month: String,
    pub expenses: f64,
    pub investments: f64,
    pub savings: f64,
    pub net_worth: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseCategory {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonthlyExpense {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseDetail {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Expenses {
    pub categories: Vec<ExpenseCategory>,
    pub monthly: Vec<MonthlyExpense>,
    pub details: Vec<ExpenseDetail>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AllocationSlice {
    pub kind: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Yearly return in percent; negative values are losses.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YearlyReturn {
    pub year: i32,
    pub returns: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    pub growth: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Investments {
    pub total: f64,
    pub allocation: Vec<AllocationSlice>,
    pub performance: Vec<YearlyReturn>,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavingsAccount {
    pub name: String,
    pub balance: f64,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavingsGoal {
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YearlyAmount {
    pub year: i32,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Savings {
    pub total: f64,
    pub accounts: Vec<SavingsAccount>,
    pub goals: Vec<SavingsGoal>,
    pub growth: Vec<YearlyAmount>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LifePolicy {
    pub provider: String,
    pub policy_number: String,
    pub coverage_amount: f64,
    pub premium: f64,
    pub beneficiaries: Vec<String>,
    pub expiry_date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LifeInsurance {
    pub policies: Vec<LifePolicy>,
    pub total_coverage: f64,
    pub annual_premium: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MedicalPolicy {
    pub provider: String,
    pub policy_number: String,
    pub kind: String,
    pub coverage_details: String,
    pub premium: f64,
    pub deductible: f64,
    pub expiry_date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MedicalInsurance {
    pub policies: Vec<MedicalPolicy>,
    pub total_annual_premium: f64,
    pub total_deductible: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InsuranceClaim {
    pub date: String,
    pub kind: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Insurance {
    pub life: LifeInsurance,
    pub medical: MedicalInsurance,
    pub claims: Vec<InsuranceClaim>,
}

/// A single ledger entry. `amount` is signed: income is positive, spending
/// negative.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FinancialSnapshot {
    pub profile: UserProfile,
    pub summary: Summary,
    /// 12 entries, chronological.
    pub monthly: Vec<MonthlyPoint>,
    pub expenses: Expenses,
    pub investments: Investments,
    pub savings: Savings,
    pub insurance: Insurance,
    /// Newest first.
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = generate::parse_statement("Bank Statement", &|| ());

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let restored: FinancialSnapshot = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored.profile.name, snapshot.profile.name);
        assert_eq!(restored.summary.net_worth, snapshot.summary.net_worth);
        assert_eq!(restored.monthly.len(), snapshot.monthly.len());
        assert_eq!(
            restored.expenses.categories.len(),
            snapshot.expenses.categories.len()
        );
        assert_eq!(
            restored.investments.holdings.len(),
            snapshot.investments.holdings.len()
        );
        assert_eq!(restored.transactions.len(), snapshot.transactions.len());
    }
}
