use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::risk::RiskError;

/// Debt categories a profile can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    StudentLoan,
    Mortgage,
    AutoLoan,
    PersonalLoan,
    MedicalDebt,
    Other,
}

impl DebtType {
    pub const ALL: [DebtType; 7] = [
        DebtType::CreditCard,
        DebtType::StudentLoan,
        DebtType::Mortgage,
        DebtType::AutoLoan,
        DebtType::PersonalLoan,
        DebtType::MedicalDebt,
        DebtType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "credit_card",
            DebtType::StudentLoan => "student_loan",
            DebtType::Mortgage => "mortgage",
            DebtType::AutoLoan => "auto_loan",
            DebtType::PersonalLoan => "personal_loan",
            DebtType::MedicalDebt => "medical_debt",
            DebtType::Other => "other",
        }
    }
}

impl Default for DebtType {
    fn default() -> Self {
        DebtType::Other
    }
}

impl fmt::Display for DebtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One debt as the engine sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub remaining_balance: Decimal,
    /// Annual rate in percent, 0..=100
    pub interest_rate: Decimal,
}

impl DebtSummary {
    pub fn new(debt_type: DebtType, remaining_balance: Decimal, interest_rate: Decimal) -> Self {
        Self {
            debt_type,
            remaining_balance,
            interest_rate,
        }
    }
}

/// Aggregated, monthly-normalised figures for a single profile.
///
/// The engine never reads raw records; callers build this from whatever
/// storage they use (see [`crate::models::FinancialProfile::to_snapshot`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub total_debt_balance: Decimal,
    pub total_debt_minimum_payments: Decimal,
    #[serde(default)]
    pub debts_by_type: Vec<DebtSummary>,
    pub liquid_assets_value: Decimal,
    pub income_source_count: u32,
}

impl FinancialSnapshot {
    /// Reject negative money and out-of-range interest rates.
    ///
    /// Nothing is clamped: the first offending field is reported.
    pub fn validate(&self) -> Result<(), RiskError> {
        non_negative("monthly_income", self.monthly_income)?;
        non_negative("monthly_expenses", self.monthly_expenses)?;
        non_negative("total_debt_balance", self.total_debt_balance)?;
        non_negative("total_debt_minimum_payments", self.total_debt_minimum_payments)?;
        non_negative("liquid_assets_value", self.liquid_assets_value)?;

        for (index, debt) in self.debts_by_type.iter().enumerate() {
            non_negative(
                &format!("debts_by_type[{}].remaining_balance", index),
                debt.remaining_balance,
            )?;
            if debt.interest_rate < Decimal::ZERO || debt.interest_rate > Decimal::ONE_HUNDRED {
                return Err(RiskError::validation(
                    format!("debts_by_type[{}].interest_rate", index),
                    format!("must be between 0 and 100, got {}", debt.interest_rate),
                ));
            }
        }

        Ok(())
    }

    /// Number of different debt types present in the snapshot
    pub fn distinct_debt_types(&self) -> usize {
        let mut seen: Vec<DebtType> = self.debts_by_type.iter().map(|d| d.debt_type).collect();
        seen.sort();
        seen.dedup();
        seen.len()
    }
}

fn non_negative(field: &str, value: Decimal) -> Result<(), RiskError> {
    if value < Decimal::ZERO {
        return Err(RiskError::validation(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}
