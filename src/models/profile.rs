use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DebtSummary, DebtType, FinancialSnapshot};
use crate::risk::RiskError;
use crate::utils::math::{percentage_of, saturating_mul, saturating_sub, saturating_sum};

/// How often an income or expense recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Convert an amount at this cadence into a monthly amount, saturating
    /// at the decimal range
    pub fn to_monthly(&self, amount: Decimal) -> Decimal {
        match self {
            Frequency::Weekly => saturating_mul(amount, Decimal::from(4)),
            Frequency::BiWeekly => saturating_mul(amount, Decimal::from(2)),
            Frequency::Monthly => amount,
            Frequency::Quarterly => amount / Decimal::from(3),
            Frequency::Yearly => amount / Decimal::from(12),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub source_name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
}

impl Income {
    pub fn monthly_amount(&self) -> Decimal {
        self.frequency.to_monthly(self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Healthcare,
    Entertainment,
    Education,
    Insurance,
    DebtPayments,
    Savings,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub frequency: Frequency,
}

impl Expense {
    pub fn monthly_amount(&self) -> Decimal {
        self.frequency.to_monthly(self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub debt_name: String,
    #[serde(default)]
    pub debt_type: DebtType,
    pub total_amount: Decimal,
    pub remaining_balance: Decimal,
    pub minimum_amount: Decimal,
    /// Annual rate in percent
    pub interest_rate: Decimal,
}

impl Debt {
    /// Rates strictly above 15% count as high-interest
    pub fn is_high_interest(&self) -> bool {
        self.interest_rate > Decimal::from(15)
    }

    /// Percentage of the original amount still outstanding
    pub fn paid_down_ratio(&self) -> Decimal {
        percentage_of(self.remaining_balance, self.total_amount).unwrap_or(Decimal::ZERO)
    }

    pub fn summary(&self) -> DebtSummary {
        DebtSummary::new(self.debt_type, self.remaining_balance, self.interest_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Checking,
    Savings,
    Investment,
    Retirement,
    RealEstate,
    Vehicle,
    Cryptocurrency,
    PreciousMetals,
    Business,
    Other,
}

impl AssetType {
    /// Readily convertible to cash
    pub fn is_liquid(&self) -> bool {
        matches!(self, AssetType::Checking | AssetType::Savings | AssetType::Investment)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub value: Decimal,
}

/// Raw financial records for one person, as loaded by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialProfile {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub debts: Vec<Debt>,
    pub assets: Vec<Asset>,
}

impl FinancialProfile {
    /// Reject negative amounts and out-of-range interest rates on the raw
    /// records, naming the offending record field.
    pub fn validate(&self) -> Result<(), RiskError> {
        for (index, income) in self.incomes.iter().enumerate() {
            non_negative(|| format!("incomes[{}].amount", index), income.amount)?;
        }
        for (index, expense) in self.expenses.iter().enumerate() {
            non_negative(|| format!("expenses[{}].amount", index), expense.amount)?;
        }
        for (index, debt) in self.debts.iter().enumerate() {
            non_negative(|| format!("debts[{}].total_amount", index), debt.total_amount)?;
            non_negative(|| format!("debts[{}].remaining_balance", index), debt.remaining_balance)?;
            non_negative(|| format!("debts[{}].minimum_amount", index), debt.minimum_amount)?;
            if debt.interest_rate < Decimal::ZERO || debt.interest_rate > Decimal::ONE_HUNDRED {
                return Err(RiskError::validation(
                    format!("debts[{}].interest_rate", index),
                    format!("must be between 0 and 100, got {}", debt.interest_rate),
                ));
            }
        }
        for (index, asset) in self.assets.iter().enumerate() {
            non_negative(|| format!("assets[{}].value", index), asset.value)?;
        }
        Ok(())
    }

    pub fn total_monthly_income(&self) -> Decimal {
        saturating_sum(self.incomes.iter().map(Income::monthly_amount))
    }

    pub fn total_monthly_expenses(&self) -> Decimal {
        saturating_sum(self.expenses.iter().map(Expense::monthly_amount))
    }

    pub fn total_debt_balance(&self) -> Decimal {
        saturating_sum(self.debts.iter().map(|d| d.remaining_balance))
    }

    pub fn total_minimum_payments(&self) -> Decimal {
        saturating_sum(self.debts.iter().map(|d| d.minimum_amount))
    }

    pub fn total_assets_value(&self) -> Decimal {
        saturating_sum(self.assets.iter().map(|a| a.value))
    }

    pub fn liquid_assets_value(&self) -> Decimal {
        saturating_sum(
            self.assets
                .iter()
                .filter(|a| a.asset_type.is_liquid())
                .map(|a| a.value),
        )
    }

    /// Assets minus outstanding debt; may be negative
    pub fn net_worth(&self) -> Decimal {
        saturating_sub(self.total_assets_value(), self.total_debt_balance())
    }

    /// Minimum payments as a percentage of monthly income, 0 without income
    pub fn debt_to_income_ratio(&self) -> Decimal {
        percentage_of(self.total_minimum_payments(), self.total_monthly_income())
            .unwrap_or(Decimal::ZERO)
    }

    /// At least one income, one expense, and either a debt or an asset
    pub fn has_complete_profile(&self) -> bool {
        !self.incomes.is_empty()
            && !self.expenses.is_empty()
            && (!self.debts.is_empty() || !self.assets.is_empty())
    }

    /// Aggregate the records into the figures the engine scores
    pub fn to_snapshot(&self) -> FinancialSnapshot {
        FinancialSnapshot {
            monthly_income: self.total_monthly_income(),
            monthly_expenses: self.total_monthly_expenses(),
            total_debt_balance: self.total_debt_balance(),
            total_debt_minimum_payments: self.total_minimum_payments(),
            debts_by_type: self.debts.iter().map(Debt::summary).collect(),
            liquid_assets_value: self.liquid_assets_value(),
            income_source_count: self.incomes.len() as u32,
        }
    }
}

fn non_negative(field: impl FnOnce() -> String, value: Decimal) -> Result<(), RiskError> {
    if value < Decimal::ZERO {
        return Err(RiskError::validation(
            field(),
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_normalisation() {
        let amount = Decimal::from(1200);
        assert_eq!(Frequency::Weekly.to_monthly(amount), Decimal::from(4800));
        assert_eq!(Frequency::BiWeekly.to_monthly(amount), Decimal::from(2400));
        assert_eq!(Frequency::Monthly.to_monthly(amount), Decimal::from(1200));
        assert_eq!(Frequency::Quarterly.to_monthly(amount), Decimal::from(400));
        assert_eq!(Frequency::Yearly.to_monthly(amount), Decimal::from(100));
    }

    #[test]
    fn test_weekly_amount_beyond_decimal_range_saturates() {
        let huge = Decimal::from_i128_with_scale(30_000_000_000_000_000_000_000_000_000, 0);
        assert_eq!(Frequency::Weekly.to_monthly(huge), Decimal::MAX);

        let profile = FinancialProfile {
            incomes: vec![
                Income {
                    source_name: "Fund".to_string(),
                    amount: huge,
                    frequency: Frequency::Weekly,
                },
                Income {
                    source_name: "Salary".to_string(),
                    amount: Decimal::from(5000),
                    frequency: Frequency::Monthly,
                },
            ],
            ..Default::default()
        };
        assert_eq!(profile.total_monthly_income(), Decimal::MAX);
    }

    #[test]
    fn test_validate_names_the_negative_record() {
        let salary = Income {
            source_name: "Salary".to_string(),
            amount: Decimal::from(5000),
            frequency: Frequency::Monthly,
        };
        let mut profile = FinancialProfile {
            incomes: vec![
                salary.clone(),
                Income {
                    amount: Decimal::from(-4000),
                    ..salary
                },
            ],
            ..Default::default()
        };
        let err = profile.validate().unwrap_err();
        assert_eq!(err.field(), Some("incomes[1].amount"));

        profile.incomes.truncate(1);
        profile.assets = vec![Asset {
            asset_name: "Savings".to_string(),
            asset_type: AssetType::Savings,
            value: Decimal::from(-100),
        }];
        let err = profile.validate().unwrap_err();
        assert_eq!(err.field(), Some("assets[0].value"));

        profile.assets[0].value = Decimal::from(100);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_checks_debt_fields() {
        let mut profile = FinancialProfile {
            debts: vec![Debt {
                debt_name: "Card".to_string(),
                debt_type: DebtType::CreditCard,
                total_amount: Decimal::from(1000),
                remaining_balance: Decimal::from(800),
                minimum_amount: Decimal::from(-25),
                interest_rate: Decimal::from(22),
            }],
            ..Default::default()
        };
        assert_eq!(profile.validate().unwrap_err().field(), Some("debts[0].minimum_amount"));

        profile.debts[0].minimum_amount = Decimal::from(25);
        profile.debts[0].interest_rate = Decimal::new(1005, 1);
        assert_eq!(profile.validate().unwrap_err().field(), Some("debts[0].interest_rate"));
    }

    #[test]
    fn test_liquid_asset_types() {
        assert!(AssetType::Checking.is_liquid());
        assert!(AssetType::Investment.is_liquid());
        assert!(!AssetType::Retirement.is_liquid());
        assert!(!AssetType::RealEstate.is_liquid());
    }

    #[test]
    fn test_paid_down_ratio_without_total() {
        let debt = Debt {
            debt_name: "Card".to_string(),
            debt_type: DebtType::CreditCard,
            total_amount: Decimal::ZERO,
            remaining_balance: Decimal::from(10),
            minimum_amount: Decimal::ONE,
            interest_rate: Decimal::from(22),
        };
        assert_eq!(debt.paid_down_ratio(), Decimal::ZERO);
        assert!(debt.is_high_interest());
    }
}
