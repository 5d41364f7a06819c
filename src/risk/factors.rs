// Individual factor risk computations
//
// Each function is pure and takes only the figures its factor needs.
use rust_decimal::Decimal;

use crate::models::DebtSummary;
use crate::risk::rules::ThresholdTable;
use crate::utils::math::{percentage_of, ratio, saturating_sum};

/// Risk when there is no income to cover expenses
pub const NO_INCOME_COVERAGE_RISK: u8 = 100;
/// Risk when there is no spending to protect against
pub const NO_EXPENSES_FUND_RISK: u8 = 0;
/// Risk when there is no outstanding debt at all
pub const NO_DEBT_INTEREST_RISK: u8 = 0;

/// Minimum debt payments as a percentage of monthly income.
///
/// Zero income yields a ratio of 0 and therefore the lowest band.
pub fn debt_to_income_risk(
    minimum_payments: Decimal,
    monthly_income: Decimal,
    table: &ThresholdTable<u8>,
) -> u8 {
    let ratio = percentage_of(minimum_payments, monthly_income).unwrap_or(Decimal::ZERO);
    table.evaluate(ratio)
}

/// Months of expenses the liquid assets would cover.
pub fn emergency_fund_risk(
    liquid_assets: Decimal,
    monthly_expenses: Decimal,
    table: &ThresholdTable<u8>,
) -> u8 {
    match ratio(liquid_assets, monthly_expenses) {
        Some(months_covered) => table.evaluate(months_covered),
        None => NO_EXPENSES_FUND_RISK,
    }
}

/// Share of the total debt balance carried at a rate above `high_interest_rate`.
pub fn high_interest_debt_risk(
    debts: &[DebtSummary],
    total_debt_balance: Decimal,
    high_interest_rate: Decimal,
    table: &ThresholdTable<u8>,
) -> u8 {
    let high_interest_balance = saturating_sum(
        debts
            .iter()
            .filter(|debt| debt.interest_rate > high_interest_rate)
            .map(|debt| debt.remaining_balance),
    );

    match percentage_of(high_interest_balance, total_debt_balance) {
        Some(high_interest_ratio) => table.evaluate(high_interest_ratio),
        None => NO_DEBT_INTEREST_RISK,
    }
}

pub fn income_stability_risk(income_source_count: u32, table: &ThresholdTable<u8>) -> u8 {
    table.evaluate(Decimal::from(income_source_count))
}

/// Monthly expenses as a percentage of monthly income.
///
/// Zero income is maximal risk here even though the debt-to-income factor
/// reads the same situation as zero risk.
pub fn expense_coverage_risk(
    monthly_expenses: Decimal,
    monthly_income: Decimal,
    table: &ThresholdTable<u8>,
) -> u8 {
    match percentage_of(monthly_expenses, monthly_income) {
        Some(coverage) => table.evaluate(coverage),
        None => NO_INCOME_COVERAGE_RISK,
    }
}

/// More distinct debt types reads as more risk. This is a heuristic, not an
/// empirically derived rule.
pub fn debt_diversity_risk(distinct_debt_types: usize, table: &ThresholdTable<u8>) -> u8 {
    table.evaluate(Decimal::from(distinct_debt_types))
}
