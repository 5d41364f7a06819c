use serde::{Deserialize, Serialize};
use std::fmt;

/// The six independent factors feeding the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    DebtToIncomeRatio,
    EmergencyFundRatio,
    HighInterestDebt,
    IncomeStability,
    ExpenseCoverage,
    DebtDiversity,
}

impl RiskFactor {
    /// Canonical evaluation order
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::DebtToIncomeRatio,
        RiskFactor::EmergencyFundRatio,
        RiskFactor::HighInterestDebt,
        RiskFactor::IncomeStability,
        RiskFactor::ExpenseCoverage,
        RiskFactor::DebtDiversity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::DebtToIncomeRatio => "debt_to_income_ratio",
            RiskFactor::EmergencyFundRatio => "emergency_fund_ratio",
            RiskFactor::HighInterestDebt => "high_interest_debt",
            RiskFactor::IncomeStability => "income_stability",
            RiskFactor::ExpenseCoverage => "expense_coverage",
            RiskFactor::DebtDiversity => "debt_diversity",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw (unweighted) risk per factor, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RiskFactorScores {
    pub debt_to_income_ratio: u8,
    pub emergency_fund_ratio: u8,
    pub high_interest_debt: u8,
    pub income_stability: u8,
    pub expense_coverage: u8,
    pub debt_diversity: u8,
}

impl RiskFactorScores {
    pub fn get(&self, factor: RiskFactor) -> u8 {
        match factor {
            RiskFactor::DebtToIncomeRatio => self.debt_to_income_ratio,
            RiskFactor::EmergencyFundRatio => self.emergency_fund_ratio,
            RiskFactor::HighInterestDebt => self.high_interest_debt,
            RiskFactor::IncomeStability => self.income_stability,
            RiskFactor::ExpenseCoverage => self.expense_coverage,
            RiskFactor::DebtDiversity => self.debt_diversity,
        }
    }

    /// Factor values in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (RiskFactor, u8)> + '_ {
        RiskFactor::ALL.iter().map(move |factor| (*factor, self.get(*factor)))
    }
}

/// Ordinal label derived from a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    pub const ALL: [RiskTier; 5] = [
        RiskTier::VeryLow,
        RiskTier::Low,
        RiskTier::Moderate,
        RiskTier::High,
        RiskTier::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "very_low",
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::VeryHigh => "very_high",
        }
    }

    /// Human-readable label for dashboards
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "Very Low Risk",
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
            RiskTier::VeryHigh => "Very High Risk",
        }
    }

    /// Hex colour used by front-ends, green through red
    pub fn display_color(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "#22c55e",
            RiskTier::Low => "#84cc16",
            RiskTier::Moderate => "#eab308",
            RiskTier::High => "#f97316",
            RiskTier::VeryHigh => "#ef4444",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single engine run. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub risk_tier: RiskTier,
    pub summary: String,
    pub factor_scores: RiskFactorScores,
}
