// Declarative scoring rules: threshold tables, weights and tier bands
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

use crate::models::{RiskFactor, RiskTier};
use crate::risk::RiskError;

/// How a band bound is compared against the measured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// Band matches when `value <= bound`; bounds ascend.
    AtMost,
    /// Band matches when `value >= bound`; bounds descend.
    AtLeast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<T> {
    pub bound: Decimal,
    pub value: T,
}

/// Ordered bands evaluated first-match-wins, with a fallback value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable<T> {
    pub kind: BoundKind,
    pub bands: Vec<Band<T>>,
    pub otherwise: T,
}

impl<T: Copy> ThresholdTable<T> {
    pub fn at_most(bands: &[(i64, T)], otherwise: T) -> Self {
        Self::build(BoundKind::AtMost, bands, otherwise)
    }

    pub fn at_least(bands: &[(i64, T)], otherwise: T) -> Self {
        Self::build(BoundKind::AtLeast, bands, otherwise)
    }

    fn build(kind: BoundKind, bands: &[(i64, T)], otherwise: T) -> Self {
        Self {
            kind,
            bands: bands
                .iter()
                .map(|(bound, value)| Band {
                    bound: Decimal::from(*bound),
                    value: *value,
                })
                .collect(),
            otherwise,
        }
    }

    pub fn evaluate(&self, measured: Decimal) -> T {
        self.bands
            .iter()
            .find(|band| match self.kind {
                BoundKind::AtMost => measured <= band.bound,
                BoundKind::AtLeast => measured >= band.bound,
            })
            .map(|band| band.value)
            .unwrap_or(self.otherwise)
    }

    /// Bounds must be strictly monotone in evaluation order, otherwise
    /// later bands could never match.
    fn check_ordering(&self, name: &str) -> Result<(), RiskError> {
        for pair in self.bands.windows(2) {
            let ordered = match self.kind {
                BoundKind::AtMost => pair[0].bound < pair[1].bound,
                BoundKind::AtLeast => pair[0].bound > pair[1].bound,
            };
            if !ordered {
                return Err(RiskError::invalid_rules(format!(
                    "{} bounds out of order at {} -> {}",
                    name, pair[0].bound, pair[1].bound
                )));
            }
        }
        Ok(())
    }
}

impl ThresholdTable<u8> {
    fn check_risk_values(&self, name: &str) -> Result<(), RiskError> {
        let values = self.bands.iter().map(|b| b.value).chain(std::iter::once(self.otherwise));
        for value in values {
            if value > 100 {
                return Err(RiskError::invalid_rules(format!(
                    "{} yields risk {} above 100",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Composite weights per factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub debt_to_income_ratio: Decimal,
    pub emergency_fund_ratio: Decimal,
    pub high_interest_debt: Decimal,
    pub income_stability: Decimal,
    pub expense_coverage: Decimal,
    pub debt_diversity: Decimal,
}

impl FactorWeights {
    pub fn get(&self, factor: RiskFactor) -> Decimal {
        match factor {
            RiskFactor::DebtToIncomeRatio => self.debt_to_income_ratio,
            RiskFactor::EmergencyFundRatio => self.emergency_fund_ratio,
            RiskFactor::HighInterestDebt => self.high_interest_debt,
            RiskFactor::IncomeStability => self.income_stability,
            RiskFactor::ExpenseCoverage => self.expense_coverage,
            RiskFactor::DebtDiversity => self.debt_diversity,
        }
    }

    pub fn total(&self) -> Decimal {
        RiskFactor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            debt_to_income_ratio: Decimal::new(25, 2), // 25%
            emergency_fund_ratio: Decimal::new(20, 2), // 20%
            high_interest_debt: Decimal::new(20, 2),   // 20%
            income_stability: Decimal::new(15, 2),     // 15%
            expense_coverage: Decimal::new(15, 2),     // 15%
            debt_diversity: Decimal::new(5, 2),        // 5%
        }
    }
}

/// Every fixed business rule the engine applies.
///
/// Percent-valued tables (`debt_to_income`, `high_interest_debt`,
/// `expense_coverage`) are measured on a 0..100 scale; `emergency_fund` in
/// months of expenses; `income_stability` and `debt_diversity` in counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub debt_to_income: ThresholdTable<u8>,
    pub emergency_fund: ThresholdTable<u8>,
    pub high_interest_debt: ThresholdTable<u8>,
    pub income_stability: ThresholdTable<u8>,
    pub expense_coverage: ThresholdTable<u8>,
    pub debt_diversity: ThresholdTable<u8>,
    pub weights: FactorWeights,
    pub tiers: ThresholdTable<RiskTier>,
    /// Debts with an interest rate strictly above this count as high-interest
    pub high_interest_rate: Decimal,
}

impl ScoringRules {
    pub fn standard() -> Self {
        Self {
            debt_to_income: ThresholdTable::at_most(&[(0, 0), (20, 10), (36, 25), (50, 60)], 90),
            emergency_fund: ThresholdTable::at_least(&[(6, 5), (3, 20), (1, 50)], 85),
            high_interest_debt: ThresholdTable::at_most(&[(0, 5), (25, 30), (50, 60)], 90),
            income_stability: ThresholdTable::at_most(&[(0, 100), (1, 70), (2, 40)], 15),
            expense_coverage: ThresholdTable::at_most(&[(50, 5), (80, 20), (100, 50)], 95),
            debt_diversity: ThresholdTable::at_most(&[(0, 0), (2, 20), (4, 50)], 80),
            weights: FactorWeights::default(),
            tiers: ThresholdTable::at_most(
                &[
                    (20, RiskTier::VeryLow),
                    (40, RiskTier::Low),
                    (60, RiskTier::Moderate),
                    (80, RiskTier::High),
                ],
                RiskTier::VeryHigh,
            ),
            high_interest_rate: Decimal::from(15),
        }
    }

    /// Process-wide standard rules, built once and shared read-only.
    pub fn shared() -> Arc<ScoringRules> {
        static STANDARD: OnceLock<Arc<ScoringRules>> = OnceLock::new();
        STANDARD.get_or_init(|| Arc::new(ScoringRules::standard())).clone()
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        let factor_tables = [
            ("debt_to_income", &self.debt_to_income),
            ("emergency_fund", &self.emergency_fund),
            ("high_interest_debt", &self.high_interest_debt),
            ("income_stability", &self.income_stability),
            ("expense_coverage", &self.expense_coverage),
            ("debt_diversity", &self.debt_diversity),
        ];
        for (name, table) in factor_tables {
            table.check_ordering(name)?;
            table.check_risk_values(name)?;
        }
        self.tiers.check_ordering("tiers")?;

        for factor in RiskFactor::ALL {
            if self.weights.get(factor) < Decimal::ZERO {
                return Err(RiskError::invalid_rules(format!(
                    "weight for {} is negative",
                    factor
                )));
            }
        }
        let total = self.weights.total();
        if total != Decimal::ONE {
            return Err(RiskError::invalid_rules(format!(
                "weights must sum to 1.00, got {}",
                total
            )));
        }

        if self.high_interest_rate < Decimal::ZERO || self.high_interest_rate > Decimal::ONE_HUNDRED {
            return Err(RiskError::invalid_rules(format!(
                "high_interest_rate must be between 0 and 100, got {}",
                self.high_interest_rate
            )));
        }

        Ok(())
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::standard()
    }
}
