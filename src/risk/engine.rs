// Risk scoring engine: factors -> weighted composite -> tier -> narrative
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::models::{FinancialSnapshot, RiskAssessment, RiskFactor, RiskFactorScores, RiskTier};
use crate::risk::factors;
use crate::risk::narrative;
use crate::risk::rules::ScoringRules;
use crate::risk::{RiskError, MAX_RISK_SCORE, MIN_RISK_SCORE};

/// Stateless scorer for [`FinancialSnapshot`]s.
///
/// Cloning is cheap; the rules are shared and never mutated, so one engine
/// can serve any number of threads.
#[derive(Debug, Clone)]
pub struct RiskScoringEngine {
    rules: Arc<ScoringRules>,
}

impl RiskScoringEngine {
    /// Engine backed by the standard rule set
    pub fn new() -> Self {
        Self {
            rules: ScoringRules::shared(),
        }
    }

    /// Engine backed by custom rules, validated up front
    pub fn with_rules(rules: ScoringRules) -> Result<Self, RiskError> {
        rules.validate()?;
        Ok(Self {
            rules: Arc::new(rules),
        })
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score a snapshot.
    ///
    /// Fails only when the snapshot is malformed; zero income, expenses or
    /// debt each have a defined factor value and never error.
    pub fn assess(&self, snapshot: &FinancialSnapshot) -> Result<RiskAssessment, RiskError> {
        if let Err(e) = snapshot.validate() {
            warn!(error = %e, "Rejected financial snapshot");
            return Err(e);
        }

        let factor_scores = self.factor_scores(snapshot);
        let score = self.composite_score(&factor_scores);
        let risk_tier = self.classify(score);
        let summary = narrative::summarize(risk_tier, &factor_scores);

        info!(
            score = score,
            risk_tier = %risk_tier,
            "Calculated financial risk assessment"
        );

        Ok(RiskAssessment {
            score,
            risk_tier,
            summary,
            factor_scores,
        })
    }

    /// Raw risk for each of the six factors
    pub fn factor_scores(&self, snapshot: &FinancialSnapshot) -> RiskFactorScores {
        let rules = &self.rules;

        let scores = RiskFactorScores {
            debt_to_income_ratio: factors::debt_to_income_risk(
                snapshot.total_debt_minimum_payments,
                snapshot.monthly_income,
                &rules.debt_to_income,
            ),
            emergency_fund_ratio: factors::emergency_fund_risk(
                snapshot.liquid_assets_value,
                snapshot.monthly_expenses,
                &rules.emergency_fund,
            ),
            high_interest_debt: factors::high_interest_debt_risk(
                &snapshot.debts_by_type,
                snapshot.total_debt_balance,
                rules.high_interest_rate,
                &rules.high_interest_debt,
            ),
            income_stability: factors::income_stability_risk(
                snapshot.income_source_count,
                &rules.income_stability,
            ),
            expense_coverage: factors::expense_coverage_risk(
                snapshot.monthly_expenses,
                snapshot.monthly_income,
                &rules.expense_coverage,
            ),
            debt_diversity: factors::debt_diversity_risk(
                snapshot.distinct_debt_types(),
                &rules.debt_diversity,
            ),
        };

        for (factor, risk) in scores.iter() {
            debug!(factor = %factor, risk = risk, "Calculated factor risk");
        }

        scores
    }

    /// Weighted sum of factor risks, truncated toward zero and clamped to 0..=100.
    ///
    /// Truncation is deliberate: a weighted sum of 59.9 reports as 59.
    pub fn composite_score(&self, factor_scores: &RiskFactorScores) -> u8 {
        let weighted: Decimal = RiskFactor::ALL
            .iter()
            .map(|factor| Decimal::from(factor_scores.get(*factor)) * self.rules.weights.get(*factor))
            .sum();

        let truncated = weighted.trunc().to_i64().unwrap_or(i64::from(MAX_RISK_SCORE));
        truncated.clamp(i64::from(MIN_RISK_SCORE), i64::from(MAX_RISK_SCORE)) as u8
    }

    /// Tier for any 0..=100 score. Historical records with only a score
    /// must come through here rather than storing their own thresholds.
    pub fn classify(&self, score: u8) -> RiskTier {
        self.rules.tiers.evaluate(Decimal::from(score))
    }
}

impl Default for RiskScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: u8) -> RiskFactorScores {
        RiskFactorScores {
            debt_to_income_ratio: value,
            emergency_fund_ratio: value,
            high_interest_debt: value,
            income_stability: value,
            expense_coverage: value,
            debt_diversity: value,
        }
    }

    #[test]
    fn test_composite_of_uniform_factors() {
        let engine = RiskScoringEngine::new();
        assert_eq!(engine.composite_score(&uniform(0)), 0);
        assert_eq!(engine.composite_score(&uniform(100)), 100);
        assert_eq!(engine.composite_score(&uniform(37)), 37);
    }

    #[test]
    fn test_composite_truncates() {
        let engine = RiskScoringEngine::new();
        // 70 * 0.15 + 25 * 0.25 = 10.5 + 6.25 = 16.75
        let scores = RiskFactorScores {
            income_stability: 70,
            debt_to_income_ratio: 25,
            ..Default::default()
        };
        assert_eq!(engine.composite_score(&scores), 16);
    }

    #[test]
    fn test_classify_boundaries() {
        let engine = RiskScoringEngine::new();
        let expectations = [
            (0, RiskTier::VeryLow),
            (20, RiskTier::VeryLow),
            (21, RiskTier::Low),
            (40, RiskTier::Low),
            (41, RiskTier::Moderate),
            (60, RiskTier::Moderate),
            (61, RiskTier::High),
            (80, RiskTier::High),
            (81, RiskTier::VeryHigh),
            (100, RiskTier::VeryHigh),
        ];
        for (score, tier) in expectations {
            assert_eq!(engine.classify(score), tier, "score {}", score);
        }
    }

    #[test]
    fn test_custom_rules_are_validated() {
        let mut rules = ScoringRules::standard();
        rules.weights.income_stability = Decimal::ZERO;

        assert!(RiskScoringEngine::with_rules(rules).is_err());
    }
}
